use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use super::{Component, DefinitionError, Identity};
use crate::rng::RandomSource;

/// Value shown by a mapped die face.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Face {
    Number(i64),
    Text(String),
    Blank,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
            Self::Blank => Ok(()),
        }
    }
}

impl From<i64> for Face {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Face {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A group of identical dice rolled together.
///
/// # Invariants
///
/// - `count >= 1`, `sides >= 2`
/// - `mapping` is either empty or keyed by exactly `1..=sides`
///
/// Equality and ordering compare `sides` only, so dice sort by difficulty
/// regardless of their ids.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dice {
    #[cfg_attr(feature = "serde", serde(flatten))]
    identity: Identity,
    count: u32,
    sides: u32,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "BTreeMap::is_empty")
    )]
    mapping: BTreeMap<u32, Face>,
    last_roll: Vec<u32>,
    last_roll_mapped: Vec<Face>,
}

impl Dice {
    /// A single die with `sides` faces and no mapping.
    pub fn new(id: impl AsRef<str>, sides: u32) -> Result<Self, DefinitionError> {
        Self::builder(id).sides(sides).build()
    }

    pub fn builder(id: impl AsRef<str>) -> DiceBuilder {
        DiceBuilder {
            id: id.as_ref().to_owned(),
            count: 1,
            sides: 6,
            mapping: BTreeMap::new(),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Face mapping, `None` when the die reports raw numbers.
    pub fn mapping(&self) -> Option<&BTreeMap<u32, Face>> {
        (!self.mapping.is_empty()).then_some(&self.mapping)
    }

    pub fn last_roll(&self) -> &[u32] {
        &self.last_roll
    }

    pub fn last_roll_mapped(&self) -> &[Face] {
        &self.last_roll_mapped
    }

    /// Sum of the last roll (0 before the first roll).
    ///
    /// Widened to `u64` so that any valid `count` × `sides` fits.
    pub fn total(&self) -> u64 {
        self.last_roll.iter().map(|&value| u64::from(value)).sum()
    }

    /// Rolls all `count` units and returns the raw results.
    ///
    /// Also refreshes `last_roll_mapped`; without a mapping each value is
    /// reported as [`Face::Number`], so both lists always have equal length.
    pub fn roll(&mut self, rng: &mut dyn RandomSource) -> &[u32] {
        self.last_roll = (0..self.count).map(|_| rng.roll_die(self.sides)).collect();
        self.last_roll_mapped = self
            .last_roll
            .iter()
            .map(|value| {
                self.mapping
                    .get(value)
                    .cloned()
                    .unwrap_or_else(|| Face::Number(i64::from(*value)))
            })
            .collect();
        tracing::trace!(kind = Self::KIND, id = %self.id(), roll = ?self.last_roll, "rolled");
        &self.last_roll
    }

    /// Rolls and returns the mapped faces of that roll.
    pub fn roll_mapped(&mut self, rng: &mut dyn RandomSource) -> &[Face] {
        self.roll(rng);
        &self.last_roll_mapped
    }
}

impl Component for Dice {
    const KIND: &'static str = "dice";

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

impl PartialEq for Dice {
    fn eq(&self, other: &Self) -> bool {
        self.sides == other.sides
    }
}

impl Eq for Dice {}

impl PartialOrd for Dice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dice {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sides.cmp(&other.sides)
    }
}

/// Builder for constructing validated dice.
#[derive(Clone, Debug)]
pub struct DiceBuilder {
    id: String,
    count: u32,
    sides: u32,
    mapping: BTreeMap<u32, Face>,
}

impl DiceBuilder {
    /// Number of units rolled per `roll` call (default 1).
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Number of faces (default 6).
    pub fn sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Replaces the face mapping.
    pub fn mapping(mut self, mapping: impl IntoIterator<Item = (u32, Face)>) -> Self {
        self.mapping = mapping.into_iter().collect();
        self
    }

    /// Maps face `value` to `face`.
    pub fn face(mut self, value: u32, face: impl Into<Face>) -> Self {
        self.mapping.insert(value, face.into());
        self
    }

    pub fn build(self) -> Result<Dice, DefinitionError> {
        let identity = Identity::new(&self.id)?;
        let id = identity.id().to_string();

        if self.count == 0 {
            return Err(DefinitionError::ZeroCount {
                kind: Dice::KIND,
                id,
            });
        }
        if self.sides < 2 {
            return Err(DefinitionError::TooFewSides {
                id,
                sides: self.sides,
            });
        }
        if !self.mapping.is_empty() {
            let missing: Vec<u32> = (1..=self.sides)
                .filter(|face| !self.mapping.contains_key(face))
                .collect();
            let unexpected: Vec<u32> = self
                .mapping
                .keys()
                .copied()
                .filter(|face| !(1..=self.sides).contains(face))
                .collect();
            if !missing.is_empty() || !unexpected.is_empty() {
                return Err(DefinitionError::MappingMismatch {
                    id,
                    sides: self.sides,
                    missing,
                    unexpected,
                });
            }
        }

        tracing::trace!(kind = Dice::KIND, %id, sides = self.sides, count = self.count, "created");
        Ok(Dice {
            identity,
            count: self.count,
            sides: self.sides,
            mapping: self.mapping,
            last_roll: Vec::new(),
            last_roll_mapped: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, PieceError};
    use crate::rng::{PcgSource, RandSource};

    fn fate_die() -> Dice {
        Dice::builder("Fate")
            .count(4)
            .sides(3)
            .face(1, -1i64)
            .face(2, Face::Blank)
            .face(3, 1i64)
            .build()
            .unwrap()
    }

    #[test]
    fn rolls_stay_within_sides() {
        let mut rng = RandSource::seeded(11);
        for sides in 2..=20 {
            let mut dice = Dice::builder("d").count(5).sides(sides).build().unwrap();
            for _ in 0..20 {
                let roll = dice.roll(&mut rng).to_vec();
                assert_eq!(roll.len(), 5);
                assert!(roll.iter().all(|v| (1..=sides).contains(v)));
            }
        }
    }

    #[test]
    fn mapped_roll_has_one_face_per_unit() {
        let mut rng = PcgSource::new(9);
        let mut dice = fate_die();
        let faces = dice.roll_mapped(&mut rng).to_vec();
        assert_eq!(faces.len(), dice.last_roll().len());
        for (raw, face) in dice.last_roll().iter().zip(&faces) {
            let expected = match raw {
                1 => Face::Number(-1),
                2 => Face::Blank,
                _ => Face::Number(1),
            };
            assert_eq!(*face, expected);
        }
    }

    #[test]
    fn unmapped_dice_report_numbers() {
        let mut rng = PcgSource::new(1);
        let mut dice = Dice::builder("d6").count(3).build().unwrap();
        dice.roll(&mut rng);
        let numbers: Vec<Face> = dice
            .last_roll()
            .iter()
            .map(|v| Face::Number(i64::from(*v)))
            .collect();
        assert_eq!(dice.last_roll_mapped(), numbers.as_slice());
        assert!(dice.mapping().is_none());
    }

    #[test]
    fn total_sums_last_roll() {
        let mut rng = PcgSource::new(5);
        let mut dice = Dice::builder("pair").count(2).build().unwrap();
        assert_eq!(dice.total(), 0);
        let sum: u32 = dice.roll(&mut rng).iter().sum();
        assert_eq!(dice.total(), u64::from(sum));
    }

    #[test]
    fn total_of_huge_dice_does_not_overflow() {
        let mut rng = PcgSource::new(42);
        let mut dice = Dice::builder("big").count(3).sides(u32::MAX).build().unwrap();
        assert_eq!(
            dice.roll(&mut rng),
            &[1_971_522_494, 242_089_395, 3_457_789_920]
        );
        assert_eq!(dice.total(), 5_671_401_809);
    }

    #[test]
    fn rejects_invalid_definitions() {
        let err = Dice::builder("d").count(0).build().unwrap_err();
        assert!(matches!(err, DefinitionError::ZeroCount { .. }));
        assert_eq!(err.kind(), ErrorKind::Definition);

        let err = Dice::new("d1", 1).unwrap_err();
        assert!(matches!(err, DefinitionError::TooFewSides { sides: 1, .. }));

        let err = Dice::builder("d3")
            .sides(3)
            .face(1, "a")
            .face(2, "b")
            .face(4, "d")
            .build()
            .unwrap_err();
        match err {
            DefinitionError::MappingMismatch {
                missing,
                unexpected,
                ..
            } => {
                assert_eq!(missing, vec![3]);
                assert_eq!(unexpected, vec![4]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn equality_and_order_follow_sides() {
        let d6 = Dice::new("d6", 6).unwrap();
        let other_d6 = Dice::builder("boxcar").count(2).sides(6).build().unwrap();
        let d20 = Dice::new("d20", 20).unwrap();
        assert_eq!(d6, other_d6);
        assert!(d6 < d20);

        let mut pool = vec![d20.clone(), d6.clone(), Dice::new("d4", 4).unwrap()];
        pool.sort();
        let sides: Vec<u32> = pool.iter().map(Dice::sides).collect();
        assert_eq!(sides, vec![4, 6, 20]);
    }

    #[test]
    fn normalizes_id() {
        let dice = Dice::new("Big D20", 20).unwrap();
        assert_eq!(dice.id(), "big_d20");
    }
}
