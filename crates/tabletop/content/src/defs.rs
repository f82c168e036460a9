//! Serializable definitions of registry templates.
//!
//! A definition is the on-disk shape of a component: plain fields with
//! defaults, validated only when [`Definition::build`] turns it into the
//! real component.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabletop_core::{Card, Component, DefinitionError, Dice, Face, Player, Step};

/// Data that builds one registry template.
pub trait Definition {
    type Output: Component;

    /// Raw id as written in the file.
    fn id(&self) -> &str;

    /// Explicit registry key; the id is used when absent.
    fn name(&self) -> Option<&str>;

    fn build(&self) -> Result<Self::Output, DefinitionError>;
}

fn one() -> u32 {
    1
}

fn yes() -> bool {
    true
}

/// Dice group definition.
///
/// ```ron
/// (id: "fate", count: 4, sides: 3, mapping: {1: -1, 2: 0, 3: 1})
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiceDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "one")]
    pub count: u32,
    pub sides: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mapping: BTreeMap<u32, Face>,
}

impl Definition for DiceDef {
    type Output = Dice;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn build(&self) -> Result<Dice, DefinitionError> {
        Dice::builder(&self.id)
            .count(self.count)
            .sides(self.sides)
            .mapping(self.mapping.clone())
            .build()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "one")]
    pub count: u32,
    #[serde(default)]
    pub revealed: bool,
    #[serde(default = "yes")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
}

impl Definition for CardDef {
    type Output = Card;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn build(&self) -> Result<Card, DefinitionError> {
        let mut builder = Card::builder(&self.id)
            .count(self.count)
            .revealed(self.revealed)
            .active(self.active);
        if let Some(side) = &self.side {
            builder = builder.side(side.as_str());
        }
        builder.build()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub priority: u32,
}

impl Definition for StepDef {
    type Output = Step;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn build(&self) -> Result<Step, DefinitionError> {
        Ok(Step::new(&self.id, self.priority)?)
    }
}

/// Player definition; `display_name` defaults to the raw id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Definition for PlayerDef {
    type Output = Player;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn build(&self) -> Result<Player, DefinitionError> {
        let display_name = self.display_name.as_deref().unwrap_or(&self.id);
        Ok(Player::with_display_name(&self.id, display_name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_def_builds_validated_dice() {
        let def = DiceDef {
            id: "Fate".into(),
            name: None,
            count: 4,
            sides: 3,
            mapping: [(1, Face::Number(-1)), (2, Face::Number(0)), (3, Face::Number(1))]
                .into_iter()
                .collect(),
        };
        let dice = def.build().unwrap();
        assert_eq!(dice.id(), "fate");
        assert_eq!(dice.count(), 4);
        assert_eq!(dice.mapping().map(BTreeMap::len), Some(3));

        let bad = DiceDef { sides: 1, ..def };
        assert!(matches!(
            bad.build().unwrap_err(),
            DefinitionError::TooFewSides { .. }
        ));
    }

    #[test]
    fn card_def_defaults_to_active() {
        let def = CardDef {
            id: "ace".into(),
            name: None,
            count: 1,
            revealed: false,
            active: yes(),
            side: Some("front".into()),
        };
        let card = def.build().unwrap();
        assert!(card.is_active);
        assert_eq!(card.side.as_deref(), Some("front"));
    }

    #[test]
    fn player_def_keeps_raw_display_name() {
        let def = PlayerDef {
            id: "Ada L".into(),
            name: None,
            display_name: None,
        };
        let player = def.build().unwrap();
        assert_eq!(player.id(), "ada_l");
        assert_eq!(player.display_name, "Ada L");
    }

    #[test]
    fn invalid_ids_surface_as_name_errors() {
        let def = StepDef {
            id: "1st".into(),
            name: None,
            priority: 0,
        };
        assert!(matches!(
            def.build().unwrap_err(),
            DefinitionError::Name(_)
        ));
    }
}
