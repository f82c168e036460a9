use super::{Component, DefinitionError, Identity};

/// A playing card (or any flat piece with a visible side and a tap state).
///
/// `count` is how many physical copies a template stands for; see
/// `Deque::deal_stacked`. Equality compares every field except the counter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Card {
    #[cfg_attr(feature = "serde", serde(flatten))]
    identity: Identity,
    count: u32,
    pub is_revealed: bool,
    pub is_active: bool,
    pub side: Option<String>,
}

impl Card {
    /// A single face-down, untapped card.
    pub fn new(id: impl AsRef<str>) -> Result<Self, DefinitionError> {
        Self::builder(id).build()
    }

    pub fn builder(id: impl AsRef<str>) -> CardBuilder {
        CardBuilder {
            id: id.as_ref().to_owned(),
            count: 1,
            is_revealed: false,
            is_active: true,
            side: None,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn reveal(&mut self) {
        self.is_revealed = true;
    }

    pub fn conceal(&mut self) {
        self.is_revealed = false;
    }

    /// Turns the card over and returns the new revealed state.
    pub fn flip(&mut self) -> bool {
        self.is_revealed = !self.is_revealed;
        self.is_revealed
    }

    /// Marks the card as used (tapped).
    pub fn tap(&mut self) {
        self.is_active = false;
    }

    pub fn untap(&mut self) {
        self.is_active = true;
    }

    pub fn set_side(&mut self, side: Option<impl Into<String>>) {
        self.side = side.map(Into::into);
    }
}

impl Component for Card {
    const KIND: &'static str = "card";

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

/// Builder for constructing validated cards.
#[derive(Clone, Debug)]
pub struct CardBuilder {
    id: String,
    count: u32,
    is_revealed: bool,
    is_active: bool,
    side: Option<String>,
}

impl CardBuilder {
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn revealed(mut self, is_revealed: bool) -> Self {
        self.is_revealed = is_revealed;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn side(mut self, side: impl Into<String>) -> Self {
        self.side = Some(side.into());
        self
    }

    pub fn build(self) -> Result<Card, DefinitionError> {
        let identity = Identity::new(&self.id)?;
        if self.count == 0 {
            return Err(DefinitionError::ZeroCount {
                kind: Card::KIND,
                id: identity.id().to_string(),
            });
        }

        tracing::trace!(kind = Card::KIND, id = %identity.id(), count = self.count, "created");
        Ok(Card {
            identity,
            count: self.count,
            is_revealed: self.is_revealed,
            is_active: self.is_active,
            side: self.side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_single_hidden_untapped_card() {
        let card = Card::new("Ace of Spades").unwrap();
        assert_eq!(card.id(), "ace_of_spades");
        assert_eq!(card.count(), 1);
        assert!(!card.is_revealed);
        assert!(card.is_active);
        assert_eq!(card.side, None);
    }

    #[test]
    fn flip_tap_and_side() {
        let mut card = Card::builder("gate").side("closed").build().unwrap();
        assert!(card.flip());
        assert!(!card.flip());
        card.reveal();
        assert!(card.is_revealed);
        card.conceal();
        assert!(!card.is_revealed);

        card.tap();
        assert!(!card.is_active);
        card.untap();
        assert!(card.is_active);

        card.set_side(Some("open"));
        assert_eq!(card.side.as_deref(), Some("open"));
        card.set_side(None::<String>);
        assert_eq!(card.side, None);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = Card::builder("ghost").count(0).build().unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::ZeroCount { kind: "card", .. }
        ));
    }

    #[test]
    fn equality_covers_state_fields() {
        let a = Card::new("knight").unwrap();
        let mut b = a.copy();
        assert_eq!(a, b);
        b.reveal();
        assert_ne!(a, b);
    }
}
