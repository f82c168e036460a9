use super::{Component, Identity};
use crate::name::NameError;

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Player {
    #[cfg_attr(feature = "serde", serde(flatten))]
    identity: Identity,
    pub display_name: String,
}

impl Player {
    /// Creates a player whose display name is the raw (un-normalized) input.
    pub fn new(name: impl AsRef<str>) -> Result<Self, NameError> {
        let name = name.as_ref();
        Self::with_display_name(name, name)
    }

    pub fn with_display_name(
        id: impl AsRef<str>,
        display_name: impl Into<String>,
    ) -> Result<Self, NameError> {
        let identity = Identity::new(id)?;
        tracing::trace!(kind = Self::KIND, id = %identity.id(), "created");
        Ok(Self {
            identity,
            display_name: display_name.into(),
        })
    }
}

impl Component for Player {
    const KIND: &'static str = "player";

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}
