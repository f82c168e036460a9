//! Validation and planning for `reorder`-family requests.

use crate::component::Component;
use crate::error::{ErrorKind, PieceError};

/// Why a requested arrangement cannot be applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArrangeError {
    #[error("reorder needs at least one id")]
    EmptyOrder,

    #[error("order lists {order} ids but only {len} are in play")]
    OrderTooLong { order: usize, len: usize },

    #[error("order of {order} ids starting at {start} overruns {len} items")]
    OutOfBounds {
        start: usize,
        order: usize,
        len: usize,
    },

    /// The order is not a permutation of the targeted segment.
    #[error("order {order:?} is not a permutation of {segment:?}")]
    Mismatch {
        segment: Vec<String>,
        order: Vec<String>,
    },
}

impl PieceError for ArrangeError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Arrange
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyOrder => "ARRANGE_EMPTY_ORDER",
            Self::OrderTooLong { .. } => "ARRANGE_ORDER_TOO_LONG",
            Self::OutOfBounds { .. } => "ARRANGE_OUT_OF_BOUNDS",
            Self::Mismatch { .. } => "ARRANGE_MISMATCH",
        }
    }
}

/// Maps each slot of the new arrangement to a source index in `segment`.
///
/// Duplicate ids are matched left to right, so equal instances keep their
/// relative order. Fails unless `order` is a permutation of the segment ids.
pub(crate) fn plan<'a, T, I>(segment: I, order: &[&str]) -> Result<Vec<usize>, ArrangeError>
where
    T: Component + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let ids: Vec<&str> = segment.into_iter().map(|item| item.id().as_str()).collect();
    let mismatch = || ArrangeError::Mismatch {
        segment: ids.iter().map(|id| (*id).to_owned()).collect(),
        order: order.iter().map(|id| (*id).to_owned()).collect(),
    };
    if ids.len() != order.len() {
        return Err(mismatch());
    }

    let mut taken = vec![false; ids.len()];
    let mut sources = Vec::with_capacity(order.len());
    for wanted in order {
        let source = (0..ids.len())
            .find(|&i| !taken[i] && ids[i] == *wanted)
            .ok_or_else(mismatch)?;
        taken[source] = true;
        sources.push(source);
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Card;

    fn cards(ids: &[&str]) -> Vec<Card> {
        ids.iter().map(|id| Card::new(id).unwrap()).collect()
    }

    #[test]
    fn plans_a_permutation() {
        let segment = cards(&["a", "b", "c"]);
        assert_eq!(plan(&segment, &["c", "a", "b"]).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn duplicates_match_left_to_right() {
        let segment = cards(&["x", "y", "x"]);
        assert_eq!(plan(&segment, &["x", "x", "y"]).unwrap(), vec![0, 2, 1]);
    }

    #[test]
    fn multiset_must_match() {
        let segment = cards(&["x", "y", "x"]);
        let err = plan(&segment, &["x", "y", "y"]).unwrap_err();
        assert!(matches!(err, ArrangeError::Mismatch { .. }));
        assert_eq!(err.kind(), ErrorKind::Arrange);

        let err = plan(&segment, &["x", "y"]).unwrap_err();
        assert!(matches!(err, ArrangeError::Mismatch { .. }));
    }
}
