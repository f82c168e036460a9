//! Common error infrastructure for tabletop-core.
//!
//! Area-specific errors (e.g., [`NameError`](crate::NameError),
//! [`ToolError`](crate::ToolError)) live next to the code that raises them.
//! This module provides the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Validate first**: every operation checks its inputs before touching state,
//!   so an error never leaves a half-applied mutation behind
//! - **No recovery**: errors propagate to the immediate caller, nothing is retried
//! - **Stable codes**: each variant exposes a static code for tests and metrics

/// Category of failure, independent of which type raised it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ErrorKind {
    /// An id or registry key failed normalization/validation, or clashes with
    /// an existing key.
    Name,
    /// The referenced id or position is absent from the collection.
    NotFound,
    /// A removal was attempted on an empty collection.
    Empty,
    /// A reorder request does not fit the targeted range.
    Arrange,
    /// An entity was constructed with an invalid field combination.
    Definition,
    /// The operation is not meaningful for this kind of tool.
    UnsupportedOperation,
}

/// Common trait for all tabletop-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Keep `error_code` values stable, they are asserted on in tests
pub trait PieceError: core::fmt::Display + core::fmt::Debug {
    /// Returns the category of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
