//! Error type returned when parsing style and attribute names.

use thiserror::Error;

/// Errors produced by the string-based configuration entry points.
///
/// Widget operations themselves never fail; only turning a name into a
/// [`Style`](crate::style::Style) or [`StyleAttribute`](crate::style::StyleAttribute)
/// can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name does not match any percent bar style.
    #[error("unknown percent bar style: {0:?}")]
    UnknownStyle(String),
    /// The name does not match any style attribute.
    #[error("unknown percent bar style attribute: {0:?}")]
    UnknownAttribute(String),
}
