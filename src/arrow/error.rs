//! Error types for combining [`Arrow`](super::Arrow) values.
//!
//! The shape of an `Arrow` is only known once it has been constructed, so
//! combining a synchronous arrow with an asynchronous one is rejected when the
//! combinator is applied. Errors raised by the wrapped functions themselves are
//! never caught or wrapped here.

use std::fmt;

use crate::shape::Shape;

/// Represents an attempt to combine two arrows of different shapes.
///
/// # Examples
///
/// ```rust
/// use arrowlet::arrow::ShapeMismatchError;
/// use arrowlet::shape::Shape;
///
/// let error = ShapeMismatchError {
///     combinator: "compose",
///     left: Shape::Sync,
///     right: Shape::Async,
/// };
/// assert_eq!(
///     error.to_string(),
///     "compose: expected arrows of the same shape, found sync and async"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMismatchError {
    /// The name of the combinator that was applied.
    pub combinator: &'static str,
    /// The shape of the left operand.
    pub left: Shape,
    /// The shape of the right operand.
    pub right: Shape,
}

impl fmt::Display for ShapeMismatchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: expected arrows of the same shape, found {} and {}",
            self.combinator, self.left, self.right
        )
    }
}

impl std::error::Error for ShapeMismatchError {}

/// Represents errors raised while combining arrows.
///
/// # Examples
///
/// ```rust
/// use arrowlet::arrow::{Arrow, ArrowError};
/// use arrowlet::shape::Shape;
///
/// let sync = Arrow::from_fn(|x: i32| x + 1);
/// let not_sync = Arrow::from_async_fn(|x: i32| async move { x * 2 });
///
/// let error = sync.compose(not_sync).unwrap_err();
/// let ArrowError::ShapeMismatch(mismatch) = error;
/// assert_eq!(mismatch.right, Shape::Async);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowError {
    /// The operands of a binary combinator have different shapes.
    ShapeMismatch(ShapeMismatchError),
}

impl ArrowError {
    pub(crate) fn shape_mismatch(combinator: &'static str, left: Shape, right: Shape) -> Self {
        tracing::debug!(
            combinator,
            left = %left,
            right = %right,
            "rejected combination of arrows with different shapes"
        );
        Self::ShapeMismatch(ShapeMismatchError {
            combinator,
            left,
            right,
        })
    }
}

impl fmt::Display for ArrowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ArrowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ShapeMismatch(error) => Some(error),
        }
    }
}

impl From<ShapeMismatchError> for ArrowError {
    fn from(error: ShapeMismatchError) -> Self {
        Self::ShapeMismatch(error)
    }
}
