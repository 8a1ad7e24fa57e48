//! Callable shapes.
//!
//! Each shape is a concrete arrow type implementing the
//! [`Category`](crate::typeclass::Category) and
//! [`Strong`](crate::typeclass::Strong) capabilities:
//!
//! - [`Func`]: synchronous functions
//! - [`AsyncFunc`]: functions returning a future
//! - [`Circuit`]: stateful stream transformers (feature `circuit`)
//!
//! [`Shape`] is the tag the closed [`Arrow`](crate::arrow::Arrow) sum type
//! reports for its variants.

mod async_func;
#[cfg(feature = "circuit")]
mod circuit;
mod func;

use std::fmt;

pub use async_func::AsyncFunc;
#[cfg(feature = "circuit")]
pub use circuit::Circuit;
pub use func::Func;

/// Classification of a callable carried by an [`Arrow`](crate::arrow::Arrow).
///
/// # Examples
///
/// ```rust
/// use arrowlet::shape::Shape;
///
/// assert_eq!(Shape::Sync.to_string(), "sync");
/// assert_eq!(Shape::Async.to_string(), "async");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A function returning its output directly.
    Sync,
    /// A function returning a deferred computation.
    Async,
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => write!(formatter, "sync"),
            Self::Async => write!(formatter, "async"),
        }
    }
}
