//! # arrowlet
//!
//! Arrow combinators for composing synchronous and asynchronous functions.
//!
//! ## Overview
//!
//! Arrows are a uniform interface for building point-free pipelines out of
//! unary callables, whatever their shape. This crate provides:
//!
//! - **Type Classes**: `Category` (arr, identity, compose) and `Strong`
//!   (first, second, split, fanout)
//! - **Shapes**: `Func` for plain functions, `AsyncFunc` for functions
//!   returning futures, `Circuit` for stateful stream transformers
//! - **Arrow**: a closed sum type over the sync and async shapes, built with
//!   `lift`, combined with shape checking, and run into an `Outcome`
//! - **Operators**: `>>` (compose), `&` (fanout), `*` (split)
//!
//! Combinators never run sub-arrows concurrently. Asynchronous arrows only
//! describe work; the caller's executor drives it.
//!
//! ## Feature Flags
//!
//! - `circuit`: The stateful `Circuit` shape (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use arrowlet::prelude::*;
//!
//! let double = Func::new(|x: i32| x * 2);
//! let third = Func::new(|x: i32| x / 3);
//! let sum = Func::new(|(left, right): (i32, i32)| left + right);
//!
//! let adder = double.fanout(third).compose(sum);
//! assert_eq!(adder.run(3), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use arrowlet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arrow::{Arrow, ArrowError, IntoArrow, Outcome, ShapeMismatchError, lift};
    #[cfg(feature = "circuit")]
    pub use crate::shape::Circuit;
    pub use crate::shape::{AsyncFunc, Func, Shape};
    pub use crate::typeclass::{Category, Morphism, Strong};
}

pub mod arrow;
pub mod ops;
pub mod shape;
pub mod typeclass;
