//! Type class traits for arrow abstractions.
//!
//! This module provides the capabilities every callable shape implements:
//!
//! - [`Morphism`]: Two-parameter type constructor emulation (input and output)
//! - [`Category`]: Lifting functions (`arr`), identity, and sequential composition
//! - [`Strong`]: Acting on pairs (`first`, `second`, `split`, `fanout`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not support Higher-Kinded Types. [`Morphism`] uses a Generic
//! Associated Type so that a trait method on `Func<A, B>` can name
//! `Func<A, C>` or `Func<(A, X), (B, Y)>` without knowing the concrete shape.
//!
//! ## Shapes
//!
//! The implementations live in [`crate::shape`]: [`Func`](crate::shape::Func),
//! [`AsyncFunc`](crate::shape::AsyncFunc) and, with the `circuit` feature,
//! [`Circuit`](crate::shape::Circuit). The set of shapes is closed; a new shape
//! is added by implementing these traits inside the crate.
//!
//! # Examples
//!
//! ```rust
//! use arrowlet::shape::{AsyncFunc, Func};
//! use arrowlet::typeclass::{Category, Strong};
//!
//! // The same pipeline, built over two shapes.
//! let sync = Func::arr(|x: i32| x + 1).fanout(Func::arr(|x: i32| x * 2));
//! assert_eq!(sync.run(5), (6, 10));
//!
//! # futures::executor::block_on(async {
//! let deferred = AsyncFunc::arr(|x: i32| x + 1).fanout(AsyncFunc::arr(|x: i32| x * 2));
//! assert_eq!(deferred.run(5).await, (6, 10));
//! # });
//! ```

mod category;
mod morphism;
mod strong;

pub use category::Category;
pub use morphism::Morphism;
pub use strong::Strong;
