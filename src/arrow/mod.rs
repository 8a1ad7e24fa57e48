//! The closed `Arrow` sum type over the synchronous and asynchronous shapes.
//!
//! [`Arrow<A, B>`](Arrow) holds either a [`Func`] or an [`AsyncFunc`]. The
//! variant is fixed when the arrow is built and selects, by exhaustive
//! matching, which implementation of each combinator applies. Both variants
//! support the full combinator set with the same signatures and laws.
//!
//! # Lifting
//!
//! [`lift`] builds an `Arrow` from anything implementing [`IntoArrow`]:
//!
//! - an `Arrow` is returned unchanged, so lifting is idempotent
//! - a [`Func`] becomes `Arrow::Sync`
//! - an [`AsyncFunc`] becomes `Arrow::Async`
//!
//! No other shape implements [`IntoArrow`], so lifting anything else is a
//! compile-time error. Raw closures are lifted with [`Arrow::from_fn`] or
//! [`Arrow::from_async_fn`], which state the shape explicitly.
//!
//! # Combining
//!
//! Binary combinators ([`Arrow::compose`], [`Arrow::fanout`], [`Arrow::split`])
//! require both operands to have the same shape and return
//! [`ArrowError::ShapeMismatch`] otherwise. A synchronous arrow can be moved
//! into the asynchronous shape deliberately with [`Arrow::into_async`].
//!
//! # Examples
//!
//! ```rust
//! use arrowlet::arrow::{Arrow, ArrowError};
//!
//! # fn main() -> Result<(), ArrowError> {
//! let double = Arrow::from_fn(|x: i32| x * 2);
//! let third = Arrow::from_fn(|x: i32| x / 3);
//! let sum = Arrow::from_fn(|(left, right): (i32, i32)| left + right);
//!
//! let adder = double.fanout(third)?.compose(sum)?;
//! assert_eq!(adder.run(3).into_ready().ok(), Some(7));
//! # Ok(())
//! # }
//! ```

mod error;
mod outcome;

use std::future::Future;

pub use error::{ArrowError, ShapeMismatchError};
pub use outcome::Outcome;

use crate::shape::{AsyncFunc, Func, Shape};
use crate::typeclass::{Category, Strong};

/// An arrow from `A` to `B` of either shape.
///
/// See module-level documentation for lifting and combining rules.
pub enum Arrow<A, B> {
    /// A synchronous arrow.
    Sync(Func<A, B>),
    /// An asynchronous arrow.
    Async(AsyncFunc<A, B>),
}

/// Conversion into an [`Arrow`].
///
/// Implemented for [`Arrow`] itself (identity), [`Func`] and [`AsyncFunc`].
pub trait IntoArrow<A, B> {
    /// Wraps `self` into an [`Arrow`].
    fn into_arrow(self) -> Arrow<A, B>;
}

impl<A, B> IntoArrow<A, B> for Arrow<A, B> {
    #[inline]
    fn into_arrow(self) -> Self {
        self
    }
}

impl<A, B> IntoArrow<A, B> for Func<A, B> {
    #[inline]
    fn into_arrow(self) -> Arrow<A, B> {
        Arrow::Sync(self)
    }
}

impl<A, B> IntoArrow<A, B> for AsyncFunc<A, B> {
    #[inline]
    fn into_arrow(self) -> Arrow<A, B> {
        Arrow::Async(self)
    }
}

impl<A, B> From<Func<A, B>> for Arrow<A, B> {
    fn from(function: Func<A, B>) -> Self {
        Self::Sync(function)
    }
}

impl<A, B> From<AsyncFunc<A, B>> for Arrow<A, B> {
    fn from(function: AsyncFunc<A, B>) -> Self {
        Self::Async(function)
    }
}

/// Lifts a value into an [`Arrow`], passing existing arrows through.
///
/// # Examples
///
/// ```rust
/// use arrowlet::arrow::lift;
/// use arrowlet::shape::{AsyncFunc, Func, Shape};
///
/// let sync = lift(Func::new(|x: u8| x + 1));
/// assert_eq!(sync.shape(), Shape::Sync);
///
/// // Lifting an arrow again changes nothing.
/// let again = lift(sync);
/// assert_eq!(again.shape(), Shape::Sync);
///
/// let deferred = lift(AsyncFunc::new(|x: u8| async move { x + 1 }));
/// assert_eq!(deferred.shape(), Shape::Async);
/// ```
#[inline]
pub fn lift<A, B, T>(value: T) -> Arrow<A, B>
where
    T: IntoArrow<A, B>,
{
    value.into_arrow()
}

// =============================================================================
// Construction and Inspection
// =============================================================================

impl<A: 'static, B: 'static> Arrow<A, B> {
    /// Lifts a synchronous function.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self::Sync(Func::new(function))
    }

    /// Lifts a function returning a future.
    pub fn from_async_fn<F, Fut>(function: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = B> + Send + 'static,
    {
        Self::Async(AsyncFunc::new(function))
    }
}

impl<A, B> Arrow<A, B> {
    /// Returns the shape of the wrapped callable.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Sync(_) => Shape::Sync,
            Self::Async(_) => Shape::Async,
        }
    }

    /// Returns `true` for a synchronous arrow.
    #[must_use]
    pub const fn is_sync(&self) -> bool {
        matches!(self, Self::Sync(_))
    }

    /// Returns `true` for an asynchronous arrow.
    #[must_use]
    pub const fn is_async(&self) -> bool {
        matches!(self, Self::Async(_))
    }

    /// Runs the arrow on `input`.
    ///
    /// A synchronous arrow is applied immediately and its value is returned
    /// ready. An asynchronous arrow returns its deferred computation, which
    /// is not polled until the outcome is awaited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::arrow::Arrow;
    ///
    /// # futures::executor::block_on(async {
    /// let roundtrip = Arrow::from_async_fn(|flag: bool| async move { i32::from(flag) })
    ///     .compose(Arrow::from_async_fn(|n: i32| async move {
    ///         if n == 1 { "true" } else { "false" }
    ///     }))
    ///     .unwrap();
    /// assert_eq!(roundtrip.run(true).await, "true");
    /// # });
    /// ```
    pub fn run(&self, input: A) -> Outcome<B> {
        match self {
            Self::Sync(function) => Outcome::ready(function.run(input)),
            Self::Async(function) => Outcome::deferred(function.run(input)),
        }
    }
}

impl<A: Send + 'static, B: Send + 'static> Arrow<A, B> {
    /// Moves the arrow into the asynchronous shape.
    ///
    /// Asynchronous arrows are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::arrow::Arrow;
    /// use arrowlet::shape::Shape;
    ///
    /// let sync = Arrow::from_fn(|x: i32| x + 1);
    /// let deferred = Arrow::from_async_fn(|x: i32| async move { x * 10 });
    ///
    /// assert!(sync.clone().compose(deferred.clone()).is_err());
    /// let pipeline = sync.into_async().compose(deferred).unwrap();
    /// assert_eq!(pipeline.shape(), Shape::Async);
    /// ```
    #[must_use]
    pub fn into_async(self) -> Self {
        match self {
            Self::Sync(function) => {
                tracing::trace!(arrow = ?function, "moving synchronous arrow into the async shape");
                Self::Async(function.into_async())
            }
            Self::Async(function) => Self::Async(function),
        }
    }

    /// Runs `self`, then `next` on its result.
    ///
    /// # Errors
    ///
    /// Returns [`ArrowError::ShapeMismatch`] if the two arrows have different
    /// shapes.
    pub fn compose<C>(self, next: Arrow<B, C>) -> Result<Arrow<A, C>, ArrowError>
    where
        C: Send + 'static,
    {
        match (self, next) {
            (Self::Sync(first), Arrow::Sync(then)) => Ok(Arrow::Sync(first.compose(then))),
            (Self::Async(first), Arrow::Async(then)) => Ok(Arrow::Async(first.compose(then))),
            (first, then) => Err(ArrowError::shape_mismatch(
                "compose",
                first.shape(),
                then.shape(),
            )),
        }
    }

    /// Applies `self` and `other` to the same input and pairs the results.
    ///
    /// # Errors
    ///
    /// Returns [`ArrowError::ShapeMismatch`] if the two arrows have different
    /// shapes.
    pub fn fanout<C>(self, other: Arrow<A, C>) -> Result<Arrow<A, (B, C)>, ArrowError>
    where
        A: Clone,
        C: Send + 'static,
    {
        match (self, other) {
            (Self::Sync(left), Arrow::Sync(right)) => Ok(Arrow::Sync(left.fanout(right))),
            (Self::Async(left), Arrow::Async(right)) => Ok(Arrow::Async(left.fanout(right))),
            (left, right) => Err(ArrowError::shape_mismatch(
                "fanout",
                left.shape(),
                right.shape(),
            )),
        }
    }

    /// Applies `self` to the first component of a pair and `other` to the
    /// second.
    ///
    /// # Errors
    ///
    /// Returns [`ArrowError::ShapeMismatch`] if the two arrows have different
    /// shapes.
    pub fn split<X, Y>(self, other: Arrow<X, Y>) -> Result<Arrow<(A, X), (B, Y)>, ArrowError>
    where
        X: Send + 'static,
        Y: Send + 'static,
    {
        match (self, other) {
            (Self::Sync(left), Arrow::Sync(right)) => Ok(Arrow::Sync(left.split(right))),
            (Self::Async(left), Arrow::Async(right)) => Ok(Arrow::Async(left.split(right))),
            (left, right) => Err(ArrowError::shape_mismatch(
                "split",
                left.shape(),
                right.shape(),
            )),
        }
    }

    /// Applies the arrow to the first component of a pair.
    ///
    /// The shape is kept, so this never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::arrow::Arrow;
    ///
    /// let tagged = Arrow::from_fn(|x: i32| x * 10).first::<&str>();
    /// assert!(tagged.is_sync());
    /// assert_eq!(tagged.run((4, "kept")).into_ready().ok(), Some((40, "kept")));
    /// ```
    #[must_use]
    pub fn first<C>(self) -> Arrow<(A, C), (B, C)>
    where
        C: Send + 'static,
    {
        match self {
            Self::Sync(function) => Arrow::Sync(function.first()),
            Self::Async(function) => Arrow::Async(function.first()),
        }
    }

    /// Applies the arrow to the second component of a pair.
    ///
    /// The shape is kept, so this never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::arrow::Arrow;
    ///
    /// # futures::executor::block_on(async {
    /// let tagged = Arrow::from_async_fn(|x: i32| async move { x + 1 }).second::<char>();
    /// assert!(tagged.is_async());
    /// assert_eq!(tagged.run(('k', 1)).await, ('k', 2));
    /// # });
    /// ```
    #[must_use]
    pub fn second<C>(self) -> Arrow<(C, A), (C, B)>
    where
        C: Send + 'static,
    {
        match self {
            Self::Sync(function) => Arrow::Sync(function.second()),
            Self::Async(function) => Arrow::Async(function.second()),
        }
    }
}

impl<A, B> Clone for Arrow<A, B> {
    fn clone(&self) -> Self {
        match self {
            Self::Sync(function) => Self::Sync(function.clone()),
            Self::Async(function) => Self::Async(function.clone()),
        }
    }
}

impl<A, B> std::fmt::Debug for Arrow<A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sync(function) => formatter.debug_tuple("Sync").field(function).finish(),
            Self::Async(function) => formatter.debug_tuple("Async").field(function).finish(),
        }
    }
}
