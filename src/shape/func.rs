//! `Func` - the synchronous callable shape.
//!
//! A `Func<A, B>` wraps a total function from `A` to `B`. Running it applies
//! the function on the calling thread and returns the value directly; there
//! are no suspension points.
//!
//! The function is shared behind an `Arc`, so cloning a `Func` is cheap and
//! combinators never copy or mutate the wrapped closure.
//!
//! # Examples
//!
//! ```rust
//! use arrowlet::shape::Func;
//! use arrowlet::typeclass::{Category, Strong};
//!
//! let parse = Func::new(|text: String| text.trim().parse::<i64>().unwrap_or(0));
//! let sign = Func::new(|n: i64| n.signum());
//!
//! let pipeline = parse.compose(Func::<i64, i64>::identity().fanout(sign));
//! assert_eq!(pipeline.run(" -40 ".to_string()), (-40, -1));
//! ```

use std::fmt;
use std::sync::Arc;

use super::async_func::AsyncFunc;
use crate::typeclass::{Category, Morphism, Strong};

/// A synchronous arrow from `A` to `B`.
///
/// # Examples
///
/// ```rust
/// use arrowlet::shape::Func;
///
/// let double = Func::new(|x: i32| x * 2);
/// assert_eq!(double.run(21), 42);
/// ```
pub struct Func<A, B> {
    function: Arc<dyn Fn(A) -> B + Send + Sync>,
}

// =============================================================================
// Constructors and Execution
// =============================================================================

impl<A, B> Func<A, B> {
    /// Wraps a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Applies the wrapped function to `input`.
    ///
    /// Panics raised by the wrapped function propagate to the caller.
    #[inline]
    pub fn run(&self, input: A) -> B {
        (self.function)(input)
    }
}

impl<A: Send + 'static, B: Send + 'static> Func<A, B> {
    /// Lifts this arrow into the asynchronous shape.
    ///
    /// The resulting [`AsyncFunc`] yields the value of the synchronous call
    /// from an already-completed future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Func;
    ///
    /// # futures::executor::block_on(async {
    /// let double = Func::new(|x: i32| x * 2).into_async();
    /// assert_eq!(double.run(4).await, 8);
    /// # });
    /// ```
    #[must_use]
    pub fn into_async(self) -> AsyncFunc<A, B> {
        let function = self.function;
        AsyncFunc::new(move |input: A| std::future::ready(function(input)))
    }
}

impl<A, B> Clone for Func<A, B> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Debug for Func<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Func<{}, {}>",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        )
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, B> Morphism for Func<A, B> {
    type Input = A;
    type Output = B;
    type WithTypes<X, Y> = Func<X, Y>;
}

impl<A: Send + 'static, B: Send + 'static> Category for Func<A, B> {
    fn arr<F>(function: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self::new(function)
    }

    fn identity() -> Func<A, A> {
        Func::new(|input: A| input)
    }

    fn compose<C>(self, next: Func<B, C>) -> Func<A, C>
    where
        C: Send + 'static,
    {
        let (first, then) = (self.function, next.function);
        Func::new(move |input: A| then(first(input)))
    }
}

impl<A: Send + 'static, B: Send + 'static> Strong for Func<A, B> {
    fn first<C>(self) -> Func<(A, C), (B, C)>
    where
        C: Send + 'static,
    {
        let function = self.function;
        Func::new(move |(input, carried): (A, C)| (function(input), carried))
    }

    fn second<C>(self) -> Func<(C, A), (C, B)>
    where
        C: Send + 'static,
    {
        let function = self.function;
        Func::new(move |(carried, input): (C, A)| (carried, function(input)))
    }

    fn split<X, Y>(self, other: Func<X, Y>) -> Func<(A, X), (B, Y)>
    where
        X: Send + 'static,
        Y: Send + 'static,
    {
        let (left, right) = (self.function, other.function);
        Func::new(move |(first, second): (A, X)| (left(first), right(second)))
    }

    fn fanout<C>(self, other: Func<A, C>) -> Func<A, (B, C)>
    where
        A: Clone,
        C: Send + 'static,
    {
        let (left, right) = (self.function, other.function);
        Func::new(move |input: A| (left(input.clone()), right(input)))
    }
}
