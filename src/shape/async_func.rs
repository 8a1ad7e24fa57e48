//! `AsyncFunc` - the asynchronous callable shape.
//!
//! An `AsyncFunc<A, B>` wraps a function from `A` to a future yielding `B`.
//! Running it hands back the future without polling it; the caller's executor
//! decides when (and whether) it completes.
//!
//! # Evaluation Order
//!
//! Combinators built from `AsyncFunc` never run sub-arrows concurrently:
//!
//! - `compose(f, g)` invokes `g` only after `f`'s result is available
//! - `fanout(f, g)` and `split(f, g)` await `f` to completion, then start `g`
//! - `first` / `second` await the single arrow before rebuilding the pair
//!
//! Combined arrows are also fully deferred: none of the wrapped functions is
//! invoked until the returned future is first polled. Dropping the future
//! cancels whatever is in flight.
//!
//! # Examples
//!
//! ```rust
//! use arrowlet::shape::AsyncFunc;
//! use arrowlet::typeclass::Category;
//!
//! # futures::executor::block_on(async {
//! let to_number = AsyncFunc::new(|flag: bool| async move { if flag { 1 } else { 0 } });
//! let to_text = AsyncFunc::new(|n: i32| async move {
//!     if n == 1 { "true".to_string() } else { "false".to_string() }
//! });
//!
//! let roundtrip = to_number.compose(to_text);
//! assert_eq!(roundtrip.run(true).await, "true");
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use crate::typeclass::{Category, Morphism, Strong};

type SharedAsyncFunction<A, B> = Arc<dyn Fn(A) -> BoxFuture<'static, B> + Send + Sync>;

/// An asynchronous arrow from `A` to `B`.
///
/// # Examples
///
/// ```rust
/// use arrowlet::shape::AsyncFunc;
///
/// # futures::executor::block_on(async {
/// let double = AsyncFunc::new(|x: i32| async move { x * 2 });
/// assert_eq!(double.run(21).await, 42);
/// # });
/// ```
pub struct AsyncFunc<A, B> {
    function: SharedAsyncFunction<A, B>,
}

// =============================================================================
// Constructors and Execution
// =============================================================================

impl<A: 'static, B: 'static> AsyncFunc<A, B> {
    /// Wraps a function returning a future.
    pub fn new<F, Fut>(function: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = B> + Send + 'static,
    {
        Self::from_shared(Arc::new(move |input: A| function(input).boxed()))
    }

    fn from_shared(function: SharedAsyncFunction<A, B>) -> Self {
        Self { function }
    }
}

impl<A, B> AsyncFunc<A, B> {
    /// Returns the deferred computation for `input`.
    ///
    /// The future is not polled here. Awaiting it runs the arrow; dropping it
    /// cancels the arrow.
    #[inline]
    pub fn run(&self, input: A) -> BoxFuture<'static, B> {
        (self.function)(input)
    }
}

impl<A, B> Clone for AsyncFunc<A, B> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Debug for AsyncFunc<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "AsyncFunc<{}, {}>",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        )
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, B> Morphism for AsyncFunc<A, B> {
    type Input = A;
    type Output = B;
    type WithTypes<X, Y> = AsyncFunc<X, Y>;
}

impl<A: Send + 'static, B: Send + 'static> Category for AsyncFunc<A, B> {
    fn arr<F>(function: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self::new(move |input: A| std::future::ready(function(input)))
    }

    fn identity() -> AsyncFunc<A, A> {
        AsyncFunc::new(|input: A| std::future::ready(input))
    }

    fn compose<C>(self, next: AsyncFunc<B, C>) -> AsyncFunc<A, C>
    where
        C: Send + 'static,
    {
        let (first, then) = (self.function, next.function);
        AsyncFunc::from_shared(Arc::new(move |input: A| {
            let first = Arc::clone(&first);
            let then = Arc::clone(&then);
            async move {
                let middle = first(input).await;
                then(middle).await
            }
            .boxed()
        }))
    }
}

impl<A: Send + 'static, B: Send + 'static> Strong for AsyncFunc<A, B> {
    fn first<C>(self) -> AsyncFunc<(A, C), (B, C)>
    where
        C: Send + 'static,
    {
        let function = self.function;
        AsyncFunc::from_shared(Arc::new(move |(input, carried): (A, C)| {
            let function = Arc::clone(&function);
            async move { (function(input).await, carried) }.boxed()
        }))
    }

    fn second<C>(self) -> AsyncFunc<(C, A), (C, B)>
    where
        C: Send + 'static,
    {
        let function = self.function;
        AsyncFunc::from_shared(Arc::new(move |(carried, input): (C, A)| {
            let function = Arc::clone(&function);
            async move { (carried, function(input).await) }.boxed()
        }))
    }

    fn split<X, Y>(self, other: AsyncFunc<X, Y>) -> AsyncFunc<(A, X), (B, Y)>
    where
        X: Send + 'static,
        Y: Send + 'static,
    {
        let (left, right) = (self.function, other.function);
        AsyncFunc::from_shared(Arc::new(move |(first, second): (A, X)| {
            let left = Arc::clone(&left);
            let right = Arc::clone(&right);
            async move {
                let left_output = left(first).await;
                let right_output = right(second).await;
                (left_output, right_output)
            }
            .boxed()
        }))
    }

    fn fanout<C>(self, other: AsyncFunc<A, C>) -> AsyncFunc<A, (B, C)>
    where
        A: Clone,
        C: Send + 'static,
    {
        let (left, right) = (self.function, other.function);
        AsyncFunc::from_shared(Arc::new(move |input: A| {
            let left = Arc::clone(&left);
            let right = Arc::clone(&right);
            async move {
                let left_output = left(input.clone()).await;
                let right_output = right(input).await;
                (left_output, right_output)
            }
            .boxed()
        }))
    }
}
