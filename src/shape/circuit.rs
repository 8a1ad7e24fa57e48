//! `Circuit` - a stateful arrow over a stream of inputs.
//!
//! A `Circuit<A, B>` is an immutable Mealy machine: stepping it with an input
//! yields an output together with the circuit to use for the next input. The
//! original circuit is left untouched, so any point of a run can be replayed
//! by stepping the circuit saved at that point again.
//!
//! `Circuit` implements the same [`Category`] and [`Strong`] capabilities as
//! [`Func`](super::Func) and [`AsyncFunc`](super::AsyncFunc); combinators
//! thread the state of every sub-circuit through each step.
//!
//! # Examples
//!
//! Running mean: divide the running total by the running count.
//!
//! ```rust
//! use arrowlet::shape::Circuit;
//! use arrowlet::typeclass::{Category, Strong};
//!
//! let count = Circuit::arr(|_: f64| 1.0_f64).compose(Circuit::total());
//! let mean = Circuit::<f64, f64>::total()
//!     .fanout(count)
//!     .compose(Circuit::arr(|(sum, count): (f64, f64)| sum / count));
//!
//! assert_eq!(mean.run([0.0, 10.0, 2.0, 3.0]), vec![0.0, 5.0, 4.0, 3.75]);
//! ```

use std::fmt;
use std::ops::Add;
use std::sync::Arc;

use crate::typeclass::{Category, Morphism, Strong};

type SharedTransition<A, B> = Arc<dyn Fn(A) -> (Circuit<A, B>, B) + Send + Sync>;

/// A stateful arrow from `A` to `B`.
pub struct Circuit<A, B> {
    transition: SharedTransition<A, B>,
}

// =============================================================================
// Constructors and Execution
// =============================================================================

impl<A: 'static, B: 'static> Circuit<A, B> {
    /// Creates a circuit from a transition function returning the next circuit
    /// and the output.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(A) -> (Self, B) + Send + Sync + 'static,
    {
        Self {
            transition: Arc::new(transition),
        }
    }

    /// Feeds one input, returning the successor circuit and the output.
    #[inline]
    pub fn step(&self, input: A) -> (Self, B) {
        (self.transition)(input)
    }

    /// Feeds every input in order, threading the state, and collects the
    /// outputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Circuit;
    ///
    /// let running_sum = Circuit::<i32, i32>::total();
    /// assert_eq!(running_sum.run([1, 2, 3]), vec![1, 3, 6]);
    /// // The circuit itself is unchanged by a run.
    /// assert_eq!(running_sum.run([5]), vec![5]);
    /// ```
    pub fn run<I>(&self, inputs: I) -> Vec<B>
    where
        I: IntoIterator<Item = A>,
    {
        let mut current = self.clone();
        inputs
            .into_iter()
            .map(|input| {
                let (next, output) = current.step(input);
                current = next;
                output
            })
            .collect()
    }
}

impl<A: Send + 'static, B: Send + 'static> Circuit<A, B> {
    /// Creates a circuit that threads a state `S` through every step.
    ///
    /// `function` receives the input and the current state and returns the
    /// output and the next state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Circuit;
    ///
    /// // Emit the previous input, starting from 0.
    /// let delay = Circuit::accumulate(0, |input: i32, previous: i32| (previous, input));
    /// assert_eq!(delay.run([4, 5, 6]), vec![0, 4, 5]);
    /// ```
    pub fn accumulate<S, F>(state: S, function: F) -> Self
    where
        S: Clone + Send + Sync + 'static,
        F: Fn(A, S) -> (B, S) + Send + Sync + 'static,
    {
        Self::accumulate_shared(state, Arc::new(function))
    }

    fn accumulate_shared<S, F>(state: S, function: Arc<F>) -> Self
    where
        S: Clone + Send + Sync + 'static,
        F: Fn(A, S) -> (B, S) + Send + Sync + 'static,
    {
        Self::new(move |input: A| {
            let (output, next_state) = function(input, state.clone());
            (Self::accumulate_shared(next_state, Arc::clone(&function)), output)
        })
    }

    /// Creates a circuit whose output is its new state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Circuit;
    ///
    /// let running_max = Circuit::accumulate_output(i32::MIN, |input: i32, best: i32| best.max(input));
    /// assert_eq!(running_max.run([3, 1, 4, 1, 5]), vec![3, 3, 4, 4, 5]);
    /// ```
    pub fn accumulate_output<F>(state: B, function: F) -> Self
    where
        B: Clone + Sync,
        F: Fn(A, B) -> B + Send + Sync + 'static,
    {
        Self::accumulate(state, move |input, current| {
            let next = function(input, current);
            (next.clone(), next)
        })
    }
}

impl<T> Circuit<T, T>
where
    T: Add<Output = T> + Default + Clone + Send + Sync + 'static,
{
    /// Creates a circuit emitting the running sum of its inputs.
    #[must_use]
    pub fn total() -> Self {
        Self::accumulate_output(T::default(), |input, sum| sum + input)
    }
}

impl<A, B> Clone for Circuit<A, B> {
    fn clone(&self) -> Self {
        Self {
            transition: Arc::clone(&self.transition),
        }
    }
}

impl<A, B> fmt::Debug for Circuit<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Circuit<{}, {}>",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        )
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, B> Morphism for Circuit<A, B> {
    type Input = A;
    type Output = B;
    type WithTypes<X, Y> = Circuit<X, Y>;
}

impl<A: Send + 'static, B: Send + 'static> Circuit<A, B> {
    fn stateless(function: Arc<dyn Fn(A) -> B + Send + Sync>) -> Self {
        Self::new(move |input: A| (Self::stateless(Arc::clone(&function)), function(input)))
    }
}

impl<A: Send + 'static, B: Send + 'static> Category for Circuit<A, B> {
    fn arr<F>(function: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self::stateless(Arc::new(function))
    }

    fn identity() -> Circuit<A, A> {
        <Circuit<A, A> as Category>::arr(|input: A| input)
    }

    fn compose<C>(self, next: Circuit<B, C>) -> Circuit<A, C>
    where
        C: Send + 'static,
    {
        Circuit::new(move |input: A| {
            let (left, middle) = self.step(input);
            let (right, output) = next.step(middle);
            (left.compose(right), output)
        })
    }
}

impl<A: Send + 'static, B: Send + 'static> Strong for Circuit<A, B> {
    fn first<C>(self) -> Circuit<(A, C), (B, C)>
    where
        C: Send + 'static,
    {
        Circuit::new(move |(input, carried): (A, C)| {
            let (next, output) = self.step(input);
            (next.first::<C>(), (output, carried))
        })
    }

    fn second<C>(self) -> Circuit<(C, A), (C, B)>
    where
        C: Send + 'static,
    {
        Circuit::new(move |(carried, input): (C, A)| {
            let (next, output) = self.step(input);
            (next.second::<C>(), (carried, output))
        })
    }

    fn split<X, Y>(self, other: Circuit<X, Y>) -> Circuit<(A, X), (B, Y)>
    where
        X: Send + 'static,
        Y: Send + 'static,
    {
        Circuit::new(move |(first, second): (A, X)| {
            let (left, left_output) = self.step(first);
            let (right, right_output) = other.step(second);
            (left.split(right), (left_output, right_output))
        })
    }

    fn fanout<C>(self, other: Circuit<A, C>) -> Circuit<A, (B, C)>
    where
        A: Clone,
        C: Send + 'static,
    {
        Circuit::new(move |input: A| {
            let (left, left_output) = self.step(input.clone());
            let (right, right_output) = other.step(input);
            (left.fanout(right), (left_output, right_output))
        })
    }
}
