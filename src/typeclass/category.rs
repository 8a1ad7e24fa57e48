//! Category type class - lifting and sequential composition of arrows.
//!
//! A `Category` is a shape of callable that can be composed end to end and
//! that has an identity element for that composition. This module also hosts
//! `arr`, which lifts a plain function into the shape.
//!
//! Composition reads left to right: `f.compose(g)` runs `f` first and feeds its
//! result to `g`, the order of a data pipeline (Haskell's `>>>`), not the order
//! of mathematical notation `g . f`.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! identity().compose(f) == f
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! f.compose(identity()) == f
//! ```
//!
//! ## Associativity
//!
//! ```text
//! f.compose(g).compose(h) == f.compose(g.compose(h))
//! ```
//!
//! ## Arr Functoriality
//!
//! ```text
//! arr(f).compose(arr(g)) == arr(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use arrowlet::shape::Func;
//! use arrowlet::typeclass::Category;
//!
//! let double = Func::arr(|x: i32| x * 2);
//! let describe = Func::arr(|x: i32| format!("got {x}"));
//!
//! let pipeline = double.compose(describe);
//! assert_eq!(pipeline.run(21), "got 42");
//! ```

use super::morphism::Morphism;

/// A type class for callable shapes that compose sequentially.
///
/// Every value flowing through a `Category` is `Send + 'static`, so the same
/// signature holds for synchronous and asynchronous shapes alike.
///
/// See module-level documentation for the laws.
pub trait Category: Morphism + Sized {
    /// Lifts a pure function into this shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Func;
    /// use arrowlet::typeclass::Category;
    ///
    /// let length = Func::arr(|text: String| text.len());
    /// assert_eq!(length.run("arrow".to_string()), 5);
    /// ```
    fn arr<F>(function: F) -> Self
    where
        F: Fn(Self::Input) -> Self::Output + Send + Sync + 'static;

    /// Returns the arrow that passes its input through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Func;
    /// use arrowlet::typeclass::Category;
    ///
    /// let unchanged = Func::<i32, i32>::identity();
    /// assert_eq!(unchanged.run(7), 7);
    /// ```
    fn identity() -> Self::WithTypes<Self::Input, Self::Input>;

    /// Runs `self`, then runs `next` on its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Func;
    /// use arrowlet::typeclass::Category;
    ///
    /// let add_one = Func::new(|x: i32| x + 1);
    /// let square = Func::new(|x: i32| x * x);
    ///
    /// // (3 + 1)^2, not 3^2 + 1
    /// assert_eq!(add_one.compose(square).run(3), 16);
    /// ```
    fn compose<C>(self, next: Self::WithTypes<Self::Output, C>) -> Self::WithTypes<Self::Input, C>
    where
        C: Send + 'static;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{AsyncFunc, Func};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-12)]
    #[case(99)]
    fn func_identity_is_unit_of_compose(#[case] input: i32) {
        let decrement = Func::new(|x: i32| x - 1);

        let left = Func::<i32, i32>::identity().compose(decrement.clone());
        let right = decrement.clone().compose(Func::<i32, i32>::identity());

        assert_eq!(left.run(input), decrement.run(input));
        assert_eq!(right.run(input), decrement.run(input));
    }

    #[rstest]
    fn func_arr_composes_like_plain_functions() {
        let composed = Func::arr(|x: i32| x + 3).compose(Func::arr(|x: i32| x * 10));
        let fused = Func::arr(|x: i32| (x + 3) * 10);
        assert_eq!(composed.run(4), fused.run(4));
    }

    #[tokio::test]
    async fn async_func_identity_is_unit_of_compose() {
        let negate = AsyncFunc::arr(|flag: bool| !flag);
        let left = AsyncFunc::<bool, bool>::identity().compose(negate.clone());
        let right = negate.compose(AsyncFunc::<bool, bool>::identity());

        assert!(!left.run(true).await);
        assert!(right.run(false).await);
    }
}
