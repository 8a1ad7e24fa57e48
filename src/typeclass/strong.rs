//! Strong type class - arrows acting on pairs.
//!
//! `Strong` extends [`Category`] with the combinators that route one part of a
//! pair through an arrow while carrying the rest along:
//!
//! - `first`: transform the first component, pass the second through
//! - `second`: transform the second component, pass the first through
//! - `split` (Haskell `***`): transform both components with two arrows
//! - `fanout` (Haskell `&&&`): feed one input to two arrows, pair the results
//!
//! For asynchronous shapes the two sides of `split` and `fanout` are awaited
//! one after the other, left side first. Nothing runs concurrently.
//!
//! # Laws
//!
//! ```text
//! first(f).run((a, c))     == (f.run(a), c)
//! second(f).run((c, a))    == (c, f.run(a))
//! split(f, g).run((a, b))  == (f.run(a), g.run(b))
//! fanout(f, g).run(a)      == (f.run(a), g.run(a))
//! first(f.compose(g))      == first(f).compose(first(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use arrowlet::shape::Func;
//! use arrowlet::typeclass::{Category, Strong};
//!
//! let double = Func::new(|x: i32| x * 2);
//! let third = Func::new(|x: i32| x / 3);
//! let sum = Func::new(|(left, right): (i32, i32)| left + right);
//!
//! let adder = double.fanout(third).compose(sum);
//! assert_eq!(adder.run(3), 7);
//! ```

use super::category::Category;

/// A type class for arrows that can be applied to components of a pair.
///
/// See module-level documentation for the laws.
pub trait Strong: Category {
    /// Applies `self` to the first component of a pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Func;
    /// use arrowlet::typeclass::Strong;
    ///
    /// let shout = Func::new(|text: &'static str| text.to_uppercase()).first();
    /// assert_eq!(shout.run(("hi", 3)), ("HI".to_string(), 3));
    /// ```
    #[allow(clippy::type_complexity)]
    fn first<C>(self) -> Self::WithTypes<(Self::Input, C), (Self::Output, C)>
    where
        C: Send + 'static;

    /// Applies `self` to the second component of a pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Func;
    /// use arrowlet::typeclass::Strong;
    ///
    /// let increment = Func::new(|x: u8| x + 1).second();
    /// assert_eq!(increment.run(('a', 1)), ('a', 2));
    /// ```
    #[allow(clippy::type_complexity)]
    fn second<C>(self) -> Self::WithTypes<(C, Self::Input), (C, Self::Output)>
    where
        C: Send + 'static;

    /// Applies `self` to the first component and `other` to the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Func;
    /// use arrowlet::typeclass::Strong;
    ///
    /// let both = Func::new(|x: i32| x + 1).split(Func::new(|s: String| s.len()));
    /// assert_eq!(both.run((1, "four".to_string())), (2, 4));
    /// ```
    #[allow(clippy::type_complexity)]
    fn split<X, Y>(
        self,
        other: Self::WithTypes<X, Y>,
    ) -> Self::WithTypes<(Self::Input, X), (Self::Output, Y)>
    where
        X: Send + 'static,
        Y: Send + 'static;

    /// Applies `self` and `other` to the same input and pairs the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::shape::Func;
    /// use arrowlet::typeclass::Strong;
    ///
    /// let stats = Func::new(|xs: Vec<i32>| xs.len()).fanout(Func::new(|xs: Vec<i32>| xs.iter().sum::<i32>()));
    /// assert_eq!(stats.run(vec![1, 2, 3]), (3, 6));
    /// ```
    fn fanout<C>(
        self,
        other: Self::WithTypes<Self::Input, C>,
    ) -> Self::WithTypes<Self::Input, (Self::Output, C)>
    where
        Self::Input: Clone,
        C: Send + 'static;
}
