//! Infix operators for building arrow pipelines.
//!
//! Rust has no user-definable operators, so the arrow operators of Haskell's
//! `Control.Arrow` are mapped onto overloadable operators from `std::ops`:
//!
//! | Haskell | Rust    | Combinator |
//! |---------|---------|------------|
//! | `>>>`   | `f >> g` | compose   |
//! | `&&&`   | `f & g`  | fanout    |
//! | `***`   | `f * g`  | split     |
//!
//! The operators delegate directly to the named combinators and have the same
//! semantics. They are implemented for every shape and for [`Arrow`]; on
//! `Arrow` they return `Result<Arrow, ArrowError>` because the shapes are only
//! checked when the operator is applied.
//!
//! # Precedence
//!
//! Rust precedence differs from Haskell's: `*` binds tighter than `>>`, which
//! binds tighter than `&`. `f & g >> h` therefore reads as `f & (g >> h)`.
//! Parenthesize fanouts that feed a composition: `(f & g) >> h`.
//!
//! # Examples
//!
//! ```rust
//! use arrowlet::shape::Func;
//!
//! let double = Func::new(|x: i32| x * 2);
//! let third = Func::new(|x: i32| x / 3);
//! let sum = Func::new(|(left, right): (i32, i32)| left + right);
//!
//! let adder = (double & third) >> sum;
//! assert_eq!(adder.run(3), 7);
//! ```
//!
//! With [`Arrow`], each operator yields a `Result`:
//!
//! ```rust
//! use arrowlet::arrow::{Arrow, ArrowError};
//!
//! # fn main() -> Result<(), ArrowError> {
//! let length = Arrow::from_fn(|text: String| text.len());
//! let even = Arrow::from_fn(|n: usize| n % 2 == 0);
//! let describe = Arrow::from_fn(|flag: bool| if flag { "even" } else { "odd" });
//!
//! let pipeline = ((length >> even)? >> describe)?;
//! assert_eq!(pipeline.run("four".to_string()).into_ready().ok(), Some("even"));
//! # Ok(())
//! # }
//! ```

use std::ops::{BitAnd, Mul, Shr};

use crate::arrow::{Arrow, ArrowError};
#[cfg(feature = "circuit")]
use crate::shape::Circuit;
use crate::shape::{AsyncFunc, Func};
use crate::typeclass::{Category, Strong};

macro_rules! impl_arrow_operators {
    ($shape:ident) => {
        impl<A, B, C> Shr<$shape<B, C>> for $shape<A, B>
        where
            A: Send + 'static,
            B: Send + 'static,
            C: Send + 'static,
        {
            type Output = $shape<A, C>;

            #[inline]
            fn shr(self, next: $shape<B, C>) -> Self::Output {
                Category::compose(self, next)
            }
        }

        impl<A, B, C> BitAnd<$shape<A, C>> for $shape<A, B>
        where
            A: Clone + Send + 'static,
            B: Send + 'static,
            C: Send + 'static,
        {
            type Output = $shape<A, (B, C)>;

            #[inline]
            fn bitand(self, other: $shape<A, C>) -> Self::Output {
                Strong::fanout(self, other)
            }
        }

        impl<A, B, X, Y> Mul<$shape<X, Y>> for $shape<A, B>
        where
            A: Send + 'static,
            B: Send + 'static,
            X: Send + 'static,
            Y: Send + 'static,
        {
            type Output = $shape<(A, X), (B, Y)>;

            #[inline]
            fn mul(self, other: $shape<X, Y>) -> Self::Output {
                Strong::split(self, other)
            }
        }
    };
}

impl_arrow_operators!(Func);
impl_arrow_operators!(AsyncFunc);
#[cfg(feature = "circuit")]
impl_arrow_operators!(Circuit);

impl<A, B, C> Shr<Arrow<B, C>> for Arrow<A, B>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    type Output = Result<Arrow<A, C>, ArrowError>;

    #[inline]
    fn shr(self, next: Arrow<B, C>) -> Self::Output {
        self.compose(next)
    }
}

impl<A, B, C> BitAnd<Arrow<A, C>> for Arrow<A, B>
where
    A: Clone + Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    type Output = Result<Arrow<A, (B, C)>, ArrowError>;

    #[inline]
    fn bitand(self, other: Arrow<A, C>) -> Self::Output {
        self.fanout(other)
    }
}

impl<A, B, X, Y> Mul<Arrow<X, Y>> for Arrow<A, B>
where
    A: Send + 'static,
    B: Send + 'static,
    X: Send + 'static,
    Y: Send + 'static,
{
    type Output = Result<Arrow<(A, X), (B, Y)>, ArrowError>;

    #[inline]
    fn mul(self, other: Arrow<X, Y>) -> Self::Output {
        self.split(other)
    }
}
