//! Two-parameter type constructor emulation through Generic Associated Types.
//!
//! Arrows are parameterized by an input and an output type. To write traits
//! like [`Category`](super::Category) that talk about "the same shape, applied
//! to other types", we need to abstract over a type constructor of kind
//! `* -> * -> *`. Rust has no Higher-Kinded Types, so this module uses a GAT
//! to recover the constructor from a concrete type.
//!
//! # Example
//!
//! ```rust
//! use arrowlet::shape::Func;
//! use arrowlet::typeclass::Morphism;
//!
//! fn assert_shape<M: Morphism<Input = i32, Output = String>>() {}
//! assert_shape::<Func<i32, String>>();
//!
//! // `WithTypes` keeps the shape and swaps the parameters.
//! fn assert_with_types<M>()
//! where
//!     M: Morphism<WithTypes<bool, u8> = Func<bool, u8>>,
//! {
//! }
//! assert_with_types::<Func<i32, String>>();
//! ```

/// A callable shape applied to an input type and an output type.
///
/// # Associated Types
///
/// - `Input`: what the morphism consumes.
/// - `Output`: what the morphism produces.
/// - `WithTypes<X, Y>`: the same shape from `X` to `Y`.
///
/// # Laws
///
/// **Consistency**: `<M as Morphism>::WithTypes<M::Input, M::Output>` is `M`.
pub trait Morphism {
    /// The type the morphism consumes.
    type Input;

    /// The type the morphism produces.
    type Output;

    /// The same shape with different input and output types.
    type WithTypes<X, Y>: Morphism<Input = X, Output = Y>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{AsyncFunc, Func};

    #[test]
    fn func_reports_input_and_output() {
        fn assert_types<M: Morphism<Input = u8, Output = bool>>() {}
        assert_types::<Func<u8, bool>>();
    }

    #[test]
    fn async_func_with_types_keeps_shape() {
        fn assert_with_types<M>()
        where
            M: Morphism<WithTypes<String, ()> = AsyncFunc<String, ()>>,
        {
        }
        assert_with_types::<AsyncFunc<i32, i32>>();
    }
}
