//! Property-based tests for the Category and Strong laws.
//!
//! Every shape is checked against the same laws:
//! - Left Identity: identity >>> f == f
//! - Right Identity: f >>> identity == f
//! - Associativity: (f >>> g) >>> h == f >>> (g >>> h)
//! - Fanout: (f &&& g)(x) == (f(x), g(x))
//! - Split: (f *** g)((x, y)) == (f(x), g(y))
//! - First: first(f)((x, c)) == (f(x), c)
//! - First distributes over composition: first(f >>> g) == first(f) >>> first(g)
//!
//! Asynchronous arrows are driven on a tokio runtime.

use arrowlet::arrow::{Arrow, lift};
use arrowlet::shape::{AsyncFunc, Func, Shape};
use arrowlet::typeclass::{Category, Strong};
use proptest::prelude::*;

fn increment() -> Func<i32, i32> {
    Func::new(|n: i32| n.wrapping_add(1))
}

fn double() -> Func<i32, i32> {
    Func::new(|n: i32| n.wrapping_mul(2))
}

fn negate() -> Func<i32, i32> {
    Func::new(|n: i32| n.wrapping_neg())
}

fn async_increment() -> AsyncFunc<i32, i32> {
    AsyncFunc::new(|n: i32| async move { n.wrapping_add(1) })
}

fn async_double() -> AsyncFunc<i32, i32> {
    AsyncFunc::new(|n: i32| async move {
        tokio::task::yield_now().await;
        n.wrapping_mul(2)
    })
}

fn async_negate() -> AsyncFunc<i32, i32> {
    AsyncFunc::new(|n: i32| async move { n.wrapping_neg() })
}

// =============================================================================
// Func Laws
// =============================================================================

proptest! {
    /// Left Identity Law: identity >>> f == f
    #[test]
    fn prop_func_left_identity(value: i32) {
        let composed = Func::<i32, i32>::identity().compose(double());
        prop_assert_eq!(composed.run(value), double().run(value));
    }

    /// Right Identity Law: f >>> identity == f
    #[test]
    fn prop_func_right_identity(value: i32) {
        let composed = double().compose(Func::<i32, i32>::identity());
        prop_assert_eq!(composed.run(value), double().run(value));
    }

    /// Associativity Law: (f >>> g) >>> h == f >>> (g >>> h)
    #[test]
    fn prop_func_associativity(value: i32) {
        let left = increment().compose(double()).compose(negate());
        let right = increment().compose(double().compose(negate()));
        prop_assert_eq!(left.run(value), right.run(value));
    }

    /// Fanout Law: (f &&& g)(x) == (f(x), g(x))
    #[test]
    fn prop_func_fanout_applies_both_to_same_input(value: i32) {
        let both = increment().fanout(double());
        prop_assert_eq!(both.run(value), (increment().run(value), double().run(value)));
    }

    /// Split Law: (f *** g)((x, y)) == (f(x), g(y))
    #[test]
    fn prop_func_split_keeps_components_apart(left: i32, right: i32) {
        let both = increment().split(negate());
        prop_assert_eq!(both.run((left, right)), (increment().run(left), negate().run(right)));
    }

    /// First Law: first(f)((x, c)) == (f(x), c)
    #[test]
    fn prop_func_first_passes_second_component_through(value: i32, carried: String) {
        let lifted = double().first::<String>();
        prop_assert_eq!(lifted.run((value, carried.clone())), (double().run(value), carried));
    }

    /// Second Law: second(f)((c, x)) == (c, f(x))
    #[test]
    fn prop_func_second_passes_first_component_through(value: i32, carried: u8) {
        let lifted = double().second::<u8>();
        prop_assert_eq!(lifted.run((carried, value)), (carried, double().run(value)));
    }

    /// first(f >>> g) == first(f) >>> first(g)
    #[test]
    fn prop_func_first_distributes_over_compose(value: i32, carried: bool) {
        let left = increment().compose(double()).first::<bool>();
        let right = increment().first::<bool>().compose(double().first::<bool>());
        prop_assert_eq!(left.run((value, carried)), right.run((value, carried)));
    }

    /// arr(g . f) == arr(f) >>> arr(g)
    #[test]
    fn prop_func_arr_preserves_composition(value: i32) {
        let fused = Func::arr(|n: i32| n.wrapping_add(1).wrapping_mul(2));
        let composed = Func::arr(|n: i32| n.wrapping_add(1)).compose(Func::arr(|n: i32| n.wrapping_mul(2)));
        prop_assert_eq!(fused.run(value), composed.run(value));
    }

    /// Operators agree with the named combinators.
    #[test]
    fn prop_func_operators_match_combinators(value: i32) {
        let by_operator = (increment() & double()) >> Func::new(|(a, b): (i32, i32)| a.wrapping_sub(b));
        let by_name = increment()
            .fanout(double())
            .compose(Func::new(|(a, b): (i32, i32)| a.wrapping_sub(b)));
        prop_assert_eq!(by_operator.run(value), by_name.run(value));
    }
}

// =============================================================================
// AsyncFunc Laws
// =============================================================================

proptest! {
    /// Left Identity Law: identity >>> f == f
    #[test]
    fn prop_async_func_left_identity(value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            AsyncFunc::<i32, i32>::identity().compose(async_double()).run(value).await
        });
        let right_result = runtime.block_on(async { async_double().run(value).await });

        prop_assert_eq!(left_result, right_result);
    }

    /// Right Identity Law: f >>> identity == f
    #[test]
    fn prop_async_func_right_identity(value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            async_double().compose(AsyncFunc::<i32, i32>::identity()).run(value).await
        });
        let right_result = runtime.block_on(async { async_double().run(value).await });

        prop_assert_eq!(left_result, right_result);
    }

    /// Associativity Law: (f >>> g) >>> h == f >>> (g >>> h)
    #[test]
    fn prop_async_func_associativity(value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            async_increment()
                .compose(async_double())
                .compose(async_negate())
                .run(value)
                .await
        });
        let right_result = runtime.block_on(async {
            async_increment()
                .compose(async_double().compose(async_negate()))
                .run(value)
                .await
        });

        prop_assert_eq!(left_result, right_result);
    }

    /// Fanout Law: (f &&& g)(x) == (f(x), g(x))
    #[test]
    fn prop_async_func_fanout_applies_both_to_same_input(value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let result = runtime.block_on(async {
            async_increment().fanout(async_double()).run(value).await
        });

        prop_assert_eq!(result, (value.wrapping_add(1), value.wrapping_mul(2)));
    }

    /// Split Law: (f *** g)((x, y)) == (f(x), g(y))
    #[test]
    fn prop_async_func_split_keeps_components_apart(left: i32, right: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let result = runtime.block_on(async {
            async_increment().split(async_negate()).run((left, right)).await
        });

        prop_assert_eq!(result, (left.wrapping_add(1), right.wrapping_neg()));
    }

    /// First Law: first(f)((x, c)) == (f(x), c)
    #[test]
    fn prop_async_func_first_passes_second_component_through(value: i32, carried: String) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let expected = carried.clone();

        let result = runtime.block_on(async {
            async_double().first::<String>().run((value, carried)).await
        });

        prop_assert_eq!(result, (value.wrapping_mul(2), expected));
    }

    /// Second Law: second(f)((c, x)) == (c, f(x))
    #[test]
    fn prop_async_func_second_passes_first_component_through(value: i32, carried: u8) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let result = runtime.block_on(async {
            async_double().second::<u8>().run((carried, value)).await
        });

        prop_assert_eq!(result, (carried, value.wrapping_mul(2)));
    }

    /// A synchronous function computes the same values after moving into the
    /// async shape.
    #[test]
    fn prop_into_async_preserves_results(value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let pipeline = increment().compose(double());
        let expected = pipeline.run(value);

        let result = runtime.block_on(async { pipeline.into_async().run(value).await });

        prop_assert_eq!(result, expected);
    }
}

// =============================================================================
// Arrow Laws
// =============================================================================

fn arrow_of(shape: Shape) -> Arrow<i32, i32> {
    match shape {
        Shape::Sync => lift(increment()),
        Shape::Async => lift(async_increment()),
    }
}

fn any_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![Just(Shape::Sync), Just(Shape::Async)]
}

proptest! {
    /// Lifting is idempotent: lift(lift(f)) behaves like lift(f).
    #[test]
    fn prop_lift_is_idempotent(shape in any_shape(), value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let once = arrow_of(shape);
        let twice = lift(arrow_of(shape));

        prop_assert_eq!(once.shape(), twice.shape());

        let once_result = runtime.block_on(once.run(value));
        let twice_result = runtime.block_on(twice.run(value));
        prop_assert_eq!(once_result, twice_result);
    }

    /// Binary combinators succeed exactly when both shapes agree.
    #[test]
    fn prop_combinators_require_matching_shapes(left in any_shape(), right in any_shape()) {
        let same = left == right;

        prop_assert_eq!(arrow_of(left).compose(arrow_of(right)).is_ok(), same);
        prop_assert_eq!(arrow_of(left).fanout(arrow_of(right)).is_ok(), same);
        prop_assert_eq!(arrow_of(left).split(arrow_of(right)).is_ok(), same);
    }

    /// A successful combination keeps the shape of its operands.
    #[test]
    fn prop_combination_keeps_operand_shape(shape in any_shape(), value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let composed = arrow_of(shape).compose(arrow_of(shape)).unwrap();

        prop_assert_eq!(composed.shape(), shape);
        prop_assert_eq!(composed.run(value).is_ready(), shape == Shape::Sync);
        prop_assert_eq!(runtime.block_on(composed.run(value)), value.wrapping_add(2));
    }

    /// Associativity holds through the Arrow wrapper for both shapes.
    #[test]
    fn prop_arrow_associativity(shape in any_shape(), value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left = arrow_of(shape)
            .compose(arrow_of(shape))
            .and_then(|arrow| arrow.compose(arrow_of(shape)))
            .unwrap();
        let right = arrow_of(shape)
            .compose(arrow_of(shape).compose(arrow_of(shape)).unwrap())
            .unwrap();

        prop_assert_eq!(runtime.block_on(left.run(value)), runtime.block_on(right.run(value)));
    }

    /// Promoting to the async shape always makes mixed arrows combinable.
    #[test]
    fn prop_into_async_resolves_mismatch(left in any_shape(), right in any_shape(), value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let composed = arrow_of(left)
            .into_async()
            .compose(arrow_of(right).into_async())
            .unwrap();

        prop_assert!(composed.is_async());
        prop_assert_eq!(runtime.block_on(composed.run(value)), value.wrapping_add(2));
    }
}
