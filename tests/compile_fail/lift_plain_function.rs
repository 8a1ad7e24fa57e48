//! Test that lifting a plain function pointer produces a compile error.

use arrowlet::arrow::lift;

fn increment(x: i32) -> i32 {
    x + 1
}

fn main() {
    // The shape must be stated with Arrow::from_fn or Arrow::from_async_fn.
    let _ = lift(increment as fn(i32) -> i32);
}
