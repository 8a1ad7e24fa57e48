//! Test that lifting a stateful circuit into an Arrow produces a compile error.

use arrowlet::arrow::lift;
use arrowlet::shape::Circuit;

fn main() {
    // Only synchronous and asynchronous functions can become an Arrow.
    let _ = lift(Circuit::<i32, i32>::total());
}
