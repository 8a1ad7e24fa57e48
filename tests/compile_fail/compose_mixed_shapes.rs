//! Test that composing a Func with an AsyncFunc produces a compile error.

use arrowlet::shape::{AsyncFunc, Func};

fn main() {
    let sync = Func::new(|x: i32| x + 1);
    let deferred = AsyncFunc::new(|x: i32| async move { x * 2 });
    let _ = sync >> deferred;
}
