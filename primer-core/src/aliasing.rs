//! Writes through one alias are visible through every other alias
//!
//! Two shared handles to the same `Cell` behave like two names for one
//! object: setting through either changes what both read.

use std::cell::Cell;

/// Run the aliasing walkthrough and return what it prints
#[allow(clippy::approx_constant)]
pub fn aliasing_demo() -> Vec<String> {
    let i = Cell::new(0_i32);
    let r1 = &i;
    let d = Cell::new(0.0_f64);
    let r2 = &d;

    let mut lines = Vec::with_capacity(4);

    r2.set(3.14159);
    lines.push(format!("{} {}", r2.get(), d.get()));

    r2.set(f64::from(r1.get()));
    lines.push(format!("{} {}", r2.get(), d.get()));

    i.set(r2.get() as i32);
    lines.push(format!("{}", i.get()));

    r1.set(d.get() as i32);
    lines.push(format!("{} {}", r1.get(), d.get()));

    lines
}
