/// A ternary expression macro.  Rust's `if` is already an expression,
/// but `cargo fmt` spreads one over five lines, and the tables of
/// border rules in the energy and seam code read much better with one
/// line per case.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
