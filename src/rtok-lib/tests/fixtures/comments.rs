//! Crate docs.

/// Adds one.
/* outer /* inner */ still outer */
/** Block doc. */
//// Not a doc comment.
fn add_one(x: i32) -> i32 {
    x + 1 // trailing
}
