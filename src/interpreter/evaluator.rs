/// Core evaluation logic.
///
/// Contains the two-stack calculator, the scan over the token stream, and the
/// entry points that evaluate tokens or raw text.
pub mod core;

/// Binary operator evaluation logic.
///
/// Checked integer arithmetic for `+`, `-`, `*` and `/`.
pub mod binary;
