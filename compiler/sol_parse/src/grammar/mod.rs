//! Grammar rules.
//!
//! - [`expr`]: comparison, additive, multiplicative and primary levels
//! - [`stmt`]: statements, blocks, function declarations and the `for` lowering

mod expr;
mod stmt;
