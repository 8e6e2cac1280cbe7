//! AST node types.
//!
//! - [`operators`]: binary operators and their precedence
//! - [`expr`]: expression nodes
//! - [`stmt`]: statement nodes, blocks and function declarations
//! - `drop`: iterative drop for deep trees

mod drop;
mod expr;
mod operators;
mod stmt;

pub use expr::{Call, Expr};
pub use operators::BinaryOp;
pub use stmt::{Block, FunctionDecl, Stmt};
