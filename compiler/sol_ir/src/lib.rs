//! Sol IR - AST node types for the Sol language.
//!
//! This crate contains the data structures shared by the parser, the
//! formatter and the evaluator:
//! - `Span` for source locations
//! - `Name` for identifiers
//! - AST nodes (`Expr`, `Stmt`, `Block`, `FunctionDecl`, `Call`)
//!
//! Nodes own their children (`Box`/`Vec`) and derive `PartialEq`, so two
//! trees can be compared structurally. Nodes carry no spans: a tree parsed
//! from reformatted source compares equal to the original tree.

pub mod ast;
mod name;
mod span;

pub use ast::{BinaryOp, Block, Call, Expr, FunctionDecl, Stmt};
pub use name::Name;
pub use span::Span;
