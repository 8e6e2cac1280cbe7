//! Expression nodes.

use crate::Name;

use super::BinaryOp;

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Implicit initializer of `var x;`. Has no source syntax.
    Null,
    /// Decimal integer literal.
    Number(f64),
    /// `true` / `false`.
    Bool(bool),
    /// Double-quoted string, contents kept verbatim.
    Str(String),
    /// Variable reference, resolved against the scope chain at run time.
    Ident(Name),
    /// Arithmetic or comparison.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// Function call in expression position.
    Call(Call),
}

impl Expr {
    /// Build a binary node.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Build an identifier reference.
    pub fn ident(name: &str) -> Self {
        Expr::Ident(Name::new(name))
    }

    /// Whether this node may stand as an `if`/`while` condition.
    ///
    /// Purely syntactic: identifiers, boolean literals and comparisons pass;
    /// every other shape is rejected before evaluation, whatever value it
    /// would produce.
    pub fn is_condition_shape(&self) -> bool {
        match self {
            Expr::Ident(_) | Expr::Bool(_) => true,
            Expr::Binary { op, .. } => op.is_comparison(),
            Expr::Null | Expr::Number(_) | Expr::Str(_) | Expr::Call(_) => false,
        }
    }

    /// Binding strength of this node when it appears as an operand.
    ///
    /// Non-binary nodes are atoms and never need parentheses.
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            _ => u8::MAX,
        }
    }
}

/// A call by name with ordered argument expressions.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub name: Name,
    pub args: Vec<Expr>,
}

impl Call {
    pub fn new(name: Name, args: Vec<Expr>) -> Self {
        Call { name, args }
    }
}
