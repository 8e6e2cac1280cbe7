//! Binary operators.
//!
//! Arithmetic and comparison operators share one node shape
//! (`Expr::Binary`); the operator alone decides which family applies.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Gt,
    Lt,
    Eq,
    NotEq,
    GtEq,
    LtEq,
}

impl BinaryOp {
    /// All comparison operators, longest symbol first.
    ///
    /// The parser tries them in this order so `<=` is not read as `<`.
    pub const COMPARISONS: [BinaryOp; 6] = [
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::GtEq,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::Lt,
    ];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
        }
    }

    /// Whether this operator belongs to the comparison family.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Gt | Self::Lt | Self::Eq | Self::NotEq | Self::GtEq | Self::LtEq
        )
    }

    /// Returns the binding strength of this operator.
    ///
    /// Higher number = binds more tightly:
    /// - 1: `>` `<` `==` `!=` `>=` `<=`
    /// - 2: `+` `-`
    /// - 3: `*` `/`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 2,
            Self::Gt | Self::Lt | Self::Eq | Self::NotEq | Self::GtEq | Self::LtEq => 1,
        }
    }
}
