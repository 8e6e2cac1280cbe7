//! Expression parsing.
//!
//! ```text
//! exp     = cmp
//! cmp     = cmp cmp_op add | add
//! add     = add ('+' | '-') fac | fac
//! fac     = fac ('*' | '/') primary | primary
//! primary = ws (num | 'true' | 'false' | string | call | '(' exp ')' | ident) ws
//! call    = ident ws '(' ws (exp (',' exp)*)? ws ')'
//! ```
//!
//! The left-recursive levels are parsed as loops that fold to the left. If
//! the right operand after an operator fails to parse, the operator is
//! given back and the level ends with the operand built so far.

use sol_ir::{BinaryOp, Call, Expr};
use sol_stack::ensure_sufficient_stack;

use crate::Parser;

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn expr(&mut self) -> Option<Expr> {
        ensure_sufficient_stack(|| self.comparison())
    }

    fn comparison(&mut self) -> Option<Expr> {
        let mut left = self.additive()?;
        loop {
            let start = self.cursor.pos();
            let Some(op) = self.comparison_op() else {
                break;
            };
            match self.additive() {
                Some(right) => left = Expr::binary(left, op, right),
                None => {
                    self.cursor.set_pos(start);
                    break;
                }
            }
        }
        Some(left)
    }

    fn additive(&mut self) -> Option<Expr> {
        let mut left = self.multiplicative()?;
        loop {
            let start = self.cursor.pos();
            let Some(op) = self.operator(&[BinaryOp::Add, BinaryOp::Sub]) else {
                break;
            };
            match self.multiplicative() {
                Some(right) => left = Expr::binary(left, op, right),
                None => {
                    self.cursor.set_pos(start);
                    break;
                }
            }
        }
        Some(left)
    }

    fn multiplicative(&mut self) -> Option<Expr> {
        let mut left = self.primary()?;
        loop {
            let start = self.cursor.pos();
            let Some(op) = self.operator(&[BinaryOp::Mul, BinaryOp::Div]) else {
                break;
            };
            match self.primary() {
                Some(right) => left = Expr::binary(left, op, right),
                None => {
                    self.cursor.set_pos(start);
                    break;
                }
            }
        }
        Some(left)
    }

    /// Match one of the single-character arithmetic operators in `ops`.
    fn operator(&mut self, ops: &[BinaryOp]) -> Option<BinaryOp> {
        for &op in ops {
            if self.cursor.eat_str(op.as_symbol()) {
                return Some(op);
            }
            self.failure.record(self.cursor.pos(), op_label(op));
        }
        None
    }

    fn comparison_op(&mut self) -> Option<BinaryOp> {
        for op in BinaryOp::COMPARISONS {
            if self.cursor.eat_str(op.as_symbol()) {
                return Some(op);
            }
        }
        self.expected("comparison operator")
    }

    fn primary(&mut self) -> Option<Expr> {
        self.speculate(|p| {
            p.ws();
            let expr = p.atom()?;
            p.ws();
            Some(expr)
        })
    }

    fn atom(&mut self) -> Option<Expr> {
        if let Some(number) = self.number() {
            return Some(number);
        }
        if self.keyword("true", "`true`").is_some() {
            return Some(Expr::Bool(true));
        }
        if self.keyword("false", "`false`").is_some() {
            return Some(Expr::Bool(false));
        }
        if let Some(string) = self.speculate(Self::string) {
            return Some(string);
        }
        if let Some(call) = self.speculate(Self::call) {
            return Some(Expr::Call(call));
        }
        if let Some(inner) = self.speculate(Self::parenthesized) {
            return Some(inner);
        }
        self.identifier().map(Expr::Ident)
    }

    /// `num = digit+`
    fn number(&mut self) -> Option<Expr> {
        let digits = self.cursor.eat_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            return self.expected("number");
        }
        // Digit strings always parse; very long ones round to the nearest f64.
        digits.parse::<f64>().ok().map(Expr::Number)
    }

    /// A double-quoted string. A backslash keeps the next character verbatim,
    /// so `\"` does not end the literal; no escape is translated.
    fn string(&mut self) -> Option<Expr> {
        self.punct("\"", "string")?;
        let start = self.cursor.pos();
        loop {
            match self.cursor.current() {
                Some(b'"') => break,
                Some(b'\\') => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                Some(_) => self.cursor.advance(),
                None => return self.expected("closing `\"`"),
            }
        }
        let text = self.cursor.slice(start, self.cursor.pos()).to_string();
        self.cursor.advance();
        Some(Expr::Str(text))
    }

    /// `'(' exp ')'`
    fn parenthesized(&mut self) -> Option<Expr> {
        self.punct("(", "`(`")?;
        let inner = self.expr()?;
        self.punct(")", "`)`")?;
        Some(inner)
    }

    /// `call = ident ws '(' ws args? ws ')'`
    pub(crate) fn call(&mut self) -> Option<Call> {
        let name = self.identifier()?;
        self.ws();
        self.punct("(", "`(`")?;
        self.ws();
        let mut args = Vec::new();
        if let Some(first) = self.speculate(Self::expr) {
            args.push(first);
            while let Some(next) = self.speculate(|p| {
                p.ws();
                p.punct(",", "`,`")?;
                p.expr()
            }) {
                args.push(next);
            }
        }
        self.ws();
        self.punct(")", "`)`")?;
        Some(Call::new(name, args))
    }
}

fn op_label(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "`+`",
        BinaryOp::Sub => "`-`",
        BinaryOp::Mul => "`*`",
        BinaryOp::Div => "`/`",
        _ => "operator",
    }
}
