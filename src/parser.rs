//! Operator-precedence (shunting-yard) parser.
//!
//! Identifiers go straight to the output stack as variables. Negation and `(`
//! are pushed onto the pending stack unconditionally. A binary operator first
//! reduces every pending operator of greater or equal rank (all binary
//! operators are left-associative), then is pushed itself. A `)` reduces down
//! to the matching `(`.

use log::{debug, trace};

use crate::ast::Expr;
use crate::error::{Error, Result};
use crate::ops::{BinaryOp, CLOSE, NOT, NOT_RANK, OPEN};
use crate::token::{tokenize, Token};

/// Entry of the pending-operator stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Pending {
    Not,
    Binary(BinaryOp),
    Open,
}

impl Pending {
    fn rank(self) -> Option<u8> {
        match self {
            Pending::Not => Some(NOT_RANK),
            Pending::Binary(op) => Some(op.rank()),
            Pending::Open => None,
        }
    }
}

struct Parser {
    output: Vec<Expr>,
    pending: Vec<Pending>,
}

impl Parser {
    fn new() -> Self {
        Self {
            output: Vec::new(),
            pending: Vec::new(),
        }
    }

    fn pop_operand(&mut self) -> Result<Expr> {
        self.output.pop().ok_or(Error::MalformedExpression)
    }

    /// Build a node for `op` from the top of the output stack.
    fn reduce(&mut self, op: Pending) -> Result<()> {
        trace!("reduce({:?}), output = {}", op, self.output.len());
        let node = match op {
            Pending::Not => Expr::not(self.pop_operand()?),
            Pending::Binary(op) => {
                let rhs = self.pop_operand()?;
                let lhs = self.pop_operand()?;
                Expr::binary(op, lhs, rhs)
            }
            Pending::Open => return Err(Error::UnbalancedParentheses),
        };
        self.output.push(node);
        Ok(())
    }

    fn close_group(&mut self) -> Result<()> {
        loop {
            match self.pending.pop() {
                Some(Pending::Open) => return Ok(()),
                Some(op) => self.reduce(op)?,
                None => return Err(Error::UnbalancedParentheses),
            }
        }
    }

    fn push_binary(&mut self, op: BinaryOp) -> Result<()> {
        while let Some(&top) = self.pending.last() {
            let Some(top_rank) = top.rank() else {
                break;
            };
            let should_reduce = top_rank > op.rank() || (top_rank == op.rank() && op.is_left_assoc());
            if !should_reduce {
                break;
            }
            self.pending.pop();
            self.reduce(top)?;
        }
        self.pending.push(Pending::Binary(op));
        Ok(())
    }

    fn feed(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::Ident(name) => self.output.push(Expr::var(name.clone())),
            Token::Symbol(NOT) => self.pending.push(Pending::Not),
            Token::Symbol(OPEN) => self.pending.push(Pending::Open),
            Token::Symbol(CLOSE) => self.close_group()?,
            &Token::Symbol(c) => {
                let op = BinaryOp::from_symbol(c).ok_or(Error::UnknownOperator(c))?;
                self.push_binary(op)?;
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Expr> {
        while let Some(op) = self.pending.pop() {
            self.reduce(op)?;
        }
        if self.output.len() != 1 {
            debug!("expression reduced to {} nodes", self.output.len());
            return Err(Error::MalformedExpression);
        }
        self.pop_operand()
    }
}

/// Parse a token sequence into a single expression tree.
pub fn parse(tokens: &[Token]) -> Result<Expr> {
    let mut parser = Parser::new();
    for token in tokens {
        parser.feed(token)?;
    }
    parser.finish()
}

/// Tokenize and parse `input`.
pub fn parse_str(input: &str) -> Result<Expr> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(Error::EmptyInput);
    }
    parse(&tokens)
}
