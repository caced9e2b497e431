use std::collections::{BTreeSet, HashMap};
use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::ops::{BinaryOp, NOT};

/// Values of the variables for one row of a truth table.
pub type Assignment = HashMap<String, bool>;

/// Boolean expression tree.
///
/// Every node owns its children, so a tree is always finite and acyclic.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(String),
    Not(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Implies, lhs, rhs)
    }

    /// Composite nodes are everything but variables.
    pub fn is_composite(&self) -> bool {
        !matches!(self, Expr::Var(_))
    }

    /// Operator of a binary node.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Expr::Binary(op, _, _) => Some(*op),
            _ => None,
        }
    }

    /// Evaluate the expression under `assignment`.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool> {
        match self {
            Expr::Var(name) => assignment
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnboundVariable(name.clone())),
            Expr::Not(child) => Ok(!child.eval(assignment)?),
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.eval(assignment)?;
                let b = rhs.eval(assignment)?;
                Ok(op.apply(a, b))
            }
        }
    }

    /// Distinct variable names, sorted.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables<'a>(&'a self, vars: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Var(name) => {
                vars.insert(name.as_str());
            }
            Expr::Not(child) => child.collect_variables(vars),
            Expr::Binary(_, lhs, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
        }
    }

    /// Total number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(child) => 1 + child.size(),
            Expr::Binary(_, lhs, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }
}

/// Canonical form with the fewest parentheses that still re-parses to the
/// same function.
///
/// The right operand of `→` is always bracketed when it is a binary node.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(child) => match child.as_ref() {
                Expr::Binary(..) => write!(f, "{}({})", NOT, child),
                _ => write!(f, "{}{}", NOT, child),
            },
            Expr::Binary(op, lhs, rhs) => {
                let rank = op.rank();

                match lhs.binary_op() {
                    Some(l) if l.rank() < rank => write!(f, "({})", lhs)?,
                    _ => write!(f, "{}", lhs)?,
                }

                write!(f, "{}", op)?;

                match rhs.binary_op() {
                    Some(r) if *op == BinaryOp::Implies || r.rank() <= rank => write!(f, "({})", rhs),
                    _ => write!(f, "{}", rhs),
                }
            }
        }
    }
}
