use num_bigint::BigUint;
use thiserror::Error;

/// Errors produced while turning an expression string into a truth table.
///
/// Every error is a normal outcome of bad input: the whole computation either
/// succeeds or fails with exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains nothing but whitespace.
    #[error("Empty expression")]
    EmptyInput,

    /// The input has tokens, but none of them names a variable.
    #[error("No variables found in the expression")]
    NoVariables,

    /// A stray `(` or `)`.
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    /// The tokens do not reduce to exactly one expression.
    #[error("Malformed expression")]
    MalformedExpression,

    /// A symbol that is neither a parenthesis nor a known operator.
    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),

    /// The assignment has no value for a variable of the expression.
    #[error("Variable '{0}' is not assigned")]
    UnboundVariable(String),

    /// The expression has more variables than the caller allows.
    #[error("Too many variables: {count} (limit is {limit}), the table would have {rows} rows")]
    TooManyVariables { count: usize, limit: usize, rows: BigUint },
}

pub type Result<T> = std::result::Result<T, Error>;
