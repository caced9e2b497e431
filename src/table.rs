//! Truth-table generation.
//!
//! Columns are the sorted variables, then every distinct composite
//! subexpression in evaluation order, then the result. Rows enumerate all
//! `2^n` assignments, treating the row index as a binary counter whose most
//! significant bit is the alphabetically first variable.

use std::fmt::{Display, Formatter};
use std::mem::size_of;

use log::{debug, warn};
use num_bigint::BigUint;

use crate::ast::{Assignment, Expr};
use crate::error::{Error, Result};
use crate::format::render;
use crate::parser::parse;
use crate::subexpr::collect_subexpressions;
use crate::token::tokenize;

/// Label of the final column.
pub const RESULT_LABEL: &str = "result";

/// Number of variables above which generation logs a warning.
pub const DEFAULT_WARN_VARIABLES: usize = 12;

/// Settings for [`TruthTable::generate_with`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TableOptions {
    /// Reject expressions with more variables than this.
    pub max_variables: Option<usize>,
    /// Log a warning when the expression has more variables than this.
    pub warn_variables: usize,
    /// Header of the last column.
    pub result_label: String,
    /// Spaces appended to the widest cell of each column when rendering.
    pub padding: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_variables: None,
            warn_variables: DEFAULT_WARN_VARIABLES,
            result_label: RESULT_LABEL.to_string(),
            padding: 2,
        }
    }
}

impl TableOptions {
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = Some(max_variables);
        self
    }

    pub fn with_warn_variables(mut self, warn_variables: usize) -> Self {
        self.warn_variables = warn_variables;
        self
    }

    pub fn with_result_label(mut self, label: impl Into<String>) -> Self {
        self.result_label = label.into();
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}

/// Exact number of rows of a table over `num_vars` variables.
pub fn row_count(num_vars: usize) -> BigUint {
    BigUint::from(1u8) << num_vars
}

/// Largest variable count whose row vector stays within `isize::MAX` bytes.
pub fn max_feasible_variables() -> usize {
    let row_size = size_of::<Vec<u8>>();
    (0..usize::BITS as usize)
        .take_while(|&n| {
            1usize
                .checked_shl(n as u32)
                .and_then(|rows| rows.checked_mul(row_size))
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .last()
        .unwrap_or(0)
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    num_vars: usize,
    headers: Vec<String>,
    rows: Vec<Vec<u8>>,
    padding: usize,
}

impl TruthTable {
    /// Build the truth table of `input` with default options.
    pub fn generate(input: &str) -> Result<Self> {
        Self::generate_with(input, &TableOptions::default())
    }

    /// Build the truth table of `input`.
    ///
    /// Fails on empty input, input without variables, any parse error, or when
    /// the variable count exceeds `options.max_variables`.
    pub fn generate_with(input: &str, options: &TableOptions) -> Result<Self> {
        let tokens = tokenize(input.trim());
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }

        let has_variables = tokens
            .iter()
            .filter_map(|t| t.as_ident())
            .any(|name| name.chars().any(char::is_alphabetic));
        if !has_variables {
            return Err(Error::NoVariables);
        }

        let expr = parse(&tokens)?;
        Self::from_expr_with(&expr, options)
    }

    /// Build the truth table of an already parsed expression with default options.
    pub fn from_expr(expr: &Expr) -> Result<Self> {
        Self::from_expr_with(expr, &TableOptions::default())
    }

    /// Build the truth table of `expr`, using the tree directly.
    ///
    /// Columns are the variables of `expr`, its composite subexpressions and
    /// the result. Fails when the variable count exceeds
    /// `options.max_variables` or the rows cannot be allocated.
    pub fn from_expr_with(expr: &Expr, options: &TableOptions) -> Result<Self> {
        let vars: Vec<&str> = expr.variables().into_iter().collect();
        let n = vars.len();
        debug!("building table of '{}' ({} nodes) over {} variables", expr, expr.size(), n);

        let limit = options.max_variables.unwrap_or(usize::MAX).min(max_feasible_variables());
        if n > limit {
            return Err(Error::TooManyVariables {
                count: n,
                limit,
                rows: row_count(n),
            });
        }
        if n > options.warn_variables {
            warn!("{} variables, generating {} rows", n, row_count(n));
        }

        let num_rows = 1usize << n;
        let mut rows: Vec<Vec<u8>> = Vec::new();
        if rows.try_reserve_exact(num_rows).is_err() {
            debug!("could not allocate {} rows", num_rows);
            return Err(Error::TooManyVariables {
                count: n,
                limit: n - 1,
                rows: row_count(n),
            });
        }

        let subs = collect_subexpressions(expr);
        debug!("{} subexpression columns", subs.len());

        let mut headers: Vec<String> = Vec::with_capacity(n + subs.len() + 1);
        headers.extend(vars.iter().map(|name| name.to_string()));
        headers.extend(subs.iter().map(|s| s.text.clone()));
        headers.push(options.result_label.clone());

        for bits in 0..num_rows {
            let assignment: Assignment = vars
                .iter()
                .enumerate()
                .map(|(i, name)| (name.to_string(), (bits >> (n - 1 - i)) & 1 == 1))
                .collect();

            let mut row = Vec::with_capacity(headers.len());
            row.extend(vars.iter().map(|name| assignment[*name] as u8));
            for sub in subs.iter() {
                row.push(sub.node.eval(&assignment)? as u8);
            }
            row.push(expr.eval(&assignment)? as u8);
            rows.push(row);
        }

        Ok(Self {
            num_vars: n,
            headers,
            rows,
            padding: options.padding,
        })
    }

    /// Column labels: variables, subexpressions, result.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows of 0/1 values, in enumeration order.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn variables(&self) -> &[String] {
        &self.headers[..self.num_vars]
    }

    /// Canonical strings of the intermediate columns.
    pub fn subexpressions(&self) -> &[String] {
        &self.headers[self.num_vars..self.headers.len() - 1]
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// The result column.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row[row.len() - 1] == 1)
    }

    /// Number of assignments under which the expression is true.
    pub fn satisfying_count(&self) -> usize {
        self.results().filter(|&r| r).count()
    }

    pub fn is_tautology(&self) -> bool {
        self.results().all(|r| r)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.results().any(|r| r)
    }

    /// Render as fixed-width columns.
    pub fn render(&self) -> String {
        render(&self.headers, &self.rows, self.padding)
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn rows(input: &str) -> Vec<Vec<u8>> {
        TruthTable::generate(input).unwrap().rows().to_vec()
    }

    #[test]
    fn test_and() {
        let table = TruthTable::generate("a∧b").unwrap();
        assert_eq!(table.headers(), ["a", "b", "a∧b", "result"]);
        assert_eq!(
            table.rows(),
            [vec![0u8, 0, 0, 0], vec![0, 1, 0, 0], vec![1, 0, 0, 0], vec![1, 1, 1, 1]]
        );
    }

    #[test]
    fn test_implies_and_iff() {
        let results = |input: &str| -> Vec<u8> { rows(input).iter().map(|r| r[r.len() - 1]).collect() };
        assert_eq!(results("a→b"), vec![1u8, 1, 0, 1]);
        assert_eq!(results("a↔b"), vec![1, 0, 0, 1]);
        assert_eq!(results("a⊕b"), vec![0, 1, 1, 0]);
        assert_eq!(results("a↑b"), vec![1, 1, 1, 0]);
        assert_eq!(results("a↓b"), vec![1, 0, 0, 0]);
        assert_eq!(results("a⊽b"), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_variable_order_is_msb_first() {
        let table = TruthTable::generate("c ∨ a ∨ b").unwrap();
        assert_eq!(table.variables(), ["a", "b", "c"]);
        let vars: Vec<Vec<u8>> = table.rows().iter().map(|r| r[..3].to_vec()).collect();
        assert_eq!(vars[0], vec![0u8, 0, 0]);
        assert_eq!(vars[1], vec![0, 0, 1]);
        assert_eq!(vars[4], vec![1, 0, 0]);
        assert_eq!(vars[7], vec![1, 1, 1]);
    }

    #[test]
    fn test_single_variable() {
        let table = TruthTable::generate("x").unwrap();
        assert_eq!(table.headers(), ["x", "result"]);
        assert_eq!(table.rows(), [vec![0u8, 0], vec![1, 1]]);
        assert!(table.subexpressions().is_empty());
    }

    #[test]
    fn test_subexpression_columns() {
        let table = TruthTable::generate("~a ∧ (b ∨ c)").unwrap();
        assert_eq!(table.subexpressions(), ["~a", "b∨c", "~a∧(b∨c)"]);
        assert_eq!(table.num_columns(), 3 + 3 + 1);
        assert_eq!(table.num_rows(), 8);
        for row in table.rows() {
            assert_eq!(row[5], row[6]);
            assert_eq!(row[3], 1 - row[0]);
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(TruthTable::generate(""), Err(Error::EmptyInput));
        assert_eq!(TruthTable::generate("   "), Err(Error::EmptyInput));
        assert_eq!(TruthTable::generate("1+1"), Err(Error::NoVariables));
        assert_eq!(TruthTable::generate("∧∨"), Err(Error::NoVariables));
        assert_eq!(TruthTable::generate("()"), Err(Error::NoVariables));
        assert_eq!(TruthTable::generate("(a∧b"), Err(Error::UnbalancedParentheses));
        assert_eq!(TruthTable::generate("a∧"), Err(Error::MalformedExpression));
        assert_eq!(TruthTable::generate("a+b"), Err(Error::UnknownOperator('+')));
    }

    #[test]
    fn test_max_variables() {
        let options = TableOptions::default().with_max_variables(2);
        assert!(TruthTable::generate_with("a∧b", &options).is_ok());
        let err = TruthTable::generate_with("a∧b∧c", &options).unwrap_err();
        assert_eq!(
            err,
            Error::TooManyVariables {
                count: 3,
                limit: 2,
                rows: BigUint::from(8u8),
            }
        );
    }

    #[test]
    fn test_result_label() {
        let options = TableOptions::default().with_result_label("F");
        let table = TruthTable::generate_with("p→q", &options).unwrap();
        assert_eq!(table.headers().last().unwrap(), "F");
    }

    #[test]
    fn test_queries() {
        let taut = TruthTable::generate("a ∨ ~a").unwrap();
        assert!(taut.is_tautology());
        assert!(!taut.is_contradiction());

        let contra = TruthTable::generate("a ∧ ~a").unwrap();
        assert!(contra.is_contradiction());
        assert_eq!(contra.satisfying_count(), 0);

        let table = TruthTable::generate("a∨b").unwrap();
        assert_eq!(table.satisfying_count(), 3);
    }

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(0), BigUint::from(1u8));
        assert_eq!(row_count(10), BigUint::from(1024u32));
        assert_eq!(row_count(100).bits(), 101);
    }

    #[test]
    fn test_from_expr() {
        let expr = crate::parser::parse_str("(a∨b)∧c").unwrap();
        let table = TruthTable::from_expr(&expr).unwrap();
        assert_eq!(table.subexpressions(), ["a∨b", "(a∨b)∧c"]);
        assert_eq!(table, TruthTable::generate("(a∨b)∧c").unwrap());
    }

    #[test]
    fn test_from_expr_keeps_hand_built_names() {
        // Names that would not survive a re-parse of the canonical string
        let table = TruthTable::from_expr(&Expr::var("9")).unwrap();
        assert_eq!(table.headers(), ["9", "result"]);
        assert_eq!(table.rows(), [vec![0u8, 0], vec![1, 1]]);

        let expr = Expr::and(Expr::var("x y"), Expr::not(Expr::var("z")));
        let table = TruthTable::from_expr(&expr).unwrap();
        assert_eq!(table.variables(), ["x y", "z"]);
        assert_eq!(table.satisfying_count(), 1);
    }

    #[test]
    fn test_too_many_variables_without_limit() {
        let input = (0..60).map(|i| format!("v{}", i)).collect::<Vec<_>>().join("∧");
        let err = TruthTable::generate(&input).unwrap_err();
        match err {
            Error::TooManyVariables { count, limit, rows } => {
                assert_eq!(count, 60);
                assert!(limit < 60);
                assert_eq!(rows, row_count(60));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_max_feasible_variables() {
        let n = max_feasible_variables();
        assert!(n >= 20);
        assert!(n < usize::BITS as usize);
        let bytes = (1usize << n).checked_mul(size_of::<Vec<u8>>());
        assert!(bytes.is_some_and(|b| b <= isize::MAX as usize));
    }
}
