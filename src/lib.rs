//! # truth-table: truth tables for infix boolean expressions
//!
//! **`truth-table`** parses a boolean expression written with single-glyph
//! operators and builds its truth table. Besides the variables and the final
//! result, the table has one column for every distinct intermediate
//! subexpression, in the order the subexpressions are evaluated.
//!
//! ## Operators
//!
//! From tightest to loosest binding: `~` (not), `∧` (and), `∨` (or), `⊕` (xor),
//! `↓`/`⊽` (nor), `↑` (nand), `→` (implies), `↔` (iff).
//! Binary operators are left-associative. Variables are runs of alphanumeric
//! characters.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::table::TruthTable;
//!
//! let table = TruthTable::generate("~a ∧ (b ∨ c)").unwrap();
//!
//! assert_eq!(table.variables(), ["a", "b", "c"]);
//! assert_eq!(table.subexpressions(), ["~a", "b∨c", "~a∧(b∨c)"]);
//! assert_eq!(table.num_rows(), 8);
//!
//! // Row index counts in binary, first variable is the most significant bit.
//! assert_eq!(table.rows()[3], vec![0, 1, 1, 1, 1, 1, 1]);
//!
//! print!("{}", table);
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]**: splits the input into identifiers and one-character symbols.
//! - **[`parser`]**: shunting-yard parser producing an [`Expr`][crate::ast::Expr].
//! - **[`ast`]**: expression tree, evaluation and canonical (minimally bracketed) rendering.
//! - **[`subexpr`]**: collects intermediate columns.
//! - **[`table`]**: the [`TruthTable`][crate::table::TruthTable] generator and its options.
//! - **[`format`]**: fixed-width text rendering.

pub mod ast;
pub mod error;
pub mod format;
pub mod ops;
pub mod parser;
pub mod subexpr;
pub mod table;
pub mod token;

pub use crate::error::{Error, Result};
pub use crate::table::{TableOptions, TruthTable};
