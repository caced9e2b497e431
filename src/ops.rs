//! Operator table.
//!
//! Every operator is a single character. The table below is the only place
//! where symbols, precedence ranks and truth functions are defined; the parser,
//! the stringifier and the evaluator all read it.
//!
//! | Symbol | Operator      | Rank |
//! |--------|---------------|------|
//! | `~`    | negation      | 8    |
//! | `∧`    | conjunction   | 7    |
//! | `∨`    | disjunction   | 6    |
//! | `⊕`    | xor           | 5    |
//! | `↓`    | nor           | 4    |
//! | `⊽`    | nor           | 4    |
//! | `↑`    | nand          | 3    |
//! | `→`    | implication   | 2    |
//! | `↔`    | biconditional | 1    |
//!
//! All binary operators are left-associative.

use std::fmt::{Display, Formatter};

/// Symbol of the unary negation.
pub const NOT: char = '~';

/// Precedence rank of the unary negation. Higher than any binary operator.
pub const NOT_RANK: u8 = 8;

pub const OPEN: char = '(';
pub const CLOSE: char = ')';

/// All operator glyphs accepted in expressions, negation first.
pub const SYMBOLS: [char; 9] = ['~', '∧', '∨', '⊕', '↓', '⊽', '↑', '→', '↔'];

/// Binary operators.
///
/// The two nor glyphs are kept as separate variants so that an expression
/// renders with the glyph it was written with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    /// Peirce arrow `↓`.
    Nor,
    /// Barred vee `⊽`, same function as [`BinaryOp::Nor`].
    NorBar,
    Nand,
    Implies,
    Iff,
}

struct OpInfo {
    op: BinaryOp,
    symbol: char,
    rank: u8,
    left_assoc: bool,
    apply: fn(bool, bool) -> bool,
}

static TABLE: [OpInfo; 8] = [
    OpInfo { op: BinaryOp::And, symbol: '∧', rank: 7, left_assoc: true, apply: |a, b| a && b },
    OpInfo { op: BinaryOp::Or, symbol: '∨', rank: 6, left_assoc: true, apply: |a, b| a || b },
    OpInfo { op: BinaryOp::Xor, symbol: '⊕', rank: 5, left_assoc: true, apply: |a, b| a != b },
    OpInfo { op: BinaryOp::Nor, symbol: '↓', rank: 4, left_assoc: true, apply: |a, b| !(a || b) },
    OpInfo { op: BinaryOp::NorBar, symbol: '⊽', rank: 4, left_assoc: true, apply: |a, b| !(a || b) },
    OpInfo { op: BinaryOp::Nand, symbol: '↑', rank: 3, left_assoc: true, apply: |a, b| !(a && b) },
    OpInfo { op: BinaryOp::Implies, symbol: '→', rank: 2, left_assoc: true, apply: |a, b| !a || b },
    OpInfo { op: BinaryOp::Iff, symbol: '↔', rank: 1, left_assoc: true, apply: |a, b| a == b },
];

impl BinaryOp {
    pub const ALL: [BinaryOp; 8] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
        BinaryOp::Nor,
        BinaryOp::NorBar,
        BinaryOp::Nand,
        BinaryOp::Implies,
        BinaryOp::Iff,
    ];

    fn info(self) -> &'static OpInfo {
        // `TABLE` is laid out in declaration order of the variants.
        let info = &TABLE[self as usize];
        debug_assert_eq!(info.op, self);
        info
    }

    /// Look up the binary operator written as `symbol`.
    pub fn from_symbol(symbol: char) -> Option<BinaryOp> {
        TABLE.iter().find(|info| info.symbol == symbol).map(|info| info.op)
    }

    pub fn symbol(self) -> char {
        self.info().symbol
    }

    /// Precedence rank: a higher rank binds tighter.
    pub fn rank(self) -> u8 {
        self.info().rank
    }

    pub fn is_left_assoc(self) -> bool {
        self.info().left_assoc
    }

    /// Apply the operator's truth function.
    pub fn apply(self, a: bool, b: bool) -> bool {
        (self.info().apply)(a, b)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn truth_column(op: BinaryOp) -> [bool; 4] {
        [op.apply(false, false), op.apply(false, true), op.apply(true, false), op.apply(true, true)]
    }

    #[test]
    fn test_table_order_matches_variants() {
        for op in BinaryOp::ALL {
            assert_eq!(TABLE[op as usize].op, op);
        }
    }

    #[test]
    fn test_from_symbol() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(BinaryOp::from_symbol(NOT), None);
        assert_eq!(BinaryOp::from_symbol('('), None);
        assert_eq!(BinaryOp::from_symbol('+'), None);
    }

    #[test]
    fn test_truth_functions() {
        assert_eq!(truth_column(BinaryOp::And), [false, false, false, true]);
        assert_eq!(truth_column(BinaryOp::Or), [false, true, true, true]);
        assert_eq!(truth_column(BinaryOp::Xor), [false, true, true, false]);
        assert_eq!(truth_column(BinaryOp::Nor), [true, false, false, false]);
        assert_eq!(truth_column(BinaryOp::NorBar), [true, false, false, false]);
        assert_eq!(truth_column(BinaryOp::Nand), [true, true, true, false]);
        assert_eq!(truth_column(BinaryOp::Implies), [true, true, false, true]);
        assert_eq!(truth_column(BinaryOp::Iff), [true, false, false, true]);
    }

    #[test]
    fn test_ranks() {
        let ranks: Vec<u8> = BinaryOp::ALL.iter().map(|op| op.rank()).collect();
        assert_eq!(ranks, vec![7, 6, 5, 4, 4, 3, 2, 1]);
        assert!(BinaryOp::ALL.iter().all(|op| op.rank() < NOT_RANK));
        assert!(BinaryOp::ALL.iter().all(|op| op.is_left_assoc()));
    }

    #[test]
    fn test_symbols_palette() {
        assert_eq!(SYMBOLS[0], NOT);
        let binary: Vec<char> = BinaryOp::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(&SYMBOLS[1..], binary.as_slice());
    }
}
