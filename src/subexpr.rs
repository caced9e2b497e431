use std::collections::HashSet;

use crate::ast::Expr;

/// Composite subexpression together with its canonical string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Subexpr<'a> {
    pub text: String,
    pub node: &'a Expr,
}

/// All composite subexpressions of `root` in evaluation (post-) order.
///
/// Children come before their parent, left before right. Nodes are
/// deduplicated by canonical string, so two subtrees that render the same are
/// reported once, at their first occurrence. When `root` is composite it is
/// the last entry.
pub fn collect_subexpressions(root: &Expr) -> Vec<Subexpr<'_>> {
    let mut seen = HashSet::new();
    let mut subs = Vec::new();
    visit(root, &mut seen, &mut subs);
    subs
}

fn visit<'a>(node: &'a Expr, seen: &mut HashSet<String>, subs: &mut Vec<Subexpr<'a>>) {
    match node {
        Expr::Var(_) => return,
        Expr::Not(child) => visit(child, seen, subs),
        Expr::Binary(_, lhs, rhs) => {
            visit(lhs, seen, subs);
            visit(rhs, seen, subs);
        }
    }

    let text = node.to_string();
    if seen.insert(text.clone()) {
        subs.push(Subexpr { text, node });
    }
}
