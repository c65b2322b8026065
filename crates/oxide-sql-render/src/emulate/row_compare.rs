//! Rendering strategies for row value comparisons.
//!
//! Equality and inequality decompose into a conjunction of per-field
//! equalities. Ordering comparisons decompose lexicographically:
//!
//! ```text
//! (a, b, c) > (x, y, z)
//!   => a >= x AND (a > x OR (a = x AND (b > y OR (b = y AND c > z))))
//! ```
//!
//! The leading `a >= x` is implied by the tree that follows it and never
//! changes the result.

use tracing::debug;

use crate::ast::{Comparator, Expr, RowCompare};
use crate::dialect::{classify, row_rhs_needs_parentheses, Construct, Support};
use crate::error::RenderError;
use crate::render::{Render, RenderContext};

/// Returns the construct a comparator belongs to.
#[must_use]
pub const fn construct(op: Comparator) -> Construct {
    if op.is_equality() {
        Construct::RowEquality
    } else {
        Construct::RowOrdering
    }
}

/// Builds `l1 = r1 AND l2 = r2 AND ...`, negated with `NOT` when `negated`.
///
/// Returns `None` for empty rows.
#[must_use]
pub fn equality(left: &[Expr], right: &[Expr], negated: bool) -> Option<Expr> {
    let conjunction = left
        .iter()
        .zip(right)
        .map(|(l, r)| l.clone().eq(r.clone()))
        .reduce(Expr::and)?;
    Some(if negated {
        conjunction.not()
    } else {
        conjunction
    })
}

/// Builds the lexicographic decision tree for an ordering comparator.
///
/// The last field is compared with `op` itself, every earlier field with the
/// strict form of `op`. Returns `None` for empty or uneven rows.
#[must_use]
pub fn lexicographic(left: &[Expr], right: &[Expr], op: Comparator) -> Option<Expr> {
    match (left, right) {
        ([l], [r]) => Some(l.clone().compare(op, r.clone())),
        ([l, left_rest @ ..], [r, right_rest @ ..]) => {
            let rest = lexicographic(left_rest, right_rest, op)?;
            let strict = l.clone().compare(op.strict(), r.clone());
            let tie = l.clone().eq(r.clone()).and(rest);
            Some(strict.or(tie))
        }
        _ => None,
    }
}

/// Builds the full ordering rewrite: the lexicographic tree, preceded by a
/// comparison of the first fields with the factored comparator when the rows
/// have more than one field. Returns `None` for `=` and `<>`.
#[must_use]
pub fn ordering(left: &[Expr], right: &[Expr], op: Comparator) -> Option<Expr> {
    if !op.is_ordering() {
        return None;
    }
    let tree = lexicographic(left, right, op)?;
    match (left, right) {
        ([l, _, ..], [r, _, ..]) => Some(l.clone().compare(op.factored(), r.clone()).and(tree)),
        _ => Some(tree),
    }
}

/// Returns the rewrite for the given support level, or `None` when the
/// native syntax is used.
#[must_use]
pub fn rewrite(compare: &RowCompare, support: Support) -> Option<Expr> {
    if support != Support::EmulationRequired {
        return None;
    }
    let (left, right) = (compare.left_fields(), compare.right_fields());
    match compare.comparator() {
        Comparator::Eq => equality(left, right, false),
        Comparator::Ne => equality(left, right, true),
        op @ (Comparator::Gt | Comparator::Ge | Comparator::Lt | Comparator::Le) => {
            ordering(left, right, op)
        }
    }
}

fn render_native(compare: &RowCompare, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
    ctx.visit(compare.left())?;
    ctx.sql(" ")?;
    ctx.sql(compare.comparator().as_str())?;
    ctx.sql(" ")?;
    if row_rhs_needs_parentheses(ctx.dialect()) {
        ctx.sql("(")?;
        ctx.visit(compare.right())?;
        return ctx.sql(")");
    }
    ctx.visit(compare.right())
}

impl Render for RowCompare {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        let dialect = ctx.dialect();
        let kind = construct(self.comparator());
        let support = classify(kind, dialect);
        debug!(
            dialect = dialect.name(),
            construct = kind.name(),
            support = ?support,
            "Rendering construct"
        );
        match rewrite(self, support) {
            Some(expr) => ctx.visit(&expr),
            None => render_native(self, ctx),
        }
    }
}
