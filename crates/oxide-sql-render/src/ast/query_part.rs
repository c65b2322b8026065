//! The query object model: uniform access to the operands of every node.
//!
//! Generic passes only need [`QueryPart`] to walk and rebuild a tree; they
//! never match on individual constructs. Rebuilding goes through each
//! construct's own constructor, so invariants are re-checked and the node
//! kind never changes.

use super::expression::{Arithmetic, Compare, Expr, Function, Logical};
use super::overlay::Overlay;
use super::row::{Row, RowCompare};
use crate::error::BuildError;

/// Structural access to a node's immediate operands.
pub trait QueryPart: Sized {
    /// Returns the construct name.
    fn name(&self) -> &'static str;

    /// Returns the number of operand positions.
    fn arity(&self) -> usize;

    /// Returns the operand at `index`, or `None` when the position is out of
    /// range or holds an absent optional operand.
    fn operand(&self, index: usize) -> Option<&Expr>;

    /// Returns a copy of the node with the operand at `index` replaced.
    ///
    /// `self` is left untouched.
    fn with_operand(&self, index: usize, value: Option<Expr>) -> Result<Self, BuildError>;

    /// Returns all present operands in order.
    fn operands(&self) -> Vec<&Expr> {
        (0..self.arity()).filter_map(|i| self.operand(i)).collect()
    }
}

fn out_of_range(construct: &'static str, index: usize, arity: usize) -> BuildError {
    BuildError::OperandIndex {
        construct,
        index,
        arity,
    }
}

fn required(construct: &'static str, index: usize, value: Option<Expr>) -> Result<Expr, BuildError> {
    value.ok_or(BuildError::MissingOperand { construct, index })
}

impl QueryPart for Overlay {
    fn name(&self) -> &'static str {
        "OVERLAY"
    }

    fn arity(&self) -> usize {
        Self::ARITY
    }

    fn operand(&self, index: usize) -> Option<&Expr> {
        match index {
            0 => Some(self.source()),
            1 => Some(self.replacement()),
            2 => Some(self.start()),
            3 => self.length(),
            _ => None,
        }
    }

    fn with_operand(&self, index: usize, value: Option<Expr>) -> Result<Self, BuildError> {
        let source = Some(self.source().clone());
        let replacement = Some(self.replacement().clone());
        let start = Some(self.start().clone());
        let length = self.length().cloned();
        match index {
            0 => Self::from_operands(value, replacement, start, length),
            1 => Self::from_operands(source, value, start, length),
            2 => Self::from_operands(source, replacement, value, length),
            3 => Self::from_operands(source, replacement, start, value),
            _ => Err(out_of_range(self.name(), index, Self::ARITY)),
        }
    }
}

impl QueryPart for RowCompare {
    fn name(&self) -> &'static str {
        "ROW COMPARISON"
    }

    fn arity(&self) -> usize {
        Self::ARITY
    }

    fn operand(&self, index: usize) -> Option<&Expr> {
        match index {
            0 => Some(self.left()),
            1 => Some(self.right()),
            _ => None,
        }
    }

    fn with_operand(&self, index: usize, value: Option<Expr>) -> Result<Self, BuildError> {
        let left = || Row::from_expr(self.left().clone());
        let right = || Row::from_expr(self.right().clone());
        match index {
            0 => {
                let value = required(self.name(), index, value)?;
                Self::new(Row::from_expr(value), self.comparator(), right())
            }
            1 => {
                let value = required(self.name(), index, value)?;
                Self::new(left(), self.comparator(), Row::from_expr(value))
            }
            _ => Err(out_of_range(self.name(), index, Self::ARITY)),
        }
    }
}

impl QueryPart for Row {
    fn name(&self) -> &'static str {
        "ROW"
    }

    fn arity(&self) -> usize {
        self.degree()
    }

    fn operand(&self, index: usize) -> Option<&Expr> {
        self.fields().get(index)
    }

    fn with_operand(&self, index: usize, value: Option<Expr>) -> Result<Self, BuildError> {
        if index >= self.degree() {
            return Err(out_of_range(self.name(), index, self.degree()));
        }
        let value = required(self.name(), index, value)?;
        Ok(self.replace_field(index, value))
    }
}

impl QueryPart for Function {
    fn name(&self) -> &'static str {
        "FUNCTION"
    }

    fn arity(&self) -> usize {
        self.args().len()
    }

    fn operand(&self, index: usize) -> Option<&Expr> {
        self.args().get(index)
    }

    fn with_operand(&self, index: usize, value: Option<Expr>) -> Result<Self, BuildError> {
        if index >= self.arity() {
            return Err(out_of_range(self.name(), index, self.arity()));
        }
        let value = required(self.name(), index, value)?;
        Ok(self.replace_arg(index, value))
    }
}

// Binary nodes all share the same shape.
macro_rules! binary_query_part {
    ($ty:ty, $name:literal) => {
        impl QueryPart for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn arity(&self) -> usize {
                2
            }

            fn operand(&self, index: usize) -> Option<&Expr> {
                match index {
                    0 => Some(&self.left),
                    1 => Some(&self.right),
                    _ => None,
                }
            }

            fn with_operand(&self, index: usize, value: Option<Expr>) -> Result<Self, BuildError> {
                let mut node = self.clone();
                match index {
                    0 => node.left = Box::new(required($name, index, value)?),
                    1 => node.right = Box::new(required($name, index, value)?),
                    _ => return Err(out_of_range($name, index, 2)),
                }
                Ok(node)
            }
        }
    };
}

binary_query_part!(Arithmetic, "ARITHMETIC");
binary_query_part!(Compare, "COMPARE");
binary_query_part!(Logical, "LOGICAL");

impl QueryPart for Expr {
    fn name(&self) -> &'static str {
        match self {
            Self::Column(_) => "COLUMN",
            Self::Value(_) => "VALUE",
            Self::Function(f) => f.name(),
            Self::Arithmetic(a) => a.name(),
            Self::Compare(c) => c.name(),
            Self::Logical(l) => l.name(),
            Self::Not(_) => "NOT",
            Self::Row(r) => r.name(),
            Self::Overlay(o) => o.name(),
            Self::RowCompare(r) => r.name(),
        }
    }

    fn arity(&self) -> usize {
        match self {
            Self::Column(_) | Self::Value(_) => 0,
            Self::Not(_) => 1,
            Self::Function(f) => f.arity(),
            Self::Arithmetic(a) => a.arity(),
            Self::Compare(c) => c.arity(),
            Self::Logical(l) => l.arity(),
            Self::Row(r) => r.arity(),
            Self::Overlay(o) => o.arity(),
            Self::RowCompare(r) => r.arity(),
        }
    }

    fn operand(&self, index: usize) -> Option<&Expr> {
        match self {
            Self::Column(_) | Self::Value(_) => None,
            Self::Not(inner) => (index == 0).then_some(&**inner),
            Self::Function(f) => f.operand(index),
            Self::Arithmetic(a) => a.operand(index),
            Self::Compare(c) => c.operand(index),
            Self::Logical(l) => l.operand(index),
            Self::Row(r) => r.operand(index),
            Self::Overlay(o) => o.operand(index),
            Self::RowCompare(r) => r.operand(index),
        }
    }

    fn with_operand(&self, index: usize, value: Option<Expr>) -> Result<Self, BuildError> {
        match self {
            Self::Column(_) | Self::Value(_) => Err(out_of_range(self.name(), index, 0)),
            Self::Not(_) => {
                if index != 0 {
                    return Err(out_of_range(self.name(), index, 1));
                }
                Ok(Self::Not(Box::new(required(self.name(), index, value)?)))
            }
            Self::Function(f) => f.with_operand(index, value).map(Self::Function),
            Self::Arithmetic(a) => a.with_operand(index, value).map(Self::Arithmetic),
            Self::Compare(c) => c.with_operand(index, value).map(Self::Compare),
            Self::Logical(l) => l.with_operand(index, value).map(Self::Logical),
            Self::Row(r) => r.with_operand(index, value).map(Self::Row),
            Self::Overlay(o) => o.with_operand(index, value).map(Self::Overlay),
            Self::RowCompare(r) => r.with_operand(index, value).map(Self::RowCompare),
        }
    }
}

impl Expr {
    /// Folds over the tree in pre-order: a node is visited before its
    /// operands, operands from left to right.
    pub fn traverse<T>(&self, init: T, f: &mut impl FnMut(T, &Self) -> T) -> T {
        let acc = f(init, self);
        (0..self.arity())
            .filter_map(|i| self.operand(i))
            .fold(acc, |acc, operand| operand.traverse(acc, f))
    }

    /// Rewrites the tree bottom-up.
    ///
    /// Operands are rewritten first and spliced back in with
    /// [`QueryPart::with_operand`]; then `f` is offered the rebuilt node and
    /// may return a replacement. Nodes `f` leaves alone keep their kind.
    pub fn replace(&self, f: &mut impl FnMut(&Self) -> Option<Self>) -> Result<Self, BuildError> {
        let mut node = self.clone();
        for index in 0..self.arity() {
            if let Some(operand) = self.operand(index) {
                let rewritten = operand.replace(f)?;
                if rewritten != *operand {
                    node = node.with_operand(index, Some(rewritten))?;
                }
            }
        }
        Ok(f(&node).unwrap_or(node))
    }
}
