//! Row values and row value comparisons.

use super::expression::Expr;
use super::operator::Comparator;
use crate::error::BuildError;

/// A row value: an ordered, fixed-degree list of scalar expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<Expr>,
}

impl Row {
    /// Creates a row from its fields.
    pub fn new(fields: Vec<Expr>) -> Result<Self, BuildError> {
        if fields.is_empty() {
            return Err(BuildError::EmptyRow);
        }
        Ok(Self { fields })
    }

    /// Treats an expression as a row: rows are taken as they are, any other
    /// expression becomes a row of degree one.
    #[must_use]
    pub fn from_expr(expr: Expr) -> Self {
        match expr {
            Expr::Row(row) => row,
            other => Self {
                fields: vec![other],
            },
        }
    }

    /// Returns the fields.
    #[must_use]
    pub fn fields(&self) -> &[Expr] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.fields.len()
    }

    /// Compares this row with another one of the same degree.
    pub fn compare(self, op: Comparator, other: Self) -> Result<RowCompare, BuildError> {
        RowCompare::new(self, op, other)
    }

    /// Converts the values of this row to the types of the fields at the
    /// same positions in `other`. `operand` is the position of this row in
    /// the comparison, reported when a value cannot convert.
    fn conform_to(self, other: &Self, operand: usize) -> Result<Self, BuildError> {
        let fields = self
            .fields
            .into_iter()
            .zip(&other.fields)
            .map(|(field, model)| {
                let target = model.data_type();
                field
                    .conformed(target)
                    .map_err(|found| BuildError::TypeConformance {
                        construct: "ROW COMPARISON",
                        operand,
                        expected: target.family(),
                        found,
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { fields })
    }

    pub(crate) fn replace_field(&self, index: usize, value: Expr) -> Self {
        let mut fields = self.fields.clone();
        fields[index] = value;
        Self { fields }
    }
}

/// A comparison between two rows of equal degree.
///
/// Both sides are stored as [`Expr::Row`] so that they can be handed out as
/// plain operands.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCompare {
    left: Box<Expr>,
    op: Comparator,
    right: Box<Expr>,
}

impl RowCompare {
    /// Number of operands.
    pub const ARITY: usize = 2;

    /// Creates a row comparison.
    ///
    /// Values on the right take the types of the corresponding fields on the
    /// left, then values on the left take the types of the right. A value
    /// whose type family cannot convert is rejected.
    pub fn new(left: Row, op: Comparator, right: Row) -> Result<Self, BuildError> {
        if left.degree() != right.degree() {
            return Err(BuildError::ArityMismatch {
                left: left.degree(),
                right: right.degree(),
            });
        }
        let right = right.conform_to(&left, 1)?;
        let left = left.conform_to(&right, 0)?;
        Ok(Self {
            left: Box::new(Expr::Row(left)),
            op,
            right: Box::new(Expr::Row(right)),
        })
    }

    /// Returns the left row.
    #[must_use]
    pub fn left(&self) -> &Expr {
        &self.left
    }

    /// Returns the right row.
    #[must_use]
    pub fn right(&self) -> &Expr {
        &self.right
    }

    /// Returns the comparator.
    #[must_use]
    pub const fn comparator(&self) -> Comparator {
        self.op
    }

    /// Returns the fields of the left row.
    #[must_use]
    pub fn left_fields(&self) -> &[Expr] {
        self.left.row_fields()
    }

    /// Returns the fields of the right row.
    #[must_use]
    pub fn right_fields(&self) -> &[Expr] {
        self.right.row_fields()
    }

    /// Returns the degree of both rows.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.left_fields().len()
    }
}

impl PartialEq<Expr> for RowCompare {
    fn eq(&self, other: &Expr) -> bool {
        other.as_row_compare().is_some_and(|o| self == o)
    }
}

impl PartialEq<RowCompare> for Expr {
    fn eq(&self, other: &RowCompare) -> bool {
        other == self
    }
}
