//! Operators.

/// Comparison operators.
///
/// The set is closed: row comparisons dispatch on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
}

impl Comparator {
    /// Every comparator.
    pub const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Gt, Self::Ge, Self::Lt, Self::Le];

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    /// Returns true for `=` and `<>`.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::Ne)
    }

    /// Returns true for `<`, `<=`, `>` and `>=`.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        !self.is_equality()
    }

    /// The order component of the comparator, without its equal component.
    ///
    /// `>=` becomes `>`, `<=` becomes `<`. Equality operators are returned
    /// unchanged.
    #[must_use]
    pub const fn strict(self) -> Self {
        match self {
            Self::Gt | Self::Ge => Self::Gt,
            Self::Lt | Self::Le => Self::Lt,
            other => other,
        }
    }

    /// The order component of the comparator, with its equal component
    /// enforced.
    ///
    /// `>` becomes `>=`, `<` becomes `<=`. Equality operators are returned
    /// unchanged.
    #[must_use]
    pub const fn factored(self) -> Self {
        match self {
            Self::Gt | Self::Ge => Self::Ge,
            Self::Lt | Self::Le => Self::Le,
            other => other,
        }
    }
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl ArithOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

/// Logical connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    /// `AND`
    And,
    /// `OR`
    Or,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_and_factored() {
        assert_eq!(Comparator::Ge.strict(), Comparator::Gt);
        assert_eq!(Comparator::Lt.strict(), Comparator::Lt);
        assert_eq!(Comparator::Gt.factored(), Comparator::Ge);
        assert_eq!(Comparator::Le.factored(), Comparator::Le);
        assert_eq!(Comparator::Eq.strict(), Comparator::Eq);
    }

    #[test]
    fn test_families() {
        let ordering: Vec<_> = Comparator::ALL
            .into_iter()
            .filter(|op| op.is_ordering())
            .collect();
        assert_eq!(
            ordering,
            vec![Comparator::Gt, Comparator::Ge, Comparator::Lt, Comparator::Le]
        );
        assert_eq!(Comparator::Ne.as_str(), "<>");
    }
}
