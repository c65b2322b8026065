//! The `OVERLAY` string splice.

use super::expression::Expr;
use super::types::DataType;
use crate::error::BuildError;

const NAME: &str = "OVERLAY";

/// `OVERLAY(source PLACING replacement FROM start [FOR length])`.
///
/// Replaces `length` characters of `source`, starting at the 1-based
/// position `start`, with `replacement`. Works on character strings and on
/// binary strings; both string operands belong to the same family.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    source: Box<Expr>,
    replacement: Box<Expr>,
    start: Box<Expr>,
    length: Option<Box<Expr>>,
}

impl Overlay {
    /// Number of operands, including the optional length.
    pub const ARITY: usize = 4;

    /// Creates an overlay without a length.
    pub fn new(source: Expr, replacement: Expr, start: Expr) -> Result<Self, BuildError> {
        Self::from_operands(Some(source), Some(replacement), Some(start), None)
    }

    /// Creates an overlay with an explicit length.
    pub fn with_length(
        source: Expr,
        replacement: Expr,
        start: Expr,
        length: Expr,
    ) -> Result<Self, BuildError> {
        Self::from_operands(Some(source), Some(replacement), Some(start), Some(length))
    }

    /// Creates an overlay from possibly absent operands.
    ///
    /// Absent `source`, `replacement` and `start` become typed `NULL`s, and
    /// untyped values take the type their position requires. Only `length`
    /// may stay absent.
    pub fn from_operands(
        source: Option<Expr>,
        replacement: Option<Expr>,
        start: Option<Expr>,
        length: Option<Expr>,
    ) -> Result<Self, BuildError> {
        let source = source.unwrap_or_else(|| Expr::null(DataType::Unknown));
        let replacement = replacement.unwrap_or_else(|| Expr::null(DataType::Unknown));
        let start = start.unwrap_or_else(|| Expr::null(DataType::Unknown));

        let string_type = source
            .data_type()
            .or(replacement.data_type())
            .or(DataType::Varchar(None));

        check_string(0, &source, string_type)?;
        check_string(1, &replacement, string_type)?;
        check_numeric(2, &start)?;
        if let Some(length) = &length {
            check_numeric(3, length)?;
        }

        Ok(Self {
            source: Box::new(source.retyped(string_type)),
            replacement: Box::new(replacement.retyped(string_type)),
            start: Box::new(start.retyped(DataType::Integer)),
            length: length.map(|l| Box::new(l.retyped(DataType::Integer))),
        })
    }

    /// Returns the string being spliced.
    #[must_use]
    pub fn source(&self) -> &Expr {
        &self.source
    }

    /// Returns the string placed into the source.
    #[must_use]
    pub fn replacement(&self) -> &Expr {
        &self.replacement
    }

    /// Returns the 1-based start position.
    #[must_use]
    pub fn start(&self) -> &Expr {
        &self.start
    }

    /// Returns the number of replaced characters, if given.
    #[must_use]
    pub fn length(&self) -> Option<&Expr> {
        self.length.as_deref()
    }

    /// Returns the type of the spliced string.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.source.data_type().or(self.replacement.data_type())
    }

    /// Returns true when the string operands are binary strings.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        self.data_type().is_binary()
    }
}

fn check_string(operand: usize, expr: &Expr, string_type: DataType) -> Result<(), BuildError> {
    let found = expr.data_type();
    if found.is_unknown() {
        return Ok(());
    }
    let (conforms, expected) = if string_type.is_binary() {
        (found.is_binary(), "a binary string")
    } else {
        (found.is_textual(), "a character string")
    };
    if conforms {
        Ok(())
    } else {
        Err(BuildError::TypeConformance {
            construct: NAME,
            operand,
            expected,
            found,
        })
    }
}

fn check_numeric(operand: usize, expr: &Expr) -> Result<(), BuildError> {
    let found = expr.data_type();
    if found.is_unknown() || found.is_numeric() {
        Ok(())
    } else {
        Err(BuildError::TypeConformance {
            construct: NAME,
            operand,
            expected: "a numeric expression",
            found,
        })
    }
}

impl PartialEq<Expr> for Overlay {
    fn eq(&self, other: &Expr) -> bool {
        other.as_overlay().is_some_and(|o| self == o)
    }
}

impl PartialEq<Overlay> for Expr {
    fn eq(&self, other: &Overlay) -> bool {
        other == self
    }
}
