//! SQL data type definitions.

use core::fmt;

/// SQL data types carried by expression nodes.
///
/// Types drive operand validation at construction time and pick the function
/// family used by emulations (character versus binary strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Type not known yet, e.g. an untyped `NULL`.
    Unknown,

    // Integer types
    /// Small integer (2 bytes).
    Smallint,
    /// Integer (4 bytes).
    Integer,
    /// Big integer (8 bytes).
    Bigint,

    // Floating point
    /// Double precision (8-byte float).
    Double,
    /// Decimal with precision and scale.
    Decimal {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },

    // String types
    /// Fixed-length character string.
    Char(Option<u32>),
    /// Variable-length character string.
    Varchar(Option<u32>),
    /// Text (variable length, no limit).
    Text,

    // Binary types
    /// Binary large object.
    Blob,
    /// Binary with specified length.
    Binary(Option<u32>),
    /// Variable-length binary.
    Varbinary(Option<u32>),

    /// Boolean.
    Boolean,

    /// Row value of the given degree.
    Row(usize),
}

impl DataType {
    /// Returns true for character string types.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::Char(_) | Self::Varchar(_) | Self::Text)
    }

    /// Returns true for binary string types.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Blob | Self::Binary(_) | Self::Varbinary(_))
    }

    /// Returns true for numeric types.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Smallint | Self::Integer | Self::Bigint | Self::Double | Self::Decimal { .. }
        )
    }

    /// Returns true if the type has not been resolved.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns true if a value of this type can be converted to `target`.
    ///
    /// Conversion stays within a family: numeric, character string, binary
    /// string or boolean. Unknown types convert both ways.
    #[must_use]
    pub const fn converts_to(&self, target: &Self) -> bool {
        self.is_unknown()
            || target.is_unknown()
            || (self.is_numeric() && target.is_numeric())
            || (self.is_textual() && target.is_textual())
            || (self.is_binary() && target.is_binary())
            || (matches!(self, Self::Boolean) && matches!(target, Self::Boolean))
            || matches!((self, target), (Self::Row(a), Self::Row(b)) if *a == *b)
    }

    /// Describes the values that convert to this type.
    #[must_use]
    pub const fn family(&self) -> &'static str {
        if self.is_numeric() {
            "a numeric value"
        } else if self.is_textual() {
            "a character string"
        } else if self.is_binary() {
            "a binary string"
        } else if matches!(self, Self::Boolean) {
            "a boolean"
        } else {
            "any value"
        }
    }

    /// Returns `self`, or `other` when `self` is unknown.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        match self {
            Self::Unknown => other,
            known => known,
        }
    }

    /// Returns the SQL representation of the data type.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Unknown => String::from("UNKNOWN"),
            Self::Smallint => String::from("SMALLINT"),
            Self::Integer => String::from("INTEGER"),
            Self::Bigint => String::from("BIGINT"),
            Self::Double => String::from("DOUBLE"),
            Self::Decimal { precision, scale } => match (precision, scale) {
                (Some(p), Some(s)) => format!("DECIMAL({p}, {s})"),
                (Some(p), None) => format!("DECIMAL({p})"),
                _ => String::from("DECIMAL"),
            },
            Self::Char(len) => match len {
                Some(n) => format!("CHAR({n})"),
                None => String::from("CHAR"),
            },
            Self::Varchar(len) => match len {
                Some(n) => format!("VARCHAR({n})"),
                None => String::from("VARCHAR"),
            },
            Self::Text => String::from("TEXT"),
            Self::Blob => String::from("BLOB"),
            Self::Binary(len) => match len {
                Some(n) => format!("BINARY({n})"),
                None => String::from("BINARY"),
            },
            Self::Varbinary(len) => match len {
                Some(n) => format!("VARBINARY({n})"),
                None => String::from("VARBINARY"),
            },
            Self::Boolean => String::from("BOOLEAN"),
            Self::Row(degree) => format!("ROW({degree})"),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
