//! Expression AST types.

use super::operator::{ArithOp, Comparator, LogicalOp};
use super::overlay::Overlay;
use super::row::{Row, RowCompare};
use super::types::DataType;
use crate::value::{SqlValue, ToSqlValue};

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Column {
    Column {
        table: None,
        name: String::from(name),
        data_type: DataType::Unknown,
    }
}

/// A column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Optional table qualifier.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
    /// Declared type of the column.
    pub data_type: DataType,
}

impl Column {
    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(table: &str, name: &str) -> Self {
        Self {
            table: Some(String::from(table)),
            name: String::from(name),
            data_type: DataType::Unknown,
        }
    }

    /// Sets the declared type of the column.
    #[must_use]
    pub const fn typed(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }
}

/// A value, rendered as a bind parameter unless marked inline.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    value: SqlValue,
    data_type: DataType,
    inline: bool,
}

impl Value {
    /// Creates a bind value typed after the value itself.
    #[must_use]
    pub fn bind<T: ToSqlValue>(value: T) -> Self {
        let value = value.to_sql_value();
        Self {
            data_type: value.data_type(),
            value,
            inline: false,
        }
    }

    /// Creates a value that is always rendered as a literal.
    #[must_use]
    pub fn inline<T: ToSqlValue>(value: T) -> Self {
        Self {
            inline: true,
            ..Self::bind(value)
        }
    }

    /// Creates a typed `NULL`.
    #[must_use]
    pub const fn null(data_type: DataType) -> Self {
        Self {
            value: SqlValue::Null,
            data_type,
            inline: false,
        }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &SqlValue {
        &self.value
    }

    /// Returns the type of the value.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns true if the value is rendered as a literal.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.inline
    }
}

/// Built-in functions the engine itself emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Length of a character string in characters.
    CharLength,
    /// Length of a binary string in bytes.
    OctetLength,
    /// `SUBSTRING(s, start [, length])`, 1-based.
    Substring,
    /// Character string concatenation.
    Concat,
    /// Binary string concatenation.
    BinaryConcat,
    /// `INSERT(s, start, length, replacement)`.
    Insert,
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    builtin: Builtin,
    args: Vec<Expr>,
}

impl Function {
    /// Creates a function call.
    #[must_use]
    pub const fn new(builtin: Builtin, args: Vec<Expr>) -> Self {
        Self { builtin, args }
    }

    /// Returns the called function.
    #[must_use]
    pub const fn builtin(&self) -> Builtin {
        self.builtin
    }

    /// Returns the arguments.
    #[must_use]
    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    pub(crate) fn replace_arg(&self, index: usize, value: Expr) -> Self {
        let mut args = self.args.clone();
        args[index] = value;
        Self::new(self.builtin, args)
    }
}

/// An arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Arithmetic {
    /// Left operand.
    pub left: Box<Expr>,
    /// Operator.
    pub op: ArithOp,
    /// Right operand.
    pub right: Box<Expr>,
}

/// A scalar comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    /// Left operand.
    pub left: Box<Expr>,
    /// Operator.
    pub op: Comparator,
    /// Right operand.
    pub right: Box<Expr>,
}

/// A conjunction or disjunction of two conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Logical {
    /// Left operand.
    pub left: Box<Expr>,
    /// Connective.
    pub op: LogicalOp,
    /// Right operand.
    pub right: Box<Expr>,
}

/// An SQL expression.
///
/// Trees are immutable values. Each node owns its operands; changing an
/// operand always builds a new node (see [`QueryPart`](super::QueryPart)).
/// Equality is structural: nodes of different kinds are never equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column reference.
    Column(Column),
    /// A bind value or literal.
    Value(Value),
    /// A built-in function call.
    Function(Function),
    /// `left + right` or `left - right`.
    Arithmetic(Arithmetic),
    /// A scalar comparison.
    Compare(Compare),
    /// `AND` / `OR`.
    Logical(Logical),
    /// `NOT condition`.
    Not(Box<Expr>),
    /// A row value `(a, b, ...)`.
    Row(Row),
    /// `OVERLAY(... PLACING ... FROM ... [FOR ...])`.
    Overlay(Overlay),
    /// A row value comparison.
    RowCompare(RowCompare),
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: &str) -> Self {
        Self::Column(col(name))
    }

    /// Creates a bind value.
    #[must_use]
    pub fn value<T: ToSqlValue>(value: T) -> Self {
        Self::Value(Value::bind(value))
    }

    /// Creates an inline literal.
    #[must_use]
    pub fn inline<T: ToSqlValue>(value: T) -> Self {
        Self::Value(Value::inline(value))
    }

    /// Creates a typed `NULL`.
    #[must_use]
    pub const fn null(data_type: DataType) -> Self {
        Self::Value(Value::null(data_type))
    }

    /// Creates a function call.
    #[must_use]
    pub const fn function(builtin: Builtin, args: Vec<Self>) -> Self {
        Self::Function(Function::new(builtin, args))
    }

    /// Creates an arithmetic expression.
    #[must_use]
    pub fn arithmetic(self, op: ArithOp, right: Self) -> Self {
        Self::Arithmetic(Arithmetic {
            left: Box::new(self),
            op,
            right: Box::new(right),
        })
    }

    /// Creates an addition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, right: Self) -> Self {
        self.arithmetic(ArithOp::Add, right)
    }

    /// Creates a subtraction.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, right: Self) -> Self {
        self.arithmetic(ArithOp::Sub, right)
    }

    /// Creates a comparison.
    #[must_use]
    pub fn compare(self, op: Comparator, right: Self) -> Self {
        Self::Compare(Compare {
            left: Box::new(self),
            op,
            right: Box::new(right),
        })
    }

    /// Creates an equality comparison.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn eq(self, right: Self) -> Self {
        self.compare(Comparator::Eq, right)
    }

    /// Creates a logical expression.
    #[must_use]
    pub fn logical(self, op: LogicalOp, right: Self) -> Self {
        Self::Logical(Logical {
            left: Box::new(self),
            op,
            right: Box::new(right),
        })
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.logical(LogicalOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.logical(LogicalOp::Or, right)
    }

    /// Negates the expression with NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Returns the type the expression evaluates to.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Column(c) => c.data_type,
            Self::Value(v) => v.data_type(),
            Self::Function(f) => match f.builtin() {
                Builtin::CharLength | Builtin::OctetLength => DataType::Integer,
                _ => f
                    .args()
                    .first()
                    .map_or(DataType::Unknown, Self::data_type),
            },
            Self::Arithmetic(a) => a.left.data_type().or(a.right.data_type()),
            Self::Compare(_) | Self::Logical(_) | Self::Not(_) | Self::RowCompare(_) => {
                DataType::Boolean
            }
            Self::Row(r) => DataType::Row(r.degree()),
            Self::Overlay(o) => o.data_type(),
        }
    }

    /// Gives an untyped value the type `data_type`. Anything else is
    /// returned unchanged.
    #[must_use]
    pub(crate) fn retyped(self, data_type: DataType) -> Self {
        match self {
            Self::Value(v) if v.data_type.is_unknown() => Self::Value(Value { data_type, ..v }),
            other => other,
        }
    }

    /// Converts a value to `target`, the type of the field it is compared
    /// with. `NULL`s and values of the same family take `target`. A value of
    /// another family is returned as `Err` with its own type. Expressions
    /// other than values, and values matched against an unknown type, are
    /// returned unchanged.
    pub(crate) fn conformed(self, target: DataType) -> Result<Self, DataType> {
        match self {
            Self::Value(v) if !target.is_unknown() => {
                if v.value.is_null() || v.data_type.converts_to(&target) {
                    Ok(Self::Value(Value {
                        data_type: target,
                        ..v
                    }))
                } else {
                    Err(v.data_type)
                }
            }
            other => Ok(other),
        }
    }

    /// Views the expression as an OVERLAY node.
    #[must_use]
    pub const fn as_overlay(&self) -> Option<&Overlay> {
        match self {
            Self::Overlay(o) => Some(o),
            _ => None,
        }
    }

    /// Views the expression as a row comparison.
    #[must_use]
    pub const fn as_row_compare(&self) -> Option<&RowCompare> {
        match self {
            Self::RowCompare(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the fields of a row, or the expression itself as a row of
    /// degree one.
    #[must_use]
    pub fn row_fields(&self) -> &[Self] {
        match self {
            Self::Row(r) => r.fields(),
            other => core::slice::from_ref(other),
        }
    }
}

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Row> for Expr {
    fn from(row: Row) -> Self {
        Self::Row(row)
    }
}

impl From<Overlay> for Expr {
    fn from(overlay: Overlay) -> Self {
        Self::Overlay(overlay)
    }
}

impl From<RowCompare> for Expr {
    fn from(compare: RowCompare) -> Self {
        Self::RowCompare(compare)
    }
}
