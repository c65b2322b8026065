//! Expression tree types.
//!
//! Trees are built once and never mutated; every node implements
//! [`QueryPart`] so generic passes can walk and rebuild them.

mod expression;
mod operator;
mod overlay;
mod query_part;
mod row;
mod types;

pub use expression::{col, Arithmetic, Builtin, Column, Compare, Expr, Function, Logical, Value};
pub use operator::{ArithOp, Comparator, LogicalOp};
pub use overlay::Overlay;
pub use query_part::QueryPart;
pub use row::{Row, RowCompare};
pub use types::DataType;
