//! # oxide-sql-render
//!
//! A dialect-aware SQL expression compiler.
//!
//! This crate provides:
//! - Immutable expression trees with uniform operand access ([`QueryPart`])
//! - A capability registry recording which dialects need a construct emulated
//! - Rendering of each construct as native SQL, an alternate function, or an
//!   equivalent rewrite built from simpler expressions
//!
//! ## One Tree, Many Dialects
//!
//! ```rust
//! use oxide_sql_render::ast::{Expr, Overlay};
//! use oxide_sql_render::dialect::Dialect;
//! use oxide_sql_render::render::render;
//!
//! let overlay: Expr = Overlay::with_length(
//!     Expr::column("name"),
//!     Expr::inline("XY"),
//!     Expr::inline(2),
//!     Expr::inline(3),
//! )
//! .unwrap()
//! .into();
//!
//! let postgres = render(&overlay, Dialect::Postgres).unwrap();
//! assert_eq!(postgres.sql(), "OVERLAY(name PLACING 'XY' FROM 2 FOR 3)");
//!
//! let mysql = render(&overlay, Dialect::MySql).unwrap();
//! assert_eq!(mysql.sql(), "INSERT(name, 2, 3, 'XY')");
//!
//! let duckdb = render(&overlay, Dialect::DuckDb).unwrap();
//! assert_eq!(
//!     duckdb.sql(),
//!     "CONCAT(CONCAT(SUBSTRING(name, 1, (2 - 1)), 'XY'), SUBSTRING(name, (2 + 3)))"
//! );
//! ```
//!
//! ## Row Comparisons
//!
//! ```rust
//! use oxide_sql_render::ast::{Comparator, Expr, Row};
//! use oxide_sql_render::dialect::Dialect;
//! use oxide_sql_render::render::render;
//!
//! let left = Row::new(vec![Expr::column("year"), Expr::column("month")]).unwrap();
//! let right = Row::new(vec![Expr::value(2024), Expr::value(6)]).unwrap();
//! let cmp: Expr = left.compare(Comparator::Gt, right).unwrap().into();
//!
//! let (sql, params) = render(&cmp, Dialect::Firebird).unwrap().build();
//! assert_eq!(
//!     sql,
//!     "(year >= ? AND (year > ? OR (year = ? AND month > ?)))"
//! );
//! assert_eq!(params.len(), 4);
//! ```

pub mod ast;
pub mod dialect;
pub mod emulate;
pub mod error;
pub mod render;
pub mod value;

pub use ast::{col, Comparator, DataType, Expr, Overlay, QueryPart, Row, RowCompare};
pub use dialect::Dialect;
pub use error::{BuildError, Error, RenderError, Result};
pub use render::{render, render_with, RenderSettings, Rendered};
pub use value::{SqlValue, ToSqlValue};
