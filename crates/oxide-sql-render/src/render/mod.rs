//! Rendering expression trees to SQL.
//!
//! A [`RenderContext`] is the sink constructs write into. It knows the target
//! dialect, collects SQL text and bind parameters, and renders nested
//! expressions through [`RenderContext::visit`]. Constructs implement
//! [`Render`] and never build SQL strings themselves.
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_render::ast::{Expr, Overlay};
//! use oxide_sql_render::dialect::Dialect;
//! use oxide_sql_render::render::render;
//!
//! let overlay = Overlay::new(Expr::column("name"), Expr::value("XY"), Expr::value(2)).unwrap();
//! let rendered = render(&overlay.into(), Dialect::Postgres).unwrap();
//!
//! assert_eq!(rendered.sql(), "OVERLAY(name PLACING $1 FROM $2)");
//! assert_eq!(rendered.params().len(), 2);
//! ```

mod context;
mod keyword;
mod primitives;
mod settings;

pub use context::{Rendered, SqlRenderer};
pub use keyword::Keyword;
pub use settings::{KeywordCase, ParamStyle, RenderSettings};

use crate::ast::{Builtin, Column, Expr, Value};
use crate::dialect::Dialect;
use crate::error::RenderError;

/// The sink a construct renders into.
pub trait RenderContext {
    /// Returns the target dialect.
    fn dialect(&self) -> Dialect;

    /// Returns the active settings.
    fn settings(&self) -> &RenderSettings;

    /// Renders a nested expression.
    fn visit(&mut self, expr: &Expr) -> Result<(), RenderError>;

    /// Writes a keyword.
    fn keyword(&mut self, keyword: Keyword) -> Result<(), RenderError>;

    /// Writes raw SQL text.
    fn sql(&mut self, text: &str) -> Result<(), RenderError>;

    /// Writes the dialect's name for a built-in function.
    fn function_name(&mut self, builtin: Builtin) -> Result<(), RenderError>;

    /// Writes a column reference.
    fn identifier(&mut self, column: &Column) -> Result<(), RenderError>;

    /// Writes a value, as a bind parameter or as a literal.
    fn value(&mut self, value: &Value) -> Result<(), RenderError>;
}

/// Something that can render itself into a [`RenderContext`].
pub trait Render {
    /// Writes `self` into `ctx`.
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError>;
}

/// Renders an expression for `dialect` with default settings.
///
/// # Errors
///
/// Returns the first error reported by the rendering context.
pub fn render(expr: &Expr, dialect: Dialect) -> Result<Rendered, RenderError> {
    render_with(expr, dialect, &RenderSettings::default())
}

/// Renders an expression for `dialect`.
///
/// # Errors
///
/// Returns [`RenderError::DepthExceeded`] when the tree is nested deeper than
/// `settings.max_depth`, when one is set.
pub fn render_with(
    expr: &Expr,
    dialect: Dialect,
    settings: &RenderSettings,
) -> Result<Rendered, RenderError> {
    let mut renderer = SqlRenderer::with_settings(dialect, settings.clone());
    renderer.visit(expr)?;
    Ok(renderer.finish())
}
