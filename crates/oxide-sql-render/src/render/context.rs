//! The string-building rendering context.

use core::fmt::Write;

use tracing::{trace, warn};

use super::{Keyword, ParamStyle, Render, RenderContext, RenderSettings};
use crate::ast::{Builtin, Column, Expr, QueryPart, Value};
use crate::dialect::Dialect;
use crate::error::RenderError;
use crate::value::SqlValue;

/// Renders into an owned SQL string and collects bind parameters in order.
#[derive(Debug, Clone)]
pub struct SqlRenderer {
    dialect: Dialect,
    settings: RenderSettings,
    sql: String,
    params: Vec<SqlValue>,
    depth: usize,
}

impl SqlRenderer {
    /// Creates a renderer with default settings.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self::with_settings(dialect, RenderSettings::default())
    }

    /// Creates a renderer.
    #[must_use]
    pub const fn with_settings(dialect: Dialect, settings: RenderSettings) -> Self {
        Self {
            dialect,
            settings,
            sql: String::new(),
            params: Vec::new(),
            depth: 0,
        }
    }

    /// Consumes the renderer and returns what was written.
    #[must_use]
    pub fn finish(self) -> Rendered {
        Rendered {
            sql: self.sql,
            params: self.params,
        }
    }
}

impl RenderContext for SqlRenderer {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn visit(&mut self, expr: &Expr) -> Result<(), RenderError> {
        if let Some(limit) = self.settings.max_depth {
            if self.depth >= limit {
                warn!(limit, node = expr.name(), "Expression nesting limit reached");
                return Err(RenderError::DepthExceeded { limit });
            }
        }
        self.depth += 1;
        if self.depth > 1 {
            trace!(depth = self.depth, node = expr.name(), "Visiting nested expression");
        }
        let result = expr.render(self);
        self.depth -= 1;
        result
    }

    fn keyword(&mut self, keyword: Keyword) -> Result<(), RenderError> {
        let text = self.settings.keyword_case.apply(keyword.as_str());
        self.sql(&text)
    }

    fn sql(&mut self, text: &str) -> Result<(), RenderError> {
        self.sql.write_str(text)?;
        Ok(())
    }

    fn function_name(&mut self, builtin: Builtin) -> Result<(), RenderError> {
        let name = self
            .settings
            .keyword_case
            .apply(self.dialect.function_name(builtin));
        self.sql(&name)
    }

    fn identifier(&mut self, column: &Column) -> Result<(), RenderError> {
        let quote = |name: &str| {
            if self.settings.quote_identifiers {
                self.dialect.quote_identifier(name)
            } else {
                String::from(name)
            }
        };
        let text = match &column.table {
            Some(table) => format!("{}.{}", quote(table), quote(&column.name)),
            None => quote(&column.name),
        };
        self.sql(&text)
    }

    fn value(&mut self, value: &Value) -> Result<(), RenderError> {
        if value.is_inline() || self.settings.param_style == ParamStyle::Inline {
            let literal = value.value().to_sql_inline(self.dialect);
            return self.sql(&literal);
        }
        self.params.push(value.value().clone());
        let placeholder = match self.settings.param_style {
            ParamStyle::Dialect => self.dialect.placeholder(self.params.len()),
            ParamStyle::Positional | ParamStyle::Inline => String::from("?"),
        };
        self.sql(&placeholder)
    }
}

/// Rendered SQL text with its bind parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    sql: String,
    params: Vec<SqlValue>,
}

impl Rendered {
    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the bind parameters in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Returns the SQL string and parameters.
    #[must_use]
    pub fn build(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}
