//! Rendering of the primitive expression nodes.
//!
//! Emulations are built from these nodes, so their output shape is what the
//! rewritten SQL looks like.

use super::{Keyword, Render, RenderContext};
use crate::ast::{Arithmetic, Builtin, Compare, Expr, Function, Logical, LogicalOp, Row};
use crate::dialect::ConcatStyle;
use crate::error::RenderError;

impl Render for Expr {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        match self {
            Self::Column(c) => ctx.identifier(c),
            Self::Value(v) => ctx.value(v),
            Self::Function(f) => f.render(ctx),
            Self::Arithmetic(a) => a.render(ctx),
            Self::Compare(c) => c.render(ctx),
            Self::Logical(l) => l.render(ctx),
            Self::Not(inner) => render_not(inner, ctx),
            Self::Row(r) => r.render(ctx),
            Self::Overlay(o) => o.render(ctx),
            Self::RowCompare(r) => r.render(ctx),
        }
    }
}

fn comma_separated(items: &[Expr], ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            ctx.sql(", ")?;
        }
        ctx.visit(item)?;
    }
    Ok(())
}

impl Render for Function {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        let style = match self.builtin() {
            Builtin::Concat => ctx.dialect().concat_style(),
            Builtin::BinaryConcat => ctx.dialect().binary_concat_style(),
            _ => ConcatStyle::Function,
        };
        if style == ConcatStyle::Operator {
            ctx.sql("(")?;
            for (i, arg) in self.args().iter().enumerate() {
                if i > 0 {
                    ctx.sql(" || ")?;
                }
                ctx.visit(arg)?;
            }
            return ctx.sql(")");
        }
        ctx.function_name(self.builtin())?;
        ctx.sql("(")?;
        comma_separated(self.args(), ctx)?;
        ctx.sql(")")
    }
}

impl Render for Arithmetic {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        ctx.sql("(")?;
        ctx.visit(&self.left)?;
        ctx.sql(" ")?;
        ctx.sql(self.op.as_str())?;
        ctx.sql(" ")?;
        ctx.visit(&self.right)?;
        ctx.sql(")")
    }
}

impl Render for Compare {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        ctx.visit(&self.left)?;
        ctx.sql(" ")?;
        ctx.sql(self.op.as_str())?;
        ctx.sql(" ")?;
        ctx.visit(&self.right)
    }
}

impl Logical {
    /// Collects the operands of a chain of the same connective.
    fn chain<'a>(&'a self, out: &mut Vec<&'a Expr>) {
        for side in [&*self.left, &*self.right] {
            match side {
                Expr::Logical(inner) if inner.op == self.op => inner.chain(out),
                other => out.push(other),
            }
        }
    }
}

impl Render for Logical {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        let keyword = match self.op {
            LogicalOp::And => Keyword::And,
            LogicalOp::Or => Keyword::Or,
        };
        let mut operands = Vec::new();
        self.chain(&mut operands);

        ctx.sql("(")?;
        for (i, operand) in operands.into_iter().enumerate() {
            if i > 0 {
                ctx.sql(" ")?;
                ctx.keyword(keyword)?;
                ctx.sql(" ")?;
            }
            ctx.visit(operand)?;
        }
        ctx.sql(")")
    }
}

fn render_not(inner: &Expr, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
    ctx.keyword(Keyword::Not)?;
    ctx.sql(" ")?;
    // logical chains bring their own parentheses
    if matches!(inner, Expr::Logical(_)) {
        return ctx.visit(inner);
    }
    ctx.sql("(")?;
    ctx.visit(inner)?;
    ctx.sql(")")
}

impl Render for Row {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        ctx.sql("(")?;
        comma_separated(self.fields(), ctx)?;
        ctx.sql(")")
    }
}
