//! Rendering strategies for `OVERLAY`.
//!
//! Dialects with an alternate function get
//! `INSERT(source, start, length, replacement)`; dialects without either
//! get a splice built from substring and concatenation:
//!
//! ```text
//! CONCAT(CONCAT(SUBSTRING(source, 1, start - 1), replacement),
//!        SUBSTRING(source, start + length))
//! ```
//!
//! When no length is given, both rewrites replace as many characters as the
//! replacement is long.

use tracing::debug;

use crate::ast::{Builtin, Expr, Overlay};
use crate::dialect::{classify, Construct, Support};
use crate::error::RenderError;
use crate::render::{Keyword, Render, RenderContext};

/// The primitive functions a splice is built from.
struct SpliceFunctions {
    length: Builtin,
    concat: Builtin,
    substring: Builtin,
}

static CHARACTER: SpliceFunctions = SpliceFunctions {
    length: Builtin::CharLength,
    concat: Builtin::Concat,
    substring: Builtin::Substring,
};

static BINARY: SpliceFunctions = SpliceFunctions {
    length: Builtin::OctetLength,
    concat: Builtin::BinaryConcat,
    substring: Builtin::Substring,
};

fn functions(overlay: &Overlay) -> &'static SpliceFunctions {
    if overlay.is_binary() {
        &BINARY
    } else {
        &CHARACTER
    }
}

/// Returns the length operand, defaulting to the length of the replacement.
#[must_use]
pub fn effective_length(overlay: &Overlay) -> Expr {
    overlay.length().cloned().unwrap_or_else(|| {
        Expr::function(
            functions(overlay).length,
            vec![overlay.replacement().clone()],
        )
    })
}

/// Builds `INSERT(source, start, length, replacement)`.
#[must_use]
pub fn alternate_function(overlay: &Overlay) -> Expr {
    Expr::function(
        Builtin::Insert,
        vec![
            overlay.source().clone(),
            overlay.start().clone(),
            effective_length(overlay),
            overlay.replacement().clone(),
        ],
    )
}

/// Builds the substring and concatenation splice.
#[must_use]
pub fn emulate(overlay: &Overlay) -> Expr {
    let f = functions(overlay);
    let source = overlay.source();
    let start = overlay.start();

    let head = Expr::function(
        f.substring,
        vec![
            source.clone(),
            Expr::inline(1),
            start.clone().sub(Expr::inline(1)),
        ],
    );
    let tail = Expr::function(
        f.substring,
        vec![source.clone(), start.clone().add(effective_length(overlay))],
    );
    Expr::function(
        f.concat,
        vec![
            Expr::function(f.concat, vec![head, overlay.replacement().clone()]),
            tail,
        ],
    )
}

/// Returns the rewrite for the given support level, or `None` when the
/// native syntax is used.
#[must_use]
pub fn rewrite(overlay: &Overlay, support: Support) -> Option<Expr> {
    match support {
        Support::Native => None,
        Support::AlternateFunction => Some(alternate_function(overlay)),
        Support::EmulationRequired => Some(emulate(overlay)),
    }
}

fn render_native(overlay: &Overlay, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
    ctx.keyword(Keyword::Overlay)?;
    ctx.sql("(")?;
    ctx.visit(overlay.source())?;
    ctx.sql(" ")?;
    ctx.keyword(Keyword::Placing)?;
    ctx.sql(" ")?;
    ctx.visit(overlay.replacement())?;
    ctx.sql(" ")?;
    ctx.keyword(Keyword::From)?;
    ctx.sql(" ")?;
    ctx.visit(overlay.start())?;
    if let Some(length) = overlay.length() {
        ctx.sql(" ")?;
        ctx.keyword(Keyword::For)?;
        ctx.sql(" ")?;
        ctx.visit(length)?;
    }
    ctx.sql(")")
}

impl Render for Overlay {
    fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        let dialect = ctx.dialect();
        let support = classify(Construct::Overlay, dialect);
        debug!(
            dialect = dialect.name(),
            construct = Construct::Overlay.name(),
            support = ?support,
            "Rendering construct"
        );
        match rewrite(self, support) {
            Some(expr) => ctx.visit(&expr),
            None => render_native(self, ctx),
        }
    }
}
