//! Error types for expression construction and rendering.

use thiserror::Error;

use crate::ast::DataType;

/// Errors raised while constructing an expression node.
///
/// These are permanent: rebuilding the node from the same operands fails the
/// same way. Rendering never produces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Two rows of different degree were combined.
    #[error("row arity mismatch: left row has {left} fields, right row has {right}")]
    ArityMismatch {
        /// Degree of the left row.
        left: usize,
        /// Degree of the right row.
        right: usize,
    },

    /// A row was built without any field.
    #[error("a row needs at least one field")]
    EmptyRow,

    /// An operand has a type the construct cannot accept.
    #[error("{construct}: operand {operand} must be {expected}, found {found}")]
    TypeConformance {
        /// The construct being built.
        construct: &'static str,
        /// Position of the offending operand.
        operand: usize,
        /// What the construct expects at that position.
        expected: &'static str,
        /// The type that was supplied.
        found: DataType,
    },

    /// An operand position outside the node's arity was addressed.
    #[error("{construct}: operand index {index} is out of range for arity {arity}")]
    OperandIndex {
        /// The construct being addressed.
        construct: &'static str,
        /// The requested position.
        index: usize,
        /// The node's arity.
        arity: usize,
    },

    /// A required operand was replaced with nothing.
    #[error("{construct}: operand {index} is required")]
    MissingOperand {
        /// The construct being rebuilt.
        construct: &'static str,
        /// The operand position.
        index: usize,
    },
}

/// Errors raised by a rendering context.
///
/// Constructs never raise these themselves; they only propagate what the
/// context reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The expression tree is nested deeper than the configured limit.
    #[error("expression nesting exceeds the configured limit of {limit}")]
    DepthExceeded {
        /// The configured `max_depth`.
        limit: usize,
    },

    /// Writing to the output sink failed.
    #[error("failed to write SQL: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Errors raised while loading render settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document could not be parsed.
    #[error("invalid render settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Construction-time failure.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Rendering-time failure.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Configuration failure.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
