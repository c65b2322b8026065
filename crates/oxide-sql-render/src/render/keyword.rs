//! Keywords emitted by constructs.

/// SQL keywords a construct may ask the context to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Overlay,
    Placing,
    From,
    For,
    And,
    Or,
    Not,
}

impl Keyword {
    /// Returns the keyword as an upper-case string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overlay => "OVERLAY",
            Self::Placing => "PLACING",
            Self::From => "FROM",
            Self::For => "FOR",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}
