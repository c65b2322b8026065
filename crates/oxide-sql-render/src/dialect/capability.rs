//! Capability registry.
//!
//! For every construct that some dialects cannot express natively, a static
//! table lists the dialects that need an alternate function or a full
//! emulation. Dialects missing from a table render the construct natively.
//! Adding a dialect or a construct only touches this file.

use super::Dialect;

/// Constructs whose rendering depends on dialect support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `OVERLAY(s PLACING r FROM start [FOR length])`.
    Overlay,
    /// Row value `=` and `<>` comparison.
    RowEquality,
    /// Row value `<`, `<=`, `>` and `>=` comparison.
    RowOrdering,
}

impl Construct {
    /// Returns the construct name used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overlay => "OVERLAY",
            Self::RowEquality => "ROW EQUALITY",
            Self::RowOrdering => "ROW ORDERING",
        }
    }
}

/// How a dialect supports a construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Support {
    /// The dialect has native syntax.
    Native,
    /// The dialect has a different native function with equivalent semantics.
    AlternateFunction,
    /// The construct must be rewritten in terms of more primitive constructs.
    EmulationRequired,
}

struct Capability {
    construct: Construct,
    alternate: &'static [Dialect],
    emulated: &'static [Dialect],
}

impl Capability {
    fn support(&self, dialect: Dialect) -> Support {
        if self.alternate.contains(&dialect) {
            Support::AlternateFunction
        } else if self.emulated.contains(&dialect) {
            Support::EmulationRequired
        } else {
            Support::Native
        }
    }
}

static REGISTRY: [Capability; 3] = [
    Capability {
        construct: Construct::Overlay,
        // INSERT(source, start, length, replacement)
        alternate: &[Dialect::H2, Dialect::MariaDb, Dialect::MySql],
        emulated: &[
            Dialect::ClickHouse,
            Dialect::Derby,
            Dialect::DuckDb,
            Dialect::Hsqldb,
            Dialect::Ignite,
            Dialect::Oracle,
            Dialect::Sqlite,
            Dialect::Trino,
        ],
    },
    Capability {
        construct: Construct::RowEquality,
        alternate: &[],
        emulated: &[Dialect::Derby, Dialect::DuckDb, Dialect::Firebird],
    },
    Capability {
        construct: Construct::RowOrdering,
        alternate: &[],
        emulated: &[
            Dialect::Cubrid,
            Dialect::Derby,
            Dialect::Firebird,
            Dialect::Oracle,
        ],
    },
];

/// Dialects that only accept a row on the right-hand side of a comparison
/// when it is wrapped in an extra pair of parentheses: `(a, b) = ((1, 2))`.
static ROW_RHS_PARENTHESES: &[Dialect] = &[Dialect::Oracle];

/// Returns how `dialect` supports `construct`.
#[must_use]
pub fn classify(construct: Construct, dialect: Dialect) -> Support {
    REGISTRY
        .iter()
        .find(|c| c.construct == construct)
        .map_or(Support::Native, |c| c.support(dialect))
}

/// Returns true if native row comparisons need parentheses around the
/// right-hand row.
#[must_use]
pub fn row_rhs_needs_parentheses(dialect: Dialect) -> bool {
    ROW_RHS_PARENTHESES.contains(&dialect)
}
