//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. A [`Dialect`] is
//! a plain identifier; everything that varies per dialect is looked up from
//! it, either here (identifier quoting, placeholders, function names) or in
//! the [`capability`] registry (which constructs need emulation).

pub mod capability;

use core::fmt;

use crate::ast::Builtin;

pub use capability::{classify, row_rhs_needs_parentheses, Construct, Support};

/// Supported target dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// ANSI SQL.
    #[default]
    Generic,
    /// PostgreSQL.
    Postgres,
    /// MySQL.
    MySql,
    /// MariaDB.
    MariaDb,
    /// SQLite.
    Sqlite,
    /// DuckDB.
    DuckDb,
    /// H2.
    H2,
    /// HSQLDB.
    Hsqldb,
    /// Apache Derby.
    Derby,
    /// Firebird.
    Firebird,
    /// CUBRID.
    Cubrid,
    /// ClickHouse.
    ClickHouse,
    /// Trino.
    Trino,
    /// Apache Ignite.
    Ignite,
    /// Oracle.
    Oracle,
}

/// How a dialect concatenates character strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatStyle {
    /// `CONCAT(a, b)`.
    Function,
    /// `a || b`.
    Operator,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Self; 15] = [
        Self::Generic,
        Self::Postgres,
        Self::MySql,
        Self::MariaDb,
        Self::Sqlite,
        Self::DuckDb,
        Self::H2,
        Self::Hsqldb,
        Self::Derby,
        Self::Firebird,
        Self::Cubrid,
        Self::ClickHouse,
        Self::Trino,
        Self::Ignite,
        Self::Oracle,
    ];

    /// Returns the name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::MariaDb => "mariadb",
            Self::Sqlite => "sqlite",
            Self::DuckDb => "duckdb",
            Self::H2 => "h2",
            Self::Hsqldb => "hsqldb",
            Self::Derby => "derby",
            Self::Firebird => "firebird",
            Self::Cubrid => "cubrid",
            Self::ClickHouse => "clickhouse",
            Self::Trino => "trino",
            Self::Ignite => "ignite",
            Self::Oracle => "oracle",
        }
    }

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    #[must_use]
    pub const fn identifier_quote(self) -> char {
        match self {
            Self::MySql | Self::MariaDb | Self::ClickHouse => '`',
            _ => '"',
        }
    }

    /// Quotes an identifier, doubling any embedded quote character.
    #[must_use]
    pub fn quote_identifier(self, name: &str) -> String {
        let quote = self.identifier_quote();
        let escaped = name.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }

    /// Returns the placeholder for the bind parameter at 1-based `index`.
    #[must_use]
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Self::Postgres => format!("${index}"),
            Self::Oracle => format!(":{index}"),
            _ => String::from("?"),
        }
    }

    /// Returns the name this dialect uses for a built-in function.
    #[must_use]
    pub const fn function_name(self, builtin: Builtin) -> &'static str {
        match (builtin, self) {
            (
                Builtin::CharLength,
                Self::Sqlite | Self::DuckDb | Self::Derby | Self::Oracle | Self::Trino,
            ) => "LENGTH",
            (Builtin::CharLength, _) => "CHAR_LENGTH",
            (Builtin::OctetLength, Self::Sqlite) => "LENGTH",
            (Builtin::OctetLength, Self::Oracle) => "LENGTHB",
            (Builtin::OctetLength, _) => "OCTET_LENGTH",
            (Builtin::Substring, Self::Sqlite | Self::Derby | Self::Oracle) => "SUBSTR",
            (Builtin::Substring, _) => "SUBSTRING",
            (Builtin::Concat | Builtin::BinaryConcat, _) => "CONCAT",
            (Builtin::Insert, _) => "INSERT",
        }
    }

    /// Returns how character strings are concatenated.
    #[must_use]
    pub const fn concat_style(self) -> ConcatStyle {
        match self {
            // Derby and Firebird have no CONCAT function, SQLite only since 3.44
            Self::Derby | Self::Firebird | Self::Sqlite => ConcatStyle::Operator,
            _ => ConcatStyle::Function,
        }
    }

    /// Returns how binary strings are concatenated.
    #[must_use]
    pub const fn binary_concat_style(self) -> ConcatStyle {
        match self {
            // `||` is logical OR there
            Self::MySql | Self::MariaDb => ConcatStyle::Function,
            _ => ConcatStyle::Operator,
        }
    }

    /// Returns the inline literal for a boolean.
    #[must_use]
    pub const fn boolean_literal(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Oracle, true) => "1",
            (Self::Oracle, false) => "0",
            (_, true) => "TRUE",
            (_, false) => "FALSE",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
