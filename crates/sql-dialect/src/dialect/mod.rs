//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. This module provides
//! the [`Dialect`] trait that captures every divergence a query builder needs,
//! and one zero-sized implementation per engine.

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DialectError;

/// The closed set of supported engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialectKind {
    /// MySQL and MariaDB.
    #[serde(rename = "mysql")]
    MySql,
    /// PostgreSQL.
    #[serde(rename = "postgresql")]
    Postgres,
    /// SQLite.
    #[serde(rename = "sqlite")]
    Sqlite,
}

impl DialectKind {
    /// All supported engines.
    pub const ALL: [Self; 3] = [Self::MySql, Self::Postgres, Self::Sqlite];

    /// Returns the canonical name of the engine.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgresql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Returns the shared, stateless dialect for this engine.
    #[must_use]
    pub const fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::MySql => &MySqlDialect,
            Self::Postgres => &PostgresDialect,
            Self::Sqlite => &SqliteDialect,
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectKind {
    type Err = DialectError;

    /// Parses a canonical engine name. Aliases are not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DialectError::UnknownDialect {
                name: s.to_string(),
            })
    }
}

/// Arguments of an upsert statement.
///
/// `columns` and `values` are paired by position. `values` are SQL
/// fragments (placeholders or literals) and are embedded verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Upsert<'a> {
    /// Target table, optionally schema-qualified.
    pub table: &'a str,
    /// Inserted columns.
    pub columns: &'a [&'a str],
    /// One SQL fragment per inserted column.
    pub values: &'a [&'a str],
    /// Columns forming the unique constraint that detects the conflict.
    pub conflict_columns: &'a [&'a str],
    /// Columns refreshed from the proposed row when the conflict fires.
    pub update_columns: &'a [&'a str],
}

/// Trait for SQL dialect-specific behavior.
///
/// Every method is a pure function of its arguments. Implementations carry
/// no state, so one shared instance per process is enough.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the engine this dialect targets.
    fn kind(&self) -> DialectKind;

    /// Returns the name of the dialect.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns whether the dialect supports a `RETURNING` clause.
    ///
    /// When this is `false`, [`Dialect::returning`] yields an empty string and
    /// callers must fetch generated keys some other way.
    fn supports_returning(&self) -> bool;

    /// Quotes an identifier, quoting each dot-separated segment on its own.
    ///
    /// Quote characters inside a segment are doubled.
    fn quote_identifier(&self, name: &str) -> String;

    /// Returns the bound-parameter token for a 1-based position.
    fn param_placeholder(&self, index: usize) -> String;

    /// Returns `count` comma-separated placeholders starting at `start`.
    ///
    /// Stops early rather than wrapping past `usize::MAX`.
    fn placeholders(&self, start: usize, count: usize) -> String {
        (0..count)
            .map_while(|offset| start.checked_add(offset))
            .map(|index| self.param_placeholder(index))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the `LIMIT`/`OFFSET` clause, or an empty string if neither is set.
    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(limit) = limit {
            parts.push(format!("LIMIT {limit}"));
        }
        if let Some(offset) = offset {
            parts.push(format!("OFFSET {offset}"));
        }
        parts.join(" ")
    }

    /// Returns the `RETURNING` clause for the given columns (`*` when empty).
    fn returning(&self, columns: &[&str]) -> String {
        if !self.supports_returning() {
            return String::new();
        }
        if columns.is_empty() {
            String::from("RETURNING *")
        } else {
            format!("RETURNING {}", columns.join(", "))
        }
    }

    /// Returns the boolean literal as the engine's parser expects it.
    fn format_boolean(&self, value: bool) -> String;

    /// Returns the timestamp text the engine's driver accepts as-is.
    fn format_date(&self, date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }

    /// Returns the canonical serialized form of a JSON value.
    fn format_json(&self, value: &serde_json::Value) -> String {
        value.to_string()
    }

    /// Returns the SQL expression for "now".
    fn current_timestamp(&self) -> &'static str;

    /// Returns the column modifier for auto-increment, empty if
    /// [`Dialect::serial_type`] already covers it.
    fn auto_increment(&self) -> &'static str;

    /// Returns the full column type of an auto-incrementing primary key.
    fn serial_type(&self) -> &'static str;

    /// Concatenates SQL expressions.
    fn concat(&self, parts: &[&str]) -> String {
        parts.join(" || ")
    }

    /// Case-insensitive pattern match.
    ///
    /// Engines without a dedicated operator fall back to `LIKE`; whether that
    /// ignores case then depends on the column's collation.
    fn ilike(&self, column: &str, pattern: &str) -> String {
        format!("{column} LIKE {pattern}")
    }

    /// Extracts the scalar at a dot-delimited `path` from a JSON column.
    ///
    /// Purely numeric segments address array elements.
    fn json_extract(&self, column: &str, path: &str) -> String;

    /// Builds a complete "insert, or update on conflict" statement.
    fn upsert(&self, upsert: &Upsert<'_>) -> String;
}

/// Quotes each dot-separated segment with `quote`, doubling embedded quotes.
pub(crate) fn quote_segments(name: &str, quote: char) -> String {
    let doubled: String = [quote, quote].iter().collect();
    name.split('.')
        .map(|segment| format!("{quote}{}{quote}", segment.replace(quote, &doubled)))
        .collect::<Vec<_>>()
        .join(".")
}

/// Wraps text in a single-quoted SQL string literal.
pub(crate) fn string_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// One step of a JSON path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathSegment<'a> {
    Key(&'a str),
    Index(u64),
}

/// Splits a dot-delimited path into segments, skipping empty ones.
pub(crate) fn path_segments(path: &str) -> Vec<PathSegment<'_>> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.parse::<u64>() {
            Ok(index) => PathSegment::Index(index),
            Err(_) => PathSegment::Key(segment),
        })
        .collect()
}

/// Renders a path in the `$.a.b[0]` syntax shared by MySQL and SQLite.
pub(crate) fn dollar_path(path: &str) -> String {
    let mut out = String::from("$");
    for segment in path_segments(path) {
        match segment {
            PathSegment::Index(index) => out.push_str(&format!("[{index}]")),
            PathSegment::Key(key) if is_bare_key(key) => {
                out.push('.');
                out.push_str(key);
            }
            PathSegment::Key(key) => {
                out.push_str(".\"");
                out.push_str(&key.replace('\\', "\\\\").replace('"', "\\\""));
                out.push('"');
            }
        }
    }
    out
}

fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Renders `INSERT INTO t (cols) VALUES (vals)` with quoted identifiers.
pub(crate) fn insert_head<D: Dialect + ?Sized>(dialect: &D, upsert: &Upsert<'_>) -> String {
    let columns: Vec<String> = upsert
        .columns
        .iter()
        .map(|c| dialect.quote_identifier(c))
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        dialect.quote_identifier(upsert.table),
        columns.join(", "),
        upsert.values.join(", ")
    )
}

/// Renders the `ON CONFLICT (...) DO UPDATE SET c = EXCLUDED.c` form.
pub(crate) fn on_conflict_upsert<D: Dialect + ?Sized>(dialect: &D, upsert: &Upsert<'_>) -> String {
    let mut sql = insert_head(dialect, upsert);
    let targets: Vec<String> = upsert
        .conflict_columns
        .iter()
        .map(|c| dialect.quote_identifier(c))
        .collect();
    sql.push_str(" ON CONFLICT (");
    sql.push_str(&targets.join(", "));
    sql.push(')');

    if upsert.update_columns.is_empty() {
        sql.push_str(" DO NOTHING");
    } else {
        let updates: Vec<String> = upsert
            .update_columns
            .iter()
            .map(|c| {
                let col = dialect.quote_identifier(c);
                format!("{col} = EXCLUDED.{col}")
            })
            .collect();
        sql.push_str(" DO UPDATE SET ");
        sql.push_str(&updates.join(", "));
    }

    tracing::trace!(dialect = dialect.name(), sql = %sql, "built upsert");
    sql
}
