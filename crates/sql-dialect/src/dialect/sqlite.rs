//! SQLite dialect implementation.

use super::{
    dollar_path, on_conflict_upsert, quote_segments, string_literal, Dialect, DialectKind, Upsert,
};

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Sqlite
    }

    fn supports_returning(&self) -> bool {
        true // SQLite 3.35.0+
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_segments(name, '"') // SQLite also accepts backticks, but double quotes are standard
    }

    fn param_placeholder(&self, index: usize) -> String {
        format!("?{index}")
    }

    fn format_boolean(&self, value: bool) -> String {
        String::from(if value { "1" } else { "0" })
    }

    fn current_timestamp(&self) -> &'static str {
        "CURRENT_TIMESTAMP"
    }

    fn auto_increment(&self) -> &'static str {
        "AUTOINCREMENT"
    }

    fn serial_type(&self) -> &'static str {
        "INTEGER PRIMARY KEY AUTOINCREMENT"
    }

    fn json_extract(&self, column: &str, path: &str) -> String {
        format!("json_extract({column}, {})", string_literal(&dollar_path(path)))
    }

    fn upsert(&self, upsert: &Upsert<'_>) -> String {
        on_conflict_upsert(self, upsert) // SQLite 3.24.0+
    }
}
