//! MySQL dialect implementation.
//!
//! Also used for MariaDB, which shares the syntax covered here.

use chrono::{DateTime, Utc};

use super::{dollar_path, insert_head, quote_segments, string_literal, Dialect, DialectKind, Upsert};

/// Largest row count MySQL accepts; stands in for "no limit" before `OFFSET`.
const MAX_LIMIT: u64 = u64::MAX;

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::MySql
    }

    fn supports_returning(&self) -> bool {
        false
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_segments(name, '`')
    }

    fn param_placeholder(&self, _index: usize) -> String {
        String::from("?")
    }

    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        // OFFSET is only valid after LIMIT.
        match (limit, offset) {
            (Some(limit), Some(offset)) => format!("LIMIT {limit} OFFSET {offset}"),
            (Some(limit), None) => format!("LIMIT {limit}"),
            (None, Some(offset)) => format!("LIMIT {MAX_LIMIT} OFFSET {offset}"),
            (None, None) => String::new(),
        }
    }

    fn format_boolean(&self, value: bool) -> String {
        String::from(if value { "1" } else { "0" })
    }

    fn format_date(&self, date: &DateTime<Utc>) -> String {
        date.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn current_timestamp(&self) -> &'static str {
        "NOW()"
    }

    fn auto_increment(&self) -> &'static str {
        "AUTO_INCREMENT"
    }

    fn serial_type(&self) -> &'static str {
        "INT AUTO_INCREMENT PRIMARY KEY"
    }

    fn concat(&self, parts: &[&str]) -> String {
        // `||` is logical OR unless PIPES_AS_CONCAT is set.
        format!("CONCAT({})", parts.join(", "))
    }

    fn json_extract(&self, column: &str, path: &str) -> String {
        format!(
            "JSON_UNQUOTE(JSON_EXTRACT({column}, {}))",
            string_literal(&dollar_path(path))
        )
    }

    fn upsert(&self, upsert: &Upsert<'_>) -> String {
        let mut sql = insert_head(self, upsert);
        sql.push_str(" ON DUPLICATE KEY UPDATE ");

        let updates: Vec<String> = if upsert.update_columns.is_empty() {
            // Keep the existing row untouched.
            upsert
                .conflict_columns
                .first()
                .map(|c| {
                    let col = self.quote_identifier(c);
                    format!("{col} = {col}")
                })
                .into_iter()
                .collect()
        } else {
            upsert
                .update_columns
                .iter()
                .map(|c| {
                    let col = self.quote_identifier(c);
                    format!("{col} = VALUES({col})")
                })
                .collect()
        };
        sql.push_str(&updates.join(", "));

        tracing::trace!(dialect = self.name(), sql = %sql, "built upsert");
        sql
    }
}
