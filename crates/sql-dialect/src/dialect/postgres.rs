//! PostgreSQL dialect implementation.

use super::{
    on_conflict_upsert, path_segments, quote_segments, string_literal, Dialect, DialectKind,
    PathSegment, Upsert,
};

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Postgres
    }

    fn supports_returning(&self) -> bool {
        true
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_segments(name, '"')
    }

    fn param_placeholder(&self, index: usize) -> String {
        format!("${index}")
    }

    fn format_boolean(&self, value: bool) -> String {
        String::from(if value { "TRUE" } else { "FALSE" })
    }

    fn current_timestamp(&self) -> &'static str {
        "NOW()"
    }

    fn auto_increment(&self) -> &'static str {
        // SERIAL carries the sequence
        ""
    }

    fn serial_type(&self) -> &'static str {
        "SERIAL PRIMARY KEY"
    }

    fn ilike(&self, column: &str, pattern: &str) -> String {
        format!("{column} ILIKE {pattern}")
    }

    fn json_extract(&self, column: &str, path: &str) -> String {
        let segments = path_segments(path);
        let Some((last, intermediate)) = segments.split_last() else {
            return String::from(column);
        };

        // `->` keeps jsonb for navigation, `->>` yields text for the last step.
        let mut expr = String::from(column);
        for segment in intermediate {
            expr.push_str("->");
            expr.push_str(&json_key(*segment));
        }
        expr.push_str("->>");
        expr.push_str(&json_key(*last));
        expr
    }

    fn upsert(&self, upsert: &Upsert<'_>) -> String {
        on_conflict_upsert(self, upsert)
    }
}

fn json_key(segment: PathSegment<'_>) -> String {
    match segment {
        PathSegment::Index(index) => index.to_string(),
        PathSegment::Key(key) => string_literal(key),
    }
}
