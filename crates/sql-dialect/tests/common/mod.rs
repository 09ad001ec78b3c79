#![allow(dead_code)]

use sql_dialect::{Dialect, DialectKind, Upsert};

/// Every supported dialect, in a fixed order.
pub fn all_dialects() -> Vec<&'static dyn Dialect> {
    DialectKind::ALL.iter().map(|kind| kind.dialect()).collect()
}

/// The quote character a dialect wraps identifiers in.
pub fn quote_char(dialect: &dyn Dialect) -> char {
    match dialect.kind() {
        DialectKind::MySql => '`',
        DialectKind::Postgres | DialectKind::Sqlite => '"',
    }
}

/// Reverses `quote_identifier` for a single, unqualified segment.
pub fn unquote(dialect: &dyn Dialect, quoted: &str) -> String {
    let quote = quote_char(dialect);
    let inner = quoted
        .strip_prefix(quote)
        .and_then(|s| s.strip_suffix(quote))
        .unwrap_or_else(|| panic!("not quoted with {quote}: {quoted}"));
    let doubled: String = [quote, quote].iter().collect();
    inner.replace(&doubled, &quote.to_string())
}

/// The upsert used throughout the property tests.
pub fn sample_upsert(dialect: &dyn Dialect) -> String {
    dialect.upsert(&Upsert {
        table: "t",
        columns: &["id", "v"],
        values: &["1", "'x'"],
        conflict_columns: &["id"],
        update_columns: &["v"],
    })
}
