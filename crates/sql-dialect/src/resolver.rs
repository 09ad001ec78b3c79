//! Dialect selection.
//!
//! Two entry points with deliberately different failure policies:
//!
//! - [`resolve`] takes one of the canonical engine names and fails on
//!   anything else. It never substitutes a default.
//! - [`detect`] sniffs a free-form driver or adapter name and never fails.
//!   When nothing matches it falls back to [`DEFAULT_DIALECT`].

use tracing::debug;

use crate::dialect::{Dialect, DialectKind};
use crate::error::Result;

/// Engine used by [`detect`] when no rule matches.
pub const DEFAULT_DIALECT: DialectKind = DialectKind::Postgres;

/// Substring rules for [`detect`], evaluated top to bottom.
///
/// `pg` must stay last.
pub const SNIFF_RULES: &[(&str, DialectKind)] = &[
    ("mysql", DialectKind::MySql),
    ("mariadb", DialectKind::MySql),
    ("postgres", DialectKind::Postgres),
    ("sqlite", DialectKind::Sqlite),
    ("pg", DialectKind::Postgres),
];

/// Returns the dialect for a canonical engine name.
///
/// Accepts `mysql`, `postgresql` and `sqlite`, ignoring ASCII case and
/// surrounding whitespace.
///
/// # Errors
///
/// Returns [`DialectError::UnknownDialect`](crate::DialectError::UnknownDialect)
/// for any other name.
pub fn resolve(name: &str) -> Result<&'static dyn Dialect> {
    let kind: DialectKind = name.parse()?;
    debug!(requested = name, dialect = %kind, "resolved SQL dialect by name");
    Ok(kind.dialect())
}

/// Guesses the engine from a driver or adapter name.
#[must_use]
pub fn detect_kind(driver: &str) -> DialectKind {
    let normalized = driver.to_lowercase();
    match SNIFF_RULES
        .iter()
        .find(|(alias, _)| normalized.contains(alias))
    {
        Some((alias, kind)) => {
            debug!(driver, alias, dialect = %kind, "detected SQL dialect");
            *kind
        }
        None => {
            debug!(driver, dialect = %DEFAULT_DIALECT, "no dialect rule matched, using default");
            DEFAULT_DIALECT
        }
    }
}

/// Returns the dialect guessed from a driver or adapter name.
///
/// Never fails: unrecognized names yield [`DEFAULT_DIALECT`].
#[must_use]
pub fn detect(driver: &str) -> &'static dyn Dialect {
    detect_kind(driver).dialect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialectError;

    #[test]
    fn test_resolve_canonical_names() {
        assert_eq!(resolve("mysql").unwrap().kind(), DialectKind::MySql);
        assert_eq!(resolve("postgresql").unwrap().kind(), DialectKind::Postgres);
        assert_eq!(resolve("sqlite").unwrap().kind(), DialectKind::Sqlite);
        assert_eq!(resolve("MySQL").unwrap().kind(), DialectKind::MySql);
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        let err = resolve("oracle").unwrap_err();
        assert_eq!(
            err,
            DialectError::UnknownDialect {
                name: "oracle".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_does_not_sniff() {
        assert!(resolve("pg").is_err());
        assert!(resolve("mariadb").is_err());
        assert!(resolve("better-sqlite3").is_err());
    }

    #[test]
    fn test_detect_aliases() {
        assert_eq!(detect_kind("pg-pool"), DialectKind::Postgres);
        assert_eq!(detect_kind("postgres"), DialectKind::Postgres);
        assert_eq!(detect_kind("mysql2"), DialectKind::MySql);
        assert_eq!(detect_kind("MariaDB-connector"), DialectKind::MySql);
        assert_eq!(detect_kind("better-sqlite3"), DialectKind::Sqlite);
    }

    #[test]
    fn test_detect_falls_back_to_default() {
        assert_eq!(detect_kind("unknown-driver-xyz"), DEFAULT_DIALECT);
        assert_eq!(detect_kind(""), DEFAULT_DIALECT);
        assert_eq!(detect("oracledb").kind(), DialectKind::Postgres);
    }

    #[test]
    fn test_detect_rule_order() {
        // contains both "sqlite" and "pg"
        assert_eq!(detect_kind("pg-sqlite-bridge"), DialectKind::Sqlite);
        // contains both "postgres" and "sqlite"
        assert_eq!(detect_kind("postgres-sqlite-fdw"), DialectKind::Postgres);
        assert_eq!(detect_kind("mysql-to-postgres"), DialectKind::MySql);
    }
}
