//! Dialect configuration.
//!
//! [`DialectConfig`] is meant to be embedded in an application's own
//! settings. An explicit `dialect` always wins and is resolved strictly; a
//! `driver` name is only sniffed when no dialect was named.

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::Result;
use crate::resolver::{detect, resolve, DEFAULT_DIALECT};

/// How to pick the dialect for a database connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Canonical engine name (`mysql`, `postgresql` or `sqlite`).
    pub dialect: Option<String>,
    /// Driver or adapter name to sniff, e.g. `mysql2` or `pg-pool`.
    pub driver: Option<String>,
}

impl DialectConfig {
    /// Creates an empty configuration, which resolves to the default dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dialect: None,
            driver: None,
        }
    }

    /// Sets the explicit dialect name.
    #[must_use]
    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }

    /// Sets the driver name to sniff.
    #[must_use]
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    /// Returns the configured dialect.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownDialect`](crate::DialectError::UnknownDialect)
    /// if `dialect` is set to an unsupported name. A `driver` that matches no
    /// rule is not an error.
    pub fn resolve(&self) -> Result<&'static dyn Dialect> {
        if let Some(name) = &self.dialect {
            return resolve(name);
        }
        if let Some(driver) = &self.driver {
            return Ok(detect(driver));
        }
        Ok(DEFAULT_DIALECT.dialect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DialectKind;

    #[test]
    fn test_empty_config_uses_default() {
        let dialect = DialectConfig::new().resolve().unwrap();
        assert_eq!(dialect.kind(), DEFAULT_DIALECT);
    }

    #[test]
    fn test_explicit_dialect_wins_over_driver() {
        let config = DialectConfig::new()
            .with_dialect("sqlite")
            .with_driver("mysql2");
        assert_eq!(config.resolve().unwrap().kind(), DialectKind::Sqlite);
    }

    #[test]
    fn test_explicit_dialect_is_strict() {
        let config = DialectConfig::new()
            .with_dialect("oracle")
            .with_driver("pg");
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_driver_is_sniffed() {
        let config = DialectConfig::new().with_driver("mysql2");
        assert_eq!(config.resolve().unwrap().kind(), DialectKind::MySql);

        let config = DialectConfig::new().with_driver("whatever");
        assert_eq!(config.resolve().unwrap().kind(), DialectKind::Postgres);
    }

    #[test]
    fn test_deserialize() {
        let config: DialectConfig =
            serde_json::from_str(r#"{"driver": "better-sqlite3"}"#).unwrap();
        assert_eq!(config.dialect, None);
        assert_eq!(config.resolve().unwrap().kind(), DialectKind::Sqlite);

        let config: DialectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DialectConfig::default());
    }
}
