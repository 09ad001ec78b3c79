//! Tests for by-name resolution, driver sniffing and configuration.

use sql_dialect::{detect, resolve, DialectConfig, DialectError, DialectKind, DEFAULT_DIALECT};

#[test]
fn sniffs_common_driver_names() {
    assert_eq!(detect("pg-pool").kind(), DialectKind::Postgres);
    assert_eq!(detect("mysql2").kind(), DialectKind::MySql);
    assert_eq!(detect("better-sqlite3").kind(), DialectKind::Sqlite);
    assert_eq!(detect("node-postgres").kind(), DialectKind::Postgres);
    assert_eq!(detect("@mariadb/connector").kind(), DialectKind::MySql);
}

#[test]
fn sniffing_ignores_case() {
    assert_eq!(detect("SQLite").kind(), DialectKind::Sqlite);
    assert_eq!(detect("PostgreSQL").kind(), DialectKind::Postgres);
    assert_eq!(detect("MYSQL").kind(), DialectKind::MySql);
}

#[test]
fn unknown_driver_falls_back_without_error() {
    assert_eq!(DEFAULT_DIALECT, DialectKind::Postgres);
    assert_eq!(detect("unknown-driver-xyz").kind(), DialectKind::Postgres);
}

#[test]
fn unknown_name_is_a_configuration_error() {
    for name in ["oracle", "mssql", "postgres", "pg", ""] {
        match resolve(name) {
            Err(DialectError::UnknownDialect { name: got }) => assert_eq!(got, name),
            Ok(dialect) => panic!("'{name}' resolved to {}", dialect.name()),
        }
    }
}

#[test]
fn resolve_returns_matching_variant() {
    for kind in DialectKind::ALL {
        assert_eq!(resolve(kind.name()).unwrap().kind(), kind);
    }
}

#[test]
fn config_from_json() {
    let config: DialectConfig = serde_json::from_str(r#"{"dialect": "mysql"}"#).unwrap();
    assert_eq!(config.resolve().unwrap().kind(), DialectKind::MySql);

    let config: DialectConfig = serde_json::from_str(r#"{"dialect": "db2"}"#).unwrap();
    assert!(matches!(
        config.resolve(),
        Err(DialectError::UnknownDialect { .. })
    ));
}
