//! # sql-dialect
//!
//! One interface for emitting SQL fragments that differ between MySQL,
//! PostgreSQL and SQLite.
//!
//! A query builder obtains a [`Dialect`] once, either by explicit name or by
//! sniffing a driver identifier, and then asks it for identifiers,
//! placeholders, pagination clauses, literals and whole upsert statements
//! without branching on the engine itself.
//!
//! ## Picking a dialect
//!
//! ```rust
//! use sql_dialect::{detect, resolve, DialectKind};
//!
//! // Strict: unknown names are a configuration error.
//! let pg = resolve("postgresql").unwrap();
//! assert_eq!(pg.kind(), DialectKind::Postgres);
//! assert!(resolve("oracle").is_err());
//!
//! // Permissive: driver names are sniffed, PostgreSQL is the fallback.
//! assert_eq!(detect("mysql2").kind(), DialectKind::MySql);
//! assert_eq!(detect("unknown-driver-xyz").kind(), DialectKind::Postgres);
//! ```
//!
//! ## Generating SQL
//!
//! ```rust
//! use sql_dialect::{DialectKind, Upsert};
//!
//! let sqlite = DialectKind::Sqlite.dialect();
//! assert_eq!(sqlite.quote_identifier("main.users"), "\"main\".\"users\"");
//! assert_eq!(sqlite.param_placeholder(2), "?2");
//! assert_eq!(sqlite.limit_offset(Some(10), Some(20)), "LIMIT 10 OFFSET 20");
//!
//! let sql = sqlite.upsert(&Upsert {
//!     table: "t",
//!     columns: &["id", "v"],
//!     values: &["1", "'x'"],
//!     conflict_columns: &["id"],
//!     update_columns: &["v"],
//! });
//! assert_eq!(
//!     sql,
//!     "INSERT INTO \"t\" (\"id\", \"v\") VALUES (1, 'x') \
//!      ON CONFLICT (\"id\") DO UPDATE SET \"v\" = EXCLUDED.\"v\""
//! );
//! ```
//!
//! ## Safety
//!
//! Fragments passed to [`Dialect::concat`], [`Dialect::ilike`],
//! [`Dialect::json_extract`] and the `values` of [`Upsert`] are embedded
//! verbatim. Bind user input through [`Dialect::param_placeholder`].

pub mod config;
pub mod dialect;
pub mod error;
pub mod resolver;

pub use config::DialectConfig;
pub use dialect::{Dialect, DialectKind, MySqlDialect, PostgresDialect, SqliteDialect, Upsert};
pub use error::{DialectError, Result};
pub use resolver::{detect, detect_kind, resolve, DEFAULT_DIALECT, SNIFF_RULES};
