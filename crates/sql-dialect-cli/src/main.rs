//! sql-dialect CLI
//!
//! Prints the SQL fragments a dialect generates, without touching a database.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use sql_dialect::{Dialect, DialectConfig, Upsert};

/// Generate engine-specific SQL fragments.
#[derive(Parser)]
#[command(name = "sql-dialect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dialect name: mysql, postgresql or sqlite.
    #[arg(short, long, env = "SQL_DIALECT", global = true)]
    dialect: Option<String>,

    /// Driver or adapter name to detect the dialect from (e.g. mysql2, pg-pool).
    #[arg(long, env = "DATABASE_DRIVER", global = true)]
    driver: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which dialect the options resolve to.
    Detect,

    /// Quote an identifier (schema.table or table.column).
    Quote {
        /// Identifier to quote.
        name: String,
    },

    /// Show parameter placeholders.
    Placeholder {
        /// First 1-based position.
        #[arg(default_value_t = 1)]
        start: usize,

        /// Number of placeholders.
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Build a LIMIT/OFFSET clause.
    Limit {
        /// Maximum number of rows.
        #[arg(short, long)]
        limit: Option<u64>,

        /// Rows to skip.
        #[arg(short, long)]
        offset: Option<u64>,
    },

    /// Build a RETURNING clause.
    Returning {
        /// Columns to return (all if none given).
        columns: Vec<String>,
    },

    /// Format a boolean literal.
    Boolean {
        /// Value to format.
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },

    /// Format a timestamp (RFC 3339, defaults to now).
    Date {
        /// Timestamp to format.
        value: Option<String>,
    },

    /// Canonicalize a JSON document.
    Json {
        /// JSON text.
        value: String,
    },

    /// Show the current-timestamp expression.
    Now,

    /// Show the auto-increment primary key column type and modifier.
    Serial,

    /// Concatenate SQL expressions.
    Concat {
        /// Expressions to concatenate.
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Build a case-insensitive match.
    Ilike {
        /// Column expression.
        column: String,
        /// Pattern expression.
        pattern: String,
    },

    /// Extract a value from a JSON column.
    JsonExtract {
        /// Column expression.
        column: String,
        /// Dot-delimited path.
        path: String,
    },

    /// Build an insert-or-update statement with placeholders for every value.
    Upsert {
        /// Target table.
        #[arg(short, long)]
        table: String,

        /// Inserted columns, comma-separated.
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// Conflict columns, comma-separated.
        #[arg(short = 'k', long, value_delimiter = ',', required = true)]
        conflict: Vec<String>,

        /// Columns to update on conflict, comma-separated (defaults to every
        /// non-conflict column).
        #[arg(short, long, value_delimiter = ',')]
        update: Option<Vec<String>>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = DialectConfig {
        dialect: cli.dialect,
        driver: cli.driver,
    };
    let dialect = config.resolve()?;
    debug!(dialect = dialect.name(), "using dialect");

    println!("{}", render(dialect, cli.command)?);
    Ok(())
}

fn render(dialect: &dyn Dialect, command: Commands) -> anyhow::Result<String> {
    let out = match command {
        Commands::Detect => {
            let returning = if dialect.supports_returning() {
                "supported"
            } else {
                "unsupported"
            };
            format!("{} (RETURNING {returning})", dialect.name())
        }

        Commands::Quote { name } => dialect.quote_identifier(&name),

        Commands::Placeholder { start, count } => dialect.placeholders(start, count),

        Commands::Limit { limit, offset } => dialect.limit_offset(limit, offset),

        Commands::Returning { columns } => {
            if !dialect.supports_returning() {
                anyhow::bail!("{} has no RETURNING clause", dialect.name());
            }
            dialect.returning(&as_strs(&columns))
        }

        Commands::Boolean { value } => dialect.format_boolean(value),

        Commands::Date { value } => {
            let date = match value {
                Some(text) => DateTime::parse_from_rfc3339(&text)
                    .with_context(|| format!("invalid RFC 3339 timestamp: {text}"))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            dialect.format_date(&date)
        }

        Commands::Json { value } => {
            let json: serde_json::Value =
                serde_json::from_str(&value).context("invalid JSON document")?;
            dialect.format_json(&json)
        }

        Commands::Now => dialect.current_timestamp().to_string(),

        Commands::Serial => {
            format!(
                "type: {}\nmodifier: {}",
                dialect.serial_type(),
                dialect.auto_increment()
            )
        }

        Commands::Concat { parts } => dialect.concat(&as_strs(&parts)),

        Commands::Ilike { column, pattern } => dialect.ilike(&column, &pattern),

        Commands::JsonExtract { column, path } => dialect.json_extract(&column, &path),

        Commands::Upsert {
            table,
            columns,
            conflict,
            update,
        } => {
            let update = update.unwrap_or_else(|| {
                columns
                    .iter()
                    .filter(|c| !conflict.contains(*c))
                    .cloned()
                    .collect()
            });
            let values: Vec<String> = (1..=columns.len())
                .map(|i| dialect.param_placeholder(i))
                .collect();
            let columns = as_strs(&columns);
            let values = as_strs(&values);
            let conflict = as_strs(&conflict);
            let update = as_strs(&update);

            dialect.upsert(&Upsert {
                table: &table,
                columns: &columns,
                values: &values,
                conflict_columns: &conflict,
                update_columns: &update,
            })
        }
    };
    Ok(out)
}

fn as_strs(items: &[String]) -> Vec<&str> {
    items.iter().map(String::as_str).collect()
}
