use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_NAMESPACE: &str = "resume_builder";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Which `ResumeStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Application configuration loaded from environment variables.
///
/// `DATABASE_URL` is deliberately not defaulted: a missing value is kept as
/// `None` so startup can log it and keep serving `/api/health`.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    /// Postgres schema holding the `resumes` collection.
    pub db_namespace: String,
    pub storage_backend: StorageBackend,
    pub connect_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_namespace =
            lookup("DB_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        if !is_plain_identifier(&db_namespace) {
            bail!("DB_NAMESPACE '{db_namespace}' must match [A-Za-z_][A-Za-z0-9_]*");
        }

        let storage_backend = match lookup("STORAGE_BACKEND").as_deref() {
            None | Some("postgres") => StorageBackend::Postgres,
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!("STORAGE_BACKEND must be 'postgres' or 'memory', got '{other}'"),
        };

        let connect_timeout_secs = match lookup("STORAGE_CONNECT_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("STORAGE_CONNECT_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_namespace,
            storage_backend,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// The namespace is spliced into DDL, so only bare SQL identifiers pass.
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
