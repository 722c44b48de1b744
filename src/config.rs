// src/config.rs
//
// Runtime configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::db::default_database_path;
use crate::error::{AppError, AppResult};

pub const DB_PATH_VAR: &str = "LOST_FOUND_DB_PATH";
pub const BIND_ADDR_VAR: &str = "LOST_FOUND_BIND_ADDR";
pub const POOL_SIZE_VAR: &str = "LOST_FOUND_POOL_SIZE";
pub const EXPORT_DIR_VAR: &str = "LOST_FOUND_EXPORT_DIR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_POOL_SIZE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub pool_size: u32,
    /// Where saved CSV exports go; defaults to `exports/` beside the database
    pub export_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or blank keys take their default.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = match value(DB_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let bind_addr = value(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("{}: {}", BIND_ADDR_VAR, e)))?;

        let pool_size = match value(POOL_SIZE_VAR) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_POOL_SIZE,
        };

        let export_dir = match value(EXPORT_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => db_path
                .parent()
                .map(|parent| parent.join("exports"))
                .unwrap_or_else(|| PathBuf::from("exports")),
        };

        Ok(Self {
            db_path,
            bind_addr,
            pool_size,
            export_dir,
        })
    }
}

fn parse_pool_size(raw: &str) -> AppResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(AppError::Config(format!("{} must be at least 1", POOL_SIZE_VAR))),
        Ok(size) => Ok(size),
        Err(e) => Err(AppError::Config(format!("{}: {}", POOL_SIZE_VAR, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppResult<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            (DB_PATH_VAR, "/tmp/register.db"),
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (POOL_SIZE_VAR, "4"),
        ])
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/register.db"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.pool_size, 4);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_explicit_export_dir() {
        let config = config_from(&[
            (DB_PATH_VAR, "/srv/register/lost_found.db"),
            (EXPORT_DIR_VAR, "/srv/reports"),
        ])
        .unwrap();

        assert_eq!(config.export_dir, PathBuf::from("/srv/reports"));
    }

    #[test]
    fn test_defaults_for_listener_and_pool() {
        let config = config_from(&[(DB_PATH_VAR, "register.db"), (POOL_SIZE_VAR, " ")]).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let err = config_from(&[(DB_PATH_VAR, "a.db"), (POOL_SIZE_VAR, "lots")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = config_from(&[(DB_PATH_VAR, "a.db"), (POOL_SIZE_VAR, "0")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = config_from(&[(DB_PATH_VAR, "a.db"), (BIND_ADDR_VAR, "localhost")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
