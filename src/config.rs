//! Service configuration from environment variables.
//!
//! All settings live under the `TUREEN_` prefix. The database section carries
//! a backend selector plus one settings block per backend; only the block
//! matching the selector has to be present. The assembled [`Config`] is built
//! once in `main` and passed into the repository factory; there is no
//! process-wide settings singleton.

use std::env;
use thiserror::Error;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default PostgreSQL port.
pub const DEFAULT_PG_PORT: u16 = 5432;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig,
}

/// Backend selector plus per-backend settings blocks.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Backend name: "postgres" or "mongo". Validated by the repository
    /// factory, not here.
    pub backend: String,
    pub postgres: Option<PostgresConfig>,
    pub mongo: Option<MongoConfig>,
}

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `TUREEN_DB_BACKEND`: "postgres" or "mongo"
    ///
    /// Optional:
    /// - `TUREEN_PORT`: HTTP port (default: 3000)
    /// - `TUREEN_PG_HOST`, `TUREEN_PG_PORT`, `TUREEN_PG_USER`,
    ///   `TUREEN_PG_PASSWORD`, `TUREEN_PG_DBNAME`: relational settings block
    /// - `TUREEN_MONGO_URI`, `TUREEN_MONGO_DATABASE`: document settings block
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parsed_or("TUREEN_PORT", DEFAULT_PORT)?,
            database: DatabaseConfig::from_env()?,
        })
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            backend: required("TUREEN_DB_BACKEND")?,
            postgres: PostgresConfig::from_env()?,
            mongo: MongoConfig::from_env()?,
        })
    }
}

impl PostgresConfig {
    /// Present when `TUREEN_PG_HOST` is set; the remaining variables are then
    /// required (port defaults to 5432).
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(host) = env::var("TUREEN_PG_HOST") else {
            return Ok(None);
        };
        Ok(Some(Self {
            host,
            port: parsed_or("TUREEN_PG_PORT", DEFAULT_PG_PORT)?,
            user: required("TUREEN_PG_USER")?,
            password: required("TUREEN_PG_PASSWORD")?,
            dbname: required("TUREEN_PG_DBNAME")?,
        }))
    }

    /// libpq keyword/value connection string, transport encryption disabled.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode=disable",
            self.host, self.port, self.user, self.password, self.dbname
        )
    }
}

impl MongoConfig {
    /// Present when `TUREEN_MONGO_URI` is set; the database name is then
    /// required.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(uri) = env::var("TUREEN_MONGO_URI") else {
            return Ok(None);
        };
        Ok(Some(Self {
            uri,
            database: required("TUREEN_MONGO_DATABASE")?,
        }))
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parsed_or<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => match value.parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::InvalidValue {
                var: var.to_string(),
                value,
            }),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_string_keyword_form() {
        let cfg = PostgresConfig {
            host: "db.internal".to_string(),
            port: 5433,
            user: "tureen".to_string(),
            password: "hunter2".to_string(),
            dbname: "dishes".to_string(),
        };
        assert_eq!(
            cfg.connection_string(),
            "host=db.internal port=5433 user=tureen password=hunter2 dbname=dishes sslmode=disable"
        );
    }

    #[test]
    fn full_environment_parses() {
        env::set_var("TUREEN_PORT", "8080");
        env::set_var("TUREEN_DB_BACKEND", "postgres");
        env::set_var("TUREEN_PG_HOST", "localhost");
        env::set_var("TUREEN_PG_USER", "tureen");
        env::set_var("TUREEN_PG_PASSWORD", "secret");
        env::set_var("TUREEN_PG_DBNAME", "dishes");
        env::set_var("TUREEN_MONGO_URI", "mongodb://localhost:27017");
        env::set_var("TUREEN_MONGO_DATABASE", "tureen");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.backend, "postgres");

        let pg = config.database.postgres.unwrap();
        assert_eq!(pg.port, DEFAULT_PG_PORT);
        assert_eq!(pg.host, "localhost");

        let mongo = config.database.mongo.unwrap();
        assert_eq!(mongo.database, "tureen");
    }
}
