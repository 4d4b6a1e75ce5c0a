use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "beers";

#[derive(Error, Debug)]
#[error("invalid value for {key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend \"{}\"", other))
        }
    }
}

/// Process configuration, read from the environment or a `.env` file.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub store_backend: StoreBackend,
    pub password_hash_cost: u32,
    /// When set, responses carry CORS headers for this origin and preflight
    /// routes are mounted.
    pub frontend_origin: Option<String>
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        let password_hash_cost = parse_var("PASSWORD_HASH_COST", &bcrypt::DEFAULT_COST.to_string())?;
        if !(4..=31).contains(&password_hash_cost) {
            return Err(ConfigError {
                key: "PASSWORD_HASH_COST",
                message: format!("{} is outside 4..=31", password_hash_cost)
            });
        }
        Ok(Config {
            port: parse_var("PORT", DEFAULT_PORT)?,
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            database_name: var_or("DATABASE_NAME", DEFAULT_DATABASE_NAME),
            store_backend: parse_var("STORE_BACKEND", "mongodb")?,
            password_hash_cost,
            frontend_origin: dotenv::var("FRONTEND_ORIGIN").ok().filter(|origin| !origin.trim().is_empty())
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    dotenv::var(key).unwrap_or_else(|_| {
        log::debug!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

fn parse_var<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display
{
    var_or(key, default)
        .trim()
        .parse()
        .map_err(|error: T::Err| ConfigError { key, message: error.to_string() })
}
