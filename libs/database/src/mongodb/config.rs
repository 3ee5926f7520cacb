#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

const DEFAULT_DATABASE: &str = "default";
const DEFAULT_MAX_POOL: u32 = 100;
const DEFAULT_MIN_POOL: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SELECTION_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a MongoDB deployment.
///
/// Built manually through the constructors, or from environment
/// variables when the `config` feature is on:
///
/// ```ignore
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "items")
///     .with_app_name("item_api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/db][?options]`
    pub url: String,

    /// Database the service operates on
    pub database: String,

    /// Name reported to the server, shows up in its connection logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Config pointing at `url` with pool and timeout defaults.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: DEFAULT_MAX_POOL,
            min_pool_size: DEFAULT_MIN_POOL,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout_secs: DEFAULT_SELECTION_TIMEOUT_SECS,
        }
    }

    /// [`MongoConfig::new`] with an explicit database name.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(url)
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Environment variables, with `MONGO_`-prefixed aliases for the two
/// required ones:
/// - `MONGODB_URL` | `MONGO_URL` (required)
/// - `MONGODB_DATABASE` | `MONGO_DATABASE` (required)
/// - `MONGODB_APP_NAME`
/// - `MONGODB_MAX_POOL_SIZE` (default 100), `MONGODB_MIN_POOL_SIZE` (default 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default 10),
///   `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = either_var("MONGODB_URL", "MONGO_URL")?;
        let database = either_var("MONGODB_DATABASE", "MONGO_DATABASE")?;

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: parsed_var("MONGODB_MAX_POOL_SIZE", DEFAULT_MAX_POOL)?,
            min_pool_size: parsed_var("MONGODB_MIN_POOL_SIZE", DEFAULT_MIN_POOL)?,
            connect_timeout_secs: parsed_var(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            server_selection_timeout_secs: parsed_var(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                DEFAULT_SELECTION_TIMEOUT_SECS,
            )?,
        })
    }
}

#[cfg(feature = "config")]
fn either_var(key: &str, alias: &str) -> Result<String, ConfigError> {
    std::env::var(key)
        .or_else(|_| std::env::var(alias))
        .map_err(|_| ConfigError::MissingEnvVar(format!("{} or {}", key, alias)))
}

#[cfg(feature = "config")]
fn parsed_var<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        }),
    }
}
