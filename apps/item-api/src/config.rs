use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_required, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Default database when MONGODB_DATABASE is not set. The item API owns a
/// single database, so it does not insist on an explicit name.
const DEFAULT_DATABASE: &str = "items";

/// Runtime configuration for the item API, composed from the shared
/// config building blocks.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let mongodb = match MongoConfig::from_env() {
            Ok(config) => config,
            Err(ConfigError::MissingEnvVar(var)) if var.contains("DATABASE") => {
                let url = env_required("MONGODB_URL")
                    .or_else(|_| env_required("MONGO_URL"))?;
                MongoConfig::with_database(url, DEFAULT_DATABASE)
            }
            Err(e) => return Err(e.into()),
        };
        // Announce this binary in MongoDB server logs unless overridden
        let mongodb = match mongodb.app_name {
            Some(_) => mongodb,
            None => mongodb.with_app_name(app.name),
        };

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_defaults_to_items() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", None),
                ("MONGO_DATABASE", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.database(), "items");
            },
        );
    }

    #[test]
    fn test_explicit_database_wins() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("catalog")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.database(), "catalog");
            },
        );
    }

    #[test]
    fn test_mongo_client_announces_binary_name() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_APP_NAME", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.app_name.as_deref(), Some("item_api"));
            },
        );
    }

    #[test]
    fn test_missing_url_is_an_error() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB_DATABASE", None),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
