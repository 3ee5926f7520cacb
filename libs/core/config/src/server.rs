use std::net::Ipv4Addr;

use crate::{ConfigError, FromEnv, env_or_default};

const DEFAULT_PORT: u16 = 8080;

/// Bind address for the HTTP listener.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// The "host:port" string passed to the TCP listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    /// All interfaces on port 8080.
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), DEFAULT_PORT)
    }
}

impl FromEnv for ServerConfig {
    /// Reads `HOST` and `PORT`, falling back to [`ServerConfig::default`]
    /// for whichever is unset. A `PORT` that is not a valid u16 is an error.
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", &DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self::new(host, port))
    }
}
