//! Service configuration read from the environment

use crate::error::{Error, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Interface to bind (`SERVICE_HOST`)
    pub host: String,

    /// Listen port (`SERVICE_PORT`)
    pub port: u16,

    /// Single allowed browser origin (`CORS_ALLOWED_ORIGIN`); any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origin: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("SERVICE_PORT={raw}: {e}")))?,
            None => DEFAULT_PORT,
        };
        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.is_empty());

        Ok(Self {
            host,
            port,
            cors_allowed_origin,
        })
    }
}
