//! Environment-driven configuration.
//!
//! # Environment Variables
//!
//! - `EMPORIUM_API_URL` - base URL of the rewards API (required)
//! - `EMPORIUM_TOKEN_FILE` - path for the persisted admin token
//!   (default `.emporium-token` in the working directory)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const API_URL_VAR: &str = "EMPORIUM_API_URL";
const TOKEN_FILE_VAR: &str = "EMPORIUM_TOKEN_FILE";
const DEFAULT_TOKEN_FILE: &str = ".emporium-token";

/// Errors that can occur while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Environment variable is set but not a valid URL.
    #[error("Invalid {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the rewards API.
    pub api_url: Url,
    /// Where the admin token is persisted between invocations.
    pub token_file: PathBuf,
}

impl Config {
    /// Load configuration from the environment, honoring a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `EMPORIUM_API_URL` is missing or unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw =
            std::env::var(API_URL_VAR).map_err(|_| ConfigError::MissingEnvVar(API_URL_VAR))?;
        let api_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            var: API_URL_VAR,
            source,
        })?;

        let token_file = std::env::var(TOKEN_FILE_VAR)
            .map_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE), PathBuf::from);

        Ok(Self {
            api_url,
            token_file,
        })
    }
}
