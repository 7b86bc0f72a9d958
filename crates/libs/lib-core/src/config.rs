//! # Application Configuration
//!
//! Configuration is loaded from environment variables once at startup,
//! validated to fail fast, and then passed explicitly through application
//! state. There is no global config instance.

use lib_utils::envs::{self, get_env, get_env_or, get_env_parse};

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for bearer-token signing and verification
    ///
    /// Must be at least 32 characters long.
    pub jwt_secret: String,

    /// Bearer-token validity period in minutes
    ///
    /// After this period, clients must authenticate again.
    /// Valid range: 1-1440 minutes (one minute to one day).
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = get_env_or("DATABASE_URL", "sqlite:data/credgate.db");

        let jwt_secret =
            get_env("JWT_SECRET").map_err(|_| "JWT_SECRET must be set in environment")?;

        let token_ttl_minutes = match get_env_parse::<i64>("TOKEN_TTL_MINUTES") {
            Ok(minutes) => minutes,
            Err(envs::Error::MissingEnv(_)) => 30,
            Err(e) => return Err(e.to_string()),
        };

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_minutes,
        })
    }

    /// Validate configuration values against security rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if !(1..=1440).contains(&self.token_ttl_minutes) {
            return Err("TOKEN_TTL_MINUTES must be between 1 and 1440 (one day)".to_string());
        }

        Ok(())
    }
}
