use crate::error::{config::ConfigError, AppError};

const DATABASE_URL: &str = "DATABASE_URL";

pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Values from a `.env` file in the working directory are loaded first if one
    /// exists; variables already set in the process environment take precedence.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: std::env::var(DATABASE_URL)
                .map_err(|_| ConfigError::MissingEnvVar(DATABASE_URL.to_string()))?,
        })
    }
}
