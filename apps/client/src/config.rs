use anyhow::{Context, Result};

use crate::session::Role;

/// Application configuration loaded from environment variables.
/// Startup fails with a contextual error if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub auth_token: String,
    pub user_role: Role,
    pub request_timeout_secs: u64,
    pub upload_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let role_raw = require_env("USER_ROLE")?;
        let user_role = Role::parse(&role_raw)
            .with_context(|| format!("USER_ROLE must be 'candidate' or 'employer', got '{role_raw}'"))?;

        Ok(Config {
            api_base_url: require_env("API_BASE_URL")?,
            auth_token: require_env("AUTH_TOKEN")?,
            user_role,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "15")?
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            upload_timeout_secs: env_or("UPLOAD_TIMEOUT_SECS", "60")?
                .parse::<u64>()
                .context("UPLOAD_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: env_or("RUST_LOG", "info")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> Result<String> {
    Ok(std::env::var(key).unwrap_or_else(|_| default.to_string()))
}
