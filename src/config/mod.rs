//! Runtime configuration and persisted-store locations

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Deployment environment, following the NODE_ENV convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl RunEnv {
    /// Production is the only environment that terminates TLS, so it alone
    /// turns on the Secure cookie flag.
    pub fn is_production(self) -> bool {
        self == RunEnv::Production
    }
}

impl FromStr for RunEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(RunEnv::Development),
            "production" => Ok(RunEnv::Production),
            "test" => Ok(RunEnv::Test),
            other => bail!("unknown environment '{}' (expected development, production or test)", other),
        }
    }
}

/// Application configuration read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the relay service listens on (PORT, default 3000)
    pub port: u16,
    /// Deployment environment (APP_ENV, falling back to NODE_ENV)
    pub env: RunEnv,
    /// Whether client-side errors get reported (ERROR_TRACKING_ENABLED)
    pub error_tracking_enabled: bool,
    /// Base URL client subcommands talk to (GIGDESK_API_URL)
    pub api_base_url: String,
}

impl Config {
    /// Read configuration from environment variables, applying defaults.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid PORT value '{}'", value))?,
            Err(_) => {
                tracing::debug!("PORT not set, using default 3000");
                3000
            }
        };

        // APP_ENV wins; NODE_ENV is honored for parity with Node deployments.
        let env_name = env::var("APP_ENV").or_else(|_| env::var("NODE_ENV")).ok();
        let run_env = match env_name {
            Some(value) => value
                .parse()
                .with_context(|| "invalid APP_ENV/NODE_ENV value")?,
            None => RunEnv::Development,
        };

        let error_tracking_enabled = env::var("ERROR_TRACKING_ENABLED")
            .map(|v| v == "true")
            .unwrap_or(false);

        let api_base_url = env::var("GIGDESK_API_URL")
            .unwrap_or_else(|_| format!("http://127.0.0.1:{}", port));

        Ok(Self {
            port,
            env: run_env,
            error_tracking_enabled,
            api_base_url,
        })
    }
}

/// Per-user directory for persisted client stores
pub fn store_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "gigdesk", "gigdesk")
        .context("Could not determine config directory")?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Path of a named persisted store (`<config dir>/<name>.toml`)
pub fn store_path(name: &str) -> Result<PathBuf> {
    Ok(store_dir()?.join(format!("{}.toml", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_env_parses_known_values() {
        assert_eq!("development".parse::<RunEnv>().unwrap(), RunEnv::Development);
        assert_eq!("production".parse::<RunEnv>().unwrap(), RunEnv::Production);
        assert_eq!("test".parse::<RunEnv>().unwrap(), RunEnv::Test);
        assert!("staging".parse::<RunEnv>().is_err());
    }

    #[test]
    fn test_only_production_is_secure() {
        assert!(RunEnv::Production.is_production());
        assert!(!RunEnv::Development.is_production());
        assert!(!RunEnv::Test.is_production());
    }

    #[test]
    fn test_store_path_shape() {
        let path = store_path("auth-storage").unwrap();
        assert!(path.ends_with("auth-storage.toml"));
    }
}
