//! Browsing-mode store
//!
//! A UI toggle between client and freelancer context, not a security
//! boundary.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::str::FromStr;

use crate::config;

const STORE_NAME: &str = "mode-storage";

/// Browsing context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Client,
    Freelancer,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Client => Mode::Freelancer,
            Mode::Freelancer => Mode::Client,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Client => write!(f, "client"),
            Mode::Freelancer => write!(f, "freelancer"),
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "client" => Ok(Mode::Client),
            "freelancer" => Ok(Mode::Freelancer),
            other => bail!("unknown mode '{}' (expected client or freelancer)", other),
        }
    }
}

/// Persisted browsing-mode state
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ModeStore {
    pub mode: Mode,
}

impl ModeStore {
    /// Load the persisted mode, defaulting to client.
    pub fn load() -> Result<Self> {
        let path = config::store_path(STORE_NAME)?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).context("Failed to read mode store")?;
        toml::from_str(&content).context("Failed to parse mode store")
    }

    /// Persist the store to disk.
    pub fn save(&self) -> Result<()> {
        let dir = config::store_dir()?;
        fs::create_dir_all(&dir).context("Failed to create config directory")?;

        let path = config::store_path(STORE_NAME)?;
        let content = toml::to_string_pretty(self).context("Failed to serialize mode store")?;
        fs::write(&path, content).context("Failed to write mode store")?;

        Ok(())
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_client() {
        assert_eq!(Mode::default(), Mode::Client);
        assert_eq!(ModeStore::default().mode, Mode::Client);
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        let mut store = ModeStore::default();
        store.toggle();
        assert_eq!(store.mode, Mode::Freelancer);
        store.toggle();
        assert_eq!(store.mode, Mode::Client);
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("client".parse::<Mode>().unwrap(), Mode::Client);
        assert_eq!("freelancer".parse::<Mode>().unwrap(), Mode::Freelancer);
        assert!("admin".parse::<Mode>().is_err());
        assert_eq!(Mode::Freelancer.to_string(), "freelancer");
    }
}
