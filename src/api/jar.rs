//! On-disk cookie jar for the CLI client
//!
//! The browser keeps the relay's httpOnly cookies for the web client; the
//! CLI keeps them here. Values are stored exactly as the relay set them
//! and replayed raw in the Cookie header.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct CookieJar {
    path: Option<PathBuf>,
    cookies: BTreeMap<String, String>,
}

impl CookieJar {
    /// Jar that lives only for this process.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load a jar from disk, starting empty if the file does not exist.
    pub fn load(path: PathBuf) -> Result<Self> {
        let cookies = if path.exists() {
            let content = fs::read_to_string(&path).context("Failed to read cookie jar")?;
            toml::from_str(&content).context("Failed to parse cookie jar")?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path: Some(path), cookies })
    }

    /// Write the jar back to its file, if it has one.
    pub fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create cookie jar directory")?;
        }

        let content = toml::to_string_pretty(&self.cookies).context("Failed to serialize cookie jar")?;
        fs::write(path, content).context("Failed to write cookie jar")?;

        // The jar holds token values, keep it private
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, perms).context("Failed to set cookie jar permissions")?;
        }

        Ok(())
    }

    /// Record one Set-Cookie header value. `Max-Age=0` deletes the cookie.
    pub fn apply_set_cookie(&mut self, header: &str) {
        let mut parts = header.split(';');

        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        let expired = parts.any(|attr| attr.trim().eq_ignore_ascii_case("max-age=0"));
        if expired {
            self.cookies.remove(name);
        } else {
            self.cookies.insert(name.to_string(), value.trim().to_string());
        }
    }

    /// Cookie request header replaying everything stored, if anything is.
    pub fn header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }

        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        Some(pairs.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cookie_stores_raw_value() {
        let mut jar = CookieJar::in_memory();
        jar.apply_set_cookie("auth-token=tok-abc%20def; Max-Age=604800; Path=/; HttpOnly");
        assert_eq!(jar.header().unwrap(), "auth-token=tok-abc%20def");
    }

    #[test]
    fn test_max_age_zero_deletes() {
        let mut jar = CookieJar::in_memory();
        jar.apply_set_cookie("auth-token=abc; Max-Age=604800; Path=/");
        jar.apply_set_cookie("refresh-token=def; Max-Age=2592000; Path=/");
        jar.apply_set_cookie("auth-token=; Max-Age=0; Path=/; HttpOnly");

        assert_eq!(jar.header().unwrap(), "refresh-token=def");
    }

    #[test]
    fn test_empty_jar_has_no_header() {
        assert!(CookieJar::in_memory().header().is_none());
    }

    #[test]
    fn test_malformed_set_cookie_ignored() {
        let mut jar = CookieJar::in_memory();
        jar.apply_set_cookie("no-equals-sign-here");
        jar.apply_set_cookie("=value-without-name; Path=/");
        assert!(jar.header().is_none());
    }
}
