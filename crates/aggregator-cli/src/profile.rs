//! Connection profile stored between invocations.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use aggregator_core::{Credentials, ServerUrl};
use aggregator_http::ClientConfig;

use crate::cli::ConnectionArgs;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored connection settings. The password is deliberately absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Profile {
    /// Overlay the values given on the command line.
    pub fn merged_with(mut self, args: &ConnectionArgs) -> Self {
        if let Some(url) = &args.url {
            self.url = Some(url.clone());
        }
        if let Some(user) = &args.user {
            self.user = Some(user.clone());
        }
        if let Some(refresh_ms) = args.refresh_ms {
            self.refresh_ms = Some(refresh_ms);
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.timeout_secs = Some(timeout_secs);
        }
        self
    }

    /// Build a client configuration, taking the password from `password`.
    pub fn client_config(&self, password: Option<&str>) -> Result<ClientConfig> {
        let Some(url) = &self.url else {
            bail!("No service URL. Pass --url, set AGGREGATOR_URL or run 'aggregator configure'.");
        };
        let Some(user) = &self.user else {
            bail!("No username. Pass --user, set AGGREGATOR_USER or run 'aggregator configure'.");
        };
        let password = password
            .context("No password. Pass --password or set AGGREGATOR_PASSWORD.")?;

        let url = ServerUrl::new(url).context("Invalid service URL")?;
        let mut config = ClientConfig::new(url, Credentials::new(user, password));

        if let Some(refresh_ms) = self.refresh_ms {
            config = config.with_refresh_interval_millis(refresh_ms);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(timeout_secs));
        }

        Ok(config)
    }
}

/// Get the default profile path.
pub fn default_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "aggregator").context("Could not determine config directory")?;

    Ok(dirs.config_dir().join("config.json"))
}

/// Profile path chosen on the command line, or the default one.
pub fn resolve_path(args: &ConnectionArgs) -> Result<PathBuf> {
    match &args.config {
        Some(path) => Ok(path.clone()),
        None => default_path(),
    }
}

/// Load a profile from disk.
pub fn load(path: &Path) -> Result<Option<Profile>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read profile file")?;
    let profile: Profile = serde_json::from_str(&json).context("Invalid profile file")?;
    Ok(Some(profile))
}

/// Save a profile to disk.
pub fn save(path: &Path, profile: &Profile) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, &json).context("Failed to write profile file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

/// Resolve the client configuration from flags, environment and profile.
pub fn client_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    let path = resolve_path(args)?;
    let stored = load(&path)?.unwrap_or_default();
    tracing::debug!(path = %path.display(), "Resolved profile");

    stored
        .merged_with(args)
        .client_config(args.password.as_deref())
}
