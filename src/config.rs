use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The backend base URL is read exactly once at startup and injected into
/// the HTTP client at construction — nothing reads the environment at call
/// time. The .env file is loaded automatically via dotenvy.
pub struct Config {
    /// Base URL of the VerityFlow backend (VERITYFLOW_API_URL).
    /// API routes are mounted under `{api_url}/api`.
    pub api_url: String,
    /// Directory where exported files are written (VERITYFLOW_EXPORT_DIR,
    /// defaults to the current directory).
    pub export_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only export_dir has a default — the backend URL is required for
    /// every command that talks to the network.
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_url: env::var("VERITYFLOW_API_URL").unwrap_or_default(),
            export_dir: env::var("VERITYFLOW_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        })
    }

    /// Check that the backend URL is configured.
    /// Call this before any operation that issues a request.
    pub fn require_backend(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!(
                "VERITYFLOW_API_URL not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
