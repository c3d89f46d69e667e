//! Configuration management for the album screen.
//!
//! Values come from environment variables, optionally seeded from a `.env` file
//! in the local data directory. Every setting has a default so the binary works
//! against the public Spotify API without any configuration beyond a token.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

/// Default Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Delay between a successful play command and the player refresh notification.
pub const DEFAULT_PLAY_REFRESH_DELAY_MS: u64 = 500;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `sporlalbum` data directory if it doesn't exist yet. A missing
/// `.env` file is fine, everything then falls back to the process environment
/// and the defaults.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporlalbum/.env`
/// - macOS: `~/Library/Application Support/sporlalbum/.env`
/// - Windows: `%LOCALAPPDATA%/sporlalbum/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Returns the platform specific data directory of the application.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlalbum");
    path
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to [`DEFAULT_API_URL`]. A trailing
/// slash is stripped so paths can be appended with `format!`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the access token from `SPOTIFY_ACCESS_TOKEN`, if set and non-empty.
pub fn spotify_access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Returns the delay before the player refresh notification.
///
/// Reads `PLAY_REFRESH_DELAY_MS`; unparsable values fall back to the default.
pub fn play_refresh_delay() -> Duration {
    let millis = env::var("PLAY_REFRESH_DELAY_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_PLAY_REFRESH_DELAY_MS);
    Duration::from_millis(millis)
}

/// Settings consumed by the Spotify client and the album loader.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub play_refresh_delay: Duration,
}

impl Config {
    /// Builds the configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            api_url: spotify_apiurl(),
            play_refresh_delay: play_refresh_delay(),
        }
    }

    /// Configuration for an explicit API base URL with default timings.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            play_refresh_delay: Duration::from_millis(DEFAULT_PLAY_REFRESH_DELAY_MS),
        }
    }

    pub fn play_refresh_delay(mut self, delay: Duration) -> Self {
        self.play_refresh_delay = delay;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }
}
