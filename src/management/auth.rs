use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::{config, context::SessionProvider, types::Token, warning};

/// Session provider backed by the cached `token.json`.
///
/// Obtaining or refreshing tokens is left to whatever wrote the cache, this
/// only hands the stored access token to the loader.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(&Self::token_path()).await
    }

    pub async fn load_from(path: &Path) -> Result<Self, String> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        let manager = Self { token };
        if manager.is_expired() {
            warning!(
                "Cached token expired at {}, requests will most likely be rejected",
                manager.expires_at()
            );
        }
        Ok(manager)
    }

    pub fn is_expired(&self) -> bool {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
        now >= self.expiry()
    }

    pub fn expires_at(&self) -> String {
        i64::try_from(self.expiry())
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "an unknown time".to_string())
    }

    // a corrupt cache file must not overflow
    fn expiry(&self) -> u64 {
        self.token.obtained_at.saturating_add(self.token.expires_in)
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }
}

impl SessionProvider for TokenManager {
    fn token(&self) -> Option<String> {
        Some(self.token.access_token.clone()).filter(|t| !t.is_empty())
    }
}
