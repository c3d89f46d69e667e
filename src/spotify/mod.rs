//! # Spotify Integration Module
//!
//! Thin client over the three Spotify Web API endpoints the album screen needs:
//!
//! - `GET /albums/{id}` - album metadata plus the first page of tracks
//! - `GET {tracks.next}` - a follow-up page of tracks, addressed by the opaque
//!   continuation URL of the previous page
//! - `PUT /me/player/play` - start playback of an album context, optionally at
//!   a given track
//!
//! All calls authenticate with a bearer token and report failures as
//! [`LoaderError`]. Nothing here retries: the album screen surfaces the error
//! and leaves retrying to the user.
//!
//! ```text
//! AlbumLoader
//!      ↓
//! SpotifyClient (albums, player)
//!      ↓
//! reqwest
//! ```

pub mod albums;
pub mod player;

use reqwest::Client;

use crate::{config::Config, error::LoaderError};

/// Shared HTTP client bound to one API base URL.
///
/// Cloning is cheap, the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.api_url)
    }
}

fn require_token(token: Option<&str>) -> Result<&str, LoaderError> {
    token
        .filter(|t| !t.is_empty())
        .ok_or(LoaderError::Unauthenticated)
}
