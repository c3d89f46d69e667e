//! Collaborators the album loader depends on.
//!
//! The loader never reaches for ambient state: the session token, the current
//! route, the player refresh hook and the message channel are all handed in,
//! which keeps the loader usable from the terminal front end and from tests.

use std::sync::Mutex;

use reqwest::Url;
use tokio::sync::mpsc::UnboundedSender;

/// Supplies the bearer token for API requests.
pub trait SessionProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Invoked once playback has changed so dependent views can refresh.
pub trait PlaybackNotifier: Send + Sync {
    fn playback_changed(&self);
}

/// Channel for user-facing error and info messages.
pub trait MessageSink: Send + Sync {
    fn message(&self, message: String);
}

/// A fixed token, e.g. from `SPOTIFY_ACCESS_TOKEN` or a command-line flag.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl SessionProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl MessageSink for UnboundedSender<String> {
    fn message(&self, message: String) {
        // a closed receiver means nobody is looking at the screen anymore
        let _ = self.send(message);
    }
}

impl<F> PlaybackNotifier for F
where
    F: Fn() + Send + Sync,
{
    fn playback_changed(&self) {
        self()
    }
}

/// Message sink that remembers every message, for inspection after the fact.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<String>>,
}

impl MessageLog {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl MessageSink for MessageLog {
    fn message(&self, message: String) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message);
        }
    }
}

/// The current navigation location of the album screen.
///
/// Built from a route such as `/album/4aawyAB9vmqN3uQ7FjRGTy?highlight=...`.
/// Bare ids, `spotify:album:` URIs and `open.spotify.com` links are accepted
/// as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    album_id: Option<String>,
    highlight: Option<String>,
}

impl Location {
    pub fn new(album_id: Option<String>, highlight: Option<String>) -> Self {
        Self {
            album_id: album_id.filter(|id| !id.is_empty()),
            highlight: highlight.filter(|h| !h.is_empty()),
        }
    }

    /// Parses a route, URI, URL or bare album id.
    pub fn parse(route: &str) -> Self {
        let route = route.trim();
        // `spotify:album:{id}[?query]` reads like a bare id once the prefix is gone
        let route = route.strip_prefix("spotify:album:").unwrap_or(route);

        let url = if route.contains("://") {
            Url::parse(route)
        } else if route.starts_with('/') {
            Url::parse(&format!("app://local{route}"))
        } else if route.contains('/') {
            Url::parse(&format!("https://{route}"))
        } else if let Some((id, query)) = route.split_once('?') {
            Url::parse(&format!("app://local/album/{id}?{query}"))
        } else {
            return Self::new(Some(route.to_string()), None);
        };

        let Ok(url) = url else {
            return Self::default();
        };

        let highlight = url
            .query_pairs()
            .find(|(key, _)| key == "highlight")
            .map(|(_, value)| value.into_owned());

        let mut segments = url.path_segments().into_iter().flatten();
        let album_id = loop {
            match segments.next() {
                Some("album") => break segments.next().map(str::to_string),
                Some(_) => continue,
                None => break None,
            }
        };

        Self::new(album_id, highlight)
    }

    /// Sets the `highlight` parameter, replacing the one parsed from the route.
    pub fn with_highlight(mut self, highlight: Option<String>) -> Self {
        if highlight.is_some() {
            self.highlight = highlight.filter(|h| !h.is_empty());
        }
        self
    }

    pub fn album_id(&self) -> Option<&str> {
        self.album_id.as_deref()
    }

    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }
}
