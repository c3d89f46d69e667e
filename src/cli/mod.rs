//! # CLI Module
//!
//! Terminal front end of the album screen. Each command builds an
//! [`AlbumLoader`](crate::loader::AlbumLoader) with console implementations of
//! its collaborators and drives it the way the graphical screen would:
//!
//! - [`album`] - load an album, print its banner and tracks, page through the rest
//! - [`play`] - start playback of an album or of one of its tracks
//! - [`follow`] - report that albums cannot be followed
//!
//! Messages the loader surfaces are printed with the crate's output macros and
//! a successful play command is confirmed once the player refresh fires.
//!
//! ## Session
//!
//! The bearer token is taken from, in order:
//! 1. the `--token` flag
//! 2. `SPOTIFY_ACCESS_TOKEN`
//! 3. the cached `token.json` in the local data directory
//!
//! Acquiring a token is not part of this tool.

mod album;
mod play;

use std::sync::Arc;

use crate::{
    config,
    context::{MessageSink, PlaybackNotifier, SessionProvider, StaticToken},
    error,
    management::TokenManager,
    success, warning,
};

pub use album::album;
pub use album::follow;
pub use play::play;

/// Prints loader messages to the terminal.
pub struct ConsoleMessages;

impl MessageSink for ConsoleMessages {
    fn message(&self, message: String) {
        warning!("{}", message);
    }
}

/// Confirms playback changes on the terminal.
pub struct ConsoleNotifier;

impl PlaybackNotifier for ConsoleNotifier {
    fn playback_changed(&self) {
        success!("Playback started");
    }
}

/// Resolves the session token, exiting when none is available.
pub async fn session(token: Option<String>) -> Arc<dyn SessionProvider> {
    if let Some(token) = token.or_else(config::spotify_access_token) {
        return Arc::new(StaticToken(token));
    }

    let manager = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "No session token. Set SPOTIFY_ACCESS_TOKEN or pass --token.\n Error: {}",
                e
            );
        }
    };

    Arc::new(manager)
}
