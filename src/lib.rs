//! Spotify Album Screen Library
//!
//! This library implements the album screen of a Spotify front end: it resolves
//! an album from the current route, loads the album banner and its track listing
//! page by page, and starts playback of the album or of a single track inside it.
//!
//! # Modules
//!
//! - `cli` - Command-line front end rendering the album screen in a terminal
//! - `config` - Configuration management and environment variables
//! - `context` - Collaborators injected into the loader (session, navigation, notifications)
//! - `error` - Error type for requests against the Spotify Web API
//! - `loader` - The incremental album loader driving the screen
//! - `management` - Cached session token handling
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sporlalbum::{config, context::Location};
//!
//! #[tokio::main]
//! async fn main() -> sporlalbum::Res<()> {
//!     config::load_env().await?;
//!     let location = Location::parse("/album/4aawyAB9vmqN3uQ7FjRGTy");
//!     // hand the location to an AlbumLoader built with a session, a notifier and a message sink
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command-line glue where any error simply ends up in front of
/// the user. Keeps `Send + Sync` so it can cross task boundaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading album {}", album_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playback started");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for failures the front end cannot recover from, such as a missing
/// session token. Errors raised while the screen is live go through the
/// message sink instead.
///
/// # Example
///
/// ```
/// error!("No session token available");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Cached token expired at {}", expiry);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
