use std::sync::Arc;

use crate::{
    config::Config, context::Location, loader::AlbumLoader, utils, warning,
};

use super::{ConsoleMessages, ConsoleNotifier, album::spinner, session};

pub async fn play(route: String, track: Option<String>, token: Option<String>) {
    let location = Location::parse(&route);
    if location.album_id().is_none() {
        warning!("No album id found in '{}'", route);
        return;
    }

    let mut loader = AlbumLoader::new(
        &Config::from_env(),
        session(token).await,
        Arc::new(ConsoleNotifier),
        Arc::new(ConsoleMessages),
    );

    let pb = spinner("Loading album...");
    loader.navigate(location).await;
    loader.settled().await;
    pb.finish_and_clear();

    if !loader.view().await.is_playable() {
        return;
    }

    match track {
        Some(track) => loader.play_track(&utils::track_uri(&track)).await,
        None => loader.play_album().await,
    };
}
