use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Config,
    context::Location,
    info,
    loader::AlbumLoader,
    types::AlbumView,
    utils, warning,
};

use super::{ConsoleMessages, ConsoleNotifier, session};

/// How many pages `album` shows when neither `--pages` nor `--all` is given.
pub const DEFAULT_PAGES: u32 = 1;

pub async fn album(
    route: String,
    highlight: Option<String>,
    pages: Option<u32>,
    all: bool,
    token: Option<String>,
) {
    let location = Location::parse(&route).with_highlight(highlight);
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

    let mut view = loader.view().await;
    if !view.is_playable() {
        return;
    }

    let wanted = if all {
        u32::MAX
    } else {
        pages.unwrap_or(DEFAULT_PAGES).max(1)
    };
    let mut loaded = 1;

    while view.has_more && loaded < wanted {
        let pb = spinner("Loading more tracks...");
        let before = view.tracks.len();
        loader.load_next_page().await;
        loader.settled().await;
        pb.finish_and_clear();

        view = loader.view().await;
        if view.tracks.len() == before {
            // the failed page was reported already, stop instead of hammering the API
            break;
        }
        loaded += 1;
    }

    render(&view);

    if view.has_more {
        info!("More tracks available, use --pages or --all to load them");
    }
}

/// Albums cannot be followed through the API.
pub async fn follow(route: String) {
    if Location::parse(&route).album_id().is_none() {
        warning!("No album id found in '{}'", route);
        return;
    }

    let loader = AlbumLoader::new(
        &Config::from_env(),
        Arc::new(crate::context::StaticToken(String::new())),
        Arc::new(ConsoleNotifier),
        Arc::new(ConsoleMessages),
    );
    loader.follow();
}

fn render(view: &AlbumView) {
    let summary = &view.summary;
    println!("{}", utils::banner_line(summary));
    if !summary.description.is_empty() {
        println!("{}", summary.description);
    }
    println!("{}\n", summary.resource_uri);

    if view.tracks.is_empty() {
        return;
    }

    let rows = utils::build_track_rows(&view.tracks, view.highlight.as_deref());
    println!("{}", Table::new(rows));
}

pub(super) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
