//! # Album Loader
//!
//! Drives the album screen: resolves the album from the current location,
//! fetches its banner and the first page of tracks, appends further pages on
//! demand and starts playback.
//!
//! ## Request lifecycle
//!
//! Every fetch runs as its own tokio task and is represented by a
//! [`RequestHandle`] holding the task and its [`CancellationToken`]. The loader
//! keeps the handle of the current album fetch and of the current page fetch.
//! Navigating to another album, calling [`AlbumLoader::teardown`] or dropping
//! the loader cancels both.
//!
//! Navigation and [`AlbumLoader::teardown`] cancel while holding the state
//! lock, and every completion handler checks its token again after taking the
//! same lock. A response arriving for a superseded request therefore never
//! touches the state. Dropping the loader only takes the lock when it is free;
//! otherwise it cancels without it, since nothing can read the state once the
//! loader is gone.
//!
//! ```text
//!            navigate / on_album_change
//! (none) ───────────────────────────────▶ Loading ──fetch done──▶ Ready
//!                                            │                     │
//!                                 superseded / teardown      load_next_page
//!                                            ▼                     ▼
//!                                        cancelled           append page
//! ```

use std::{sync::Arc, time::Duration};

use reqwest::StatusCode;
use tokio::{sync::Mutex, task::JoinHandle, time::sleep};
use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    context::{Location, MessageSink, PlaybackNotifier, SessionProvider},
    spotify::SpotifyClient,
    types::{AlbumSummary, AlbumView, GetAlbumResponse, LoadState, PlayRequest, Track, TrackPage},
};

/// Shown when albums are asked to be followed, the API has no endpoint for it.
pub const FOLLOW_UNSUPPORTED: &str =
    "Oops looks like the Spotify API does not support following albums";

/// Handle to an in-flight fetch.
#[derive(Debug)]
pub struct RequestHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl RequestHandle {
    /// Cancels the request. Its completion will not be applied.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the request task to end, cancelled or not.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

#[derive(Debug)]
struct AlbumState {
    album_id: Option<String>,
    summary: AlbumSummary,
    tracks: Vec<Track>,
    next: Option<String>,
    load_state: LoadState,
}

impl AlbumState {
    fn new() -> Self {
        Self {
            album_id: None,
            summary: AlbumSummary::default(),
            tracks: Vec::new(),
            next: None,
            load_state: LoadState::Loading,
        }
    }

    fn reset(&mut self, album_id: Option<String>) {
        *self = Self::new();
        self.album_id = album_id;
    }

    fn apply_album(&mut self, album: GetAlbumResponse) {
        self.summary = AlbumSummary::from_response(&album);
        self.tracks = album.tracks.items;
        self.next = album.tracks.next;
        self.load_state = LoadState::Ready;
    }

    fn append_page(&mut self, page: TrackPage) {
        self.tracks.extend(page.items);
        self.next = page.next;
    }
}

/// Incremental loader behind the album screen.
pub struct AlbumLoader {
    client: SpotifyClient,
    session: Arc<dyn SessionProvider>,
    notifier: Arc<dyn PlaybackNotifier>,
    messages: Arc<dyn MessageSink>,
    play_refresh_delay: Duration,
    location: Location,
    navigated: bool,
    state: Arc<Mutex<AlbumState>>,
    album_request: Option<RequestHandle>,
    page_request: Option<RequestHandle>,
}

impl AlbumLoader {
    pub fn new(
        config: &Config,
        session: Arc<dyn SessionProvider>,
        notifier: Arc<dyn PlaybackNotifier>,
        messages: Arc<dyn MessageSink>,
    ) -> Self {
        Self {
            client: SpotifyClient::new(config),
            session,
            notifier,
            messages,
            play_refresh_delay: config.play_refresh_delay,
            location: Location::default(),
            navigated: false,
            state: Arc::new(Mutex::new(AlbumState::new())),
            album_request: None,
            page_request: None,
        }
    }

    /// Moves the screen to `location`.
    ///
    /// The highlight is always taken over. The album is only reloaded when the
    /// resolved id differs from the current one.
    pub async fn navigate(&mut self, location: Location) {
        let changed = !self.navigated || location.album_id() != self.location.album_id();
        let album_id = location.album_id().map(str::to_string);
        self.location = location;
        self.navigated = true;

        if changed {
            self.on_album_change(album_id).await;
        }
    }

    /// The track to emphasize, from the `highlight` query parameter.
    pub fn resolve_highlight(&self) -> Option<&str> {
        self.location.highlight()
    }

    /// Resets the screen for `album_id` and starts fetching it.
    ///
    /// Any request still running for the previous album is cancelled first.
    /// Without an id nothing is fetched and the screen stays in its reset
    /// loading state.
    pub async fn on_album_change(&mut self, album_id: Option<String>) {
        let shared = Arc::clone(&self.state);
        let mut state = shared.lock().await;
        self.cancel_requests();
        state.reset(album_id.clone());

        let Some(album_id) = album_id else {
            return;
        };

        self.album_request = Some(self.spawn_album_fetch(album_id));
    }

    fn spawn_album_fetch(&self, album_id: String) -> RequestHandle {
        let cancel = CancellationToken::new();
        let client = self.client.clone();
        let session = Arc::clone(&self.session);
        let messages = Arc::clone(&self.messages);
        let state = Arc::clone(&self.state);
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let access = session.token();
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = client.get_album(&album_id, access.as_deref()) => result,
            };

            let mut state = state.lock().await;
            if token.is_cancelled() {
                return;
            }

            match result {
                Ok(album) => state.apply_album(album),
                Err(e) => {
                    state.load_state = LoadState::Ready;
                    messages.message(e.user_message());
                }
            }
        });

        RequestHandle { cancel, task }
    }

    /// Fetches the page behind the continuation cursor and appends it.
    ///
    /// Does nothing when the collection is exhausted or a page is already on
    /// its way. Returns whether a fetch was started.
    pub async fn load_next_page(&mut self) -> bool {
        if self
            .page_request
            .as_ref()
            .is_some_and(|request| !request.is_finished())
        {
            return false;
        }

        let next = {
            let state = self.state.lock().await;
            match &state.next {
                Some(next) if state.load_state == LoadState::Ready => next.clone(),
                _ => return false,
            }
        };

        self.page_request = Some(self.spawn_page_fetch(next));
        true
    }

    fn spawn_page_fetch(&self, next: String) -> RequestHandle {
        let cancel = CancellationToken::new();
        let client = self.client.clone();
        let session = Arc::clone(&self.session);
        let messages = Arc::clone(&self.messages);
        let state = Arc::clone(&self.state);
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let access = session.token();
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = client.get_track_page(&next, access.as_deref()) => result,
            };

            let mut state = state.lock().await;
            if token.is_cancelled() || state.next.as_deref() != Some(next.as_str()) {
                return;
            }

            match result {
                Ok(page) => state.append_page(page),
                // cursor stays put so the same page can be requested again
                Err(e) => messages.message(e.user_message()),
            }
        });

        RequestHandle { cancel, task }
    }

    /// Plays the whole album.
    ///
    /// Returns whether the server accepted the command.
    pub async fn play_album(&self) -> bool {
        let Some(context_uri) = self.context_uri().await else {
            return false;
        };
        self.play(PlayRequest::album(&context_uri)).await
    }

    /// Plays the album starting at `track_uri`.
    pub async fn play_track(&self, track_uri: &str) -> bool {
        let Some(context_uri) = self.context_uri().await else {
            return false;
        };
        self.play(PlayRequest::track(&context_uri, track_uri)).await
    }

    async fn context_uri(&self) -> Option<String> {
        let uri = self.state.lock().await.summary.resource_uri.clone();
        if uri.is_empty() {
            self.messages
                .message("ERROR: No album loaded to play".to_string());
            return None;
        }
        Some(uri)
    }

    async fn play(&self, body: PlayRequest) -> bool {
        let access = self.session.token();
        match self.client.play(&body, access.as_deref()).await {
            Ok(StatusCode::NO_CONTENT) => {
                sleep(self.play_refresh_delay).await;
                self.notifier.playback_changed();
                true
            }
            Ok(status) => {
                self.messages.message(format!(
                    "ERROR: Something went wrong! Server response: {}",
                    status.as_u16()
                ));
                false
            }
            Err(e) => {
                self.messages.message(e.user_message());
                false
            }
        }
    }

    /// Albums cannot be followed, the user is told so.
    pub fn follow(&self) {
        self.messages.message(FOLLOW_UNSUPPORTED.to_string());
    }

    /// Snapshot of the screen for rendering.
    pub async fn view(&self) -> AlbumView {
        let state = self.state.lock().await;
        AlbumView {
            album_id: state.album_id.clone(),
            summary: state.summary.clone(),
            tracks: state.tracks.clone(),
            has_more: state.next.is_some(),
            load_state: state.load_state,
            highlight: self.location.highlight().map(str::to_string),
        }
    }

    pub fn has_pending_requests(&self) -> bool {
        [&self.album_request, &self.page_request]
            .into_iter()
            .flatten()
            .any(|request| !request.is_finished())
    }

    /// Waits until the current album and page fetches have ended.
    pub async fn settled(&mut self) {
        if let Some(request) = self.album_request.take() {
            request.join().await;
        }
        if let Some(request) = self.page_request.take() {
            request.join().await;
        }
    }

    /// Cancels everything in flight. The state is left as it is.
    pub async fn teardown(&mut self) {
        let shared = Arc::clone(&self.state);
        let _state = shared.lock().await;
        self.cancel_requests();
    }

    fn cancel_requests(&mut self) {
        if let Some(request) = self.album_request.take() {
            request.cancel();
        }
        if let Some(request) = self.page_request.take() {
            request.cancel();
        }
    }
}

impl Drop for AlbumLoader {
    fn drop(&mut self) {
        let shared = Arc::clone(&self.state);
        let _state = shared.try_lock();
        self.cancel_requests();
    }
}
