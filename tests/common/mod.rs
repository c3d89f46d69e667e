#![allow(dead_code)]

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicU16, AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::Deserialize;
use serde_json::{Value, json};

/// Tracks per mock album.
pub const TOTAL_TRACKS: usize = 5;
/// Tracks per page, also the size of the first page embedded in the album.
pub const PAGE_SIZE: usize = 2;
/// Response delay for albums whose id starts with `slow` and for pages of `lazy`.
pub const SLOW: Duration = Duration::from_millis(300);
pub const TOKEN: &str = "test-token";

pub struct MockState {
    pub base_url: String,
    pub album_requests: AtomicUsize,
    pub page_requests: AtomicUsize,
    pub fail_next_pages: AtomicUsize,
    pub play_status: AtomicU16,
    pub play_bodies: Mutex<Vec<Value>>,
}

impl MockState {
    pub fn album_requests(&self) -> usize {
        self.album_requests.load(Ordering::SeqCst)
    }

    pub fn page_requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }

    pub fn play_bodies(&self) -> Vec<Value> {
        self.play_bodies.lock().unwrap().clone()
    }

    pub fn set_play_status(&self, status: u16) {
        self.play_status.store(status, Ordering::SeqCst);
    }

    pub fn fail_next_pages(&self, count: usize) {
        self.fail_next_pages.store(count, Ordering::SeqCst);
    }
}

/// In-process stand-in for the album and player endpoints of the Spotify Web API.
///
/// - `/albums/missing` answers 404
/// - `/albums/slow*` answers after [`SLOW`]
/// - track pages of `/albums/lazy` answer after [`SLOW`]
/// - every other album has [`TOTAL_TRACKS`] tracks with ids `{album}-track-{n}`
pub struct MockSpotify {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockSpotify {
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let state = Arc::new(MockState {
            base_url: base_url.clone(),
            album_requests: AtomicUsize::new(0),
            page_requests: AtomicUsize::new(0),
            fail_next_pages: AtomicUsize::new(0),
            play_status: AtomicU16::new(204),
            play_bodies: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/albums/{id}", get(album))
            .route("/albums/{id}/tracks", get(tracks))
            .route("/me/player/play", put(play))
            .with_state(Arc::clone(&state));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state }
    }
}

pub fn track_id(album_id: &str, n: usize) -> String {
    format!("{album_id}-track-{n}")
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn track_page(base_url: &str, album_id: &str, offset: usize, limit: usize) -> Value {
    let end = (offset + limit).min(TOTAL_TRACKS);
    let items: Vec<Value> = (offset..end)
        .map(|n| {
            json!({
                "id": track_id(album_id, n),
                "name": format!("Track {}", n + 1),
                "uri": format!("spotify:track:{}", track_id(album_id, n)),
                "track_number": n + 1,
                "disc_number": 1,
                "duration_ms": 180_000 + n * 1000,
                "explicit": n == 0,
                "artists": [{ "id": "artist-1", "name": "Test Artist", "uri": "spotify:artist:artist-1" }],
                "preview_url": null,
                "is_local": false
            })
        })
        .collect();

    let next = if end < TOTAL_TRACKS {
        Value::String(format!(
            "{base_url}/albums/{album_id}/tracks?offset={end}&limit={limit}"
        ))
    } else {
        Value::Null
    };

    json!({ "items": items, "next": next, "offset": offset, "limit": limit, "total": TOTAL_TRACKS })
}

async fn album(
    State(mock): State<Arc<MockState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    mock.album_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if id.starts_with("slow") {
        tokio::time::sleep(SLOW).await;
    }
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "status": 404, "message": "Non existing id" } })),
        )
            .into_response();
    }

    Json(json!({
        "album_type": "album",
        "name": format!("Album {id}"),
        "artists": [{ "id": "artist-1", "name": "Test Artist", "uri": "spotify:artist:artist-1" }],
        "images": [{ "url": "https://i.scdn.co/image/cover", "height": 640, "width": 640 }],
        "release_date": "2021-03-05",
        "release_date_precision": "day",
        "uri": format!("spotify:album:{id}"),
        "label": "Test Records",
        "tracks": track_page(&mock.base_url, &id, 0, PAGE_SIZE),
    }))
    .into_response()
}

#[derive(Deserialize)]
struct PageQuery {
    offset: usize,
    limit: usize,
}

async fn tracks(
    State(mock): State<Arc<MockState>>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    mock.page_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if id == "lazy" {
        tokio::time::sleep(SLOW).await;
    }
    let failing = mock
        .fail_next_pages
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok();
    if failing {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    Json(track_page(&mock.base_url, &id, query.offset, query.limit)).into_response()
}

async fn play(
    State(mock): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    mock.play_bodies.lock().unwrap().push(body);
    StatusCode::from_u16(mock.play_status.load(Ordering::SeqCst)).unwrap()
}
