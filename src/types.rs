use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Accent shown while no album colour is known.
pub const DEFAULT_ACCENT_COLOR: &str = "#262626";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// A track as delivered by the API.
///
/// Only the fields the screen renders are typed. Everything else is kept in
/// `extra` untouched, the record is never validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub track_number: u32,
    #[serde(default)]
    pub disc_number: u32,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub artists: Vec<Contributor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of an album's track collection. `next` is the continuation cursor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<Track>,
    pub next: Option<String>,
}

/// Response of `GET /albums/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAlbumResponse {
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Contributor>,
    pub primary_color: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub tracks: TrackPage,
}

/// Banner data of the album screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSummary {
    pub album_type: String,
    pub title: String,
    pub description: String,
    pub contributors: Vec<Contributor>,
    pub follower_count: u64,
    pub accent_color: String,
    pub images: Vec<Image>,
    pub release_date: String,
    pub resource_uri: String,
}

impl Default for AlbumSummary {
    fn default() -> Self {
        Self {
            album_type: String::new(),
            title: String::new(),
            description: String::new(),
            contributors: Vec::new(),
            follower_count: 0,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            images: Vec::new(),
            release_date: String::new(),
            resource_uri: String::new(),
        }
    }
}

impl AlbumSummary {
    /// Builds the banner from an album response.
    ///
    /// Albums carry no description or follower count, those keep their empty
    /// defaults, as does the accent when the API sends no colour.
    pub fn from_response(album: &GetAlbumResponse) -> Self {
        let defaults = Self::default();
        Self {
            album_type: album.album_type.clone(),
            title: album.name.clone(),
            contributors: album.artists.clone(),
            accent_color: album
                .primary_color
                .clone()
                .unwrap_or(defaults.accent_color),
            images: album.images.clone(),
            release_date: album.release_date.clone(),
            resource_uri: album.uri.clone(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resource_uri.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Snapshot of everything the album screen renders.
#[derive(Debug, Clone)]
pub struct AlbumView {
    pub album_id: Option<String>,
    pub summary: AlbumSummary,
    pub tracks: Vec<Track>,
    pub has_more: bool,
    pub load_state: LoadState,
    pub highlight: Option<String>,
}

impl AlbumView {
    /// Whether an album finished loading and can be played.
    ///
    /// A failed fetch also ends `Ready`, but with an empty banner.
    pub fn is_playable(&self) -> bool {
        self.load_state == LoadState::Ready && !self.summary.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOffset {
    pub uri: String,
}

/// Body of `PUT /me/player/play`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRequest {
    pub context_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<PlayOffset>,
}

impl PlayRequest {
    pub fn album(context_uri: &str) -> Self {
        Self {
            context_uri: context_uri.to_string(),
            offset: None,
        }
    }

    pub fn track(context_uri: &str, track_uri: &str) -> Self {
        Self {
            context_uri: context_uri.to_string(),
            offset: Some(PlayOffset {
                uri: track_uri.to_string(),
            }),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "")]
    pub marker: String,
    #[tabled(rename = "#")]
    pub number: u32,
    pub title: String,
    pub artists: String,
    pub duration: String,
}
