use chrono::{Datelike, NaiveDate};

use crate::types::{AlbumSummary, Contributor, Track, TrackTableRow};

/// Whether `track` is the one named by the `highlight` parameter.
///
/// The parameter may carry either the track id or its full URI.
pub fn is_highlighted(track: &Track, highlight: Option<&str>) -> bool {
    match highlight {
        Some(h) if !h.is_empty() => track.id == h || track.uri == h,
        _ => false,
    }
}

/// Formats a duration in milliseconds as `m:ss`, or `h:mm:ss` past an hour.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    let (hours, minutes, seconds) = (total_secs / 3600, (total_secs / 60) % 60, total_secs % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

pub fn join_names(contributors: &[Contributor]) -> String {
    contributors
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Parses the release year of an album.
///
/// Spotify reports release dates as `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
/// depending on how precisely the date is known.
pub fn release_year(release_date: &str) -> Option<i32> {
    let date = release_date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.year())
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d")
                .map(|d| d.year())
                .ok()
        })
        .or_else(|| date.parse::<i32>().ok().filter(|y| *y > 0))
}

/// Builds the track table rows, marking the highlighted track.
///
/// Numbering follows the position in the loaded sequence so appended pages
/// continue where the previous page ended.
pub fn build_track_rows(tracks: &[Track], highlight: Option<&str>) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow {
            marker: if is_highlighted(track, highlight) {
                "▶".to_string()
            } else {
                String::new()
            },
            number: (i + 1) as u32,
            title: if track.explicit {
                format!("{} [E]", track.name)
            } else {
                track.name.clone()
            },
            artists: join_names(&track.artists),
            duration: format_duration(track.duration_ms),
        })
        .collect()
}

/// One-line banner: `ALBUM · Title · Artists · 2021`.
pub fn banner_line(summary: &AlbumSummary) -> String {
    let mut parts = vec![summary.album_type.to_uppercase(), summary.title.clone()];
    let artists = join_names(&summary.contributors);
    if !artists.is_empty() {
        parts.push(artists);
    }
    if let Some(year) = release_year(&summary.release_date) {
        parts.push(year.to_string());
    }
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<String>>()
        .join(" · ")
}

/// Accepts a bare track id as well as a full `spotify:track:` URI.
pub fn track_uri(track: &str) -> String {
    if track.starts_with("spotify:") {
        track.to_string()
    } else {
        format!("spotify:track:{track}")
    }
}
