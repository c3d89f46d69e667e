use reqwest::StatusCode;

use crate::{error::LoaderError, types::PlayRequest};

use super::{SpotifyClient, require_token};

impl SpotifyClient {
    /// Starts playback on the user's active device.
    ///
    /// Calls `PUT /me/player/play` with the given context (and optional track
    /// offset). The raw status is handed back: Spotify answers `204 No Content`
    /// on success, every other status is for the caller to report.
    ///
    /// # Errors
    ///
    /// Only transport failures and a missing token are errors here.
    pub async fn play(
        &self,
        body: &PlayRequest,
        token: Option<&str>,
    ) -> Result<StatusCode, LoaderError> {
        let token = require_token(token)?;
        let api_url = self.endpoint("/me/player/play");

        let response = self
            .http
            .put(&api_url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(LoaderError::Transport)?;

        Ok(response.status())
    }
}
