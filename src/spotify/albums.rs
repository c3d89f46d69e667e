use crate::{
    error::LoaderError,
    types::{GetAlbumResponse, TrackPage},
};

use super::{SpotifyClient, require_token};

impl SpotifyClient {
    /// Retrieves an album with the first page of its tracks.
    ///
    /// Calls `GET /albums/{id}`. The embedded `tracks.next` URL is the
    /// continuation cursor for [`SpotifyClient::get_track_page`].
    ///
    /// # Errors
    ///
    /// - [`LoaderError::Unauthenticated`] when no token is given
    /// - [`LoaderError::Server`] for any non-success status
    /// - [`LoaderError::Transport`] for network or decoding failures
    ///
    /// # Example
    ///
    /// ```
    /// let album = client.get_album("4aawyAB9vmqN3uQ7FjRGTy", Some(token)).await?;
    /// println!("{} has {} tracks on the first page", album.name, album.tracks.items.len());
    /// ```
    pub async fn get_album(
        &self,
        album_id: &str,
        token: Option<&str>,
    ) -> Result<GetAlbumResponse, LoaderError> {
        let token = require_token(token)?;
        let api_url = self.endpoint(&format!("/albums/{id}", id = album_id));

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<GetAlbumResponse>().await?)
    }

    /// Retrieves the page of tracks a continuation cursor points at.
    ///
    /// The cursor is used verbatim, it already carries offset and limit.
    pub async fn get_track_page(
        &self,
        next: &str,
        token: Option<&str>,
    ) -> Result<TrackPage, LoaderError> {
        let token = require_token(token)?;

        let response = self
            .http
            .get(next)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<TrackPage>().await?)
    }
}
