use crate::error::{Error, Result};
use crate::youtube::{Api, PlaylistItemResponse, PlaylistResponse, VideoResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub struct YouTube<'a> {
    client: Client,
    api_key: &'a str,
    api_base: &'a str,
}

impl<'a> YouTube<'a> {
    pub fn new(api_key: &'a str, api_base: &'a str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base: api_base.trim_end_matches('/'),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        tracing::debug!(endpoint, ?query, "GET");

        let response = self
            .client
            .get(format!("{}/{}", self.api_base, endpoint))
            .query(query)
            .query(&[("key", self.api_key)])
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        match status.is_success() {
            true => {
                let body = response.bytes().await.map_err(redact)?;
                Ok(serde_json::from_slice(&body)?)
            }
            false => Err(Error::Status {
                endpoint,
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

/// The request url carries the api key; keep it out of error messages.
fn redact(e: reqwest::Error) -> Error {
    Error::Http(e.without_url())
}

impl Api for YouTube<'_> {
    async fn playlists(&self, playlist_id: &str) -> Result<PlaylistResponse> {
        self.get(
            "playlists",
            &[("part", "snippet,contentDetails"), ("id", playlist_id)],
        )
        .await
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<PlaylistItemResponse> {
        let max_results = max_results.to_string();
        self.get(
            "playlistItems",
            &[
                ("part", "snippet,contentDetails"),
                ("maxResults", &max_results),
                ("playlistId", playlist_id),
            ],
        )
        .await
    }

    async fn videos(&self, video_id: &str) -> Result<VideoResponse> {
        self.get(
            "videos",
            &[("part", "statistics,contentDetails,snippet"), ("id", video_id)],
        )
        .await
    }
}
