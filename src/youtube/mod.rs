pub mod client;
pub mod duration;
pub mod playlist;
pub mod video;

pub use client::YouTube;
pub use playlist::{Playlist, PlaylistItemResponse, PlaylistResponse};
pub use video::{Video, VideoResponse};

use crate::error::Result;

/// The three Data API calls the ingestor needs.
pub trait Api {
    async fn playlists(&self, playlist_id: &str) -> Result<PlaylistResponse>;

    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<PlaylistItemResponse>;

    async fn videos(&self, video_id: &str) -> Result<VideoResponse>;
}
