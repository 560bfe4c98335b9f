use crate::{
    config::Config,
    entity::{self, Entity, PlaylistProperties, VideoProperties},
    error::{Error, Result},
    youtube::{duration, Api, Playlist, Video},
};
use chrono::{DateTime, Utc};
use std::{fs, path::Path};

pub const DESCRIPTION_LIMIT: usize = 500;

/// Pulls the first non-empty `list=` value out of a playlist url.
pub fn resolve_playlist_id(url: &str) -> Result<&str> {
    url.match_indices("list=")
        .filter_map(|(i, m)| url[i + m.len()..].split('&').next())
        .find(|id| !id.is_empty())
        .ok_or_else(|| Error::MissingPlaylistId(url.to_owned()))
}

pub fn map_playlist(
    playlist: &Playlist,
    playlist_id: &str,
    link: &str,
    ingested_at: DateTime<Utc>,
) -> Entity {
    Entity::playlist(
        playlist_id,
        playlist.snippet.title.as_str(),
        PlaylistProperties {
            link: link.to_owned(),
            playlist_id: playlist_id.to_owned(),
            video_count: playlist.content_details.item_count,
            last_updated_at: entity::timestamp(ingested_at),
        },
    )
}

pub fn map_video(video_id: &str, video: Video, playlist_id: &str) -> Result<Entity> {
    let snippet = video.snippet;
    let stats = video.statistics;

    let properties = VideoProperties {
        title_length: snippet.title.chars().count(),
        link: entity::watch_url(video_id),
        published_at: snippet.published_at,
        thumbnail_url: snippet.thumbnails.high.map(|t| t.url).unwrap_or_default(),
        description: truncate(snippet.description.as_deref().unwrap_or_default(), DESCRIPTION_LIMIT),
        channel_title: snippet.channel_title.unwrap_or_default(),
        duration_seconds: duration::parse_seconds(&video.content_details.duration)?,
        view_count: stats.views()?,
        like_count: stats.likes()?,
        comment_count: stats.comments()?,
        title: snippet.title,
    };

    Ok(Entity::video(video_id, properties, playlist_id))
}

fn truncate(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}

pub struct Ingestor<'a, A: Api> {
    api: A,
    config: &'a Config,
}

impl<'a, A: Api> Ingestor<'a, A> {
    pub fn new(api: A, config: &'a Config) -> Self {
        Self { api, config }
    }

    /// Fetches the playlist, its first page of items and every item's video
    /// details, one request at a time. The playlist entity (if the API knows
    /// the playlist) comes first, followed by videos in playlist order.
    pub async fn run(&self, ingested_at: DateTime<Utc>) -> Result<Vec<Entity>> {
        let playlist_url = self.config.playlist_url.as_str();
        let playlist_id = resolve_playlist_id(playlist_url)?;
        tracing::info!(playlist_id, "ingesting playlist");

        let mut entities = Vec::new();

        let playlists = self.api.playlists(playlist_id).await?;
        match playlists.items.first() {
            Some(playlist) => {
                entities.push(map_playlist(playlist, playlist_id, playlist_url, ingested_at))
            }
            None => tracing::warn!(playlist_id, "playlist not found, omitting playlist entity"),
        }

        let page = self
            .api
            .playlist_items(playlist_id, self.config.max_results)
            .await?;
        if page.next_page_token.is_some() {
            tracing::warn!(
                fetched = page.items.len(),
                total = ?page.page_info.as_ref().map(|p| p.total_results),
                "playlist has more items than one page, the rest are ignored"
            );
        }

        for item in page.items {
            let video_id = item.content_details.video_id;
            let response = self.api.videos(&video_id).await?;

            match response.items.into_iter().next() {
                Some(video) => {
                    tracing::debug!(video_id = %video_id, "mapped video");
                    entities.push(map_video(&video_id, video, playlist_id)?);
                }
                None => {
                    let title = item.snippet.and_then(|s| s.title).unwrap_or_default();
                    tracing::warn!(video_id = %video_id, title = %title, "video unavailable, skipping");
                }
            }
        }

        Ok(entities)
    }
}

/// Serializes every entity as one JSON array, replacing whatever was at `path`.
pub fn write_entities(path: impl AsRef<Path>, entities: &[Entity]) -> Result<()> {
    let json = serde_json::to_vec(entities)?;
    fs::write(path, json)?;
    Ok(())
}
