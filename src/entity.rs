use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blueprint {
    #[serde(rename = "youtube_playlist")]
    Playlist,
    #[serde(rename = "youtube_video")]
    Video,
}

/// One record of the output file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entity {
    pub identifier: String,
    pub blueprint: Blueprint,
    pub title: String,
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Relations>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Properties {
    Playlist(PlaylistProperties),
    Video(VideoProperties),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistProperties {
    pub link: String,
    pub playlist_id: String,
    pub video_count: u64,
    pub last_updated_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoProperties {
    pub title: String,
    pub title_length: usize,
    pub link: String,
    pub published_at: String,
    pub thumbnail_url: String,
    pub description: String,
    pub channel_title: String,
    pub duration_seconds: u64,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Relations {
    pub playlist: String,
}

impl Entity {
    pub fn playlist(
        identifier: impl Into<String>,
        title: impl Into<String>,
        properties: PlaylistProperties,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            blueprint: Blueprint::Playlist,
            title: title.into(),
            properties: Properties::Playlist(properties),
            relations: None,
        }
    }

    pub fn video(identifier: impl Into<String>, properties: VideoProperties, playlist_id: &str) -> Self {
        Self {
            identifier: identifier.into(),
            blueprint: Blueprint::Video,
            title: properties.title.clone(),
            properties: Properties::Video(properties),
            relations: Some(Relations {
                playlist: playlist_id.to_owned(),
            }),
        }
    }
}

/// `2024-05-01T12:00:00.000000Z`
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
