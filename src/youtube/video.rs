use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub snippet: VideoSnippet,
    pub statistics: Statistics,
    pub content_details: VideoContentDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub published_at: String,
    pub thumbnails: Thumbnails,
    pub description: Option<String>,
    pub channel_title: Option<String>,
}

#[derive(Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
}

#[derive(Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize)]
pub struct VideoContentDetails {
    pub duration: String,
}

/// Counters come back as decimal strings; any of them may be missing
/// (hidden likes, disabled comments).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<Count>,
    pub like_count: Option<Count>,
    pub comment_count: Option<Count>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(u64),
    Text(String),
}

impl Count {
    fn value(&self, field: &'static str) -> Result<u64> {
        match self {
            Count::Number(n) => Ok(*n),
            Count::Text(s) => s.trim().parse().map_err(|_| Error::Count {
                field,
                value: s.clone(),
            }),
        }
    }
}

impl Statistics {
    pub fn views(&self) -> Result<u64> {
        count(&self.view_count, "viewCount")
    }

    pub fn likes(&self) -> Result<u64> {
        count(&self.like_count, "likeCount")
    }

    pub fn comments(&self) -> Result<u64> {
        count(&self.comment_count, "commentCount")
    }
}

fn count(value: &Option<Count>, field: &'static str) -> Result<u64> {
    value.as_ref().map_or(Ok(0), |c| c.value(field))
}

#[derive(Deserialize)]
pub struct VideoResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn statistics(value: serde_json::Value) -> Statistics {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn counts_parse_from_strings() {
        let stats = statistics(json!({ "viewCount": "1024", "likeCount": "12", "commentCount": "3" }));
        assert_eq!(stats.views().unwrap(), 1024);
        assert_eq!(stats.likes().unwrap(), 12);
        assert_eq!(stats.comments().unwrap(), 3);
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let stats = statistics(json!({ "viewCount": "7" }));
        assert_eq!(stats.views().unwrap(), 7);
        assert_eq!(stats.likes().unwrap(), 0);
        assert_eq!(stats.comments().unwrap(), 0);
    }

    #[test]
    fn numeric_counts_are_accepted() {
        let stats = statistics(json!({ "viewCount": 5 }));
        assert_eq!(stats.views().unwrap(), 5);
    }

    #[test]
    fn garbage_count_is_an_error() {
        let stats = statistics(json!({ "likeCount": "many" }));
        match stats.likes() {
            Err(Error::Count { field, value }) => {
                assert_eq!(field, "likeCount");
                assert_eq!(value, "many");
            }
            _ => panic!("expected a count error"),
        }
    }

    #[test]
    fn snippet_optional_fields() {
        let snippet: VideoSnippet = serde_json::from_value(json!({
            "title": "t",
            "publishedAt": "2021-03-04T05:06:07Z",
            "thumbnails": { "default": { "url": "https://i.ytimg.com/vi/x/default.jpg" } }
        }))
        .unwrap();

        assert!(snippet.thumbnails.high.is_none());
        assert!(snippet.description.is_none());
        assert!(snippet.channel_title.is_none());
    }

    #[test]
    fn missing_statistics_fails_to_decode() {
        let result = serde_json::from_value::<Video>(json!({
            "snippet": {
                "title": "t",
                "publishedAt": "2021-03-04T05:06:07Z",
                "thumbnails": {}
            },
            "contentDetails": { "duration": "PT1S" }
        }));
        assert!(result.is_err());
    }
}
