use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} must be set")]
    MissingEnv(&'static str),
    #[error("failed to read config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("no `list=` parameter in playlist url '{0}'")]
    MissingPlaylistId(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{endpoint} responded with {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid iso-8601 duration '{0}'")]
    Duration(String),
    #[error("{field} is not a count: '{value}'")]
    Count { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
