use crate::error::{Error, Result};
use serde::Deserialize;
use std::{
    env,
    fmt::{self, Display, Formatter},
    fs, io,
    path::{Path, PathBuf},
};

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_OUTPUT: &str = "entities.json";
pub const DEFAULT_CONFIG_FILE: &str = "ingest.toml";

/// Largest page the playlistItems endpoint will return.
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Deserialize, Default)]
struct PartialConfig {
    api_base: Option<String>,
    output: Option<PathBuf>,
    max_results: Option<u32>,
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub playlist_url: String,
    pub api_base: String,
    pub output: PathBuf,
    pub max_results: u32,
}

impl Config {
    pub fn new(api_key: impl Into<String>, playlist_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            playlist_url: playlist_url.into(),
            api_base: DEFAULT_API_BASE.to_owned(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_results: MAX_PAGE_SIZE,
        }
    }

    /// Reads the credential and playlist url from the environment, then applies
    /// `ingest.toml` (or `$INGEST_CONFIG`) on top if it exists.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &'static str| lookup(name).ok_or(Error::MissingEnv(name));

        let api_key = require("YOUTUBE_API_KEY")?;
        let playlist_url = require("PLAYLIST_URL")?;
        let path = lookup("INGEST_CONFIG").unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_owned());

        Self::new(api_key, playlist_url).with_file(path)
    }

    pub fn with_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(raw) => {
                tracing::debug!(path = %path.display(), "loading config file");
                self.with_overrides(&raw)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(self),
            Err(e) => Err(e.into()),
        }
    }

    fn with_overrides(mut self, raw: &str) -> Result<Self> {
        let partial = toml::from_str::<PartialConfig>(raw)?;

        if let Some(api_base) = partial.api_base {
            self.api_base = api_base.trim_end_matches('/').to_owned();
        }
        if let Some(output) = partial.output {
            self.output = output;
        }
        if let Some(max_results) = partial.max_results {
            self.max_results = max_results.clamp(1, MAX_PAGE_SIZE);
        }

        Ok(self)
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config {{")?;
        writeln!(f, "\tapi_key = ...,")?;
        writeln!(f, "\tplaylist_url = '{}',", self.playlist_url)?;
        writeln!(f, "\tapi_base = '{}',", self.api_base)?;
        writeln!(f, "\toutput = '{}',", self.output.display())?;
        writeln!(f, "\tmax_results = {},", self.max_results)?;
        write!(f, "}}")
    }
}
