//! TMDB v3 backend for the Marquee [`Catalog`].
//!
//! Every request carries the static `api_key` and `language` query
//! parameters. Failures of any kind map onto the remote-call variants of
//! [`marquee_core::Error`].

use std::time::Duration;

use marquee_core::{
  Error, Result,
  catalog::Catalog,
  movie::{DiscoverPage, Movie, MovieSummary},
};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "pt-br";

fn default_base_url() -> String { DEFAULT_BASE_URL.to_owned() }

fn default_language() -> String { DEFAULT_LANGUAGE.to_owned() }

fn default_timeout_secs() -> u64 { 30 }

/// Connection settings for the TMDB API.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
  #[serde(default = "default_base_url")]
  pub base_url:     String,
  pub api_key:      String,
  #[serde(default = "default_language")]
  pub language:     String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

impl TmdbConfig {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      base_url:     default_base_url(),
      api_key:      api_key.into(),
      language:     default_language(),
      timeout_secs: default_timeout_secs(),
    }
  }
}

/// Async HTTP client for the TMDB REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct TmdbClient {
  client: Client,
  config: TmdbConfig,
}

impl TmdbClient {
  pub fn new(config: TmdbConfig) -> Result<Self> {
    if config.api_key.trim().is_empty() {
      return Err(Error::Config("TMDB api_key is empty".into()));
    }
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &TmdbConfig { &self.config }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// `GET {base}{path}?api_key=…&language=…[&extra…]`
  async fn get_json<T: DeserializeOwned>(
    &self,
    path: &str,
    extra: &[(&str, String)],
  ) -> Result<T> {
    debug!(path, "catalog request");

    let transport = |e: reqwest::Error| Error::Transport {
      path:    path.to_owned(),
      message: e.to_string(),
    };

    let resp = self
      .client
      .get(self.url(path))
      .query(&[
        ("api_key", self.config.api_key.as_str()),
        ("language", self.config.language.as_str()),
      ])
      .query(extra)
      .send()
      .await
      .map_err(transport)?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status {
        path:   path.to_owned(),
        status: status.as_u16(),
      });
    }

    let body = resp.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(|e| Error::Decode {
      path:    path.to_owned(),
      message: e.to_string(),
    })
  }
}

impl Catalog for TmdbClient {
  /// `GET /movie/{id}`
  async fn movie(&self, id: u64) -> Result<Movie> {
    self.get_json(&format!("/movie/{id}"), &[]).await
  }

  /// `GET /discover/movie?with_genres={genre_id}`
  async fn discover_by_genre(&self, genre_id: u32) -> Result<Vec<MovieSummary>> {
    let page: DiscoverPage = self
      .get_json("/discover/movie", &[("with_genres", genre_id.to_string())])
      .await?;
    Ok(page.results)
  }
}
