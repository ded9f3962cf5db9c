//! Layered configuration: TOML file, then `MARQUEE_*` environment variables.
//! Command-line flags are applied on top by `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, builder::DefaultState};
use marquee_core::{format::PosterSize, render::DEFAULT_IMAGE_BASE_URL};
use marquee_tmdb::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
use serde::Deserialize;

fn default_base_url() -> String { DEFAULT_BASE_URL.to_owned() }

fn default_language() -> String { DEFAULT_LANGUAGE.to_owned() }

fn default_image_base_url() -> String { DEFAULT_IMAGE_BASE_URL.to_owned() }

fn default_timeout_secs() -> u64 { 30 }

/// Everything the binary can be configured with.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  #[serde(default)]
  pub api_key:        Option<String>,
  #[serde(default = "default_base_url")]
  pub base_url:       String,
  #[serde(default = "default_language")]
  pub language:       String,
  #[serde(default = "default_image_base_url")]
  pub image_base_url: String,
  #[serde(default)]
  pub poster_size:    PosterSize,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs:   u64,
  /// Route opened when none is given on the command line.
  #[serde(default)]
  pub start_route:    Option<String>,
}

impl Settings {
  /// Load from `path` (optional file) and the environment.
  pub fn load(path: &Path) -> Result<Self> {
    let builder = Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("MARQUEE"));
    Self::from_builder(builder)
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
    builder
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise configuration")
  }
}

/// `$HOME/.config/marquee/config.toml`, or `config.toml` without a home.
pub fn default_path() -> PathBuf {
  match std::env::var("HOME") {
    Ok(home) => PathBuf::from(home).join(".config/marquee/config.toml"),
    Err(_) => PathBuf::from("config.toml"),
  }
}
