//! Movie records as returned by the catalog.
//!
//! A [`Movie`] is never mutated after it is decoded. The view replaces it
//! wholesale whenever a new lookup resolves.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ─── Genre ───────────────────────────────────────────────────────────────────

/// A classification tag attached to a movie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
  pub id:   u32,
  pub name: String,
}

// ─── Movie ───────────────────────────────────────────────────────────────────

/// The full record of a single movie.
///
/// Fields the catalog sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
  pub id:           u64,
  #[serde(default)]
  pub title:        Option<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub overview:     String,
  #[serde(default)]
  pub poster_path:  Option<String>,
  #[serde(default)]
  pub vote_average: Option<f64>,
  #[serde(default, deserialize_with = "optional_date")]
  pub release_date: Option<NaiveDate>,
  #[serde(default)]
  pub budget:       Option<u64>,
  #[serde(default)]
  pub revenue:      Option<u64>,
  /// Running time in minutes.
  #[serde(default)]
  pub runtime:      Option<u32>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub genres:       Vec<Genre>,
}

impl Movie {
  /// The genre used to look up related movies: the first one listed.
  pub fn primary_genre(&self) -> Option<&Genre> { self.genres.first() }
}

// ─── Summaries ───────────────────────────────────────────────────────────────

/// The narrow projection of a movie shown in the related list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
  pub id:          u64,
  #[serde(default)]
  pub title:       Option<String>,
  #[serde(default)]
  pub poster_path: Option<String>,
}

/// One page of a discover query. Only the first page is ever requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverPage {
  #[serde(default, deserialize_with = "null_as_default")]
  pub results: Vec<MovieSummary>,
}

// ─── Serde helpers ───────────────────────────────────────────────────────────

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// TMDB sends `""` rather than `null` for unknown release dates.
fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<String>::deserialize(deserializer)? {
    None => Ok(None),
    Some(s) if s.trim().is_empty() => Ok(None),
    Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
      .map(Some)
      .map_err(serde::de::Error::custom),
  }
}
