//! Display strings for the detail and related panes.
//!
//! Missing fields are replaced one by one with a placeholder; a partially
//! filled record is still a successful lookup.

use std::fmt;

use crate::{
  format::{self, PosterSize},
  movie::{Movie, MovieSummary},
  route::Route,
};

pub const TITLE_UNAVAILABLE: &str = "Título não disponível";
pub const IMAGE_UNAVAILABLE: &str = "Imagem não disponível";
pub const INFO_UNAVAILABLE: &str = "Informação não disponível";
pub const REVENUE_UNAVAILABLE: &str = "Ainda não disponível";

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Where poster images are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
  pub base_url: String,
  pub size:     PosterSize,
}

impl Default for ImageConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_IMAGE_BASE_URL.to_owned(),
      size:     PosterSize::default(),
    }
  }
}

impl ImageConfig {
  pub fn poster(&self, path: Option<&str>) -> Poster {
    match path.filter(|p| !p.is_empty()) {
      Some(p) => Poster::Url(format::poster_url(&self.base_url, self.size, p)),
      None => Poster::Unavailable,
    }
  }
}

/// A resolved poster, or the marker for a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
  Url(String),
  Unavailable,
}

impl Poster {
  pub fn url(&self) -> Option<&str> {
    match self {
      Self::Url(u) => Some(u),
      Self::Unavailable => None,
    }
  }
}

impl fmt::Display for Poster {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Url(u) => f.write_str(u),
      Self::Unavailable => f.write_str(IMAGE_UNAVAILABLE),
    }
  }
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// Every field of the detail pane as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
  pub title:        String,
  pub overview:     String,
  pub poster:       Poster,
  pub rating:       String,
  pub release_date: String,
  pub budget:       String,
  pub revenue:      String,
  pub runtime:      String,
  pub genres:       String,
}

impl DetailCard {
  pub fn new(movie: &Movie, images: &ImageConfig) -> Self {
    let or_info = |s: Option<String>| s.unwrap_or_else(|| INFO_UNAVAILABLE.to_owned());

    let genres = movie
      .genres
      .iter()
      .map(|g| g.name.as_str())
      .collect::<Vec<_>>()
      .join(", ");

    Self {
      title:        title_or_placeholder(movie.title.as_deref()),
      overview:     if movie.overview.trim().is_empty() {
        INFO_UNAVAILABLE.to_owned()
      } else {
        movie.overview.clone()
      },
      poster:       images.poster(movie.poster_path.as_deref()),
      rating:       or_info(format::rating(movie.vote_average)),
      release_date: or_info(format::date(movie.release_date)),
      budget:       or_info(format::currency(movie.budget)),
      revenue:      format::currency(movie.revenue)
        .unwrap_or_else(|| REVENUE_UNAVAILABLE.to_owned()),
      runtime:      or_info(format::runtime(movie.runtime)),
      genres:       if genres.is_empty() {
        INFO_UNAVAILABLE.to_owned()
      } else {
        genres
      },
    }
  }
}

// ─── Related ─────────────────────────────────────────────────────────────────

/// One entry of the related list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedCard {
  /// Where activating this entry navigates to.
  pub route:  Route,
  pub title:  String,
  pub poster: Poster,
}

impl RelatedCard {
  pub fn from_summary(summary: &MovieSummary, images: &ImageConfig) -> Self {
    Self {
      route:  Route::related(summary.id),
      title:  title_or_placeholder(summary.title.as_deref()),
      poster: images.poster(summary.poster_path.as_deref()),
    }
  }
}

/// One card per summary, in the order given.
pub fn related_cards(results: &[MovieSummary], images: &ImageConfig) -> Vec<RelatedCard> {
  results
    .iter()
    .map(|s| RelatedCard::from_summary(s, images))
    .collect()
}

fn title_or_placeholder(title: Option<&str>) -> String {
  match title.map(str::trim).filter(|t| !t.is_empty()) {
    Some(t) => t.to_owned(),
    None => TITLE_UNAVAILABLE.to_owned(),
  }
}
