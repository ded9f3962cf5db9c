//! The `Catalog` trait: the two remote reads the viewer depends on.
//!
//! Implemented by `marquee-tmdb` against the TMDB REST API. The resolvers and
//! the viewer depend on this abstraction, not on any HTTP client.

use std::future::Future;

use crate::{
  error::Result,
  movie::{Movie, MovieSummary},
};

/// Abstraction over a movie catalog.
///
/// All methods return `Send` futures so lookups can be spawned onto a
/// multi-threaded tokio runtime.
pub trait Catalog: Send + Sync {
  /// Fetch the full record for one movie.
  fn movie(&self, id: u64) -> impl Future<Output = Result<Movie>> + Send + '_;

  /// Fetch the first page of movies tagged with `genre_id`, in the catalog's
  /// own relevance order.
  fn discover_by_genre(
    &self,
    genre_id: u32,
  ) -> impl Future<Output = Result<Vec<MovieSummary>>> + Send + '_;
}
