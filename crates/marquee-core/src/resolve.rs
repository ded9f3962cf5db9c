//! Detail and related-items resolvers.
//!
//! Both resolvers log remote failures and hand them back as `Err`; they never
//! retry. Whether a failure clears anything is decided by the view.

use tracing::{debug, warn};

use crate::{
  catalog::Catalog,
  error::Result,
  movie::{Genre, Movie, MovieSummary},
  route::Route,
};

/// A resolved movie together with the genre used to find related movies.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
  pub movie: Movie,
  pub genre: Option<Genre>,
}

impl Detail {
  pub fn new(movie: Movie) -> Self {
    let genre = movie.primary_genre().cloned();
    Self { movie, genre }
  }
}

/// Both halves of a one-shot resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
  pub detail:  Detail,
  /// `None` when the movie has no genre and no related lookup was made.
  pub related: Option<Result<Vec<MovieSummary>>>,
}

/// Look up the movie a route points at.
///
/// Series routes are outside the viewer's scope: `Ok(None)` is returned and
/// no request is issued.
pub async fn resolve_detail<C: Catalog>(
  catalog: &C,
  route: &Route,
) -> Result<Option<Detail>> {
  if !route.is_movie() {
    debug!(route = %route, "skipping lookup for non-movie route");
    return Ok(None);
  }

  match catalog.movie(route.id).await {
    Ok(movie) => Ok(Some(Detail::new(movie))),
    Err(e) => {
      warn!(movie_id = route.id, error = %e, "movie lookup failed");
      Err(e)
    }
  }
}

/// Look up movies sharing `genre`. Without a genre nothing is requested.
pub async fn resolve_related<C: Catalog>(
  catalog: &C,
  genre: Option<&Genre>,
) -> Result<Option<Vec<MovieSummary>>> {
  let Some(genre) = genre else {
    return Ok(None);
  };

  match catalog.discover_by_genre(genre.id).await {
    Ok(results) => Ok(Some(results)),
    Err(e) => {
      warn!(genre_id = genre.id, error = %e, "related lookup failed");
      Err(e)
    }
  }
}

/// Run both resolvers in sequence for callers that render once.
///
/// A failed related lookup does not fail the whole resolution; it is carried
/// in [`Resolved::related`].
pub async fn resolve<C: Catalog>(
  catalog: &C,
  route: &Route,
) -> Result<Option<Resolved>> {
  let Some(detail) = resolve_detail(catalog, route).await? else {
    return Ok(None);
  };
  let related = resolve_related(catalog, detail.genre.as_ref())
    .await
    .transpose();
  Ok(Some(Resolved { detail, related }))
}
