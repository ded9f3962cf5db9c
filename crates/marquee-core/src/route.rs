//! Navigation routes and the movie/series mode guard.
//!
//! Routes look like `/filme/27205` or `/serie/1399`. Only movie routes are
//! ever resolved against the catalog; the mode is part of the route value so
//! callers pass it explicitly instead of reading it from ambient state.

use std::{fmt, str::FromStr};

use strum::{AsRefStr, EnumString};

use crate::error::{Error, Result};

/// The kind of title a route points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString)]
pub enum Mode {
  #[strum(serialize = "filme")]
  Movie,
  #[strum(serialize = "serie")]
  Series,
}

/// A parsed navigation route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
  pub mode: Mode,
  pub id:   u64,
}

impl Route {
  pub fn movie(id: u64) -> Self { Self { mode: Mode::Movie, id } }

  pub fn series(id: u64) -> Self { Self { mode: Mode::Series, id } }

  /// Parse `/filme/{id}` or `/serie/{id}`. A trailing slash is tolerated.
  pub fn parse(path: &str) -> Result<Self> {
    let invalid = || Error::InvalidRoute(path.to_owned());

    let trimmed = path.trim();
    let rest = trimmed.strip_prefix('/').ok_or_else(invalid)?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    let (prefix, id) = rest.split_once('/').ok_or_else(invalid)?;
    let mode = Mode::from_str(prefix).map_err(|_| invalid())?;
    let id = id.parse::<u64>().map_err(|_| invalid())?;

    Ok(Self { mode, id })
  }

  /// The route a related movie navigates to when activated.
  pub fn related(id: u64) -> Self { Self::movie(id) }

  pub fn is_movie(&self) -> bool { self.mode == Mode::Movie }

  pub fn path(&self) -> String { self.to_string() }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}/{}", self.mode.as_ref(), self.id)
  }
}

impl FromStr for Route {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_movie_route() {
    let route = Route::parse("/filme/27205").unwrap();
    assert_eq!(route, Route::movie(27205));
    assert!(route.is_movie());
  }

  #[test]
  fn parses_series_route_with_trailing_slash() {
    let route = Route::parse("/serie/1399/").unwrap();
    assert_eq!(route.mode, Mode::Series);
    assert_eq!(route.id, 1399);
    assert!(!route.is_movie());
  }

  #[test]
  fn rejects_malformed_routes() {
    for path in ["", "/", "filme/1", "/filme", "/filme/", "/filme/abc", "/tv/1", "/filme/1/2"] {
      assert!(
        matches!(Route::parse(path), Err(Error::InvalidRoute(_))),
        "{path:?} should be rejected"
      );
    }
  }

  #[test]
  fn related_routes_are_movie_routes() {
    assert_eq!(Route::related(550).path(), "/filme/550");
  }

  #[test]
  fn display_round_trips_through_parse() {
    let route = Route::series(42);
    assert_eq!(route.path().parse::<Route>().unwrap(), route);
  }
}
