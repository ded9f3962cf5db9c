//! Generation-tagged view state.
//!
//! Every fetch cycle starts a new generation. Lookups carry a ticket naming
//! the generation and target they were issued for, and a response is applied
//! only while its ticket still matches the active state. Responses for a
//! route the viewer has already left are dropped instead of overwriting the
//! current movie.

use tracing::debug;

use crate::{
  error::Error,
  movie::{Genre, Movie, MovieSummary},
  resolve::Detail,
  route::Route,
};

// ─── Tickets ─────────────────────────────────────────────────────────────────

/// Permission to apply one movie lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
  pub generation: u64,
  pub route:      Route,
}

/// Permission to apply one related-items lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedTicket {
  pub generation: u64,
  pub genre:      Genre,
}

// ─── Slot ────────────────────────────────────────────────────────────────────

/// One result slot: the last value applied and the last error seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
  value:   Option<T>,
  error:   Option<Error>,
  pending: bool,
}

impl<T> Default for Slot<T> {
  fn default() -> Self {
    Self {
      value:   None,
      error:   None,
      pending: false,
    }
  }
}

impl<T> Slot<T> {
  pub fn value(&self) -> Option<&T> { self.value.as_ref() }

  pub fn error(&self) -> Option<&Error> { self.error.as_ref() }

  pub fn is_pending(&self) -> bool { self.pending }

  fn begin(&mut self) { self.pending = true; }

  fn apply(&mut self, result: Result<T, Error>) {
    self.pending = false;
    match result {
      Ok(value) => {
        self.value = Some(value);
        self.error = None;
      }
      // The previous value stays visible.
      Err(e) => self.error = Some(e),
    }
  }
}

// ─── View ────────────────────────────────────────────────────────────────────

/// The state behind a single movie-detail view.
#[derive(Debug, Default)]
pub struct MovieView {
  generation: u64,
  route:      Option<Route>,
  genre:      Option<Genre>,
  movie:      Slot<Movie>,
  related:    Slot<Vec<MovieSummary>>,
}

impl MovieView {
  pub fn new() -> Self { Self::default() }

  pub fn generation(&self) -> u64 { self.generation }

  pub fn route(&self) -> Option<&Route> { self.route.as_ref() }

  /// The genre derived from the current movie, if any.
  pub fn genre(&self) -> Option<&Genre> { self.genre.as_ref() }

  pub fn movie(&self) -> &Slot<Movie> { &self.movie }

  pub fn related(&self) -> &Slot<Vec<MovieSummary>> { &self.related }

  /// Point the view at `route`, discarding whatever was shown before.
  ///
  /// Returns the ticket for the movie lookup to issue, or `None` when the
  /// route is not a movie route and nothing must be fetched.
  pub fn activate(&mut self, route: Route) -> Option<DetailTicket> {
    self.generation += 1;
    self.route = Some(route);
    self.genre = None;
    self.movie = Slot::default();
    self.related = Slot::default();
    self.start_cycle()
  }

  /// Re-run the fetch cycle for the active route, keeping current contents
  /// on screen until new responses arrive.
  pub fn refresh(&mut self) -> Option<DetailTicket> {
    self.route?;
    self.generation += 1;
    self.start_cycle()
  }

  /// Discard all state and invalidate every outstanding ticket.
  pub fn teardown(&mut self) {
    self.generation += 1;
    self.route = None;
    self.genre = None;
    self.movie = Slot::default();
    self.related = Slot::default();
  }

  fn start_cycle(&mut self) -> Option<DetailTicket> {
    let route = self.route.filter(Route::is_movie)?;
    self.movie.begin();
    Some(DetailTicket {
      generation: self.generation,
      route,
    })
  }

  fn is_current(&self, generation: u64) -> bool {
    generation == self.generation
  }

  /// Apply a movie lookup result.
  ///
  /// Returns the related-items ticket to issue when the lookup succeeded and
  /// the movie has a genre. Stale results are dropped and return `None`.
  pub fn apply_detail(
    &mut self,
    ticket: DetailTicket,
    result: Result<Detail, Error>,
  ) -> Option<RelatedTicket> {
    if !self.is_current(ticket.generation) || self.route != Some(ticket.route) {
      debug!(
        generation = ticket.generation,
        active = self.generation,
        route = %ticket.route,
        "dropping stale movie lookup"
      );
      return None;
    }

    match result {
      Ok(Detail { movie, genre }) => {
        self.movie.apply(Ok(movie));
        self.genre = genre.clone();
        let Some(genre) = genre else {
          self.related = Slot::default();
          return None;
        };
        self.related.begin();
        Some(RelatedTicket {
          generation: self.generation,
          genre,
        })
      }
      Err(e) => {
        self.movie.apply(Err(e));
        None
      }
    }
  }

  /// Apply a related-items lookup result. Stale results are dropped.
  ///
  /// Returns whether the result was applied.
  pub fn apply_related(
    &mut self,
    ticket: RelatedTicket,
    result: Result<Vec<MovieSummary>, Error>,
  ) -> bool {
    if !self.is_current(ticket.generation) || self.genre.as_ref() != Some(&ticket.genre) {
      debug!(
        generation = ticket.generation,
        active = self.generation,
        genre_id = ticket.genre.id,
        "dropping stale related lookup"
      );
      return false;
    }
    self.related.apply(result);
    true
  }
}
