//! Resolver and view tests against an in-memory catalog.

use std::{collections::HashMap, sync::Mutex};

use serde_json::json;

use crate::{
  Error, Result,
  catalog::Catalog,
  movie::{Genre, Movie, MovieSummary},
  resolve::{Detail, resolve, resolve_detail, resolve_related},
  route::Route,
  view::{DetailTicket, MovieView},
};

// ─── In-memory catalog ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
  Movie(u64),
  Discover(u32),
}

#[derive(Default)]
struct MemoryCatalog {
  movies:   HashMap<u64, Result<Movie>>,
  discover: HashMap<u32, Result<Vec<MovieSummary>>>,
  requests: Mutex<Vec<Request>>,
}

impl MemoryCatalog {
  fn with_movie(mut self, movie: Movie) -> Self {
    self.movies.insert(movie.id, Ok(movie));
    self
  }

  fn with_failing_movie(mut self, id: u64) -> Self {
    self.movies.insert(id, Err(status_error(&format!("/movie/{id}"), 500)));
    self
  }

  fn with_related(mut self, genre_id: u32, results: Vec<MovieSummary>) -> Self {
    self.discover.insert(genre_id, Ok(results));
    self
  }

  fn with_failing_related(mut self, genre_id: u32) -> Self {
    self
      .discover
      .insert(genre_id, Err(status_error("/discover/movie", 503)));
    self
  }

  fn requests(&self) -> Vec<Request> { self.requests.lock().unwrap().clone() }
}

impl Catalog for MemoryCatalog {
  async fn movie(&self, id: u64) -> Result<Movie> {
    self.requests.lock().unwrap().push(Request::Movie(id));
    self
      .movies
      .get(&id)
      .cloned()
      .unwrap_or_else(|| Err(status_error(&format!("/movie/{id}"), 404)))
  }

  async fn discover_by_genre(&self, genre_id: u32) -> Result<Vec<MovieSummary>> {
    self.requests.lock().unwrap().push(Request::Discover(genre_id));
    self.discover.get(&genre_id).cloned().unwrap_or_else(|| Ok(Vec::new()))
  }
}

fn status_error(path: &str, status: u16) -> Error {
  Error::Status {
    path: path.to_owned(),
    status,
  }
}

fn movie(id: u64, genres: &[(u32, &str)]) -> Movie {
  let genres: Vec<_> = genres
    .iter()
    .map(|(id, name)| json!({ "id": id, "name": name }))
    .collect();
  serde_json::from_value(json!({
    "id": id,
    "title": format!("Filme {id}"),
    "overview": "",
    "genres": genres
  }))
  .unwrap()
}

fn summary(id: u64) -> MovieSummary {
  MovieSummary {
    id,
    title: Some(format!("Filme {id}")),
    poster_path: None,
  }
}

fn drama() -> Genre {
  Genre {
    id:   18,
    name: "Drama".into(),
  }
}

// ─── Resolvers ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn detail_derives_first_genre() {
  let catalog = MemoryCatalog::default().with_movie(movie(1, &[(18, "Drama"), (35, "Comédia")]));

  let detail = resolve_detail(&catalog, &Route::movie(1))
    .await
    .unwrap()
    .unwrap();

  assert_eq!(detail.movie.id, 1);
  assert_eq!(detail.genre, Some(drama()));
  assert_eq!(catalog.requests(), vec![Request::Movie(1)]);
}

#[tokio::test]
async fn series_route_issues_no_requests() {
  let catalog = MemoryCatalog::default().with_movie(movie(1, &[(18, "Drama")]));

  assert!(resolve_detail(&catalog, &Route::series(1)).await.unwrap().is_none());
  assert!(resolve(&catalog, &Route::series(1)).await.unwrap().is_none());
  assert!(catalog.requests().is_empty());
}

#[tokio::test]
async fn detail_failure_is_returned_not_swallowed() {
  let catalog = MemoryCatalog::default().with_failing_movie(1);

  let err = resolve_detail(&catalog, &Route::movie(1)).await.unwrap_err();
  assert!(err.is_remote());
}

#[tokio::test]
async fn related_without_genre_issues_no_request() {
  let catalog = MemoryCatalog::default();

  assert!(resolve_related(&catalog, None).await.unwrap().is_none());
  assert!(catalog.requests().is_empty());
}

#[tokio::test]
async fn related_preserves_catalog_order() {
  let catalog =
    MemoryCatalog::default().with_related(18, vec![summary(5), summary(2), summary(5), summary(9)]);

  let related = resolve_related(&catalog, Some(&drama()))
    .await
    .unwrap()
    .unwrap();

  let ids: Vec<u64> = related.iter().map(|m| m.id).collect();
  assert_eq!(ids, vec![5, 2, 5, 9]);
}

#[tokio::test]
async fn resolve_skips_related_for_genreless_movie() {
  let catalog = MemoryCatalog::default().with_movie(movie(3, &[]));

  let resolved = resolve(&catalog, &Route::movie(3)).await.unwrap().unwrap();

  assert!(resolved.detail.genre.is_none());
  assert!(resolved.related.is_none());
  assert_eq!(catalog.requests(), vec![Request::Movie(3)]);
}

#[tokio::test]
async fn resolve_carries_related_failure() {
  let catalog = MemoryCatalog::default()
    .with_movie(movie(1, &[(18, "Drama")]))
    .with_failing_related(18);

  let resolved = resolve(&catalog, &Route::movie(1)).await.unwrap().unwrap();

  assert_eq!(resolved.detail.movie.id, 1);
  assert!(matches!(resolved.related, Some(Err(Error::Status { status: 503, .. }))));
  assert_eq!(catalog.requests(), vec![Request::Movie(1), Request::Discover(18)]);
}

// ─── View ────────────────────────────────────────────────────────────────────

#[test]
fn activate_series_route_yields_no_ticket() {
  let mut view = MovieView::new();
  assert!(view.activate(Route::series(7)).is_none());
  assert!(!view.movie().is_pending());
  assert_eq!(view.route(), Some(&Route::series(7)));
}

#[test]
fn detail_then_related_populates_both_slots() {
  let mut view = MovieView::new();
  let ticket = view.activate(Route::movie(1)).unwrap();
  assert!(view.movie().is_pending());

  let related_ticket = view
    .apply_detail(ticket, Ok(Detail::new(movie(1, &[(18, "Drama")]))))
    .unwrap();
  assert_eq!(related_ticket.genre, drama());
  assert_eq!(view.movie().value().map(|m| m.id), Some(1));
  assert!(view.related().is_pending());

  assert!(view.apply_related(related_ticket, Ok(vec![summary(2), summary(3)])));
  assert_eq!(view.related().value().map(Vec::len), Some(2));
  assert!(!view.related().is_pending());
}

#[test]
fn genreless_movie_yields_no_related_ticket() {
  let mut view = MovieView::new();
  let ticket = view.activate(Route::movie(1)).unwrap();

  assert!(view.apply_detail(ticket, Ok(Detail::new(movie(1, &[])))).is_none());
  assert!(view.genre().is_none());
  assert!(view.related().value().is_none());
}

#[test]
fn stale_detail_is_discarded() {
  let mut view = MovieView::new();
  let old = view.activate(Route::movie(1)).unwrap();
  let new = view.activate(Route::movie(2)).unwrap();

  // The first response arrives after the viewer moved on.
  assert!(view.apply_detail(old, Ok(Detail::new(movie(1, &[(18, "Drama")])))).is_none());
  assert!(view.movie().value().is_none());

  view.apply_detail(new, Ok(Detail::new(movie(2, &[(35, "Comédia")]))));
  assert_eq!(view.movie().value().map(|m| m.id), Some(2));
}

#[test]
fn stale_related_is_discarded_even_when_it_arrives_last() {
  let mut view = MovieView::new();

  let t1 = view.activate(Route::movie(1)).unwrap();
  let r1 = view
    .apply_detail(t1, Ok(Detail::new(movie(1, &[(18, "Drama")]))))
    .unwrap();

  let t2 = view.activate(Route::movie(2)).unwrap();
  let r2 = view
    .apply_detail(t2, Ok(Detail::new(movie(2, &[(35, "Comédia")]))))
    .unwrap();

  assert!(view.apply_related(r2, Ok(vec![summary(20)])));
  assert!(!view.apply_related(r1, Ok(vec![summary(10), summary(11)])));

  let ids: Vec<u64> = view.related().value().unwrap().iter().map(|m| m.id).collect();
  assert_eq!(ids, vec![20]);
}

#[test]
fn related_failure_keeps_previous_list() {
  let mut view = MovieView::new();
  let t = view.activate(Route::movie(1)).unwrap();
  let r = view
    .apply_detail(t, Ok(Detail::new(movie(1, &[(18, "Drama")]))))
    .unwrap();
  view.apply_related(r, Ok(vec![summary(2)]));

  let t = view.refresh().unwrap();
  let r = view
    .apply_detail(t, Ok(Detail::new(movie(1, &[(18, "Drama")]))))
    .unwrap();
  assert!(view.apply_related(r, Err(status_error("/discover/movie", 503))));

  assert_eq!(view.related().value().map(Vec::len), Some(1));
  assert!(view.related().error().is_some());
}

#[test]
fn detail_failure_records_error_and_keeps_value_on_refresh() {
  let mut view = MovieView::new();
  let t = view.activate(Route::movie(1)).unwrap();
  view.apply_detail(t, Ok(Detail::new(movie(1, &[]))));

  let t = view.refresh().unwrap();
  assert!(view.apply_detail(t, Err(status_error("/movie/1", 500))).is_none());

  assert_eq!(view.movie().value().map(|m| m.id), Some(1));
  assert!(matches!(view.movie().error(), Some(Error::Status { status: 500, .. })));
}

#[test]
fn activation_discards_previous_contents() {
  let mut view = MovieView::new();
  let t = view.activate(Route::movie(1)).unwrap();
  view.apply_detail(t, Err(status_error("/movie/1", 500)));

  view.activate(Route::movie(2));
  assert!(view.movie().value().is_none());
  assert!(view.movie().error().is_none());
}

#[test]
fn teardown_invalidates_outstanding_tickets() {
  let mut view = MovieView::new();
  let t = view.activate(Route::movie(1)).unwrap();
  view.teardown();

  assert!(view.apply_detail(t, Ok(Detail::new(movie(1, &[(18, "Drama")])))).is_none());
  assert!(view.movie().value().is_none());
  assert!(view.route().is_none());
  assert!(view.refresh().is_none());
}

#[test]
fn refresh_to_genreless_movie_clears_related() {
  let mut view = MovieView::new();
  let t = view.activate(Route::movie(1)).unwrap();
  let r = view
    .apply_detail(t, Ok(Detail::new(movie(1, &[(18, "Drama")]))))
    .unwrap();
  view.apply_related(r, Ok(vec![summary(2), summary(3)]));

  let t = view.refresh().unwrap();
  assert!(view.apply_detail(t, Ok(Detail::new(movie(1, &[])))).is_none());

  assert!(view.genre().is_none());
  assert!(view.related().value().is_none());
  assert!(!view.related().is_pending());
}

#[test]
fn detail_for_another_route_in_same_generation_is_discarded() {
  let mut view = MovieView::new();
  let ticket = view.activate(Route::movie(1)).unwrap();
  let other_route = DetailTicket {
    generation: ticket.generation,
    route:      Route::movie(2),
  };

  assert!(view.apply_detail(other_route, Ok(Detail::new(movie(2, &[(18, "Drama")])))).is_none());
  assert!(view.movie().value().is_none());
  assert!(view.movie().is_pending());
  assert!(view.genre().is_none());
}
