//! Application state machine and event dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use marquee_core::{
  Result,
  catalog::Catalog,
  movie::MovieSummary,
  render::{self, DetailCard, ImageConfig, RelatedCard},
  resolve::{Detail, resolve_detail, resolve_related},
  route::Route,
  view::{DetailTicket, MovieView, RelatedTicket},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

// ─── Fetch results ────────────────────────────────────────────────────────────

/// A lookup result travelling back from a spawned task, with the ticket it
/// was issued under.
#[derive(Debug)]
pub enum Fetched {
  Detail(DetailTicket, Result<Detail>),
  Related(RelatedTicket, Result<Vec<MovieSummary>>),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<C> {
  /// Generation-tagged movie and related-items state.
  pub view: MovieView,

  /// Where posters are resolved from.
  pub images: ImageConfig,

  /// Routes visited before the current one, most recent last.
  pub history: Vec<Route>,

  /// Cursor position within the related list.
  pub cursor: usize,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  catalog: Arc<C>,
  tx:      UnboundedSender<Fetched>,
  rx:      UnboundedReceiver<Fetched>,
}

impl<C: Catalog + 'static> App<C> {
  pub fn new(catalog: C, images: ImageConfig) -> Self {
    let (tx, rx) = mpsc::unbounded_channel();
    Self {
      view: MovieView::new(),
      images,
      history: Vec::new(),
      cursor: 0,
      status_msg: String::new(),
      catalog: Arc::new(catalog),
      tx,
      rx,
    }
  }
}

impl<C> App<C> {
  // ── Rendering helpers ─────────────────────────────────────────────────────

  pub fn detail_card(&self) -> Option<DetailCard> {
    self
      .view
      .movie()
      .value()
      .map(|m| DetailCard::new(m, &self.images))
  }

  pub fn related_cards(&self) -> Vec<RelatedCard> {
    self
      .view
      .related()
      .value()
      .map(|r| render::related_cards(r, &self.images))
      .unwrap_or_default()
  }

  /// The message for the status bar: lookup errors win over hints.
  pub fn status_line(&self) -> Option<String> {
    if let Some(e) = self.view.movie().error() {
      return Some(format!("Error loading movie: {e}"));
    }
    if let Some(e) = self.view.related().error() {
      return Some(format!("Error loading related movies: {e}"));
    }
    if self.view.movie().is_pending() || self.view.related().is_pending() {
      return Some("Loading…".into());
    }
    (!self.status_msg.is_empty()).then(|| self.status_msg.clone())
  }
}

impl<C: Catalog + 'static> App<C> {
  // ── Navigation ────────────────────────────────────────────────────────────

  /// Open `route`, remembering the current route for [`App::back`].
  pub fn navigate(&mut self, route: Route) {
    if let Some(current) = self.view.route().copied() {
      self.history.push(current);
    }
    self.open(route);
  }

  /// Return to the previously visited route. Returns `false` at the start.
  pub fn back(&mut self) -> bool {
    match self.history.pop() {
      Some(route) => {
        self.open(route);
        true
      }
      None => false,
    }
  }

  /// Re-fetch the current route.
  pub fn refresh(&mut self) {
    if let Some(ticket) = self.view.refresh() {
      self.spawn_detail(ticket);
    }
  }

  fn open(&mut self, route: Route) {
    info!(route = %route, "opening");
    self.cursor = 0;
    self.status_msg.clear();
    match self.view.activate(route) {
      Some(ticket) => self.spawn_detail(ticket),
      None => self.status_msg = format!("{route} is not a movie; nothing to show"),
    }
  }

  // ── Fetching ──────────────────────────────────────────────────────────────

  fn spawn_detail(&self, ticket: DetailTicket) {
    let catalog = Arc::clone(&self.catalog);
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let result = match resolve_detail(catalog.as_ref(), &ticket.route).await {
        Ok(Some(detail)) => Ok(detail),
        // Tickets are only issued for movie routes.
        Ok(None) => return,
        Err(e) => Err(e),
      };
      // The receiver only goes away on shutdown.
      let _ = tx.send(Fetched::Detail(ticket, result));
    });
  }

  fn spawn_related(&self, ticket: RelatedTicket) {
    let catalog = Arc::clone(&self.catalog);
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let result = match resolve_related(catalog.as_ref(), Some(&ticket.genre)).await {
        Ok(related) => Ok(related.unwrap_or_default()),
        Err(e) => Err(e),
      };
      let _ = tx.send(Fetched::Related(ticket, result));
    });
  }

  /// Apply one lookup result, issuing the related lookup it unlocks.
  pub fn apply(&mut self, fetched: Fetched) {
    match fetched {
      Fetched::Detail(ticket, result) => {
        if let Some(related) = self.view.apply_detail(ticket, result) {
          self.spawn_related(related);
        }
      }
      Fetched::Related(ticket, result) => {
        if self.view.apply_related(ticket, result) {
          let len = self.related_cards().len();
          self.cursor = self.cursor.min(len.saturating_sub(1));
        }
      }
    }
  }

  /// Apply every result that has already arrived. Returns how many.
  pub fn drain(&mut self) -> usize {
    let mut n = 0;
    while let Ok(fetched) = self.rx.try_recv() {
      self.apply(fetched);
      n += 1;
    }
    n
  }

  /// Wait for the next lookup result and apply it.
  pub async fn apply_next(&mut self) -> bool {
    match self.rx.recv().await {
      Some(fetched) => {
        self.apply(fetched);
        true
      }
      None => false,
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.related_cards().len();
        if len > 0 && self.cursor + 1 < len {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.cursor = self.cursor.saturating_sub(1);
      }

      // Open the selected related movie.
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(card) = self.related_cards().get(self.cursor) {
          let route = card.route;
          self.navigate(route);
        }
      }

      KeyCode::Backspace | KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        if !self.back() {
          self.status_msg = "No previous movie.".into();
        }
      }

      KeyCode::Char('r') => self.refresh(),

      _ => {}
    }
    true
  }
}
