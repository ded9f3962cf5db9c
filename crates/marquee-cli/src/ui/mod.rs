//! TUI rendering: header, detail, related list and status bar.

pub mod movie_detail;
pub mod related_list;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<C>(f: &mut Frame, app: &App<C>) {
  let area = f.area();

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),      // header
      Constraint::Min(0),         // detail
      Constraint::Percentage(35), // related
      Constraint::Length(1),      // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  movie_detail::draw(f, rows[1], app);
  related_list::draw(f, rows[2], app);
  draw_status(f, rows[3], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header<C>(f: &mut Frame, area: Rect, app: &App<C>) {
  let depth = app.history.len();
  let route = app
    .view
    .route()
    .map(|r| r.path())
    .unwrap_or_default();

  let left = Span::styled(
    format!(" marquee  {route}"),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("history {depth} "),
    Style::default().fg(Color::Gray),
  );

  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<C>(f: &mut Frame, area: Rect, app: &App<C>) {
  let hints = "↑↓/jk select  Enter open  ← back  r reload  q quit";
  let (label, text, color) = match app.status_line() {
    Some(msg) if msg.starts_with("Error") => (" ERROR ", msg, Color::Red),
    Some(msg) => (" INFO ", msg, Color::Cyan),
    None => (" MOVIE ", hints.to_string(), Color::Cyan),
  };

  let mode_span = Span::styled(
    label,
    Style::default()
      .fg(Color::Black)
      .bg(color)
      .add_modifier(Modifier::BOLD),
  );
  let text_span = Span::styled(format!("  {text}"), Style::default().fg(Color::Gray));

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, text_span]))
      .style(Style::default().bg(Color::Black)),
    area,
  );
}
