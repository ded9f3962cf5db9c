//! Related movies pane.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::App;

/// Render the related list into `area`.
pub fn draw<C>(f: &mut Frame, area: Rect, app: &App<C>) {
  let cards = app.related_cards();

  let block = Block::default()
    .title(format!(" Relacionados ({}) ", cards.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = cards
    .iter()
    .enumerate()
    .map(|(i, card)| {
      let style = if i == app.cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };

      ListItem::new(Line::from(vec![
        Span::styled(format!("{:<32}", card.title), style),
        Span::styled(
          format!("  {}", card.poster),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  if !cards.is_empty() {
    state.select(Some(app.cursor));
  }

  f.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
