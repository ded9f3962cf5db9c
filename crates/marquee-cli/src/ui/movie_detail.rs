//! Movie detail pane: facts, poster and synopsis.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the detail pane into `area`.
pub fn draw<C>(f: &mut Frame, area: Rect, app: &App<C>) {
  let card = app.detail_card();

  let title = card
    .as_ref()
    .map(|c| c.title.as_str())
    .unwrap_or("Detalhes");
  let block = Block::default()
    .title(format!(" {title} "))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(card) = card else {
    let hint = if app.view.movie().is_pending() {
      "Carregando…"
    } else {
      "Nenhum filme selecionado."
    };
    f.render_widget(
      Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let label = |s: &'static str| {
    Span::styled(
      format!("{s:<12}"),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )
  };

  let mut lines = vec![
    Line::from(vec![label("★"), Span::raw(card.rating)]),
    Line::from(vec![label("Lançamento"), Span::raw(card.release_date)]),
    Line::from(vec![label("Orçamento"), Span::raw(card.budget)]),
    Line::from(vec![label("Receita"), Span::raw(card.revenue)]),
    Line::from(vec![label("Duração"), Span::raw(card.runtime)]),
    Line::from(vec![label("Gêneros"), Span::raw(card.genres)]),
    Line::from(vec![
      label("Pôster"),
      Span::styled(card.poster.to_string(), Style::default().fg(Color::DarkGray)),
    ]),
    Line::from(""),
  ];
  lines.extend(card.overview.lines().map(|l| Line::from(l.to_owned())));

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
