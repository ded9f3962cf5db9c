//! Plain-text rendering for `--print`.

use marquee_core::{
  render::{self, DetailCard, ImageConfig},
  resolve::Resolved,
};

/// Render a resolved movie and its related list as plain text.
pub fn render(resolved: &Resolved, images: &ImageConfig) -> String {
  let card = DetailCard::new(&resolved.detail.movie, images);
  let mut out = format!(
    "{}\n{}\n{}\n\n",
    card.title,
    "=".repeat(card.title.chars().count()),
    card.overview
  );

  for (label, value) in [
    ("Avaliação", &card.rating),
    ("Lançamento", &card.release_date),
    ("Orçamento", &card.budget),
    ("Receita", &card.revenue),
    ("Duração", &card.runtime),
    ("Gêneros", &card.genres),
  ] {
    out.push_str(&format!("{label:<12}{value}\n"));
  }
  out.push_str(&format!("{:<12}{}\n", "Pôster", card.poster));

  out.push_str("\nRelacionados\n");
  match &resolved.related {
    None => out.push_str("  (sem gênero para buscar relacionados)\n"),
    Some(Err(e)) => out.push_str(&format!("  erro: {e}\n")),
    Some(Ok(results)) => {
      for related in render::related_cards(results, images) {
        out.push_str(&format!(
          "  {:<14}{}  {}\n",
          related.route.path(),
          related.title,
          related.poster
        ));
      }
    }
  }
  out
}
