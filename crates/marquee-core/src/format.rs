//! pt-BR presentation formatters.
//!
//! Every formatter returns `None` for absent or zero input so the caller can
//! substitute its own "unavailable" text instead of showing `R$ 0,00`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Abbreviated month names, January first.
const MONTHS: [&str; 12] = [
  "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.",
  "nov.", "dez.",
];

/// Separator placed between `R$` and the amount.
pub const CURRENCY_SPACE: char = '\u{a0}';

/// Format a whole-real amount as `R$ 1.234.567,00`.
pub fn currency(amount: Option<u64>) -> Option<String> {
  let amount = amount.filter(|&a| a > 0)?;
  Some(format!("R${CURRENCY_SPACE}{},00", group_thousands(amount)))
}

/// Format a date as `16 de jul. de 2010`.
pub fn date(date: Option<NaiveDate>) -> Option<String> {
  let date = date?;
  let month = MONTHS[date.month0() as usize];
  Some(format!("{} de {month} de {}", date.day(), date.year()))
}

/// Format an average rating with one decimal, e.g. `8.4`.
///
/// Ties round away from zero (`7.25` is `7.3`), not to even.
pub fn rating(average: Option<f64>) -> Option<String> {
  let average = average.filter(|a| a.is_finite() && *a > 0.0)?;
  let rounded = (average * 10.0).round() / 10.0;
  Some(format!("{rounded:.1}"))
}

/// Format a running time as `148 minutos`.
pub fn runtime(minutes: Option<u32>) -> Option<String> {
  let minutes = minutes.filter(|&m| m > 0)?;
  Some(format!("{minutes} minutos"))
}

fn group_thousands(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push('.');
    }
    out.push(c);
  }
  out
}

// ─── Posters ─────────────────────────────────────────────────────────────────

/// Width buckets offered by the image host.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PosterSize {
  W92,
  W154,
  W185,
  W342,
  #[default]
  W500,
  W780,
  Original,
}

/// Resolve a poster reference to an absolute URL.
pub fn poster_url(base: &str, size: PosterSize, path: &str) -> String {
  format!("{}/{}{}", base.trim_end_matches('/'), size.as_ref(), path)
}
