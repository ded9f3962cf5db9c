//! Error types for `marquee-core`.

use thiserror::Error;

/// Errors shared by every Marquee crate.
///
/// `Transport`, `Status` and `Decode` are all the same failure from the
/// viewer's point of view: the remote call did not produce a usable body.
/// The distinction is kept only for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("request to {path} failed: {message}")]
  Transport { path: String, message: String },

  #[error("{path} returned HTTP {status}")]
  Status { path: String, status: u16 },

  #[error("could not decode response from {path}: {message}")]
  Decode { path: String, message: String },

  #[error("invalid route: {0:?}")]
  InvalidRoute(String),

  #[error("configuration error: {0}")]
  Config(String),
}

impl Error {
  /// Whether this error is a remote-call failure.
  pub fn is_remote(&self) -> bool {
    matches!(
      self,
      Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. }
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
