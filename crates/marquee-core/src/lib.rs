//! Core types and trait definitions for Marquee, a TMDB movie-detail viewer.
//!
//! This crate is deliberately free of HTTP dependencies. It owns the data
//! model, the [`catalog::Catalog`] seam, the two resolvers, the
//! generation-tagged view state and the pt-BR presentation formatters.

pub mod catalog;
pub mod error;
pub mod format;
pub mod movie;
pub mod render;
pub mod resolve;
pub mod route;
pub mod view;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
