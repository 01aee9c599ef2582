//! Content-based movie recommendation service.
//!
//! Fits TF-IDF vector spaces over movie overviews and genres at startup,
//! blends the two cosine-similarity signals into one matrix, and serves
//! search and recommendation queries over HTTP.

pub mod api;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
