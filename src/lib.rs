//! Boxed-beef price analytics.
//!
//! The [`analyzer`] module holds the pure analysis functions (trend,
//! volatility, percentile rank, year-over-year, seasonality,
//! support/resistance, moving averages, day-of-week). The other modules read
//! the static dataset written by the build-time fetcher and feed it in.

pub mod analyzer;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod reporter;
pub mod source;
pub mod utils;

pub use analyzer::{AnalysisInput, AnalysisReport, Analyzer, AnalyzerImpl};
pub use model::{PricePoint, PriceRecord};
pub use source::{PriceSource, StaticFileSource};
