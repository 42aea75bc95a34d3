pub mod api;
pub mod core;
pub mod scoring;
pub mod scraping;
pub mod tools;

pub use crate::core::types;
pub use crate::core::types::*;
pub use crate::core::{AnalysisError, AppState};
pub use scoring::ScoringEngine;
