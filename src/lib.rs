//! Context Chat Relay
//!
//! A thin backend in front of Gemini that:
//! - Accepts a chat message over HTTP
//! - Optionally enriches it with live exchange rates or recent news
//! - Forwards the enriched prompt to the model
//! - Returns the answer plus which enrichment was applied
//!
//! PIPELINE:
//! CLASSIFY → ENRICH → COMPOSE → GENERATE → ASSEMBLE

pub mod api;
pub mod classifier;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod gemini;
pub mod models;
pub mod prompt;
pub mod relay;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use classifier::{QueryClassifier, QueryKind};
pub use enrichment::{EnrichmentOutcome, EnrichmentProvider};
pub use gemini::TextGenerator;
pub use relay::ChatRelay;
