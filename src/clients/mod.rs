pub mod scoring_client;

pub use scoring_client::{HttpScoringClient, ScoringClient};
