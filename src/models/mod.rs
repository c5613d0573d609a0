pub mod answer;
pub mod handoff;
pub mod score;

pub use answer::{Answer, AnswerResult};
pub use handoff::{ResultHandoff, HANDOFF_SCHEMA_VERSION, RESULTS_STORAGE_KEY};
pub use score::{ScoreSummary, Tier};
