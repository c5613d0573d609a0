pub mod collector;
pub mod renderer;

pub use collector::{AnswerCollector, Collection, SubmitOutcome, DEFAULT_RESULTS_PATH};
pub use renderer::{RenderOutcome, ResultRenderer};
