//! 基础设施层
//!
//! 页面能力抽象（`QuizForm` / `ResultsView` / `HandoffStore` / `Navigator`）
//! 以及它们的两套实现：
//! - `dom` - 通过 `JsExecutor` 操作真实浏览器页面
//! - `memory` - 内存实现，用于测试和无界面运行

pub mod capabilities;
pub mod dom;
pub mod js_executor;
pub mod memory;

pub use capabilities::{
    HandoffStore, Navigator, QuizForm, ResultsView, BUSY_LABEL, SUBMISSION_ERROR_MESSAGE,
    SUBMIT_LABEL, VALIDATION_MESSAGE,
};
pub use dom::{DomQuizPage, DomResultsPage, PageNavigator, SessionStorage};
pub use js_executor::JsExecutor;
pub use memory::{MemoryQuizPage, MemoryResultsPage, MemoryStore, RecordingNavigator};
