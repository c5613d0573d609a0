//! # Trivia Client
//!
//! 答题网页的客户端逻辑：收集答案、提交判分、渲染成绩
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 页面能力抽象及其实现
//! - `QuizForm` / `ResultsView` / `HandoffStore` / `Navigator` - 页面能力
//! - `JsExecutor` - 唯一的 page owner，提供 eval_as() / goto() 能力
//! - `memory` - 内存实现，测试时注入
//!
//! ### ② 业务能力层（Services / Clients）
//! - `clients/` - `ScoringClient`，调用 `POST /checkanswers`
//! - `services/` - HTML 实体解码、结果页片段渲染
//!
//! ### ③ 流程层（Workflow）
//! - `AnswerCollector` - 收集 → 校验 → 提交 → 交接 → 跳转
//! - `ResultRenderer` - 读取交接数据 → 汇总 → 逐题卡片
//!
//! ### ④ 编排层
//! - `App` - 连接浏览器，串起答题页和结果页
//!
//! ## 模块结构

pub mod app;
pub mod browser;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{HttpScoringClient, ScoringClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Answer, AnswerResult, ResultHandoff, ScoreSummary, Tier};
pub use workflow::{AnswerCollector, RenderOutcome, ResultRenderer, SubmitOutcome};
