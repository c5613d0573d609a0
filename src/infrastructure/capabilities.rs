//! 页面能力接口
//!
//! 答题页和结果页在这里被抽象成几组能力，流程层只依赖这些 trait，
//! 不直接接触 DOM。

use crate::error::AppResult;
use crate::models::ScoreSummary;
use crate::services::markup::{NoticeLevel, ResultCard};

/// 有题目未作答时的提示
pub const VALIDATION_MESSAGE: &str = "Please answer all questions before submitting.";

/// 提交失败时的提示（与未作答提示不同）
pub const SUBMISSION_ERROR_MESSAGE: &str =
    "There was an error submitting your answers. Please try again.";

/// 提交按钮的原始文字
pub const SUBMIT_LABEL: &str = "Submit Answers";

/// 提交中按钮文字
pub const BUSY_LABEL: &str = "Submitting...";

/// 答题表单能力
///
/// 对应页面元素：`#trivia-form`、`#error-message`、`#submit-button`、
/// `.question-id[value]` 以及 `input[name="question-<id>"]`
#[allow(async_fn_in_trait)]
pub trait QuizForm {
    /// 检查必需元素是否存在，缺失时返回 `PageError::MissingElements`
    async fn verify_layout(&self) -> AppResult<()>;

    /// 按页面顺序返回所有题目 ID
    async fn question_ids(&self) -> AppResult<Vec<String>>;

    /// 某题当前选中的选项
    async fn selected_answer(&self, question_id: &str) -> AppResult<Option<String>>;

    /// 显示错误提示
    async fn show_error(&self, message: &str) -> AppResult<()>;

    /// 隐藏错误提示
    async fn hide_error(&self) -> AppResult<()>;

    /// 禁用提交按钮并显示提交中
    async fn set_submit_busy(&self) -> AppResult<()>;

    /// 恢复提交按钮（可用 + 原始文字）
    async fn restore_submit(&self) -> AppResult<()>;
}

/// 结果页渲染目标
///
/// 对应页面元素：`#score-summary`、`#result-details`
#[allow(async_fn_in_trait)]
pub trait ResultsView {
    async fn verify_layout(&self) -> AppResult<()>;

    /// 在汇总区域显示一条提示（替换原内容）
    async fn show_notice(&self, level: NoticeLevel, message: &str) -> AppResult<()>;

    /// 显示成绩汇总并按档位标记样式
    async fn show_summary(&self, summary: &ScoreSummary) -> AppResult<()>;

    /// 追加一张结果卡片
    async fn append_card(&self, card: &ResultCard) -> AppResult<()>;
}

/// 标签页级别的临时存储（跨页面跳转存活）
#[allow(async_fn_in_trait)]
pub trait HandoffStore {
    async fn write(&self, key: &str, value: &str) -> AppResult<()>;

    async fn read(&self, key: &str) -> AppResult<Option<String>>;
}

/// 页面跳转
#[allow(async_fn_in_trait)]
pub trait Navigator {
    async fn navigate(&self, path: &str) -> AppResult<()>;
}

// ========== 引用转发 ==========

impl<T: QuizForm> QuizForm for &T {
    async fn verify_layout(&self) -> AppResult<()> {
        (**self).verify_layout().await
    }

    async fn question_ids(&self) -> AppResult<Vec<String>> {
        (**self).question_ids().await
    }

    async fn selected_answer(&self, question_id: &str) -> AppResult<Option<String>> {
        (**self).selected_answer(question_id).await
    }

    async fn show_error(&self, message: &str) -> AppResult<()> {
        (**self).show_error(message).await
    }

    async fn hide_error(&self) -> AppResult<()> {
        (**self).hide_error().await
    }

    async fn set_submit_busy(&self) -> AppResult<()> {
        (**self).set_submit_busy().await
    }

    async fn restore_submit(&self) -> AppResult<()> {
        (**self).restore_submit().await
    }
}

impl<T: ResultsView> ResultsView for &T {
    async fn verify_layout(&self) -> AppResult<()> {
        (**self).verify_layout().await
    }

    async fn show_notice(&self, level: NoticeLevel, message: &str) -> AppResult<()> {
        (**self).show_notice(level, message).await
    }

    async fn show_summary(&self, summary: &ScoreSummary) -> AppResult<()> {
        (**self).show_summary(summary).await
    }

    async fn append_card(&self, card: &ResultCard) -> AppResult<()> {
        (**self).append_card(card).await
    }
}

impl<T: HandoffStore> HandoffStore for &T {
    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).write(key, value).await
    }

    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        (**self).read(key).await
    }
}

impl<T: Navigator> Navigator for &T {
    async fn navigate(&self, path: &str) -> AppResult<()> {
        (**self).navigate(path).await
    }
}
