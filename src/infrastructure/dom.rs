//! 浏览器页面实现
//!
//! 通过 `JsExecutor` 在真实页面里执行脚本，实现各项页面能力。
//! 所有外部字符串都经 `js_string` 编码后再拼进脚本。

use crate::config::Config;
use crate::error::{AppError, AppResult, HandoffError};
use crate::infrastructure::capabilities::{
    HandoffStore, Navigator, QuizForm, ResultsView, BUSY_LABEL, SUBMIT_LABEL,
};
use crate::infrastructure::js_executor::{js_string, JsExecutor};
use crate::models::ScoreSummary;
use crate::services::markup::{escape_html, notice_html, summary_html, NoticeLevel, ResultCard};

const QUIZ_ELEMENT_IDS: [&str; 3] = ["trivia-form", "error-message", "submit-button"];
const RESULTS_ELEMENT_IDS: [&str; 2] = ["score-summary", "result-details"];

/// 查找页面上缺失的元素
async fn verify_element_ids(executor: &JsExecutor, ids: &[&str]) -> AppResult<()> {
    let ids_json = serde_json::to_string(ids).map_err(AppError::script_encoding)?;
    let missing: Vec<String> = executor
        .eval_as(format!(
            "{}.filter(id => !document.getElementById(id))",
            ids_json
        ))
        .await?;

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::missing_elements(missing))
    }
}

/// 答题页
pub struct DomQuizPage<'a> {
    executor: &'a JsExecutor,
}

impl<'a> DomQuizPage<'a> {
    pub fn new(executor: &'a JsExecutor) -> Self {
        Self { executor }
    }
}

impl QuizForm for DomQuizPage<'_> {
    async fn verify_layout(&self) -> AppResult<()> {
        verify_element_ids(self.executor, &QUIZ_ELEMENT_IDS).await
    }

    async fn question_ids(&self) -> AppResult<Vec<String>> {
        self.executor
            .eval_as(
                "Array.from(document.querySelectorAll('.question-id')).map(el => el.getAttribute('value') ?? '')",
            )
            .await
    }

    async fn selected_answer(&self, question_id: &str) -> AppResult<Option<String>> {
        let name = js_string(&format!("question-{}", question_id));
        // CDP 把 null 结果当作无值，这里用数组包一层
        let selected: Vec<String> = self
            .executor
            .eval_as(format!(
                r#"(() => {{
                    const el = document.querySelector('input[name="' + CSS.escape({}) + '"]:checked');
                    return el ? [el.value] : [];
                }})()"#,
                name
            ))
            .await?;
        Ok(selected.into_iter().next())
    }

    async fn show_error(&self, message: &str) -> AppResult<()> {
        let _: bool = self
            .executor
            .eval_as(format!(
                r#"(() => {{
                    const el = document.getElementById('error-message');
                    el.textContent = {};
                    el.classList.remove('d-none');
                    return true;
                }})()"#,
                js_string(message)
            ))
            .await?;
        Ok(())
    }

    async fn hide_error(&self) -> AppResult<()> {
        let _: bool = self
            .executor
            .eval_as("document.getElementById('error-message').classList.add('d-none') ?? true")
            .await?;
        Ok(())
    }

    async fn set_submit_busy(&self) -> AppResult<()> {
        let busy_html = format!(
            r#"<span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>{}"#,
            escape_html(BUSY_LABEL)
        );
        let _: bool = self
            .executor
            .eval_as(format!(
                r#"(() => {{
                    const button = document.getElementById('submit-button');
                    if (!button.dataset.originalLabel) {{
                        button.dataset.originalLabel = button.textContent.trim();
                    }}
                    button.disabled = true;
                    button.innerHTML = {};
                    return true;
                }})()"#,
                js_string(&busy_html)
            ))
            .await?;
        Ok(())
    }

    async fn restore_submit(&self) -> AppResult<()> {
        let _: bool = self
            .executor
            .eval_as(format!(
                r#"(() => {{
                    const button = document.getElementById('submit-button');
                    button.disabled = false;
                    button.textContent = button.dataset.originalLabel || {};
                    return true;
                }})()"#,
                js_string(SUBMIT_LABEL)
            ))
            .await?;
        Ok(())
    }
}

/// 结果页
pub struct DomResultsPage<'a> {
    executor: &'a JsExecutor,
}

impl<'a> DomResultsPage<'a> {
    pub fn new(executor: &'a JsExecutor) -> Self {
        Self { executor }
    }

    async fn set_summary_html(&self, html: &str, classes: &[&str]) -> AppResult<()> {
        let classes_json = serde_json::to_string(classes).map_err(AppError::script_encoding)?;
        let _: bool = self
            .executor
            .eval_as(format!(
                r#"(() => {{
                    const summary = document.getElementById('score-summary');
                    summary.innerHTML = {};
                    summary.classList.add(...{});
                    return true;
                }})()"#,
                js_string(html),
                classes_json
            ))
            .await?;
        Ok(())
    }
}

impl ResultsView for DomResultsPage<'_> {
    async fn verify_layout(&self) -> AppResult<()> {
        verify_element_ids(self.executor, &RESULTS_ELEMENT_IDS).await
    }

    async fn show_notice(&self, level: NoticeLevel, message: &str) -> AppResult<()> {
        self.set_summary_html(&notice_html(level, message), &[]).await
    }

    async fn show_summary(&self, summary: &ScoreSummary) -> AppResult<()> {
        let tier_class = summary.tier().map(|tier| format!("border-{}", tier.css_name()));
        let mut classes = vec!["border"];
        if let Some(class) = tier_class.as_deref() {
            classes.push(class);
        }
        self.set_summary_html(&summary_html(summary), &classes).await
    }

    async fn append_card(&self, card: &ResultCard) -> AppResult<()> {
        let _: bool = self
            .executor
            .eval_as(format!(
                r#"(() => {{
                    document.getElementById('result-details').insertAdjacentHTML('beforeend', {});
                    return true;
                }})()"#,
                js_string(&card.to_html())
            ))
            .await?;
        Ok(())
    }
}

/// 标签页的 sessionStorage
pub struct SessionStorage<'a> {
    executor: &'a JsExecutor,
}

impl<'a> SessionStorage<'a> {
    pub fn new(executor: &'a JsExecutor) -> Self {
        Self { executor }
    }
}

impl HandoffStore for SessionStorage<'_> {
    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let written: Result<bool, String> = self
            .executor
            .eval_as(format!(
                r#"(() => {{
                    try {{
                        sessionStorage.setItem({}, {});
                        return {{ Ok: true }};
                    }} catch (err) {{
                        return {{ Err: String(err) }};
                    }}
                }})()"#,
                js_string(key),
                js_string(value)
            ))
            .await?;

        written.map(|_| ()).map_err(|reason| {
            AppError::Handoff(HandoffError::WriteFailed {
                key: key.to_string(),
                reason,
            })
        })
    }

    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        let stored: Vec<String> = self
            .executor
            .eval_as(format!(
                r#"(() => {{
                    const value = sessionStorage.getItem({});
                    return value === null ? [] : [value];
                }})()"#,
                js_string(key)
            ))
            .await?;
        Ok(stored.into_iter().next())
    }
}

/// 通过浏览器跳转到站内路径
pub struct PageNavigator<'a> {
    executor: &'a JsExecutor,
    config: &'a Config,
}

impl<'a> PageNavigator<'a> {
    pub fn new(executor: &'a JsExecutor, config: &'a Config) -> Self {
        Self { executor, config }
    }
}

impl Navigator for PageNavigator<'_> {
    async fn navigate(&self, path: &str) -> AppResult<()> {
        self.executor.goto(&self.config.url_for(path)).await
    }
}
