//! 内存实现
//!
//! 不依赖浏览器的页面能力实现，记录下每一次页面变化，便于断言。

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::infrastructure::capabilities::{
    HandoffStore, Navigator, QuizForm, ResultsView, BUSY_LABEL, SUBMIT_LABEL,
};
use crate::models::ScoreSummary;
use crate::services::markup::{notice_html, summary_html, NoticeLevel, ResultCard};

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug)]
struct QuizState {
    questions: Vec<(String, Option<String>)>,
    error_visible: bool,
    error_text: String,
    submit_disabled: bool,
    submit_label: String,
    // 进入提交中状态前的按钮文字
    original_label: Option<String>,
}

/// 内存答题页
#[derive(Debug)]
pub struct MemoryQuizPage {
    state: Mutex<QuizState>,
    missing: Vec<String>,
    error_element_lost: bool,
}

impl Default for MemoryQuizPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryQuizPage {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QuizState {
                questions: Vec::new(),
                error_visible: false,
                error_text: String::new(),
                submit_disabled: false,
                submit_label: SUBMIT_LABEL.to_string(),
                original_label: None,
            }),
            missing: Vec::new(),
            error_element_lost: false,
        }
    }

    /// 页面模板自带的按钮文字
    pub fn with_submit_label(self, label: impl Into<String>) -> Self {
        lock(&self.state).submit_label = label.into();
        self
    }

    /// 模拟错误提示元素在提交过程中被移除：`show_error` 会失败
    pub fn with_error_element_lost(mut self) -> Self {
        self.error_element_lost = true;
        self
    }

    /// 添加一道题（`selected` 为 `None` 表示未作答）
    pub fn with_question(self, question_id: impl Into<String>, selected: Option<&str>) -> Self {
        lock(&self.state)
            .questions
            .push((question_id.into(), selected.map(str::to_string)));
        self
    }

    /// 模拟页面缺少某个元素
    pub fn without_element(mut self, id: impl Into<String>) -> Self {
        self.missing.push(id.into());
        self
    }

    /// 模拟用户选择选项
    pub fn select(&self, question_id: &str, answer: &str) {
        let mut state = lock(&self.state);
        if let Some(entry) = state.questions.iter_mut().find(|(id, _)| id == question_id) {
            entry.1 = Some(answer.to_string());
        }
    }

    pub fn error_visible(&self) -> bool {
        lock(&self.state).error_visible
    }

    pub fn error_text(&self) -> String {
        lock(&self.state).error_text.clone()
    }

    pub fn submit_disabled(&self) -> bool {
        lock(&self.state).submit_disabled
    }

    pub fn submit_label(&self) -> String {
        lock(&self.state).submit_label.clone()
    }
}

impl QuizForm for MemoryQuizPage {
    async fn verify_layout(&self) -> AppResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::missing_elements(self.missing.clone()))
        }
    }

    async fn question_ids(&self) -> AppResult<Vec<String>> {
        Ok(lock(&self.state)
            .questions
            .iter()
            .map(|(id, _)| id.clone())
            .collect())
    }

    async fn selected_answer(&self, question_id: &str) -> AppResult<Option<String>> {
        Ok(lock(&self.state)
            .questions
            .iter()
            .find(|(id, _)| id == question_id)
            .and_then(|(_, selected)| selected.clone()))
    }

    async fn show_error(&self, message: &str) -> AppResult<()> {
        if self.error_element_lost {
            return Err(AppError::missing_elements(["error-message"]));
        }
        let mut state = lock(&self.state);
        state.error_text = message.to_string();
        state.error_visible = true;
        Ok(())
    }

    async fn hide_error(&self) -> AppResult<()> {
        lock(&self.state).error_visible = false;
        Ok(())
    }

    async fn set_submit_busy(&self) -> AppResult<()> {
        let mut state = lock(&self.state);
        if state.original_label.is_none() {
            state.original_label = Some(state.submit_label.clone());
        }
        state.submit_disabled = true;
        state.submit_label = BUSY_LABEL.to_string();
        Ok(())
    }

    async fn restore_submit(&self) -> AppResult<()> {
        let mut state = lock(&self.state);
        state.submit_disabled = false;
        state.submit_label = state
            .original_label
            .clone()
            .unwrap_or_else(|| SUBMIT_LABEL.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ResultsState {
    summary_html: String,
    summary_classes: Vec<String>,
    notices: Vec<(NoticeLevel, String)>,
    cards: Vec<ResultCard>,
}

/// 内存结果页
#[derive(Debug, Default)]
pub struct MemoryResultsPage {
    state: Mutex<ResultsState>,
    missing: Vec<String>,
}

impl MemoryResultsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_element(mut self, id: impl Into<String>) -> Self {
        self.missing.push(id.into());
        self
    }

    /// `#score-summary` 的内容
    pub fn summary_html(&self) -> String {
        lock(&self.state).summary_html.clone()
    }

    pub fn summary_classes(&self) -> Vec<String> {
        lock(&self.state).summary_classes.clone()
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        lock(&self.state).notices.clone()
    }

    /// `#result-details` 中的卡片
    pub fn cards(&self) -> Vec<ResultCard> {
        lock(&self.state).cards.clone()
    }

    /// `#result-details` 的内容
    pub fn details_html(&self) -> String {
        lock(&self.state)
            .cards
            .iter()
            .map(ResultCard::to_html)
            .collect()
    }
}

impl ResultsView for MemoryResultsPage {
    async fn verify_layout(&self) -> AppResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::missing_elements(self.missing.clone()))
        }
    }

    async fn show_notice(&self, level: NoticeLevel, message: &str) -> AppResult<()> {
        let mut state = lock(&self.state);
        state.summary_html = notice_html(level, message);
        state.notices.push((level, message.to_string()));
        Ok(())
    }

    async fn show_summary(&self, summary: &ScoreSummary) -> AppResult<()> {
        let mut state = lock(&self.state);
        state.summary_html = summary_html(summary);
        state.summary_classes.push("border".to_string());
        if let Some(tier) = summary.tier() {
            state.summary_classes.push(format!("border-{}", tier.css_name()));
        }
        Ok(())
    }

    async fn append_card(&self, card: &ResultCard) -> AppResult<()> {
        lock(&self.state).cards.push(card.clone());
        Ok(())
    }
}

/// 内存 key-value 存储
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        lock(&self.entries).insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    /// 写入次数
    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }
}

impl HandoffStore for MemoryStore {
    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        lock(&self.entries).insert(key.to_string(), value.to_string());
        *lock(&self.writes) += 1;
        Ok(())
    }

    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.get(key))
    }
}

/// 只记录跳转路径的导航器
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        lock(&self.visited).clone()
    }
}

impl Navigator for RecordingNavigator {
    async fn navigate(&self, path: &str) -> AppResult<()> {
        lock(&self.visited).push(path.to_string());
        Ok(())
    }
}
