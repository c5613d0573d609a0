//! 答案收集流程 - 流程层
//!
//! 一次提交的完整流程：
//! 1. 检查页面元素
//! 2. 按页面顺序收集每道题的选项，有未作答的题目则提示并结束
//! 3. 隐藏错误提示，禁用提交按钮
//! 4. 请求判分接口（只请求一次，不自动重试）
//! 5. 成功：写入交接数据并跳转结果页
//! 6. 失败：显示提交失败提示，恢复提交按钮

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info, warn};

use crate::clients::ScoringClient;
use crate::error::AppResult;
use crate::infrastructure::{
    HandoffStore, Navigator, QuizForm, SUBMISSION_ERROR_MESSAGE, VALIDATION_MESSAGE,
};
use crate::models::{Answer, AnswerResult, ResultHandoff, RESULTS_STORAGE_KEY};
use crate::utils::logging::truncate_text;

/// 默认结果页路径
pub const DEFAULT_RESULTS_PATH: &str = "/results";

/// 收集结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    /// 所有题目都已作答（页面顺序）
    Complete(Vec<Answer>),
    /// 有题目未作答
    Incomplete { missing: Vec<String> },
}

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 判分成功，已写入交接数据并跳转
    Submitted { results: usize },
    /// 有题目未作答，未发出请求
    Incomplete { missing: Vec<String> },
    /// 请求或交接失败，按钮已恢复，可重试
    Failed { reason: String },
    /// 上一次提交尚未结束
    InFlight,
}

/// 答案收集器
pub struct AnswerCollector<F, C, S, N> {
    form: F,
    client: C,
    store: S,
    navigator: N,
    results_path: String,
    in_flight: AtomicBool,
}

/// 提交进行中的标记，离开作用域时自动清除
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<F, C, S, N> AnswerCollector<F, C, S, N>
where
    F: QuizForm,
    C: ScoringClient,
    S: HandoffStore,
    N: Navigator,
{
    pub fn new(form: F, client: C, store: S, navigator: N) -> Self {
        Self {
            form,
            client,
            store,
            navigator,
            results_path: DEFAULT_RESULTS_PATH.to_string(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_results_path(mut self, path: impl Into<String>) -> Self {
        self.results_path = path.into();
        self
    }

    /// 按页面顺序收集答案
    ///
    /// 页面上没有任何题目时视为未完成（没有可提交的内容）
    pub async fn collect(&self) -> AppResult<Collection> {
        let question_ids = self.form.question_ids().await?;
        let mut answers = Vec::with_capacity(question_ids.len());
        let mut missing = Vec::new();

        for question_id in question_ids {
            match self.form.selected_answer(&question_id).await? {
                Some(selected) => answers.push(Answer::new(question_id, selected)),
                None => missing.push(question_id),
            }
        }

        if answers.is_empty() && missing.is_empty() {
            warn!("⚠️ 页面上没有题目");
            return Ok(Collection::Incomplete { missing });
        }

        if missing.is_empty() {
            Ok(Collection::Complete(answers))
        } else {
            Ok(Collection::Incomplete { missing })
        }
    }

    /// 执行一次提交
    ///
    /// 页面缺少必需元素时返回错误；网络和解析错误都转为 `SubmitOutcome::Failed`
    pub async fn submit(&self) -> AppResult<SubmitOutcome> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            info!("⏳ 上一次提交尚未完成，忽略本次提交");
            return Ok(SubmitOutcome::InFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        self.form.verify_layout().await?;

        let answers = match self.collect().await? {
            Collection::Complete(answers) => answers,
            Collection::Incomplete { missing } => {
                warn!("⚠️ 有 {} 道题未作答，取消提交", missing.len());
                self.form.show_error(VALIDATION_MESSAGE).await?;
                return Ok(SubmitOutcome::Incomplete { missing });
            }
        };

        self.form.hide_error().await?;
        self.form.set_submit_busy().await?;

        info!("📤 正在提交 {} 个答案...", answers.len());
        for answer in &answers {
            debug!(
                "  {} → {}",
                answer.question_id,
                truncate_text(&answer.selected_answer, 40)
            );
        }

        match self.exchange(&answers).await {
            Ok(results) => {
                info!("✓ 判分完成，共 {} 条结果，已跳转到 {}", results, self.results_path);
                Ok(SubmitOutcome::Submitted { results })
            }
            Err(e) => {
                error!("❌ 提交答案失败: {}", e);
                // 两步都要执行，提示失败时按钮也必须恢复
                let restored = self.form.restore_submit().await;
                let shown = self.form.show_error(SUBMISSION_ERROR_MESSAGE).await;
                restored.and(shown)?;
                Ok(SubmitOutcome::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// 请求判分 → 写入交接数据 → 跳转
    async fn exchange(&self, answers: &[Answer]) -> AppResult<usize> {
        let results = self.client.check_answers(answers).await?;
        log_misaligned_results(answers, &results);

        let handoff = ResultHandoff::new(results);
        let json = handoff.to_json()?;
        self.store.write(RESULTS_STORAGE_KEY, &json).await?;
        self.navigator.navigate(&self.results_path).await?;

        Ok(handoff.results.len())
    }
}

/// 结果与提交的题目对不上时记录警告（顺序保持服务器返回的顺序）
fn log_misaligned_results(answers: &[Answer], results: &[AnswerResult]) {
    let in_order = answers.len() == results.len()
        && answers
            .iter()
            .zip(results)
            .all(|(a, r)| a.question_id == r.question_id);
    if in_order {
        return;
    }

    let submitted: HashSet<&str> = answers.iter().map(|a| a.question_id.as_str()).collect();
    let returned: HashSet<&str> = results.iter().map(|r| r.question_id.as_str()).collect();
    if submitted == returned {
        warn!("⚠️ 判分结果顺序与提交顺序不一致，按返回顺序展示");
    } else {
        warn!(
            "⚠️ 判分结果与提交的题目不一致: 提交 {} 题，返回 {} 条",
            answers.len(),
            results.len()
        );
    }
}
