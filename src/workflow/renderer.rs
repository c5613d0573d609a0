//! 结果渲染流程 - 流程层
//!
//! 结果页加载时执行一次：读取交接数据，渲染汇总和逐题卡片。
//! 渲染只追加内容，不做更新或删除。

use tracing::{info, warn};

use crate::error::AppResult;
use crate::infrastructure::{HandoffStore, ResultsView};
use crate::models::{ResultHandoff, ScoreSummary, RESULTS_STORAGE_KEY};
use crate::services::markup::{
    NoticeLevel, ResultCard, MALFORMED_RESULTS_MESSAGE, NO_RESULTS_MESSAGE,
};

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { summary: ScoreSummary },
    /// 存储里没有结果，只显示"先去答题"的提示
    NoResults,
    /// 存储里的结果无法解析，只显示错误提示
    Malformed,
}

pub struct ResultRenderer<S, V> {
    store: S,
    view: V,
}

impl<S, V> ResultRenderer<S, V>
where
    S: HandoffStore,
    V: ResultsView,
{
    pub fn new(store: S, view: V) -> Self {
        Self { store, view }
    }

    pub async fn render(&self) -> AppResult<RenderOutcome> {
        self.view.verify_layout().await?;

        let Some(raw) = self.store.read(RESULTS_STORAGE_KEY).await? else {
            info!("没有找到判分结果");
            self.view
                .show_notice(NoticeLevel::Warning, NO_RESULTS_MESSAGE)
                .await?;
            return Ok(RenderOutcome::NoResults);
        };

        let handoff = match ResultHandoff::from_json(&raw) {
            Ok(handoff) => handoff,
            Err(e) => {
                warn!("⚠️ 判分结果无法解析: {}", e);
                self.view
                    .show_notice(NoticeLevel::Danger, MALFORMED_RESULTS_MESSAGE)
                    .await?;
                return Ok(RenderOutcome::Malformed);
            }
        };

        let summary = ScoreSummary::from_results(&handoff.results);
        self.view.show_summary(&summary).await?;

        for (index, result) in handoff.results.iter().enumerate() {
            self.view
                .append_card(&ResultCard::from_result(index, result))
                .await?;
        }

        info!("📊 成绩: {}", summary);
        Ok(RenderOutcome::Rendered { summary })
    }
}
