use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tracing::{error, info, warn};

use crate::browser;
use crate::clients::HttpScoringClient;
use crate::config::Config;
use crate::infrastructure::{
    DomQuizPage, DomResultsPage, JsExecutor, PageNavigator, SessionStorage,
};
use crate::utils::logging::{log_startup, print_final_score};
use crate::workflow::{AnswerCollector, RenderOutcome, ResultRenderer, SubmitOutcome};

/// 应用主结构
///
/// 连接到用户正在使用的浏览器，在答题页上执行一次提交，
/// 成功后在结果页上渲染成绩
pub struct App {
    config: Config,
    // 保持 CDP 连接存活
    _browser: Browser,
    executor: JsExecutor,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;
        log_startup(&config);

        let (browser, page) = browser::connect_to_browser_and_page(
            config.browser_debug_port,
            &config.quiz_url(),
            Some(&config.quiz_path),
        )
        .await
        .context("无法获取答题页面")?;

        Ok(Self {
            config,
            _browser: browser,
            executor: JsExecutor::new(page),
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        match self.submit_answers().await? {
            Some(SubmitOutcome::Submitted { .. }) => self.render_results().await,
            Some(SubmitOutcome::Incomplete { missing }) => {
                warn!("⚠️ 还有 {} 道题未作答，请在页面上完成后重新运行", missing.len());
                Ok(())
            }
            Some(SubmitOutcome::Failed { reason }) => {
                warn!("⚠️ 提交失败，可以重新运行重试: {}", reason);
                Ok(())
            }
            Some(SubmitOutcome::InFlight) | None => Ok(()),
        }
    }

    /// 只渲染结果页（结果已由页面自己的脚本写入）
    pub async fn render_only(&self) -> Result<()> {
        info!("📄 仅渲染结果页");
        self.executor
            .goto(&self.config.url_for(&self.config.results_path))
            .await?;
        self.render_results().await
    }

    /// 答题页：收集并提交答案
    async fn submit_answers(&self) -> Result<Option<SubmitOutcome>> {
        let form = DomQuizPage::new(&self.executor);
        let client = HttpScoringClient::new(&self.config).context("无法创建判分客户端")?;
        let store = SessionStorage::new(&self.executor);
        let navigator = PageNavigator::new(&self.executor, &self.config);

        let collector = AnswerCollector::new(form, client, store, navigator)
            .with_results_path(&self.config.results_path);

        match collector.submit().await {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) if e.is_page_misconfigured() => {
                error!("❌ 答题页结构不完整，无法提交: {}", e);
                Ok(None)
            }
            Err(e) => Err(e).context("提交答案时页面操作失败"),
        }
    }

    /// 结果页：渲染成绩
    async fn render_results(&self) -> Result<()> {
        let store = SessionStorage::new(&self.executor);
        let view = DomResultsPage::new(&self.executor);
        let renderer = ResultRenderer::new(store, view);

        match renderer.render().await {
            Ok(RenderOutcome::Rendered { summary }) => {
                print_final_score(&summary);
                Ok(())
            }
            Ok(RenderOutcome::NoResults) => {
                warn!("⚠️ 结果页没有读到判分结果");
                Ok(())
            }
            Ok(RenderOutcome::Malformed) => {
                warn!("⚠️ 结果页的判分结果已损坏");
                Ok(())
            }
            Err(e) if e.is_page_misconfigured() => {
                error!("❌ 结果页结构不完整，无法渲染: {}", e);
                Ok(())
            }
            Err(e) => Err(e).context("渲染结果时页面操作失败"),
        }
    }
}
