/// 判分接口客户端
///
/// 封装 `POST /checkanswers` 的调用逻辑
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{Answer, AnswerResult};

/// 判分能力
///
/// 一次调用对应一次网络请求，不做重试
#[allow(async_fn_in_trait)]
pub trait ScoringClient {
    async fn check_answers(&self, answers: &[Answer]) -> Result<Vec<AnswerResult>, ApiError>;
}

impl<T: ScoringClient> ScoringClient for &T {
    async fn check_answers(&self, answers: &[Answer]) -> Result<Vec<AnswerResult>, ApiError> {
        (**self).check_answers(answers).await
    }
}

/// 基于 HTTP 的判分客户端
pub struct HttpScoringClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpScoringClient {
    /// 创建新的判分客户端
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_endpoint(
            config.check_answers_url(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// 使用自定义地址和超时创建
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let endpoint = endpoint.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::from_reqwest(endpoint.clone(), e))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScoringClient for HttpScoringClient {
    async fn check_answers(&self, answers: &[Answer]) -> Result<Vec<AnswerResult>, ApiError> {
        debug!("提交 {} 个答案到 {}", answers.len(), self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(answers)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("判分接口返回错误状态: {}", status);
            return Err(ApiError::BadStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_reqwest(&self.endpoint, e))?;

        let results: Vec<AnswerResult> =
            serde_json::from_slice(&body).map_err(|source| ApiError::JsonParseFailed { source })?;

        debug!("判分接口返回 {} 条结果", results.len());
        Ok(results)
    }
}
