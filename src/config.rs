use std::path::Path;

use serde::Deserialize;

use crate::error::{AppResult, ConfigError};

/// 程序配置
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 答题服务地址（不含路径）
    pub server_base_url: String,
    /// 答题页路径
    pub quiz_path: String,
    /// 每局题目数量
    pub quiz_amount: u32,
    /// 判分接口路径
    pub check_answers_path: String,
    /// 结果页路径
    pub results_path: String,
    /// 判分请求超时（秒）
    pub request_timeout_secs: u64,
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_base_url: "http://localhost:8080".to_string(),
            quiz_path: "/play".to_string(),
            quiz_amount: 5,
            check_answers_path: "/checkanswers".to_string(),
            results_path: "/results".to_string(),
            request_timeout_secs: 15,
            browser_debug_port: 9222,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 先读取 TOML 配置文件，再用环境变量覆盖
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = config.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            server_base_url: std::env::var("TRIVIA_SERVER_URL").unwrap_or(self.server_base_url),
            quiz_path: std::env::var("TRIVIA_QUIZ_PATH").unwrap_or(self.quiz_path),
            quiz_amount: std::env::var("TRIVIA_QUIZ_AMOUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(self.quiz_amount),
            check_answers_path: std::env::var("TRIVIA_CHECK_ANSWERS_PATH").unwrap_or(self.check_answers_path),
            results_path: std::env::var("TRIVIA_RESULTS_PATH").unwrap_or(self.results_path),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.request_timeout_secs),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(self.browser_debug_port),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 检查配置项
    pub fn validate(&self) -> AppResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "request_timeout_secs".to_string(),
                reason: "必须大于 0".to_string(),
            }
            .into());
        }
        for (name, path) in [
            ("quiz_path", &self.quiz_path),
            ("check_answers_path", &self.check_answers_path),
            ("results_path", &self.results_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("路径必须以 / 开头: {}", path),
                }
                .into());
            }
        }
        Ok(())
    }

    /// 拼接完整 URL
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server_base_url.trim_end_matches('/'), path)
    }

    pub fn quiz_url(&self) -> String {
        format!("{}?amount={}", self.url_for(&self.quiz_path), self.quiz_amount)
    }

    pub fn check_answers_url(&self) -> String {
        self.url_for(&self.check_answers_path)
    }
}
