use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 页面（DOM）相关错误
    #[error("页面错误: {0}")]
    Page(#[from] PageError),
    /// 评分接口调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 跨页面交接数据错误
    #[error("交接数据错误: {0}")]
    Handoff(#[from] HandoffError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
}

/// 页面相关错误
#[derive(Debug, Error)]
pub enum PageError {
    /// 页面缺少必需的元素
    #[error("页面缺少必需元素: {}", .ids.join(", "))]
    MissingElements { ids: Vec<String> },
    /// 执行页面脚本失败
    #[error("执行脚本失败: {source}")]
    ScriptFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 评分接口错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（连接、传输）
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 请求超时
    #[error("API请求超时 ({endpoint})")]
    Timeout { endpoint: String },
    /// 服务器返回非成功状态码
    #[error("API返回错误状态 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// 响应体无法解析
    #[error("JSON解析失败: {source}")]
    JsonParseFailed {
        #[source]
        source: serde_json::Error,
    },
}

/// 交接数据错误
#[derive(Debug, Error)]
pub enum HandoffError {
    /// 存储的内容不是合法的结果集
    #[error("结果数据格式错误: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
    /// 版本号高于当前支持的版本
    #[error("不支持的交接数据版本: {found} (当前支持 {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
    /// 结果集无法序列化
    #[error("结果数据序列化失败: {source}")]
    EncodeFailed {
        #[source]
        source: serde_json::Error,
    },
    /// 写入存储失败
    #[error("写入存储失败 (键: {key}): {reason}")]
    WriteFailed { key: String, reason: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 配置值不合法
    #[error("配置项 {name} 不合法: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 连接浏览器失败
    #[error("无法连接到浏览器 (端口: {port}): {source}")]
    ConnectionFailed {
        port: u16,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    NavigationFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Page(PageError::ScriptFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建缺少页面元素错误
    pub fn missing_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AppError::Page(PageError::MissingElements {
            ids: ids.into_iter().map(Into::into).collect(),
        })
    }

    /// 创建浏览器连接错误
    pub fn browser_connection_failed(
        port: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::ConnectionFailed {
            port,
            source: Box::new(source),
        })
    }

    /// 创建导航失败错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 拼接页面脚本时参数编码失败
    pub fn script_encoding(source: serde_json::Error) -> Self {
        AppError::Page(PageError::ScriptFailed {
            source: Box::new(source),
        })
    }

    /// 是否属于页面配置错误（缺少元素）
    pub fn is_page_misconfigured(&self) -> bool {
        matches!(self, AppError::Page(PageError::MissingElements { .. }))
    }
}

impl ApiError {
    /// 从 reqwest 错误构造，区分超时
    pub fn from_reqwest(endpoint: impl Into<String>, err: reqwest::Error) -> Self {
        let endpoint = endpoint.into();
        if err.is_timeout() {
            ApiError::Timeout { endpoint }
        } else {
            ApiError::RequestFailed {
                endpoint,
                source: Box::new(err),
            }
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_elements_message_lists_ids() {
        let err = AppError::missing_elements(["trivia-form", "submit-button"]);
        assert!(err.is_page_misconfigured());
        assert_eq!(
            err.to_string(),
            "页面错误: 页面缺少必需元素: trivia-form, submit-button"
        );
    }

    #[test]
    fn test_script_encoding_error_is_page_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = AppError::script_encoding(json_err);
        assert!(matches!(err, AppError::Page(PageError::ScriptFailed { .. })));
        assert!(!err.is_page_misconfigured());
    }
}
