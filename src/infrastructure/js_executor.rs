//! JS 执行器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"执行 JS"和"跳转"的能力

use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AppError, AppResult, PageError};

/// JS 执行器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 eval_as() / goto() 能力
/// - 不认识题目和结果
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    /// 创建新的 JS 执行器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> AppResult<T> {
        let result = self.page.evaluate(js_code.into()).await?;
        result.into_value().map_err(|e| {
            AppError::Page(PageError::ScriptFailed {
                source: Box::new(e),
            })
        })
    }

    /// 跳转到指定 URL 并等待加载完成
    pub async fn goto(&self, url: &str) -> AppResult<()> {
        debug!("页面跳转: {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        Ok(())
    }
}

/// 把字符串编码成 JS 字面量，用于拼接脚本
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"ok\"\n"), r#""it's \"ok\"\n""#);
        assert_eq!(js_string("</script>"), r#""</script>""#);
    }
}
