use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::error::{AppError, AppResult};

/// 连接到浏览器并获取页面
///
/// 优先复用地址包含 `match_url` 的已打开页面（用户正在作答的那一页），
/// 找不到时新建页面并打开 `open_url`
pub async fn connect_to_browser_and_page(
    port: u16,
    open_url: &str,
    match_url: Option<&str>,
) -> AppResult<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);
    debug!("打开地址: {}, 匹配地址: {:?}", open_url, match_url);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        error!("连接浏览器失败: {}", e);
        AppError::browser_connection_failed(port, e)
    })?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    if let Some(fragment) = match_url {
        for p in pages.iter() {
            if let Ok(Some(url)) = p.url().await {
                debug!("检查页面: {}", url);
                if url.contains(fragment) {
                    info!("✓ 找到答题页面: {}", url);
                    return Ok((browser, p.clone()));
                }
            }
        }
        debug!("未找到匹配的页面，将创建新页面");
    }

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建新页面失败: {}", e);
        e
    })?;
    page.goto(open_url).await.map_err(|e| {
        error!("导航到 {} 失败: {}", open_url, e);
        AppError::navigation_failed(open_url, e)
    })?;
    info!("已导航到: {}", open_url);

    Ok((browser, page))
}
