/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::ScoreSummary;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 答题服务: {}", config.server_base_url);
    info!("⏱️ 判分超时: {} 秒", config.request_timeout_secs);
    info!("{}", "=".repeat(60));
}

/// 打印最终成绩
pub fn print_final_score(summary: &ScoreSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 本局成绩");
    info!("{}", "=".repeat(60));
    info!("✅ 答对: {}", summary.fraction());
    match (summary.percentage, summary.tier()) {
        (Some(pct), Some(tier)) => info!("🎯 得分: {}% ({})", pct, tier.css_name()),
        _ => info!("🎯 得分: N/A"),
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
