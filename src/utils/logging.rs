//! 日志工具模块
//!
//! 提供日志初始化以及批次进度输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(docx_path: &str, output_path: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - text.ru 批量原创度检测");
    info!("📄 输入文档: {}", docx_path);
    info!("📊 输出报告: {}", output_path);
    info!("{}", "=".repeat(60));
}

/// 记录文章加载信息
pub fn log_articles_loaded(total: usize) {
    info!("✓ 找到 {} 篇待检测的文章", total);
    info!("💡 逐篇提交，每篇最多等待约 60 秒\n");
}

/// 记录单篇文章开始
///
/// # 参数
/// - `index`: 文章序号（从1开始）
/// - `total`: 文章总数
/// - `text`: 文章内容（日志中截断显示）
pub fn log_article_start(index: usize, total: usize, text: &str) {
    info!("\n{}", "─".repeat(60));
    info!("🔍 正在检测文章 {}/{}: {}", index, total, truncate_text(text, 30));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `output_path`: 报告路径
pub fn print_final_stats(success: usize, failed: usize, total: usize, output_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_path);
}

/// 截断长文本用于日志显示，换行替换为空格
pub fn truncate_text(text: &str, max_len: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > max_len {
        flat.chars().take(max_len).collect::<String>() + "..."
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("короткий", 30), "короткий");
        assert_eq!(truncate_text("абвгдеж", 3), "абв...");
        assert_eq!(truncate_text("строка\nвторая", 30), "строка вторая");
    }
}
