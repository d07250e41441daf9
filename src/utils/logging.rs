/// 日志工具模块
///
/// 提供运行横幅和统计输出的辅助函数
use tracing::info;

use crate::config::Config;
use crate::models::{JobPosting, Source};

/// 记录程序启动信息
pub fn log_startup(config: &Config, source_labels: &[String]) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 职位搜索模式");
    info!("🔑 关键词: {}", config.keywords.join(", "));
    if config.locations.is_empty() {
        info!("📍 地点: 不限");
    } else {
        info!("📍 地点: {}", config.locations.join(", "));
    }
    info!("🌐 网站: {}", source_labels.join(", "));
    info!("📊 每个网站最多 {} 条", config.max_results_per_source);
    info!("{}", "=".repeat(60));
}

/// 记录一轮搜索的规模
///
/// # 参数
/// - `keywords`: 关键词数量
/// - `locations`: 地点数量（0 视为 1）
/// - `sources`: 网站数量
pub fn log_search_start(keywords: usize, locations: usize, sources: usize) {
    let total = keywords * locations.max(1) * sources;
    info!("\n📦 开始搜索: 共 {} 次网站查询", total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `postings`: 去重后的职位
/// - `output`: 导出文件路径（未导出时为 `None`）
pub fn print_final_stats(postings: &[JobPosting], output: Option<&str>) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部搜索完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 职位总数: {}", postings.len());
    for source in Source::BUILT_IN.iter().chain([Source::Generic].iter()) {
        let count = postings.iter().filter(|p| p.source == *source).count();
        if count > 0 {
            info!("   {}: {}", source.name(), count);
        }
    }
    info!("{}", "=".repeat(60));
    match output {
        Some(path) => info!("\n结果已保存至: {}", path),
        None => info!("\n没有结果需要保存"),
    }
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
