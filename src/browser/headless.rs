use std::path::Path;

use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::config::BrowserSettings;
use crate::error::BrowserError;

/// 启动浏览器并打开一个空白页面
pub async fn launch_headless_browser(settings: &BrowserSettings) -> Result<(Browser, Page)> {
    info!("🚀 启动浏览器 (无头模式: {})...", settings.headless);

    let mut builder = BrowserConfig::builder().window_size(1920, 1080);
    builder = if settings.headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };
    if let Some(executable) = &settings.chrome_executable {
        debug!("使用浏览器: {}", executable);
        builder = builder.chrome_executable(Path::new(executable));
    }

    let config = builder
        .args(vec![
            "--no-sandbox".to_string(),            // 禁用沙盒，防止权限问题导致的崩溃
            "--disable-dev-shm-usage".to_string(), // 防止共享内存不足
            "--disable-gpu".to_string(),
            format!("--user-agent={}", settings.user_agent),
        ])
        .build()
        .map_err(|e| {
            error!("配置浏览器失败: {}", e);
            BrowserError::LaunchFailed { source: e.into() }
        })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动浏览器失败: {}", e);
        BrowserError::LaunchFailed { source: Box::new(e) }
    })?;
    debug!("浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建页面失败: {}", e);
        BrowserError::LaunchFailed { source: Box::new(e) }
    })?;

    info!("✅ 浏览器已就绪");
    Ok((browser, page))
}
