use crate::models::profile::{SelectorProfile, SourceProfile};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// TOML 文件中的一个通用网站
#[derive(Debug, Clone, Deserialize)]
pub struct GenericSourceEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub selectors: SelectorProfile,
}

#[derive(Debug, Deserialize)]
struct GenericSourceFile {
    #[serde(default, rename = "source")]
    sources: Vec<GenericSourceEntry>,
}

/// 解析 TOML 文本中的通用网站列表
pub fn parse_generic_sources(content: &str) -> Result<Vec<SourceProfile>> {
    let file: GenericSourceFile = toml::from_str(content)?;

    Ok(file
        .sources
        .iter()
        .map(|entry| SourceProfile::generic(&entry.name, &entry.url, &entry.selectors))
        .collect())
}

/// 从 TOML 文件加载通用网站配置
pub async fn load_generic_sources(path: &Path) -> Result<Vec<SourceProfile>> {
    if !path.exists() {
        anyhow::bail!("文件不存在: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", path.display()))?;

    let profiles = parse_generic_sources(&content)
        .with_context(|| format!("无法解析TOML文件: {}", path.display()))?;

    for profile in &profiles {
        tracing::info!("已加载通用网站: {}", profile.label);
    }

    Ok(profiles)
}
