//! 应用入口 - 编排层
//!
//! 1. **准备网站**：内置网站 + 可选的 TOML 通用网站
//! 2. **准备关键词**：未配置时可从简历中让 LLM 生成
//! 3. **批量搜索**：交给 `BatchCoordinator`
//! 4. **导出**：写出表格文件（空结果不导出）

use std::path::Path;

use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::infrastructure::ChromeLauncher;
use crate::models::{catalog, load_generic_sources, JobPosting, SourceProfile};
use crate::orchestrator::BatchCoordinator;
use crate::services::{split_keywords, Exporter, KeywordService};
use crate::utils::{log_search_start, log_startup, print_final_stats, truncate_text};
use crate::workflow::SourceSearcher;

/// 应用主结构
pub struct App {
    config: Config,
    profiles: Vec<SourceProfile>,
}

impl App {
    /// 初始化应用：解析网站配置和关键词
    pub async fn initialize(mut config: Config) -> Result<Self> {
        let profiles = load_profiles(&config).await?;
        if profiles.is_empty() {
            bail!("没有可用的招聘网站");
        }

        if config.keywords.is_empty() {
            config.keywords = keywords_from_cv(&config).await?;
        }

        let labels: Vec<String> = profiles.iter().map(|p| p.label.clone()).collect();
        log_startup(&config, &labels);

        Ok(Self { config, profiles })
    }

    /// 运行应用主逻辑
    ///
    /// 返回去重后的职位
    pub async fn run(self) -> Result<Vec<JobPosting>> {
        let Self { config, profiles } = self;

        let searchers: Vec<SourceSearcher> = profiles
            .into_iter()
            .map(|profile| SourceSearcher::new(profile, &config))
            .collect();

        let coordinator = BatchCoordinator::new(
            ChromeLauncher::new(config.browser.clone()),
            searchers,
            config.max_results_per_source,
            config.source_pause,
        );

        log_search_start(
            config.keywords.len(),
            config.locations.len(),
            coordinator.source_count(),
        );

        let postings = coordinator.run(&config.keywords, &config.locations).await?;

        let output = if postings.is_empty() {
            warn!("⚠️ 没有找到任何职位，跳过导出");
            None
        } else {
            let path = Exporter::new().export(&postings, config.output_file.as_deref())?;
            Some(path.display().to_string())
        };

        print_final_stats(&postings, output.as_deref());
        Ok(postings)
    }
}

/// 内置网站 + TOML 通用网站
async fn load_profiles(config: &Config) -> Result<Vec<SourceProfile>> {
    let mut profiles: Vec<SourceProfile> = config
        .sources
        .iter()
        .filter_map(|source| catalog::built_in(*source))
        .collect();

    if let Some(file) = &config.generic_sources_file {
        let generic = load_generic_sources(Path::new(file)).await?;
        info!("📁 从 {} 加载了 {} 个通用网站", file, generic.len());
        profiles.extend(generic);
    }

    Ok(profiles)
}

/// 从简历生成关键词
async fn keywords_from_cv(config: &Config) -> Result<Vec<String>> {
    let Some(cv_path) = &config.cv_path else {
        bail!("未配置关键词（JOB_KEYWORDS），也没有可用于生成关键词的简历（CV_PATH）");
    };

    info!("🤖 正在根据简历生成关键词: {}", cv_path);
    let raw = KeywordService::new(config)
        .suggest_keywords(Path::new(cv_path))
        .await?;
    info!("LLM 回复: {}", truncate_text(&raw, 120));

    let keywords = split_keywords(&raw)?;
    if keywords.is_empty() {
        bail!("LLM 没有返回可用的关键词");
    }
    Ok(keywords)
}
