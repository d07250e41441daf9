//! 批量搜索协调器 - 编排层
//!
//! ## 职责
//!
//! 1. **组合请求**：关键词 × 地点 × 网站
//! 2. **资源管理**：第一次需要时才打开浏览器会话，结束时只释放一次
//! 3. **礼貌等待**：相邻两次网站查询之间暂停
//! 4. **去重**：按 (标题, 公司) 去重，保留第一次出现的记录
//!
//! 单个网站的失败不会中断整批；只有打开会话失败会向上返回。

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::infrastructure::{DriverSession, SessionFactory};
use crate::models::{JobPosting, SearchRequest};
use crate::workflow::SourceSearcher;

/// 批量搜索协调器
pub struct BatchCoordinator<F: SessionFactory> {
    factory: F,
    searchers: Vec<SourceSearcher>,
    max_results: usize,
    source_pause: Duration,
}

impl<F: SessionFactory> BatchCoordinator<F> {
    pub fn new(
        factory: F,
        searchers: Vec<SourceSearcher>,
        max_results: usize,
        source_pause: Duration,
    ) -> Self {
        Self {
            factory,
            searchers,
            max_results,
            source_pause,
        }
    }

    /// 已启用的网站数量
    pub fn source_count(&self) -> usize {
        self.searchers.len()
    }

    /// 运行整批搜索，返回去重后的职位
    pub async fn run(&self, keywords: &[String], locations: &[String]) -> Result<Vec<JobPosting>> {
        let mut session: Option<F::Session> = None;
        let outcome = self.search_all(&mut session, keywords, locations).await;

        // 无论成功与否都释放会话
        if let Some(session) = session {
            match session.close().await {
                Ok(()) => info!("🔒 浏览器会话已关闭"),
                Err(e) => warn!("⚠️ 关闭浏览器会话失败: {}", e),
            }
        }

        let collected = outcome?;
        let total = collected.len();
        let unique = dedupe_postings(collected);
        info!("📋 共收集 {} 条，去重后 {} 条", total, unique.len());

        Ok(unique)
    }

    async fn search_all(
        &self,
        session: &mut Option<F::Session>,
        keywords: &[String],
        locations: &[String],
    ) -> Result<Vec<JobPosting>> {
        let no_location = [String::new()];
        let locations = if locations.is_empty() {
            &no_location[..]
        } else {
            locations
        };

        let mut collected = Vec::new();
        let mut queried_any = false;

        for keyword in keywords {
            for location in locations {
                let request = match SearchRequest::new(keyword.as_str(), location.as_str(), self.max_results) {
                    Ok(request) => request,
                    Err(e) => {
                        warn!("⚠️ 跳过搜索 '{}' @ '{}': {}", keyword, location, e);
                        continue;
                    }
                };

                for searcher in &self.searchers {
                    if queried_any {
                        sleep(self.source_pause).await;
                    }
                    queried_any = true;

                    let driver = acquire(&self.factory, session).await?;
                    let jobs = searcher.search(driver, &request).await;
                    collected.extend(jobs);
                }
            }
        }

        Ok(collected)
    }
}

/// 第一次使用时才打开会话
async fn acquire<'s, F: SessionFactory>(
    factory: &F,
    slot: &'s mut Option<F::Session>,
) -> Result<&'s F::Session> {
    if slot.is_none() {
        info!("🌐 正在打开浏览器会话...");
        *slot = Some(factory.open().await.context("打开浏览器会话失败")?);
    }
    slot.as_ref().context("浏览器会话不可用")
}

/// 按 (标题, 公司) 去重
///
/// 保留第一次出现的记录，保持原有顺序
pub fn dedupe_postings(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut unique = Vec::with_capacity(postings.len());
    for posting in postings {
        let (title, company) = posting.dedup_key();
        if seen.insert((title.to_owned(), company.to_owned())) {
            unique.push(posting);
        }
    }
    unique
}
