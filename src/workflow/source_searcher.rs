//! 单个网站的搜索流程 - 流程层
//!
//! 流程顺序：
//! 1. 打开结果页（URL 直达，或填写首页表单）
//! 2. 等待网站的标志元素出现
//! 3. 滚动加载更多结果
//! 4. 查询职位卡片（依次尝试卡片选择器）
//! 5. 逐张卡片提取字段
//!
//! 任何一步失败都只记录日志并返回空列表或已收集的部分，不会向上抛出

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::DriverResult;
use crate::infrastructure::DriverSession;
use crate::models::{JobPosting, Navigation, SearchRequest, SourceProfile};
use crate::services::{FieldExtractor, ScrollLoader};
use crate::workflow::search_ctx::SearchCtx;

/// 搜索流程中的等待时间
#[derive(Debug, Clone, Copy)]
pub struct SearchTimings {
    /// 等待元素的超时时间
    pub wait_timeout: Duration,
    /// 导航或提交后等待页面渲染的时间
    pub page_load_delay: Duration,
}

impl SearchTimings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            wait_timeout: config.wait_timeout,
            page_load_delay: config.page_load_delay,
        }
    }
}

/// 单个网站的搜索流程
///
/// - 不持有浏览器（由调用方传入会话）
/// - 只依赖网站配置和业务能力（services）
pub struct SourceSearcher {
    profile: SourceProfile,
    timings: SearchTimings,
    loader: ScrollLoader,
}

impl SourceSearcher {
    pub fn new(profile: SourceProfile, config: &Config) -> Self {
        Self::with_parts(
            profile,
            SearchTimings::from_config(config),
            ScrollLoader::new(config.settle_interval, config.max_scroll_rounds),
        )
    }

    pub fn with_parts(profile: SourceProfile, timings: SearchTimings, loader: ScrollLoader) -> Self {
        Self {
            profile,
            timings,
            loader,
        }
    }

    pub fn profile(&self) -> &SourceProfile {
        &self.profile
    }

    /// 执行一次搜索
    ///
    /// 永远不会失败：出错时返回空列表
    pub async fn search<D: DriverSession>(&self, driver: &D, request: &SearchRequest) -> Vec<JobPosting> {
        let ctx = SearchCtx::new(&self.profile.label, request);
        info!("{} 🔍 开始搜索", ctx);

        match self.run(driver, request, &ctx).await {
            Ok(jobs) => {
                info!("{} ✓ 成功提取 {} 个职位", ctx, jobs.len());
                jobs
            }
            Err(e) if e.is_timeout() => {
                warn!("{} ⚠️ {}，页面结构可能已变化，返回空结果", ctx, e);
                Vec::new()
            }
            Err(e) => {
                error!("{} ❌ 搜索失败: {}", ctx, e);
                Vec::new()
            }
        }
    }

    async fn run<D: DriverSession>(
        &self,
        driver: &D,
        request: &SearchRequest,
        ctx: &SearchCtx,
    ) -> DriverResult<Vec<JobPosting>> {
        self.open_results(driver, request, ctx).await?;

        if let Some(marker) = &self.profile.ready_marker {
            driver.wait_for(marker, self.timings.wait_timeout).await?;
            debug!("{} 结果页已加载", ctx);
        }

        let stop = self.loader.load_more(driver, request.max_results).await;
        debug!("{} 滚动加载: {:?}", ctx, stop);

        let cards = self.find_cards(driver, ctx).await;
        let extractor = FieldExtractor::new(self.profile.source, &self.profile.extraction);

        let mut jobs = Vec::new();
        for (index, card) in cards.iter().take(request.max_results).enumerate() {
            match extractor.extract(driver, card).await {
                Some(posting) => jobs.push(posting),
                None => debug!("{} 第 {} 张卡片没有有效标题，已跳过", ctx, index + 1),
            }
        }

        Ok(jobs)
    }

    /// 进入搜索结果页
    async fn open_results<D: DriverSession>(
        &self,
        driver: &D,
        request: &SearchRequest,
        ctx: &SearchCtx,
    ) -> DriverResult<()> {
        match &self.profile.navigation {
            Navigation::Page(url) => self.goto(driver, url, ctx).await,
            Navigation::Url(template) => {
                let url = template.build(&request.keyword, &request.location);
                self.goto(driver, &url, ctx).await
            }
            Navigation::Form {
                home_url,
                keyword_input,
                location_input,
                fallback,
            } => {
                self.goto(driver, home_url, ctx).await?;

                let input = match driver.wait_for(keyword_input, self.timings.wait_timeout).await {
                    Ok(input) => input,
                    Err(e) => match fallback {
                        Some(template) => {
                            warn!("{} ⚠️ 未找到搜索框，改用搜索 URL", ctx);
                            let url = template.build(&request.keyword, &request.location);
                            return self.goto(driver, &url, ctx).await;
                        }
                        None => return Err(e),
                    },
                };

                driver.clear_and_type(&input, &request.keyword).await?;

                if let (true, Some(selector)) = (request.has_location(), location_input) {
                    match driver.find_first(selector).await {
                        Ok(Some(location)) => {
                            driver.clear_and_type(&location, &request.location).await?
                        }
                        _ => info!("{} 未找到地点输入框，只按关键词搜索", ctx),
                    }
                }

                driver.submit(&input).await?;
                sleep(self.timings.page_load_delay).await;
                Ok(())
            }
        }
    }

    async fn goto<D: DriverSession>(&self, driver: &D, url: &str, ctx: &SearchCtx) -> DriverResult<()> {
        info!("{} 打开: {}", ctx, url);
        driver.navigate(url).await?;
        sleep(self.timings.page_load_delay).await;
        Ok(())
    }

    /// 依次尝试卡片选择器，第一个有结果的生效
    async fn find_cards<D: DriverSession>(&self, driver: &D, ctx: &SearchCtx) -> Vec<D::Element> {
        for selector in &self.profile.card_selectors {
            match driver.find_all(selector).await {
                Ok(cards) if !cards.is_empty() => {
                    info!("{} 使用选择器 '{}' 找到 {} 张卡片", ctx, selector, cards.len());
                    return cards;
                }
                Ok(_) => continue,
                Err(e) => {
                    debug!("{} 卡片选择器 '{}' 查找失败: {}", ctx, selector, e);
                    continue;
                }
            }
        }

        warn!("{} ⚠️ 没有找到任何职位卡片", ctx);
        Vec::new()
    }
}
