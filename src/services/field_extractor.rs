//! 字段提取服务 - 业务能力层
//!
//! 把一张职位卡片解析成 `JobPosting`，只处理单张卡片。
//!
//! ## 规则
//!
//! - 固定结构：每个字段只尝试一个选择器
//! - 回退级联：按顺序尝试候选选择器，第一个命中的生效，后面的不再尝试
//! - 标题是唯一的硬性条件：找不到标题元素或标题为空时不产出记录
//! - 其他字段找不到时保持空字符串
//! - 字段提取结束后仍没有链接时，取卡片里第一个 `a[href]`
//! - 任何错误都在本模块内部消化，不向调用方抛出

use tracing::{debug, warn};

use crate::infrastructure::DriverSession;
use crate::models::{Extraction, JobPosting, Source};

/// 兜底链接选择器
const ANY_LINK: &str = "a[href]";

/// 有序的候选选择器
///
/// `resolve` 依次尝试，返回第一个命中的元素；查找出错视为未命中
pub struct SelectorChain<'a> {
    candidates: &'a [String],
}

/// 命中结果：元素及命中它的选择器
pub struct ChainMatch<'a, E> {
    pub selector: &'a str,
    pub element: E,
}

impl<'a> SelectorChain<'a> {
    pub fn new(candidates: &'a [String]) -> Self {
        Self { candidates }
    }

    /// 只保留第一个候选（固定结构网站使用）
    pub fn first_only(candidates: &'a [String]) -> Self {
        Self {
            candidates: &candidates[..candidates.len().min(1)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub async fn resolve<D: DriverSession>(
        &self,
        driver: &D,
        scope: &D::Element,
    ) -> Option<ChainMatch<'a, D::Element>> {
        for selector in self.candidates {
            match driver.find_first_within(scope, selector).await {
                Ok(Some(element)) => {
                    return Some(ChainMatch {
                        selector: selector.as_str(),
                        element,
                    })
                }
                Ok(None) => continue,
                Err(e) => {
                    debug!("选择器 '{}' 查找失败: {}", selector, e);
                    continue;
                }
            }
        }
        None
    }
}

/// 字段提取器
///
/// 职责：
/// - 按网站的提取策略解析单张卡片
/// - 不出现 Vec<JobPosting>
/// - 不关心翻页和导航
pub struct FieldExtractor<'a> {
    source: Source,
    extraction: &'a Extraction,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(source: Source, extraction: &'a Extraction) -> Self {
        Self { source, extraction }
    }

    /// 解析一张卡片
    ///
    /// # 返回
    /// 有标题时返回记录，否则返回 `None`
    pub async fn extract<D: DriverSession>(&self, driver: &D, card: &D::Element) -> Option<JobPosting> {
        let queries = self.extraction.queries();

        let Some(title_match) = self.chain(&queries.title).resolve(driver, card).await else {
            debug!("[{}] 卡片中没有标题元素，跳过", self.source);
            return None;
        };

        let title = match driver.text(&title_match.element).await {
            Ok(text) => clean_text(&text),
            Err(e) => {
                warn!("[{}] 读取标题失败，跳过卡片: {}", self.source, e);
                return None;
            }
        };
        if title.is_empty() {
            debug!(
                "[{}] 标题为空 (选择器: {})，跳过",
                self.source, title_match.selector
            );
            return None;
        }

        let mut posting = JobPosting::empty(self.source);
        posting.title = title;
        posting.job_url = self.title_link(driver, &title_match.element).await;
        posting.company = self.field_text(driver, card, &queries.company, "company").await;
        posting.location = self.field_text(driver, card, &queries.location, "location").await;
        posting.posted_date = self.field_text(driver, card, &queries.date, "date").await;

        if posting.job_url.is_none() {
            posting.job_url = first_link(driver, card).await;
        }

        Some(posting)
    }

    fn chain<'q>(&self, candidates: &'q [String]) -> SelectorChain<'q> {
        match self.extraction {
            Extraction::Fixed(_) => SelectorChain::first_only(candidates),
            Extraction::Cascade(_) => SelectorChain::new(candidates),
        }
    }

    /// 标题元素上的链接
    ///
    /// 固定结构直接读 href；回退级联只在标题本身是超链接时读取
    async fn title_link<D: DriverSession>(&self, driver: &D, title: &D::Element) -> Option<String> {
        if let Extraction::Cascade(_) = self.extraction {
            if !driver.is_link(title).await.unwrap_or(false) {
                return None;
            }
        }
        href_of(driver, title).await
    }

    async fn field_text<D: DriverSession>(
        &self,
        driver: &D,
        card: &D::Element,
        candidates: &[String],
        field: &str,
    ) -> String {
        let chain = self.chain(candidates);
        if chain.is_empty() {
            return String::new();
        }

        let Some(found) = chain.resolve(driver, card).await else {
            debug!("[{}] 未找到字段 {}", self.source, field);
            return String::new();
        };

        match driver.text(&found.element).await {
            Ok(text) => clean_text(&text),
            Err(e) => {
                debug!("[{}] 读取字段 {} 失败: {}", self.source, field, e);
                String::new()
            }
        }
    }
}

/// 卡片中第一个链接
async fn first_link<D: DriverSession>(driver: &D, card: &D::Element) -> Option<String> {
    match driver.find_first_within(card, ANY_LINK).await {
        Ok(Some(link)) => href_of(driver, &link).await,
        _ => None,
    }
}

async fn href_of<D: DriverSession>(driver: &D, element: &D::Element) -> Option<String> {
    driver
        .attribute(element, "href")
        .await
        .ok()
        .flatten()
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// 合并连续空白并去掉首尾空白
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
