//! 招聘网站配置 - 纯数据
//!
//! 描述"去哪里搜、等什么、卡片长什么样、字段怎么取"，
//! 新增一个通用网站只需要一份配置，不需要新的代码路径。

use serde::{Deserialize, Serialize};

use crate::models::Source;

/// 通用网站的选择器配置
///
/// 每个字段都是可选的，缺失的字段直接跳过提取
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorProfile {
    pub search_input: Option<String>,
    pub job_listings: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
}

/// URL 中空格的编码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceStyle {
    /// `%20`
    Percent,
    /// `+`
    Plus,
}

/// 带查询参数的搜索 URL 模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    pub base: String,
    pub keyword_param: String,
    pub location_param: String,
    pub space_style: SpaceStyle,
}

impl UrlTemplate {
    pub fn new(
        base: impl Into<String>,
        keyword_param: impl Into<String>,
        location_param: impl Into<String>,
        space_style: SpaceStyle,
    ) -> Self {
        Self {
            base: base.into(),
            keyword_param: keyword_param.into(),
            location_param: location_param.into(),
            space_style,
        }
    }

    /// 拼接搜索 URL，地点为空时省略地点参数
    pub fn build(&self, keyword: &str, location: &str) -> String {
        let mut url = format!(
            "{}?{}={}",
            self.base,
            self.keyword_param,
            self.encode(keyword)
        );
        if !location.trim().is_empty() {
            url.push_str(&format!(
                "&{}={}",
                self.location_param,
                self.encode(location.trim())
            ));
        }
        url
    }

    fn encode(&self, value: &str) -> String {
        let encoded = urlencoding::encode(value.trim());
        match self.space_style {
            SpaceStyle::Percent => encoded.into_owned(),
            SpaceStyle::Plus => encoded.replace("%20", "+"),
        }
    }
}

/// 如何进入搜索结果页
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// 原样打开页面，不带搜索参数
    Page(String),
    /// 直接打开拼好参数的 URL
    Url(UrlTemplate),
    /// 打开首页，填写搜索表单后提交
    Form {
        home_url: String,
        keyword_input: String,
        location_input: Option<String>,
        /// 找不到搜索框时改用的 URL
        fallback: Option<UrlTemplate>,
    },
}

/// 每个字段的候选选择器（按优先级排列）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldQueries {
    pub title: Vec<String>,
    pub company: Vec<String>,
    pub location: Vec<String>,
    pub date: Vec<String>,
}

impl FieldQueries {
    /// 每个字段只有一个选择器
    pub fn single(title: &str, company: &str, location: &str, date: &str) -> Self {
        Self {
            title: vec![title.to_string()],
            company: vec![company.to_string()],
            location: vec![location.to_string()],
            date: vec![date.to_string()],
        }
    }
}

/// 字段提取策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// 固定结构：每个字段只尝试第一个选择器，标题元素的 href 作为链接
    Fixed(FieldQueries),
    /// 回退级联：依次尝试候选选择器，第一个命中的生效
    Cascade(FieldQueries),
}

impl Extraction {
    pub fn queries(&self) -> &FieldQueries {
        match self {
            Extraction::Fixed(queries) | Extraction::Cascade(queries) => queries,
        }
    }
}

/// 一个招聘网站的完整配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceProfile {
    pub source: Source,
    /// 日志中显示的名称
    pub label: String,
    pub navigation: Navigation,
    /// 页面可搜索/结果已加载的标志元素
    pub ready_marker: Option<String>,
    /// 职位卡片选择器，依次尝试，第一个有结果的生效
    pub card_selectors: Vec<String>,
    pub extraction: Extraction,
}

impl SourceProfile {
    /// 由选择器配置构建通用网站
    ///
    /// - 有 `search_input`：打开 `url` 后填写搜索框，否则原样打开 `url`
    /// - 有 `job_listings`：作为加载标志和卡片选择器，否则卡片为 `div`
    /// - 其余字段各自一个选择器，缺失的跳过
    pub fn generic(label: impl Into<String>, url: impl Into<String>, profile: &SelectorProfile) -> Self {
        let url = url.into();
        let navigation = match &profile.search_input {
            Some(input) => Navigation::Form {
                home_url: url,
                keyword_input: input.clone(),
                location_input: None,
                fallback: None,
            },
            None => Navigation::Page(url),
        };

        let card_selector = profile
            .job_listings
            .clone()
            .unwrap_or_else(|| "div".to_string());

        let queries = FieldQueries {
            title: profile.title.iter().cloned().collect(),
            company: profile.company.iter().cloned().collect(),
            location: profile.location.iter().cloned().collect(),
            date: profile.date.iter().cloned().collect(),
        };

        Self {
            source: Source::Generic,
            label: label.into(),
            navigation,
            ready_marker: profile.job_listings.clone(),
            card_selectors: vec![card_selector],
            extraction: Extraction::Fixed(queries),
        }
    }
}
