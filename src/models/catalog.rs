//! 内置招聘网站配置
//!
//! 选择器来自各网站当前的页面结构，网站改版后只需要修改这里

use crate::models::profile::{
    Extraction, FieldQueries, Navigation, SourceProfile, SpaceStyle, UrlTemplate,
};
use crate::models::Source;

/// 滚动加载时用来统计"类似结果"元素数量的选择器
pub const RESULT_PROBE: &str = "[class*='job'], [class*='listing']";

/// BuscoJobs 结果页的加载标志
const BUSCOJOBS_MARKER: &str = "[class*='job'], [class*='listing'], [class*='card'], [class*='result']";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 获取内置网站的配置
///
/// `Generic` 没有内置配置，需要通过 `SourceProfile::generic` 构建
pub fn built_in(source: Source) -> Option<SourceProfile> {
    match source {
        Source::LinkedIn => Some(linkedin()),
        Source::Indeed => Some(indeed()),
        Source::BuscoJobsUY => Some(buscojobs_uy()),
        Source::Generic => None,
    }
}

/// LinkedIn：URL 直达，固定 class 名
pub fn linkedin() -> SourceProfile {
    SourceProfile {
        source: Source::LinkedIn,
        label: Source::LinkedIn.name().to_string(),
        navigation: Navigation::Url(UrlTemplate::new(
            "https://www.linkedin.com/jobs/search/",
            "keywords",
            "location",
            SpaceStyle::Percent,
        )),
        ready_marker: Some(".job-search-card".to_string()),
        card_selectors: strings(&[".job-search-card"]),
        extraction: Extraction::Fixed(FieldQueries::single(
            "[class*='job-card-list__title']",
            "[class*='job-card-container__company-name']",
            "[class*='job-card-container__metadata-item']",
            "[class*='job-card-container__list-item']",
        )),
    }
}

/// Indeed：URL 直达，另一套固定 class 名
pub fn indeed() -> SourceProfile {
    SourceProfile {
        source: Source::Indeed,
        label: Source::Indeed.name().to_string(),
        navigation: Navigation::Url(UrlTemplate::new(
            "https://www.indeed.com/jobs",
            "q",
            "l",
            SpaceStyle::Plus,
        )),
        ready_marker: Some(".job_seen_beacon".to_string()),
        card_selectors: strings(&[".job_seen_beacon"]),
        extraction: Extraction::Fixed(FieldQueries::single(
            "[class*='jobTitle']",
            "[class*='companyName']",
            "[class*='companyLocation']",
            "[class*='date']",
        )),
    }
}

/// BuscoJobs 乌拉圭：填写首页表单，结构未知，全部走回退级联
pub fn buscojobs_uy() -> SourceProfile {
    let base = "https://www.buscojobs.com.uy";

    SourceProfile {
        source: Source::BuscoJobsUY,
        label: Source::BuscoJobsUY.name().to_string(),
        navigation: Navigation::Form {
            home_url: base.to_string(),
            keyword_input: "input[placeholder*='buscar'], input[placeholder*='trabajo'], input[type='search'], input[name*='search']".to_string(),
            location_input: Some(
                "input[placeholder*='ubicación'], input[placeholder*='location'], input[name*='location']"
                    .to_string(),
            ),
            fallback: Some(UrlTemplate::new(
                format!("{}/buscar", base),
                "q",
                "location",
                SpaceStyle::Plus,
            )),
        },
        ready_marker: Some(BUSCOJOBS_MARKER.to_string()),
        card_selectors: strings(&[
            "[class*='job']",
            "[class*='listing']",
            "[class*='card']",
            "[class*='result']",
            "article",
            ".job-item",
            ".listing-item",
            ".card-item",
        ]),
        extraction: Extraction::Cascade(FieldQueries {
            // 语义标签 → class 子串 → 链接属性
            title: strings(&[
                "h1",
                "h2",
                "h3",
                "h4",
                "[class*='title']",
                "[class*='job-title']",
                "[class*='position']",
                "a[href*='job']",
                "a[href*='trabajo']",
            ]),
            company: strings(&[
                "[class*='company']",
                "[class*='empresa']",
                "[class*='employer']",
                "span[class*='company']",
                "div[class*='company']",
            ]),
            location: strings(&[
                "[class*='location']",
                "[class*='ubicación']",
                "[class*='place']",
                "[class*='city']",
                "span[class*='location']",
                "div[class*='location']",
            ]),
            date: strings(&[
                "[class*='date']",
                "[class*='fecha']",
                "[class*='time']",
                "[class*='posted']",
                "span[class*='date']",
                "div[class*='date']",
            ]),
        }),
    }
}
