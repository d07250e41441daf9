use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Source;

/// 一条职位记录
///
/// 只有 `title` 非空的记录才会被产出；其余字段解析不到时保持空字符串。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_date: String,
    #[serde(default)]
    pub job_url: Option<String>,
    pub source: Source,
}

impl JobPosting {
    /// 创建只有来源的空记录
    pub fn empty(source: Source) -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            posted_date: String::new(),
            job_url: None,
            source,
        }
    }

    /// 去重键：(标题, 公司)
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.title, &self.company)
    }
}

/// 对单个网站的一次搜索请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keyword: String,
    pub location: String,
    pub max_results: usize,
}

impl SearchRequest {
    /// 创建搜索请求
    ///
    /// 关键词不能为空，`max_results` 必须大于 0
    pub fn new(
        keyword: impl Into<String>,
        location: impl Into<String>,
        max_results: usize,
    ) -> Result<Self, ConfigError> {
        let keyword = keyword.into().trim().to_string();
        if keyword.is_empty() {
            return Err(ConfigError::EmptyKeyword);
        }
        if max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }

        Ok(Self {
            keyword,
            location: location.into().trim().to_string(),
            max_results,
        })
    }

    /// 是否指定了地点
    pub fn has_location(&self) -> bool {
        !self.location.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_blank_keyword() {
        assert!(matches!(
            SearchRequest::new("   ", "Montevideo", 10),
            Err(ConfigError::EmptyKeyword)
        ));
    }

    #[test]
    fn request_rejects_zero_results() {
        assert!(matches!(
            SearchRequest::new("Data Scientist", "", 0),
            Err(ConfigError::ZeroMaxResults)
        ));
    }

    #[test]
    fn request_trims_inputs() {
        let request = SearchRequest::new(" Data Scientist ", " Montevideo ", 5).unwrap();
        assert_eq!(request.keyword, "Data Scientist");
        assert_eq!(request.location, "Montevideo");
        assert!(request.has_location());
    }
}
