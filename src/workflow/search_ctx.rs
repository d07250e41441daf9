//! 搜索上下文
//!
//! 封装"我正在哪个网站搜什么"这一信息，只用于日志

use std::fmt::Display;

use crate::models::SearchRequest;

/// 搜索上下文
#[derive(Debug, Clone)]
pub struct SearchCtx {
    /// 网站名称
    pub label: String,
    pub keyword: String,
    pub location: String,
}

impl SearchCtx {
    pub fn new(label: impl Into<String>, request: &SearchRequest) -> Self {
        Self {
            label: label.into(),
            keyword: request.keyword.clone(),
            location: request.location.clone(),
        }
    }
}

impl Display for SearchCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.location.is_empty() {
            write!(f, "[{} | {}]", self.label, self.keyword)
        } else {
            write!(f, "[{} | {} @ {}]", self.label, self.keyword, self.location)
        }
    }
}
