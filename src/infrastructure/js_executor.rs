//! JS 执行器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"执行 JS"的能力

use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::DriverResult;

/// 滚动到底部，返回值只是为了让表达式有结果
pub const SCROLL_TO_BOTTOM_JS: &str =
    "(() => { window.scrollTo(0, document.body.scrollHeight); return true; })()";

/// 当前内容高度
pub const CONTENT_HEIGHT_JS: &str = "document.body.scrollHeight";

/// 统计选择器匹配数量的脚本
pub fn count_matches_js(selector: &str) -> DriverResult<String> {
    let quoted = serde_json::to_string(selector)?;
    Ok(format!("document.querySelectorAll({}).length", quoted))
}

/// JS 执行器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 eval() 能力
/// - 不认识 JobPosting / 招聘网站
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    /// 创建新的 JS 执行器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 交出 page（关闭会话时使用）
    pub fn into_page(self) -> Page {
        self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> DriverResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> DriverResult<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }
}
