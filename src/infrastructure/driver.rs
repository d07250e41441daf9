//! 浏览器驱动能力 - 基础设施层
//!
//! 抓取核心只通过这里的 trait 操作页面，不认识具体的浏览器实现。
//! 所有调用都是串行的，同一时间只有一个会话在使用。

use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::error::{BrowserError, DriverResult};

/// `wait_for` 的轮询间隔
pub const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 一个浏览器会话
///
/// 职责：
/// - 导航、查找元素、等待元素
/// - 读取元素文本和属性，填写并提交输入框
/// - 滚动页面、测量内容高度
/// - 不认识 JobPosting / 招聘网站
#[allow(async_fn_in_trait)]
pub trait DriverSession {
    /// 元素句柄
    type Element;

    /// 打开 URL
    async fn navigate(&self, url: &str) -> DriverResult<()>;

    /// 在整个页面中查找所有匹配元素
    async fn find_all(&self, selector: &str) -> DriverResult<Vec<Self::Element>>;

    /// 在元素内部查找所有匹配元素
    async fn find_all_within(
        &self,
        scope: &Self::Element,
        selector: &str,
    ) -> DriverResult<Vec<Self::Element>>;

    /// 读取元素的可见文本
    async fn text(&self, element: &Self::Element) -> DriverResult<String>;

    /// 读取元素属性，不存在时返回 `None`
    async fn attribute(&self, element: &Self::Element, name: &str) -> DriverResult<Option<String>>;

    /// 元素是否为超链接（`<a>`）
    async fn is_link(&self, element: &Self::Element) -> DriverResult<bool>;

    /// 清空输入框并输入文本
    async fn clear_and_type(&self, element: &Self::Element, text: &str) -> DriverResult<()>;

    /// 在输入框上回车提交
    async fn submit(&self, element: &Self::Element) -> DriverResult<()>;

    /// 滚动到页面底部
    async fn scroll_to_bottom(&self) -> DriverResult<()>;

    /// 当前内容高度
    async fn content_height(&self) -> DriverResult<i64>;

    /// 释放会话
    async fn close(self) -> DriverResult<()>
    where
        Self: Sized;

    /// 页面中第一个匹配元素
    async fn find_first(&self, selector: &str) -> DriverResult<Option<Self::Element>> {
        Ok(self.find_all(selector).await?.into_iter().next())
    }

    /// 元素内部第一个匹配元素
    async fn find_first_within(
        &self,
        scope: &Self::Element,
        selector: &str,
    ) -> DriverResult<Option<Self::Element>> {
        Ok(self.find_all_within(scope, selector).await?.into_iter().next())
    }

    /// 页面中匹配元素的数量
    async fn count(&self, selector: &str) -> DriverResult<usize> {
        Ok(self.find_all(selector).await?.len())
    }

    /// 等待元素出现
    ///
    /// 超时返回 `BrowserError::Timeout`，查找过程中的临时错误视为"尚未出现"
    async fn wait_for(&self, selector: &str, timeout: Duration) -> DriverResult<Self::Element> {
        let deadline = Instant::now() + timeout;

        loop {
            if let Ok(Some(element)) = self.find_first(selector).await {
                return Ok(element);
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(BrowserError::Timeout {
                    selector: selector.to_string(),
                    timeout,
                });
            }

            sleep(WAIT_POLL_INTERVAL.min(deadline - now)).await;
        }
    }
}

/// 会话工厂
///
/// 批处理在第一次需要浏览器时才调用 `open`，获取失败是整个批次唯一的致命错误
#[allow(async_fn_in_trait)]
pub trait SessionFactory {
    type Session: DriverSession;

    async fn open(&self) -> anyhow::Result<Self::Session>;
}
