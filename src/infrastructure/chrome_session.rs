//! 基于 chromiumoxide 的浏览器会话

use anyhow::Result;
use chromiumoxide::error::CdpError;
use chromiumoxide::{Browser, Element};
use tracing::{debug, info, warn};

use crate::browser;
use crate::config::BrowserSettings;
use crate::error::{BrowserError, DriverResult};
use crate::infrastructure::driver::{DriverSession, SessionFactory};
use crate::infrastructure::js_executor::{
    count_matches_js, JsExecutor, CONTENT_HEIGHT_JS, SCROLL_TO_BOTTOM_JS,
};

const IS_LINK_JS: &str = "function() { return this.tagName.toLowerCase() === 'a'; }";
const CLEAR_VALUE_JS: &str = "function() { this.value = ''; return true; }";

/// Chrome 会话
///
/// 持有 Browser 和唯一的页面；`owned` 为 false 表示连接的是用户已打开的浏览器，
/// 关闭时只关闭自己创建的页面
pub struct ChromeSession {
    browser: Browser,
    executor: JsExecutor,
    owned: bool,
}

impl ChromeSession {
    /// 按配置启动或连接浏览器
    pub async fn open(settings: &BrowserSettings) -> Result<Self> {
        match settings.debug_port {
            Some(port) => {
                let (browser, page) = browser::connect_to_browser(port).await?;
                Ok(Self {
                    browser,
                    executor: JsExecutor::new(page),
                    owned: false,
                })
            }
            None => {
                let (browser, page) = browser::launch_headless_browser(settings).await?;
                Ok(Self {
                    browser,
                    executor: JsExecutor::new(page),
                    owned: true,
                })
            }
        }
    }
}

impl DriverSession for ChromeSession {
    type Element = Element;

    async fn navigate(&self, url: &str) -> DriverResult<()> {
        debug!("导航到: {}", url);
        self.executor
            .page()
            .goto(url)
            .await
            .map_err(|e| BrowserError::navigation(url, e))?;
        Ok(())
    }

    async fn find_all(&self, selector: &str) -> DriverResult<Vec<Element>> {
        Ok(self.executor.page().find_elements(selector).await?)
    }

    async fn find_all_within(&self, scope: &Element, selector: &str) -> DriverResult<Vec<Element>> {
        Ok(scope.find_elements(selector).await?)
    }

    async fn find_first(&self, selector: &str) -> DriverResult<Option<Element>> {
        not_found_as_none(self.executor.page().find_element(selector).await)
    }

    async fn find_first_within(&self, scope: &Element, selector: &str) -> DriverResult<Option<Element>> {
        not_found_as_none(scope.find_element(selector).await)
    }

    async fn count(&self, selector: &str) -> DriverResult<usize> {
        self.executor.eval_as(count_matches_js(selector)?).await
    }

    async fn text(&self, element: &Element) -> DriverResult<String> {
        let text = element
            .inner_text()
            .await
            .map_err(|e| BrowserError::element("读取文本", e))?;
        Ok(text.unwrap_or_default())
    }

    async fn attribute(&self, element: &Element, name: &str) -> DriverResult<Option<String>> {
        // 优先读取 DOM 属性（href 会是绝对地址），再退回到 HTML 属性
        if let Ok(Some(value)) = element.property(name).await {
            if let Some(text) = value.as_str().filter(|text| !text.is_empty()) {
                return Ok(Some(text.to_string()));
            }
        }

        element
            .attribute(name)
            .await
            .map_err(|e| BrowserError::element(format!("读取属性 {}", name), e))
    }

    async fn is_link(&self, element: &Element) -> DriverResult<bool> {
        let returns = element.call_js_fn(IS_LINK_JS, false).await?;
        Ok(returns
            .result
            .value
            .and_then(|value| value.as_bool())
            .unwrap_or(false))
    }

    async fn clear_and_type(&self, element: &Element, text: &str) -> DriverResult<()> {
        element.call_js_fn(CLEAR_VALUE_JS, false).await?;
        element
            .click()
            .await
            .map_err(|e| BrowserError::element("点击输入框", e))?;
        element
            .type_str(text)
            .await
            .map_err(|e| BrowserError::element("输入文本", e))?;
        Ok(())
    }

    async fn submit(&self, element: &Element) -> DriverResult<()> {
        element
            .press_key("Enter")
            .await
            .map_err(|e| BrowserError::element("提交搜索", e))?;
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> DriverResult<()> {
        self.executor.eval(SCROLL_TO_BOTTOM_JS).await?;
        Ok(())
    }

    async fn content_height(&self) -> DriverResult<i64> {
        self.executor.eval_as(CONTENT_HEIGHT_JS).await
    }

    async fn close(self) -> DriverResult<()> {
        let Self {
            mut browser,
            executor,
            owned,
        } = self;

        if !owned {
            executor.into_page().close().await?;
            info!("✓ 已关闭页面（浏览器保持运行）");
            return Ok(());
        }

        browser.close().await?;
        if let Err(e) = browser.wait().await {
            warn!("等待浏览器进程退出失败: {}", e);
        }
        info!("✓ 浏览器已关闭");
        Ok(())
    }
}

/// 单元素查询没有命中时 CDP 返回协议错误（节点 id 为 0），视为未找到
fn not_found_as_none(result: Result<Element, CdpError>) -> DriverResult<Option<Element>> {
    match result {
        Ok(element) => Ok(Some(element)),
        Err(CdpError::Chrome(e)) => {
            debug!("单元素查询未命中: {}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// 按需启动 Chrome 会话
pub struct ChromeLauncher {
    settings: BrowserSettings,
}

impl ChromeLauncher {
    pub fn new(settings: BrowserSettings) -> Self {
        Self { settings }
    }
}

impl SessionFactory for ChromeLauncher {
    type Session = ChromeSession;

    async fn open(&self) -> Result<ChromeSession> {
        ChromeSession::open(&self.settings).await
    }
}
