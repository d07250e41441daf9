//! 测试用的内存浏览器
//!
//! 用 `scraper` 解析 HTML 夹具并做真实的 CSS 选择器匹配。
//! 元素句柄是元素在文档顺序（`*` 遍历）中的序号。

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use job_scout::error::{BrowserError, DriverResult};
use job_scout::services::ScrollLoader;
use job_scout::workflow::SearchTimings;
use job_scout::{DriverSession, SessionFactory, SourceProfile, SourceSearcher};
use scraper::{ElementRef, Html, Selector};

/// 会话的操作记录，测试结束后检查
#[derive(Default)]
pub struct SessionLog {
    pub visited: RefCell<Vec<String>>,
    pub typed: RefCell<Vec<String>>,
    pub submits: Cell<usize>,
    pub scrolls: Cell<usize>,
    pub counts: Cell<usize>,
    pub opened: Cell<usize>,
    pub closed: Cell<usize>,
}

/// 内存中的浏览器会话
pub struct FakeSession {
    routes: HashMap<String, String>,
    on_submit: Option<String>,
    broken_text: Option<String>,
    html: RefCell<Html>,
    heights: RefCell<VecDeque<i64>>,
    last_height: Cell<i64>,
    log: Rc<SessionLog>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            on_submit: None,
            broken_text: None,
            html: RefCell::new(Html::parse_document("<html><body></body></html>")),
            heights: RefCell::new(VecDeque::new()),
            last_height: Cell::new(0),
            log: Rc::new(SessionLog::default()),
        }
    }

    /// 以 `prefix` 开头的 URL 打开 `html`（最长前缀优先）
    pub fn route(mut self, prefix: &str, html: &str) -> Self {
        self.routes.insert(prefix.to_string(), html.to_string());
        self
    }

    /// 提交表单后显示的页面
    pub fn on_submit(mut self, html: &str) -> Self {
        self.on_submit = Some(html.to_string());
        self
    }

    /// 读取匹配 `selector` 的元素文本时返回错误
    pub fn broken_text(mut self, selector: &str) -> Self {
        self.broken_text = Some(selector.to_string());
        self
    }

    /// 依次返回的内容高度，用完后保持最后一个值
    pub fn heights(self, heights: &[i64]) -> Self {
        self.heights.borrow_mut().extend(heights.iter().copied());
        self
    }

    /// 直接加载页面（不经过导航）
    pub fn with_page(self, html: &str) -> Self {
        *self.html.borrow_mut() = Html::parse_document(html);
        self
    }

    pub fn log(&self) -> Rc<SessionLog> {
        Rc::clone(&self.log)
    }

    fn share_log(mut self, log: Rc<SessionLog>) -> Self {
        self.log = log;
        self
    }

    fn matched_ids(
        &self,
        selector: &str,
        within: Option<usize>,
    ) -> DriverResult<Vec<usize>> {
        let parsed = parse(selector)?;
        let html = self.html.borrow();
        let everything = parse("*")?;
        let all: Vec<ElementRef> = html.select(&everything).collect();

        let found: Vec<ElementRef> = match within {
            Some(scope) => {
                let scope = all.get(scope).copied().ok_or_else(stale)?;
                scope.select(&parsed).filter(|el| el.id() != scope.id()).collect()
            }
            None => html.select(&parsed).collect(),
        };

        Ok(found
            .iter()
            .filter_map(|el| all.iter().position(|candidate| candidate.id() == el.id()))
            .collect())
    }

    fn with_element<T>(&self, id: usize, read: impl FnOnce(ElementRef) -> T) -> DriverResult<T> {
        let html = self.html.borrow();
        let everything = parse("*")?;
        let element = html.select(&everything).nth(id).ok_or_else(stale)?;
        Ok(read(element))
    }
}

fn parse(selector: &str) -> DriverResult<Selector> {
    Selector::parse(selector).map_err(|e| {
        BrowserError::element(
            format!("解析选择器 {}", selector),
            io::Error::new(io::ErrorKind::InvalidInput, e.to_string()),
        )
    })
}

fn stale() -> BrowserError {
    BrowserError::element("读取元素", io::Error::new(io::ErrorKind::NotFound, "元素已失效"))
}

impl DriverSession for FakeSession {
    type Element = usize;

    async fn navigate(&self, url: &str) -> DriverResult<()> {
        self.log.visited.borrow_mut().push(url.to_string());

        let page = self
            .routes
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, html)| html.clone())
            .ok_or_else(|| {
                BrowserError::navigation(url, io::Error::new(io::ErrorKind::NotFound, "没有这个页面"))
            })?;

        *self.html.borrow_mut() = Html::parse_document(&page);
        Ok(())
    }

    async fn find_all(&self, selector: &str) -> DriverResult<Vec<usize>> {
        self.matched_ids(selector, None)
    }

    async fn find_all_within(&self, scope: &usize, selector: &str) -> DriverResult<Vec<usize>> {
        self.matched_ids(selector, Some(*scope))
    }

    async fn text(&self, element: &usize) -> DriverResult<String> {
        if let Some(selector) = &self.broken_text {
            if self.matched_ids(selector, None)?.contains(element) {
                return Err(BrowserError::element(
                    "读取文本",
                    io::Error::new(io::ErrorKind::Other, "节点已从页面移除"),
                ));
            }
        }
        self.with_element(*element, |el| el.text().collect::<String>())
    }

    async fn attribute(&self, element: &usize, name: &str) -> DriverResult<Option<String>> {
        self.with_element(*element, |el| el.value().attr(name).map(str::to_string))
    }

    async fn is_link(&self, element: &usize) -> DriverResult<bool> {
        self.with_element(*element, |el| el.value().name() == "a")
    }

    async fn clear_and_type(&self, element: &usize, text: &str) -> DriverResult<()> {
        self.with_element(*element, |_| ())?;
        self.log.typed.borrow_mut().push(text.to_string());
        Ok(())
    }

    async fn submit(&self, element: &usize) -> DriverResult<()> {
        self.with_element(*element, |_| ())?;
        self.log.submits.set(self.log.submits.get() + 1);
        if let Some(page) = &self.on_submit {
            *self.html.borrow_mut() = Html::parse_document(page);
        }
        Ok(())
    }

    async fn count(&self, selector: &str) -> DriverResult<usize> {
        self.log.counts.set(self.log.counts.get() + 1);
        Ok(self.matched_ids(selector, None)?.len())
    }

    async fn scroll_to_bottom(&self) -> DriverResult<()> {
        self.log.scrolls.set(self.log.scrolls.get() + 1);
        Ok(())
    }

    async fn content_height(&self) -> DriverResult<i64> {
        if let Some(height) = self.heights.borrow_mut().pop_front() {
            self.last_height.set(height);
        }
        Ok(self.last_height.get())
    }

    async fn close(self) -> DriverResult<()> {
        self.log.closed.set(self.log.closed.get() + 1);
        Ok(())
    }
}

/// 按需创建 `FakeSession` 的工厂
pub struct FakeFactory {
    build: Box<dyn Fn() -> FakeSession>,
    fail: bool,
    log: Rc<SessionLog>,
}

impl FakeFactory {
    pub fn new(build: impl Fn() -> FakeSession + 'static) -> Self {
        Self {
            build: Box::new(build),
            fail: false,
            log: Rc::new(SessionLog::default()),
        }
    }

    /// 打开会话总是失败
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(FakeSession::new)
        }
    }

    pub fn log(&self) -> Rc<SessionLog> {
        Rc::clone(&self.log)
    }
}

impl SessionFactory for FakeFactory {
    type Session = FakeSession;

    async fn open(&self) -> anyhow::Result<FakeSession> {
        if self.fail {
            anyhow::bail!("浏览器启动失败");
        }
        self.log.opened.set(self.log.opened.get() + 1);
        Ok((self.build)().share_log(Rc::clone(&self.log)))
    }
}

/// 测试用的短等待时间
pub fn fast_timings() -> SearchTimings {
    SearchTimings {
        wait_timeout: Duration::from_millis(100),
        page_load_delay: Duration::ZERO,
    }
}

pub fn fast_searcher(profile: SourceProfile) -> SourceSearcher {
    SourceSearcher::with_parts(profile, fast_timings(), ScrollLoader::new(Duration::ZERO, 30))
}

// ========== HTML 夹具 ==========

pub const BUSCOJOBS_HOME: &str = r#"
<html><body>
  <form action="/buscar">
    <input type="search" name="q">
    <input placeholder="ubicación" name="loc">
  </form>
</body></html>
"#;

/// 3 张卡片：2 张有标题，1 张没有
pub const BUSCOJOBS_RESULTS: &str = r#"
<html><body>
  <div class="results">
    <div class="job-offer">
      <h2>Data Scientist</h2>
      <span class="company">Globant</span>
      <span class="city">Montevideo</span>
      <span class="fecha">hace 2 días</span>
      <a href="/oferta/1">Ver oferta</a>
    </div>
    <div class="job-offer">
      <a href="/trabajo/2">Data Scientist Sr</a>
      <span class="empresa">Dinocloud</span>
    </div>
    <div class="job-offer">
      <p>Sin información</p>
    </div>
  </div>
</body></html>
"#;

pub const LINKEDIN_RESULTS: &str = r#"
<html><body>
  <ul>
    <li class="job-search-card">
      <a class="job-card-list__title" href="https://www.linkedin.com/jobs/view/1">Data Scientist</a>
      <span class="job-card-container__company-name">Globant</span>
      <span class="job-card-container__metadata-item">Montevideo</span>
    </li>
  </ul>
</body></html>
"#;

pub const INDEED_RESULTS: &str = r#"
<html><body>
  <div class="job_seen_beacon">
    <h2 class="jobTitle">Data Scientist</h2>
    <span class="companyName">Globant</span>
    <a href="/viewjob?jk=1">ver</a>
  </div>
  <div class="job_seen_beacon">
    <h2 class="jobTitle">QA Analyst</h2>
    <span class="companyName">Sofka</span>
    <div class="companyLocation">Montevideo</div>
    <span class="date">Hace 1 día</span>
  </div>
</body></html>
"#;

/// 没有任何结果卡片的页面（例如网站改版）
pub const EMPTY_PAGE: &str = "<html><body><p>Nada por aquí</p></body></html>";
