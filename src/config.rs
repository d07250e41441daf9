use std::time::Duration;

use crate::error::ConfigError;
use crate::models::Source;

/// 浏览器配置
#[derive(Clone, Debug)]
pub struct BrowserSettings {
    /// 是否使用无头模式
    pub headless: bool,
    /// 已运行浏览器的调试端口，设置后直接连接而不是启动新浏览器
    pub debug_port: Option<u16>,
    /// 浏览器可执行文件路径（不设置时自动查找）
    pub chrome_executable: Option<String>,
    /// 启动浏览器时使用的 User-Agent
    pub user_agent: String,
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 搜索关键词
    pub keywords: Vec<String>,
    /// 搜索地点（为空时不限地点）
    pub locations: Vec<String>,
    /// 启用的招聘网站
    pub sources: Vec<Source>,
    /// 每个网站每次搜索的最大结果数
    pub max_results_per_source: usize,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 等待元素的超时时间
    pub wait_timeout: Duration,
    /// 导航后等待页面渲染的时间
    pub page_load_delay: Duration,
    /// 每次滚动后的等待时间
    pub settle_interval: Duration,
    /// 滚动加载的最大轮数
    pub max_scroll_rounds: usize,
    /// 两次网站查询之间的间隔
    pub source_pause: Duration,
    /// 输出文件（不设置时按时间戳生成）
    pub output_file: Option<String>,
    /// 通用网站配置文件（TOML）
    pub generic_sources_file: Option<String>,
    /// 日志级别
    pub log_level: String,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 用于提取关键词的简历路径
    pub cv_path: Option<String>,
}

/// 默认 User-Agent（桌面版 Chrome）
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            debug_port: None,
            chrome_executable: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            locations: Vec::new(),
            sources: Source::BUILT_IN.to_vec(),
            max_results_per_source: 25,
            browser: BrowserSettings::default(),
            wait_timeout: Duration::from_secs(10),
            page_load_delay: Duration::from_millis(3000),
            settle_interval: Duration::from_millis(2000),
            max_scroll_rounds: 30,
            source_pause: Duration::from_millis(2000),
            output_file: None,
            generic_sources_file: None,
            log_level: "info".to_string(),
            llm_api_key: "ollama".to_string(),
            llm_api_base_url: "http://localhost:11434/v1".to_string(),
            llm_model_name: "gemma3:1b".to_string(),
            cv_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();

        let sources = match std::env::var("SOURCES") {
            Ok(value) => parse_sources(&value)?,
            Err(_) => default.sources,
        };

        Ok(Self {
            keywords: std::env::var("JOB_KEYWORDS").map(|v| split_list(&v)).unwrap_or(default.keywords),
            locations: std::env::var("JOB_LOCATIONS").map(|v| split_list(&v)).unwrap_or(default.locations),
            sources,
            max_results_per_source: env_parse("MAX_RESULTS_PER_SOURCE").unwrap_or(default.max_results_per_source),
            browser: BrowserSettings {
                headless: env_parse("HEADLESS").unwrap_or(default.browser.headless),
                debug_port: env_parse("BROWSER_DEBUG_PORT"),
                chrome_executable: std::env::var("CHROME_EXECUTABLE").ok(),
                user_agent: std::env::var("USER_AGENT").unwrap_or(default.browser.user_agent),
            },
            wait_timeout: env_parse("WAIT_TIMEOUT_SECS").map(Duration::from_secs).unwrap_or(default.wait_timeout),
            page_load_delay: env_parse("PAGE_LOAD_DELAY_MS").map(Duration::from_millis).unwrap_or(default.page_load_delay),
            settle_interval: env_parse("SETTLE_INTERVAL_MS").map(Duration::from_millis).unwrap_or(default.settle_interval),
            max_scroll_rounds: env_parse("MAX_SCROLL_ROUNDS").unwrap_or(default.max_scroll_rounds),
            source_pause: env_parse("SOURCE_PAUSE_MS").map(Duration::from_millis).unwrap_or(default.source_pause),
            output_file: std::env::var("OUTPUT_FILE").ok(),
            generic_sources_file: std::env::var("GENERIC_SOURCES_FILE").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(default.log_level),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            cv_path: std::env::var("CV_PATH").ok(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// 按逗号拆分列表，去掉空项
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// 解析启用的网站列表，例如 `linkedin,indeed,buscojobs`
pub fn parse_sources(value: &str) -> Result<Vec<Source>, ConfigError> {
    let mut sources = Vec::new();
    for name in split_list(value) {
        let source = Source::from_str(&name).ok_or(ConfigError::UnknownSource { name })?;
        if !sources.contains(&source) {
            sources.push(source);
        }
    }
    Ok(sources)
}
