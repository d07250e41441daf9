//! # Job Scout
//!
//! 在多个招聘网站上按关键词和地点搜索职位，合并去重后导出为表格
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有浏览器会话，只暴露能力
//! - `DriverSession` - 导航、查找、读取、输入、滚动
//! - `ChromeSession` - 基于 chromiumoxide 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `FieldExtractor` - 从一张卡片提取一条职位
//! - `ScrollLoader` - 滚动加载更多结果
//! - `Exporter` - 导出表格
//! - `KeywordService` - 根据简历生成关键词
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个网站的一次搜索"的完整流程
//! - `SearchCtx` - 日志上下文（网站 + 关键词 + 地点）
//! - `SourceSearcher` - 流程编排（打开 → 等待 → 滚动 → 提取）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_coordinator` - 批量搜索、会话管理、去重
//! - `orchestrator/app` - 应用入口
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{BrowserError, ConfigError, DriverResult, FileError, LlmError};
pub use infrastructure::{ChromeLauncher, ChromeSession, DriverSession, SessionFactory};
pub use models::{JobPosting, SearchRequest, Source, SourceProfile};
pub use orchestrator::{dedupe_postings, App, BatchCoordinator};
pub use workflow::{SearchCtx, SourceSearcher};
