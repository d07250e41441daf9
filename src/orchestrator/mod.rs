//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 准备网站列表和关键词
//! - 运行整批搜索并导出结果
//!
//! ### `batch_coordinator` - 批量搜索协调器
//! - 关键词 × 地点 × 网站 的组合
//! - 浏览器会话的获取与释放
//! - 去重
//!
//! ## 层次关系
//!
//! ```text
//! app
//!     ↓
//! batch_coordinator (处理 关键词 × 地点 × 网站)
//!     ↓
//! workflow::SourceSearcher (处理单个网站的一次搜索)
//!     ↓
//! services (能力层：scroll / extract / export)
//!     ↓
//! infrastructure (基础设施：DriverSession)
//! ```

pub mod app;
pub mod batch_coordinator;

pub use app::App;
pub use batch_coordinator::{dedupe_postings, BatchCoordinator};
