//! 导出服务 - 业务能力层
//!
//! 只负责把一批职位写成表格文件（CSV，可直接用表格软件打开）

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::FileError;
use crate::models::JobPosting;

/// 导出服务
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    /// 输出到当前目录
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }

    /// 使用自定义目录（只影响按时间戳生成的文件名）
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
        }
    }

    /// 按当前时间生成文件名
    pub fn default_file_name() -> String {
        format!(
            "job_search_results_{}.csv",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        )
    }

    /// 写入文件
    ///
    /// # 参数
    /// - `postings`: 职位列表
    /// - `file_name`: 输出文件，`None` 时按时间戳生成
    ///
    /// # 返回
    /// 返回实际写入的路径
    pub fn export(&self, postings: &[JobPosting], file_name: Option<&str>) -> Result<PathBuf> {
        let path = match file_name {
            Some(name) => PathBuf::from(name),
            None => self.output_dir.join(Self::default_file_name()),
        };

        write_csv(&path, postings).map_err(|e| FileError::WriteFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        info!("💾 已导出 {} 条职位到 {}", postings.len(), path.display());
        Ok(path)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_csv(path: &Path, postings: &[JobPosting]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for posting in postings {
        writer.serialize(posting)?;
    }
    writer.flush()?;
    Ok(())
}
