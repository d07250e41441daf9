//! 文档读取 - 业务能力层
//!
//! 从简历文件中读出全部文本：PDF 逐页提取，其他格式按 UTF-8 文本读取

use std::path::Path;

use tracing::debug;

use crate::error::FileError;

/// 读取文档的全部文本
pub fn read_document_text(path: &Path) -> Result<String, FileError> {
    let shown = path.display().to_string();
    if !path.exists() {
        return Err(FileError::NotFound { path: shown });
    }

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path).map_err(|e| FileError::ReadFailed {
            path: shown.clone(),
            source: e.to_string().into(),
        })?
    } else {
        std::fs::read_to_string(path).map_err(|e| FileError::ReadFailed {
            path: shown.clone(),
            source: Box::new(e),
        })?
    };

    if text.trim().is_empty() {
        return Err(FileError::UnsupportedDocument { path: shown });
    }

    debug!("已读取文档 {}，共 {} 个字符", shown, text.chars().count());
    Ok(text)
}
