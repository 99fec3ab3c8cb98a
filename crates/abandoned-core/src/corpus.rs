//! 语料构建：把全部源码文件内容拼接成一个只读字符串
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Result, ScanError};

/// 读取整个文件为 UTF-8 字符串；打不开或解码失败都归为 FileUnreadable
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ScanError::FileUnreadable { path: path.to_path_buf(), source })
}

/// 并行读取并按 `files` 顺序拼接；任一文件读取失败即整体失败
///
/// 返回 `Arc<str>`，构建后不再修改，可在扫描任务间无锁共享。
pub fn build_corpus(files: &[PathBuf]) -> Result<Arc<str>> {
    let parts: Vec<String> = files.par_iter().map(|p| read_text(p)).collect::<Result<_>>()?;
    let total = parts.iter().map(String::len).sum();
    let mut corpus = String::with_capacity(total);
    for part in &parts { corpus.push_str(part); }
    Ok(Arc::from(corpus))
}
