//! 文件收集（递归遍历根目录，按扩展名过滤）
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, ScanError};

/// 扩展名集合（统一存为小写，匹配时大小写不敏感）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: HashSet<String>,
}

impl ExtensionSet {
    pub fn new<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for e in exts { set.insert(e.as_ref()); }
        set
    }

    /// 加入一个扩展名；允许带前导 `.`
    pub fn insert(&mut self, ext: &str) {
        let ext = ext.trim().trim_start_matches('.');
        if !ext.is_empty() { self.exts.insert(ext.to_lowercase()); }
    }

    pub fn matches(&self, path: &Path) -> bool {
        if self.is_empty() { return false; }
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) => self.exts.contains(&ext.to_lowercase()),
            None => false,
        }
    }

    pub fn len(&self) -> usize { self.exts.len() }

    pub fn is_empty(&self) -> bool { self.exts.is_empty() }
}

/// 递归收集各根目录下扩展名命中的普通文件
///
/// - 输出路径形如 `root.join(相对路径)`；同一根目录内的顺序即遍历顺序，不保证有序。
/// - 任一目录无法枚举即整体失败，不返回部分结果。
pub fn collect_files(roots: &[PathBuf], extensions: &ExtensionSet) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = vec![];
    for root in roots {
        let before = files.len();
        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry.map_err(|source| {
                let path = source.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                ScanError::DirectoryUnreadable { path, source }
            })?;
            // 指向文件的符号链接也收集（读取时穿透），但不进入链接目录
            let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
            if is_file && extensions.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }
        debug!(root = %root.display(), matched = files.len() - before, "collected files");
    }
    Ok(files)
}
