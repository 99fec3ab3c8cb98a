//! 资源文件改写：按行删除指定标识符，其余内容原样保留
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::corpus::read_text;
use crate::error::{Result, ScanError};
use crate::extract::identifier_of_line;

/// 单个文件的改写结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub path: PathBuf,
    pub lines_removed: usize,
}

/// 生成去掉 `remove` 中标识符后的新内容
///
/// 纯删减、保持行序；非标识符行（含格式错误行）一律原样保留，因此重复执行结果不变。
pub fn rewrite(contents: &str, remove: &HashSet<String>) -> String {
    rewrite_counting(contents, remove).0
}

/// 同 [`rewrite`]，并返回删除的行数
fn rewrite_counting(contents: &str, remove: &HashSet<String>) -> (String, usize) {
    let mut removed = 0;
    let kept: Vec<&str> = contents
        .split('\n')
        .filter(|line| match identifier_of_line(line) {
            Some(id) if remove.contains(id) => {
                removed += 1;
                false
            }
            _ => true,
        })
        .collect();
    (kept.join("\n"), removed)
}

/// 读取 → 改写 → 原子写回
///
/// 读取失败属于致命错误（FileUnreadable）；写入失败返回 FileWriteFailure，原文件不受影响。
pub fn rewrite_file(path: &Path, remove: &HashSet<String>) -> Result<RewriteOutcome> {
    let original = read_text(path)?;
    let (updated, lines_removed) = rewrite_counting(&original, remove);
    if updated != original {
        write_atomically(path, updated.as_bytes())?;
    }
    debug!(file = %path.display(), lines_removed, "resource file rewritten");
    Ok(RewriteOutcome { path: path.to_path_buf(), lines_removed })
}

/// 先写同目录下的临时文件并落盘，再重命名覆盖目标文件
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let fail = |source: std::io::Error| ScanError::FileWriteFailure { path: path.to_path_buf(), source };
    let tmp_path = temp_path_for(path);

    let written = (|| -> std::io::Result<()> {
        // 沿用原文件权限；目标尚不存在时保持默认
        let perms = fs::metadata(path).ok().map(|m| m.permissions());
        let mut file = OpenOptions::new().create(true).write(true).truncate(true).open(&tmp_path)?;
        file.write_all(bytes)?;
        if let Some(perms) = perms { file.set_permissions(perms)?; }
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if let Err(err) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(fail(err));
    }
    Ok(())
}

/// 临时文件：同目录下的 `.<name>.tmp`，上次中断遗留的同名文件会被覆盖
pub fn temp_path_for(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
