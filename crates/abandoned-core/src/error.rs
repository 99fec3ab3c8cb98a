//! 错误类型（对外暴露）
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 扫描/改写过程中的全部错误
///
/// 除 `FileWriteFailure` 由调用方按文件局部恢复外，其余均视为整轮致命错误。
#[derive(Debug, Error)]
pub enum ScanError {
    /// 根目录（或其子目录）无法枚举
    #[error("cannot enumerate directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// 源文件或资源文件无法打开/解码（非 UTF-8 也归入此类）
    #[error("cannot read file {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 标识符行缺少闭合引号
    #[error("line {line_number}: identifier line has no closing quote: {line}")]
    MalformedIdentifierLine { line_number: usize, line: String },

    /// 回写资源文件失败（原文件保持不变）
    #[error("cannot write file {}: {source}", path.display())]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 配置文件读取或解析失败
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// 附带文件路径的内层错误
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ScanError>,
    },
}

impl ScanError {
    /// 为错误附加所属文件路径
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        ScanError::InFile { path: path.into(), source: Box::new(self) }
    }
}

pub type Result<T, E = ScanError> = std::result::Result<T, E>;
