//! 配置文件加载（TOML）
//!
//! ```toml
//! extra_source_extensions = ["mm", "xib"]
//! threads = 4
//! ```
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, ScanError};

/// 配置文件结构；所有字段可选
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub extra_source_extensions: Vec<String>,
    #[serde(default)]
    pub threads: Option<usize>,
}

/// 读取并解析配置文件
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let txt = std::fs::read_to_string(path)
        .map_err(|e| ScanError::Config { path: path.to_path_buf(), message: e.to_string() })?;
    toml::from_str(&txt).map_err(|e| ScanError::Config { path: path.to_path_buf(), message: e.to_string() })
}
