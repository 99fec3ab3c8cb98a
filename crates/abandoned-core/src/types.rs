//! 公共类型（对外暴露）
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::options::ScanStats;

/// 检测结果：资源文件路径 → 该文件中被遗弃的标识符（文件内顺序）
///
/// 没有被遗弃标识符的文件不出现在映射中。
pub type DetectionResult = BTreeMap<PathBuf, Vec<String>>;

/// 一次检测的完整输出
#[derive(Debug, Clone, Default)]
pub struct Detection {
    pub result: DetectionResult,
    pub stats: ScanStats,
}

/// JSON 报告中的单个元素
#[derive(Debug, Clone, Serialize)]
pub struct ReportItem<'a> {
    pub file: String,
    pub identifiers: Vec<&'a str>,
}
