//! 扫描选项与统计信息（模块）

/// 固定的源码扩展名（始终参与语料拼接）
pub const SOURCE_EXTENSIONS: [&str; 4] = ["h", "m", "swift", "jsbundle"];
/// storyboard 扩展名（仅在开启对应选项时加入语料）
pub const STORYBOARD_EXTENSION: &str = "storyboard";
/// 资源文件扩展名
pub const RESOURCE_EXTENSION: &str = "strings";

/// 扫描选项
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// 是否把 storyboard 文件纳入语料
    pub include_storyboard: bool,
    /// 额外的源码扩展名（来自配置文件），大小写不敏感
    pub extra_source_extensions: Vec<String>,
    /// 线程数：None 表示自动（等于 CPU 核数）；Some(1) 走串行
    pub threads: Option<usize>,
}

impl ScanOptions {
    /// 实际使用的工作线程数（至少为 1）
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub source_files: usize,
    pub corpus_bytes: usize,
    pub resource_files: usize,
    pub identifiers_checked: usize,
    pub abandoned_total: usize,
}
