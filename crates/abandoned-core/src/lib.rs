//! 遗弃本地化字符串检测核心库
//!
//! 设计要点：
//! - 两阶段扫描：先把全部源码拼成只读语料，再逐个资源文件提取标识符并做子串比对。
//! - 每个资源文件一个扫描任务，结果经通道交给唯一的聚合者，映射只有一个写入方。
//! - 读取/解析错误一律整轮失败；只有回写单个文件失败时由调用方局部处理。
//! - 输出为有序映射，与线程数、完成顺序无关。

mod collect;
mod config;
mod corpus;
mod error;
mod extract;
mod options;
mod reference;
mod report;
mod rewrite;
mod scan;
mod types;

pub use collect::{collect_files, ExtensionSet};
pub use config::{load_config, FileConfig};
pub use corpus::build_corpus;
pub use error::{Result, ScanError};
pub use extract::{classify_line, extract_identifiers, identifier_of_line, IdentifierLine};
pub use options::{ScanOptions, ScanStats, RESOURCE_EXTENSION, SOURCE_EXTENSIONS, STORYBOARD_EXTENSION};
pub use reference::{abandoned_identifiers, is_abandoned, reference_patterns};
pub use report::{render_json, render_text, HEADER_FOUND, HEADER_NONE};
pub use rewrite::{rewrite, rewrite_file, temp_path_for, write_atomically, RewriteOutcome};
pub use scan::{detect, source_extensions};
pub use types::{Detection, DetectionResult, ReportItem};
