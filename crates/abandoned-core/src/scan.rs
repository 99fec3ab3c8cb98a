//! 检测主流程与并行调度
use crossbeam_channel as channel;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::collect::{collect_files, ExtensionSet};
use crate::corpus::{build_corpus, read_text};
use crate::error::{Result, ScanError};
use crate::extract::extract_identifiers;
use crate::options::{ScanOptions, ScanStats, RESOURCE_EXTENSION, SOURCE_EXTENSIONS, STORYBOARD_EXTENSION};
use crate::reference::abandoned_identifiers;
use crate::types::{Detection, DetectionResult};

/// 单个资源文件的扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FileScan {
    pub(crate) identifiers_checked: usize,
    pub(crate) abandoned: Vec<String>,
}

/// 构建源码扩展名集合：固定集合 + 可选 storyboard + 配置中的额外扩展名
pub fn source_extensions(opts: &ScanOptions) -> ExtensionSet {
    let mut exts = ExtensionSet::new(SOURCE_EXTENSIONS);
    if opts.include_storyboard { exts.insert(STORYBOARD_EXTENSION); }
    for e in &opts.extra_source_extensions { exts.insert(e); }
    exts
}

/// 在 `roots` 下检测被遗弃的标识符
///
/// 流程：收集源码 → 拼接语料 → 收集资源文件 → 每个资源文件独立扫描 → 单一聚合者汇总。
/// 稳定性保证：文件列表先排序，结果为有序映射，与线程数无关。
/// 任一读取/解析错误都会让整轮失败，不返回部分结果。
pub fn detect(roots: &[PathBuf], opts: &ScanOptions) -> Result<Detection> {
    let source_exts = source_extensions(opts);
    debug!(extensions = source_exts.len(), "source extension set");
    let mut sources = collect_files(roots, &source_exts)?;
    sources.sort();
    let corpus = build_corpus(&sources)?;
    info!(source_files = sources.len(), corpus_bytes = corpus.len(), "corpus built");

    let mut resources = collect_files(roots, &ExtensionSet::new([RESOURCE_EXTENSION]))?;
    resources.sort();

    let mut agg = Aggregator::new(ScanStats {
        source_files: sources.len(),
        corpus_bytes: corpus.len(),
        resource_files: resources.len(),
        ..Default::default()
    });

    let threads = opts.worker_count();
    if threads > 1 && resources.len() > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => {
                scan_parallel(pool, resources, corpus, &mut agg);
                return agg.finish();
            }
            Err(err) => warn!(%err, "failed to build thread pool, scanning sequentially"),
        }
    }

    for path in resources {
        let res = scan_resource_file(&path, &corpus);
        agg.accept(path, res);
    }
    agg.finish()
}

/// 扫描单个资源文件：读取 → 提取标识符 → 与语料比对
pub(crate) fn scan_resource_file(path: &Path, corpus: &str) -> Result<FileScan> {
    let contents = read_text(path)?;
    let identifiers = extract_identifiers(&contents).map_err(|e| e.in_file(path))?;
    let abandoned = abandoned_identifiers(&identifiers, corpus);
    Ok(FileScan { identifiers_checked: identifiers.len(), abandoned })
}

/// 并行调度：
/// - 后台线程内用 Rayon 线程池并行扫描，每个资源文件一个任务
/// - 结果经通道送回当前线程，由唯一的聚合者写入映射
/// - 通道关闭（全部任务结束）即为汇合点
fn scan_parallel(pool: rayon::ThreadPool, files: Vec<PathBuf>, corpus: Arc<str>, agg: &mut Aggregator) {
    type Msg = (PathBuf, Result<FileScan>);
    let (tx, rx) = channel::bounded::<Msg>(256);

    let scan_thread = std::thread::spawn(move || {
        pool.install(|| {
            files.into_par_iter().for_each_with(tx, |tx, path| {
                let res = scan_resource_file(&path, &corpus);
                // 接收端只会在聚合结束后关闭，发送失败可忽略
                let _ = tx.send((path, res));
            });
        });
        // 结束后 Sender 全部被丢弃，Receiver 将收到关闭信号
    });

    while let Ok((path, res)) = rx.recv() {
        agg.accept(path, res);
    }

    if let Err(panic) = scan_thread.join() {
        std::panic::resume_unwind(panic);
    }
}

/// 结果聚合者：映射的唯一写入方
struct Aggregator {
    result: DetectionResult,
    stats: ScanStats,
    first_error: Option<ScanError>,
}

impl Aggregator {
    fn new(stats: ScanStats) -> Self {
        Self { result: DetectionResult::new(), stats, first_error: None }
    }

    fn accept(&mut self, path: PathBuf, res: Result<FileScan>) {
        match res {
            Ok(scan) => {
                self.stats.identifiers_checked += scan.identifiers_checked;
                if scan.abandoned.is_empty() {
                    info!(file = %path.display(), "has no abandoned identifiers");
                } else {
                    debug!(file = %path.display(), count = scan.abandoned.len(), "abandoned identifiers found");
                    self.stats.abandoned_total += scan.abandoned.len();
                    self.result.insert(path, scan.abandoned);
                }
            }
            // 保留第一个错误，继续排空其余任务
            Err(err) => {
                if self.first_error.is_none() { self.first_error = Some(err); }
            }
        }
    }

    fn finish(self) -> Result<Detection> {
        match self.first_error {
            Some(err) => Err(err),
            None => Ok(Detection { result: self.result, stats: self.stats }),
        }
    }
}
