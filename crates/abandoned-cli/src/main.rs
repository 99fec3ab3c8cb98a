use abandoned_core::{
    detect, load_config, render_json, render_text, rewrite_file, FileConfig, ScanError, ScanOptions,
};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod output;

use output::OutputStream;

const LEGACY_STORYBOARD: &str = "storyboard";
const LEGACY_WRITE: &str = "write";

/// 命令行入口（基于 clap）
///
/// 兼容旧式写法：最后一个位置参数为 `storyboard` 等同 `--storyboard`，
/// 任意位置的 `write` 等同 `--write`。因此名为 `write` 的目录需写成 `./write`。
#[derive(Parser, Debug)]
#[command(
    name = "abandoned-strings",
    version,
    about = "Find .strings identifiers that no source file references",
    override_usage = "abandoned-strings [OPTIONS] <ROOT>... [storyboard] [write]"
)]
struct Cli {
    /// 源码根目录（可多个）
    roots: Vec<PathBuf>,

    /// 把 .storyboard 文件纳入语料
    #[arg(long)]
    storyboard: bool,

    /// 从资源文件中删除被遗弃的标识符（原地改写）
    #[arg(long)]
    write: bool,

    /// 线程数（"auto"=CPU 核心数；1 为串行）
    #[arg(long, default_value = "auto")]
    threads: String,

    /// 报告格式：text 或 json
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// 配置文件路径（TOML）
    #[arg(long)]
    config: Option<PathBuf>,
}

/// 解析旧式开关后的调用参数
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    roots: Vec<PathBuf>,
    storyboard: bool,
    write: bool,
}

impl Cli {
    fn invocation(&self) -> Invocation {
        let mut roots = self.roots.clone();
        // 与旧版一致：先按原始末尾判定 storyboard，再移除第一个 write
        let storyboard = roots.last().is_some_and(|p| p == Path::new(LEGACY_STORYBOARD));
        if storyboard { roots.pop(); }
        let write = match roots.iter().position(|p| p == Path::new(LEGACY_WRITE)) {
            Some(i) => { roots.remove(i); true }
            None => false,
        };
        Invocation { roots, storyboard: storyboard || self.storyboard, write: write || self.write }
    }
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();
    let inv = cli.invocation();

    if inv.roots.is_empty() {
        OutputStream::Stdout.line("Please provide the root directory for source code files as a command line argument.");
        OutputStream::Stdout.line(&Cli::command().render_usage().to_string());
        return Ok(());
    }

    let file_cfg = match &cli.config {
        Some(path) => load_config(path).context("load config")?,
        None => FileConfig::default(),
    };
    let opts = ScanOptions {
        include_storyboard: inv.storyboard,
        extra_source_extensions: file_cfg.extra_source_extensions,
        threads: parse_threads(&cli.threads).or(file_cfg.threads),
    };
    let json = cli.format == "json";
    // JSON 模式下 stdout 只输出报告本身
    let notes = if json { OutputStream::Stderr } else { OutputStream::Stdout };

    info!(roots = ?inv.roots, storyboard = opts.include_storyboard, write = inv.write, "starting scan");
    notes.line("Searching for abandoned resource strings…");

    let detection = detect(&inv.roots, &opts).context("scan failed")?;
    let stats = &detection.stats;
    info!(
        source_files = stats.source_files,
        resource_files = stats.resource_files,
        identifiers_checked = stats.identifiers_checked,
        abandoned = stats.abandoned_total,
        "scan finished"
    );

    if json {
        OutputStream::Stdout.line(&render_json(&detection.result).context("render json report")?);
    } else {
        OutputStream::Stdout.write(&render_text(&detection.result));
    }

    if inv.write {
        for (path, identifiers) in &detection.result {
            notes.line(&format!("\n\nNow modifying {} ...", path.display()));
            let remove: HashSet<String> = identifiers.iter().cloned().collect();
            match rewrite_file(path, &remove) {
                Ok(outcome) => info!(file = %outcome.path.display(), lines_removed = outcome.lines_removed, "rewrote"),
                // 写入失败只影响当前文件
                Err(err @ ScanError::FileWriteFailure { .. }) => {
                    warn!(%err, "rewrite failed");
                    OutputStream::Stderr.line(&format!("ERROR writing file: {}: {err}", path.display()));
                }
                Err(err) => return Err(err).context("rewrite failed"),
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志统一写 stderr，stdout 只留给报告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(std::io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析线程参数；"auto" 或非法值返回 None
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") { return None; }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
