//! 引用判定：标识符在语料中以三种引号形式之一出现即视为“被引用”
//!
//! - `"<id>"`：常规源码引用
//! - `"@<id>"`：storyboard/界面引用
//! - `'<id>'`：脚本包（如 jsbundle）中的单引号引用
//!
//! 纯子串包含，不分词、不处理转义：宁可误判为“被引用”，也不误删在用的标识符。

use aho_corasick::{AhoCorasickBuilder, MatchKind};
use std::collections::HashMap;
use tracing::warn;

/// 单个标识符的三种引用形式
pub fn reference_patterns(identifier: &str) -> [String; 3] {
    [
        format!("\"{identifier}\""),
        format!("\"@{identifier}\""),
        format!("'{identifier}'"),
    ]
}

/// 判断单个标识符是否被遗弃（语料中三种形式均不存在）
pub fn is_abandoned(identifier: &str, corpus: &str) -> bool {
    !reference_patterns(identifier).iter().any(|p| corpus.contains(p.as_str()))
}

/// 批量判定：返回被遗弃的标识符，保持输入顺序（含重复）
///
/// 对同一资源文件的全部标识符构建一个 AC 自动机，只扫描语料一遍；
/// 结果与逐个调用 [`is_abandoned`] 完全一致。
pub fn abandoned_identifiers(identifiers: &[String], corpus: &str) -> Vec<String> {
    // 去重后建模式表：模式下标 / 3 = 去重标识符下标
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut unique: Vec<&str> = Vec::new();
    for id in identifiers {
        index.entry(id.as_str()).or_insert_with(|| {
            unique.push(id.as_str());
            unique.len() - 1
        });
    }
    if unique.is_empty() { return Vec::new(); }

    let patterns: Vec<String> = unique.iter().flat_map(|id| reference_patterns(id)).collect();
    let ac = match AhoCorasickBuilder::new().match_kind(MatchKind::Standard).build(&patterns) {
        Ok(ac) => ac,
        Err(err) => {
            warn!(%err, "failed to build matcher, falling back to per-identifier search");
            return identifiers.iter().filter(|id| is_abandoned(id, corpus)).cloned().collect();
        }
    };

    let mut referenced = vec![false; unique.len()];
    let mut remaining = unique.len();
    for m in ac.find_overlapping_iter(corpus) {
        let slot = m.pattern().as_usize() / 3;
        if !referenced[slot] {
            referenced[slot] = true;
            remaining -= 1;
            if remaining == 0 { break; }
        }
    }

    identifiers
        .iter()
        .filter(|id| !referenced[index[id.as_str()]])
        .cloned()
        .collect()
}
