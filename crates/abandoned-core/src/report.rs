//! 报告渲染（纯文本 / JSON）
use std::fmt::Write as _;

use crate::types::{DetectionResult, ReportItem};

pub const HEADER_NONE: &str = "No abandoned resource strings were detected.";
pub const HEADER_FOUND: &str = "Abandoned resource strings were detected:";

fn sorted_ids(ids: &[String]) -> Vec<&str> {
    let mut v: Vec<&str> = ids.iter().map(String::as_str).collect();
    v.sort_unstable();
    v
}

/// 文本报告：文件按路径排序，标识符排序后缩进两格，每个文件后空一行
pub fn render_text(result: &DetectionResult) -> String {
    if result.is_empty() {
        return format!("{HEADER_NONE}\n");
    }
    let mut out = format!("{HEADER_FOUND}\n");
    for (file, ids) in result {
        let _ = writeln!(out, "{}", file.display());
        for id in sorted_ids(ids) {
            let _ = writeln!(out, "  {id}");
        }
        out.push('\n');
    }
    out
}

/// JSON 报告：`[{"file": ..., "identifiers": [...]}, ...]`
pub fn render_json(result: &DetectionResult) -> serde_json::Result<String> {
    let items: Vec<ReportItem<'_>> = result
        .iter()
        .map(|(file, ids)| ReportItem { file: file.display().to_string(), identifiers: sorted_ids(ids) })
        .collect();
    serde_json::to_string_pretty(&items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> DetectionResult {
        let mut r = DetectionResult::new();
        r.insert(PathBuf::from("b/Localizable.strings"), vec!["zeta".into(), "alpha".into()]);
        r.insert(PathBuf::from("a/Main.strings"), vec!["only".into()]);
        r
    }

    #[test]
    fn text_report_is_sorted() {
        let text = render_text(&sample());
        assert_eq!(
            text,
            "Abandoned resource strings were detected:\n\
             a/Main.strings\n  only\n\n\
             b/Localizable.strings\n  alpha\n  zeta\n\n"
        );
    }

    #[test]
    fn empty_text_report() {
        assert_eq!(render_text(&DetectionResult::new()), "No abandoned resource strings were detected.\n");
    }

    #[test]
    fn json_report_shape() {
        let v: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert_eq!(v[0]["file"], "a/Main.strings");
        assert_eq!(v[1]["identifiers"], serde_json::json!(["alpha", "zeta"]));
        assert_eq!(render_json(&DetectionResult::new()).unwrap(), "[]");
    }
}
