//! 资源文件标识符提取
//!
//! 标识符行形如 `"<identifier>" = "<value>";`，只解析第一对引号之间的内容，
//! 其余部分（值、分号、行尾注释）不透明。

use crate::error::{Result, ScanError};

const QUOTE: char = '"';

/// 单行分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierLine<'a> {
    /// 合法标识符行，携带标识符
    Identifier(&'a str),
    /// 以引号开头但没有闭合引号
    Malformed,
    /// 注释、空行等其它行
    Passthrough,
}

/// 对单行（未裁剪）进行分类
pub fn classify_line(line: &str) -> IdentifierLine<'_> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(QUOTE) else {
        return IdentifierLine::Passthrough;
    };
    match rest.find(QUOTE) {
        Some(end) => IdentifierLine::Identifier(&rest[..end]),
        None => IdentifierLine::Malformed,
    }
}

/// 取单行的标识符；非标识符行与格式错误行均返回 None
pub fn identifier_of_line(line: &str) -> Option<&str> {
    match classify_line(line) {
        IdentifierLine::Identifier(id) => Some(id),
        _ => None,
    }
}

/// 按文件顺序提取全部标识符（允许重复）
///
/// 任一标识符行缺少闭合引号即失败，不做部分恢复。
pub fn extract_identifiers(contents: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for (idx, line) in contents.split('\n').enumerate() {
        match classify_line(line) {
            IdentifierLine::Identifier(id) => out.push(id.to_string()),
            IdentifierLine::Malformed => {
                return Err(ScanError::MalformedIdentifierLine { line_number: idx + 1, line: line.trim().to_string() });
            }
            IdentifierLine::Passthrough => {}
        }
    }
    Ok(out)
}
