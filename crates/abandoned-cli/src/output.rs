//! 标准输出/标准错误写入
//!
//! 写 stdout 失败时改为强制写 stderr 报告；若 stderr 也写不进去，直接终止进程。
use std::io::{self, Write};

/// 单次写入的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Written,
    /// 主流写入失败，诊断已写入后备流
    Escalated,
    /// 主流与后备流都失败
    Lost,
}

/// 写入 `primary`，失败则把诊断写入 `fallback`
pub fn write_or_escalate(primary: &mut dyn Write, fallback: &mut dyn Write, text: &str) -> Delivery {
    let res = primary.write_all(text.as_bytes()).and_then(|_| primary.flush());
    let err = match res {
        Ok(()) => return Delivery::Written,
        Err(err) => err,
    };
    let diag = format!("failed to write output ({err}): {text:?}\n");
    match fallback.write_all(diag.as_bytes()).and_then(|_| fallback.flush()) {
        Ok(()) => Delivery::Escalated,
        Err(_) => Delivery::Lost,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

impl OutputStream {
    pub fn write(self, text: &str) {
        let stderr = io::stderr();
        let delivery = match self {
            OutputStream::Stdout => write_or_escalate(&mut io::stdout().lock(), &mut stderr.lock(), text),
            // stderr 自身失败时没有更后一级的流
            OutputStream::Stderr => {
                let mut h = stderr.lock();
                match h.write_all(text.as_bytes()).and_then(|_| h.flush()) {
                    Ok(()) => Delivery::Written,
                    Err(_) => Delivery::Lost,
                }
            }
        };
        if delivery == Delivery::Lost {
            std::process::abort();
        }
    }

    pub fn line(self, text: &str) {
        self.write(&format!("{text}\n"));
    }
}
