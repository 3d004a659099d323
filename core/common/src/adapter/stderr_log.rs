//! 人間向けログ（LogRecord → stderr へ要点のみ出力）
//!
//! -v / --verbose のときだけ配線される。fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields の要点だけを短い文字列にする
fn fields_summary(record: &LogRecord) -> Option<String> {
    let fields = record.fields.as_ref().filter(|f| !f.is_empty())?;
    let s = serde_json::to_string(fields).ok()?;
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return Some(s);
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    Some(format!("{}... (len={})", truncated, s.len()))
}

/// 1 レコードを 1 行に整形する
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(layer) = &record.layer {
        line.push_str(&format!(" layer={}", layer));
    }
    if let Some(kind) = &record.kind {
        line.push_str(&format!(" kind={}", kind));
    }
    if let Some(summary) = fields_summary(record) {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// 人間向けログ用 Log（stderr へ出力）
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl StderrLog {
    pub fn new() -> Self {
        Self
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}
