//! ユースケース（画面ごとのコントローラとナビゲーションシェル）
//!
//! 各コントローラは自分専用のデータのコピーだけを持ち、マウント時に取り直す。共有キャッシュは持たない。

pub mod confirm;
pub mod create;
pub mod edit;
pub mod list;
pub mod shell;

use crate::ports::outbound::{Confirmation, Navigator, Notifier};
use common::error::Error;
use common::ports::outbound::{JournalResource, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// コントローラが使う外界（usecase が定義を所有し、wiring は組み立てるだけ）
#[derive(Clone)]
pub struct ControllerDeps {
    pub resource: Arc<dyn JournalResource>,
    pub confirmation: Arc<dyn Confirmation>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub log: Arc<dyn Log>,
}

impl ControllerDeps {
    /// 捕捉したリモート呼び出しの失敗を記録する（利用者への表示は呼び出し側が決める）
    pub(crate) fn log_failure(&self, operation: &str, err: &Error) {
        let mut rec = LogRecord::new(LogLevel::Warn, format!("{} failed: {}", operation, err))
            .layer("usecase")
            .kind("http")
            .field("operation", operation);
        if let Some(status) = err.status_code() {
            rec = rec.field("status", status);
        }
        let _ = self.log.log(&rec);
    }

    pub(crate) fn log_event(&self, level: LogLevel, kind: &str, message: impl Into<String>) {
        let _ = self
            .log
            .log(&LogRecord::new(level, message).layer("usecase").kind(kind));
    }

    /// アンマウント後に届いた応答を無視したことを記録する
    pub(crate) fn log_ignored(&self, operation: &str) {
        self.log_event(
            LogLevel::Debug,
            "lifecycle",
            format!("{} response ignored after unmount", operation),
        );
    }
}

/// フォーム送信の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 期待したステータスで保存され、一覧へ遷移した
    Saved,
    /// 2xx だが期待したステータスではなかった
    Rejected(u16),
    /// 通信失敗・2xx 以外
    Failed,
    /// アンマウント後の応答だったため何もしなかった
    Ignored,
}
