//! アダプター（外界の I/O を trait で抽象化した Outbound ポートの標準実装）
//!
//! usecase はポートの trait 経由でのみ HTTP・ファイル・環境変数に触れる。
//! 実装は標準実装（Std* / Http* / FileJsonLog）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod http_journal_resource;
pub mod std_env_resolver;
pub mod stderr_log;

pub use file_json_log::{FileJsonLog, NoopLog, TeeLog};
pub use http_journal_resource::HttpJournalResource;
pub use std_env_resolver::StdEnvResolver;
pub use stderr_log::StderrLog;
