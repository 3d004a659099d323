//! Outbound ポート: アプリが外界（リモートリソース・ログ・環境変数）を使うための trait

pub mod env_resolver;
pub mod journal_resource;
pub mod log;

pub use env_resolver::EnvResolver;
pub use journal_resource::{Acknowledged, JournalResource};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
