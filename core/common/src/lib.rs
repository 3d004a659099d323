//! 旅行記クライアント共通ライブラリ
//!
//! `journal` コマンドが使うドメイン型・エラー・Outbound ポートと、その標準アダプターを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（エントリ・ID・パス）
pub mod domain;

/// Outbound ポート（trait）
pub mod ports;

/// ポートの標準実装（HTTP・ログ・環境変数）
pub mod adapter;

/// config.json と設定解決
pub mod config;
