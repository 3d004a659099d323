//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・ベース URL を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{BaseUrl, HomeDir};
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. JOURNAL_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/journal（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/journal
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// JOURNAL_BASE_URL（未設定・空なら None）
    fn base_url_from_env(&self) -> Option<BaseUrl>;
}
