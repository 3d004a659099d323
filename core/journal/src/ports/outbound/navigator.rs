//! 画面遷移 Outbound ポート
//!
//! コントローラは遷移先のパスを渡すだけで、次の画面のマウントはシェルが行う。

use common::error::Error;

/// 画面遷移を依頼する Outbound ポート
pub trait Navigator: Send + Sync {
    /// パスへの遷移を依頼する。遷移を開始できなければ Err を返す。
    fn navigate(&self, path: &str) -> Result<(), Error>;
}
