//! 確認 Outbound ポート（削除・編集前の確認ダイアログ）
//!
//! usecase はこの trait 経由で確認を取り、対話の具体実装（stdin/stderr）は adapter 層に置く。

use crate::domain::{ConfirmPrompt, Decision};
use common::error::Error;

/// はい/いいえ の確認を得る Outbound ポート（adapter で実装）
pub trait Confirmation: Send + Sync {
    /// タイトルとメッセージを示して確認する。入力が読めない等の場合は Err を返す。
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<Decision, Error>;
}
