//! 確認してから続行する（削除・編集で共通）

use crate::domain::ConfirmPrompt;
use crate::ports::outbound::Confirmation;
use common::error::Error;

/// 確認が取れたときだけ proceed を実行し、その結果を Some で返す。
///
/// 拒否・確認自体の失敗は None（proceed は呼ばない）。失敗は on_error に渡す。
pub fn confirm_then<T>(
    confirmation: &dyn Confirmation,
    prompt: &ConfirmPrompt,
    on_error: impl FnOnce(&Error),
    proceed: impl FnOnce() -> T,
) -> Option<T> {
    match confirmation.confirm(prompt) {
        Ok(decision) if decision.is_confirmed() => Some(proceed()),
        Ok(_) => None,
        Err(e) => {
            on_error(&e);
            None
        }
    }
}
