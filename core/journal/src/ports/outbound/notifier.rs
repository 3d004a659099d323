//! 通知 Outbound ポート（toast 相当の一時的なメッセージ）

/// 成功・失敗メッセージを出す Outbound ポート
///
/// 出しっぱなしで戻り値は使わない。
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
