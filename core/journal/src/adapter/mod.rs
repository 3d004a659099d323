//! アダプター（確認・通知・画面遷移の Outbound ポート実装）

pub mod confirmation;
pub mod pending_navigator;
pub mod stderr_notifier;

pub use confirmation::{AssumeYesConfirmation, CliConfirmation, NonInteractiveConfirmation};
pub use pending_navigator::PendingNavigator;
pub use stderr_notifier::StderrNotifier;
