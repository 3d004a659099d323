//! Outbound ポート: アプリが外界（確認ダイアログ・通知・画面遷移）を使うための trait

pub mod confirmation;
pub mod navigator;
pub mod notifier;

pub use confirmation::Confirmation;
pub use navigator::Navigator;
pub use notifier::Notifier;
