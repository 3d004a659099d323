//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（確認ダイアログ・通知・画面遷移）を使うための trait

pub mod inbound;
pub mod outbound;
