//! journal コマンドの enum（Command Pattern）
//!
//! CLI の解析結果を、シェル上で行うユーザー操作の列として明示する。

use crate::domain::Field;
use common::domain::EntryId;

/// フォームへの入力（項目, 値）の並び
pub type FieldInputs = Vec<(Field, String)>;

/// journal の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum JournalCommand {
    /// ヘルプ表示
    Help,
    /// `/` を開いて一覧を表示
    List,
    /// 一覧を開き、詳細表示操作を行う
    View { id: EntryId },
    /// 一覧を開き、削除操作を行う
    Delete { id: EntryId },
    /// 一覧を開き、編集操作（確認 → 編集画面へ遷移 → 入力 → 送信）を行う
    Edit { id: EntryId, inputs: FieldInputs },
    /// `/add-entry` を開き、入力して送信する
    Add { inputs: FieldInputs },
    /// 任意のパスを直接開く。フォーム画面では inputs を入力し、submit なら送信する
    Open {
        path: String,
        inputs: FieldInputs,
        submit: bool,
    },
}

impl JournalCommand {
    /// ログ用の名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List => "list",
            Self::View { .. } => "view",
            Self::Delete { .. } => "delete",
            Self::Edit { .. } => "edit",
            Self::Add { .. } => "add",
            Self::Open { .. } => "open",
        }
    }
}
