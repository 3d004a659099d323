//! 確認ダイアログの文言と結果

/// 確認ダイアログの内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: &'static str,
    /// 承認ボタンの文言
    pub confirm_label: &'static str,
}

impl ConfirmPrompt {
    /// 取り消せない操作の前に出す確認（削除・編集で共通の文言）
    pub const fn irreversible(confirm_label: &'static str) -> Self {
        Self {
            title: "Are you sure?",
            message: "You won't be able to revert this!",
            confirm_label,
        }
    }

    pub const fn delete() -> Self {
        Self::irreversible("Yes, delete it!")
    }

    pub const fn edit() -> Self {
        Self::irreversible("Yes, edit it!")
    }
}

/// 確認の結果（Confirmed: 続行、Declined: 何もしない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}

impl Decision {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}
