//! 一覧画面のコントローラ
//!
//! - マウント時にコレクション全件を取得する（順序はサーバのまま）
//! - 詳細表示はメモリ上のエントリを使い、通信しない
//! - 削除は確認 → DELETE → 成功時はメモリ上から取り除く（再取得しない）
//! - 編集は確認 → 編集画面へ遷移（読み込みは編集画面側）
//! - 削除・編集は表示中の一覧にある id に限る

use crate::domain::ConfirmPrompt;
use crate::usecase::confirm::confirm_then;
use crate::usecase::ControllerDeps;
use common::domain::{EntryId, JournalEntry};
use common::error::Error;
use common::ports::outbound::LogLevel;

pub const DELETE_SUCCESS: &str = "Entry deleted successfully!";
pub const DELETE_FAILURE: &str = "There was a problem deleting the entry.";
/// 編集画面への遷移失敗時の通知（削除失敗と同じ文言）
pub const EDIT_TRANSFER_FAILURE: &str = DELETE_FAILURE;

/// 一覧の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// 取得中
    Loading,
    /// 取得成功・1 件以上
    Loaded,
    /// 取得成功・0 件
    Empty,
    /// 取得失敗（表示は Empty と同じ）
    LoadFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    Ready,
    Failed,
}

/// 削除操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 一覧に無い id（確認も通信もしない）
    NotListed,
    /// 確認で拒否された（通信なし）
    Declined,
    Deleted,
    Failed,
    Ignored,
}

/// 編集操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// 一覧に無い id（確認しない）
    NotListed,
    Declined,
    /// 編集画面への遷移を依頼した
    Transferred,
    /// 遷移を開始できなかった
    Failed,
}

/// 一覧画面のコントローラ
pub struct ListController {
    deps: ControllerDeps,
    phase: Phase,
    entries: Vec<JournalEntry>,
    selected: Option<JournalEntry>,
    mounted: bool,
}

impl ListController {
    pub fn new(deps: ControllerDeps) -> Self {
        Self {
            deps,
            phase: Phase::Loading,
            entries: Vec::new(),
            selected: None,
            mounted: true,
        }
    }

    /// マウント時の取得
    pub fn activate(&mut self) {
        self.phase = Phase::Loading;
        let result = self.deps.resource.list();
        self.apply_loaded(result);
    }

    /// 一覧取得の応答を反映する
    pub fn apply_loaded(&mut self, result: Result<Vec<JournalEntry>, Error>) {
        if !self.mounted {
            self.deps.log_ignored("list");
            return;
        }
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.phase = Phase::Ready;
            }
            Err(e) => {
                // 通知は出さず、空の一覧として表示する
                self.deps.log_failure("list", &e);
                self.entries.clear();
                self.phase = Phase::Failed;
            }
        }
    }

    pub fn status(&self) -> ListStatus {
        match self.phase {
            Phase::Loading => ListStatus::Loading,
            Phase::Failed => ListStatus::LoadFailed,
            Phase::Ready if self.entries.is_empty() => ListStatus::Empty,
            Phase::Ready => ListStatus::Loaded,
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// 詳細表示（メモリ上に無い id なら None、選択は変えない）
    pub fn view(&mut self, id: &EntryId) -> Option<&JournalEntry> {
        let entry = self.entries.iter().find(|e| &e.id == id)?.clone();
        self.selected = Some(entry);
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&JournalEntry> {
        self.selected.as_ref()
    }

    pub fn close_view(&mut self) {
        self.selected = None;
    }

    /// 表示中の一覧にある id か
    pub fn is_listed(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    /// 削除操作
    pub fn delete(&mut self, id: &EntryId) -> DeleteOutcome {
        if !self.is_listed(id) {
            return DeleteOutcome::NotListed;
        }
        let deps = self.deps.clone();
        let result = confirm_then(
            deps.confirmation.as_ref(),
            &ConfirmPrompt::delete(),
            |e| deps.log_failure("confirm", e),
            || deps.resource.delete(id),
        );
        match result {
            Some(result) => self.apply_deleted(id, result),
            None => DeleteOutcome::Declined,
        }
    }

    /// 削除の応答を反映する
    pub fn apply_deleted(&mut self, id: &EntryId, result: Result<(), Error>) -> DeleteOutcome {
        if !self.mounted {
            self.deps.log_ignored("delete");
            return DeleteOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.entries.retain(|e| &e.id != id);
                if self.selected.as_ref().is_some_and(|e| &e.id == id) {
                    self.selected = None;
                }
                self.deps.notifier.success(DELETE_SUCCESS);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                // メモリ上の一覧はそのまま（サーバとずれうる）
                self.deps.log_failure("delete", &e);
                self.deps.notifier.error(DELETE_FAILURE);
                DeleteOutcome::Failed
            }
        }
    }

    /// 編集操作（確認後に `/edit/:id` へ遷移を依頼する。通信はしない）
    pub fn edit(&mut self, id: &EntryId) -> EditOutcome {
        if !self.is_listed(id) {
            return EditOutcome::NotListed;
        }
        let deps = self.deps.clone();
        let path = format!("/edit/{}", id);
        let result = confirm_then(
            deps.confirmation.as_ref(),
            &ConfirmPrompt::edit(),
            |e| deps.log_failure("confirm", e),
            || deps.navigator.navigate(&path),
        );
        match result {
            None => EditOutcome::Declined,
            Some(Ok(())) => {
                deps.log_event(LogLevel::Info, "navigation", format!("navigate to {}", path));
                EditOutcome::Transferred
            }
            Some(Err(e)) => {
                deps.log_failure("navigate", &e);
                deps.notifier.error(EDIT_TRANSFER_FAILURE);
                EditOutcome::Failed
            }
        }
    }

    /// アンマウント（以降に届いた応答は無視する）
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
