//! 編集画面のコントローラ
//!
//! - マウント時に対象 1 件を取得し、取得できるまでフォームは出さない
//! - 取得失敗時はフォームも通知も出さない
//! - 送信は全項目 + 元の id での全置換。200 OK のみ成功とし、失敗時は何も通知しない
//! - 送信中フラグは結果によらず必ず戻す

use crate::domain::{EntryForm, Field, FieldRules};
use crate::usecase::{ControllerDeps, SubmitOutcome};
use common::domain::{EntryId, JournalEntry};
use common::error::Error;
use common::ports::outbound::Acknowledged;

pub const UPDATE_SUCCESS: &str = "Successfully updated entry";
pub const SUBMIT_LABEL: &str = "Update Entry";
pub const SUBMITTING_LABEL: &str = "Updating...";

/// 編集画面の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    Loading,
    /// 取得失敗（フォームなし・表示なし）
    Unavailable,
    Ready,
}

/// 編集画面のコントローラ
pub struct EditController {
    deps: ControllerDeps,
    id: EntryId,
    status: EditStatus,
    original: Option<JournalEntry>,
    form: EntryForm,
    submitting: bool,
    mounted: bool,
}

impl EditController {
    pub fn new(deps: ControllerDeps, id: EntryId) -> Self {
        Self {
            deps,
            id,
            status: EditStatus::Loading,
            original: None,
            form: EntryForm::empty(),
            submitting: false,
            mounted: true,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// マウント時の取得
    pub fn activate(&mut self) {
        self.status = EditStatus::Loading;
        let result = self.deps.resource.read(&self.id);
        self.apply_loaded(result);
    }

    /// 1 件取得の応答を反映する
    pub fn apply_loaded(&mut self, result: Result<JournalEntry, Error>) {
        if !self.mounted {
            self.deps.log_ignored("read");
            return;
        }
        match result {
            Ok(entry) => {
                self.form = EntryForm::from_entry(&entry);
                self.original = Some(entry);
                self.status = EditStatus::Ready;
            }
            Err(e) => {
                self.deps.log_failure("read", &e);
                self.status = EditStatus::Unavailable;
            }
        }
    }

    pub fn status(&self) -> EditStatus {
        self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == EditStatus::Ready
    }

    /// 表示用のフォーム（Ready 以外では None）
    pub fn form(&self) -> Option<&EntryForm> {
        self.is_ready().then_some(&self.form)
    }

    /// 1 項目の入力（フォームが出ていなければ Err）
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), Error> {
        if !self.is_ready() {
            return Err(Error::invalid_argument(format!(
                "Entry {} is not loaded",
                self.id
            )));
        }
        self.form = self.form.with_field(field, value);
        Ok(())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// 送信ボタンの文言
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// 送信を開始し、置換用のペイロード（現在の 4 項目 + 元の id）を返す
    pub fn begin_submit(&mut self) -> Result<JournalEntry, Error> {
        let original = match (&self.original, self.status) {
            (Some(original), EditStatus::Ready) => original,
            _ => {
                return Err(Error::invalid_argument(format!(
                    "Entry {} is not loaded",
                    self.id
                )))
            }
        };
        let draft = self.form.validate(FieldRules::Edit)?;
        let payload = original.replaced_with(draft);
        self.submitting = true;
        Ok(payload)
    }

    /// 送信する（検証に通らなければ Err、通信しない）
    pub fn submit(&mut self) -> Result<SubmitOutcome, Error> {
        let payload = self.begin_submit()?;
        let result = self.deps.resource.replace(&payload);
        Ok(self.apply_replaced(result))
    }

    /// 置換の応答を反映する（送信中フラグは必ず戻す）
    pub fn apply_replaced(&mut self, result: Result<Acknowledged, Error>) -> SubmitOutcome {
        self.submitting = false;
        if !self.mounted {
            self.deps.log_ignored("replace");
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(ack) if ack.is_ok() => {
                self.deps.notifier.success(UPDATE_SUCCESS);
                if let Err(e) = self.deps.navigator.navigate("/") {
                    self.deps.log_failure("navigate", &e);
                }
                SubmitOutcome::Saved
            }
            Ok(ack) => {
                // 通知は出さない（ボタンが戻るだけ）
                self.deps
                    .log_failure("replace", &Error::status(ack.status, "expected 200 OK"));
                SubmitOutcome::Rejected(ack.status)
            }
            Err(e) => {
                self.deps.log_failure("replace", &e);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
