//! 新規作成画面のコントローラ
//!
//! 201 Created のみを成功とみなす。失敗時はフォームの値を残したまま画面に留まる。
//! 二重送信の防止はしない（連打すれば重複エントリができうる）。

use crate::domain::{EntryForm, Field, FieldRules};
use crate::usecase::{ControllerDeps, SubmitOutcome};
use common::error::Error;
use common::ports::outbound::{Acknowledged, LogLevel, LogRecord};

pub const CREATE_SUCCESS: &str = "Successfully added entry!";
pub const CREATE_REJECTED: &str = "Failed to add entry.";
pub const CREATE_FAILURE: &str = "An error occurred while adding the entry.";

/// 新規作成画面のコントローラ
pub struct CreateController {
    deps: ControllerDeps,
    form: EntryForm,
    mounted: bool,
}

impl CreateController {
    pub fn new(deps: ControllerDeps) -> Self {
        Self {
            deps,
            form: EntryForm::empty(),
            mounted: true,
        }
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    /// 1 項目の入力
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form = self.form.with_field(field, value);
    }

    /// 送信する。入力層の検証に通らなければ Err（通信しない）
    pub fn submit(&mut self) -> Result<SubmitOutcome, Error> {
        let draft = self.form.validate(FieldRules::Create)?;
        let result = self.deps.resource.create(&draft);
        Ok(self.apply_created(result))
    }

    /// 作成の応答を反映する
    pub fn apply_created(&mut self, result: Result<Acknowledged, Error>) -> SubmitOutcome {
        if !self.mounted {
            self.deps.log_ignored("create");
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(ack) if ack.is_created() => {
                let mut rec = LogRecord::new(LogLevel::Info, "entry created")
                    .layer("usecase")
                    .kind("http");
                if let Some(entry) = &ack.entry {
                    rec = rec.field("id", entry.id.to_string());
                }
                let _ = self.deps.log.log(&rec);
                self.deps.notifier.success(CREATE_SUCCESS);
                if let Err(e) = self.deps.navigator.navigate("/") {
                    self.deps.log_failure("navigate", &e);
                }
                SubmitOutcome::Saved
            }
            Ok(ack) => {
                self.deps.log_failure(
                    "create",
                    &Error::status(ack.status, "expected 201 Created"),
                );
                self.deps.notifier.error(CREATE_REJECTED);
                SubmitOutcome::Rejected(ack.status)
            }
            Err(e) => {
                self.deps.log_failure("create", &e);
                self.deps.notifier.error(CREATE_FAILURE);
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
