//! テスト用のスタブ（メモリ上のリソース・記録する通知・台本どおりの確認）

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use common::domain::{EntryDraft, EntryId, JournalEntry};
use common::error::Error;
use common::ports::outbound::{Acknowledged, JournalResource, Log, LogRecord};

use crate::adapter::PendingNavigator;
use crate::domain::{ConfirmPrompt, Decision};
use crate::ports::outbound::{Confirmation, Notifier};
use crate::usecase::shell::Shell;
use crate::usecase::ControllerDeps;
use crate::wiring::App;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn entry(id: i64, title: &str, location: &str) -> JournalEntry {
    JournalEntry {
        id: EntryId::from(id),
        title: title.to_string(),
        location: location.to_string(),
        date: date(2024, 5, 1),
        description: format!("{} notes", title),
    }
}

/// リソースに届いた呼び出し
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Read(EntryId),
    Create(EntryDraft),
    Replace(JournalEntry),
    Delete(EntryId),
}

/// メモリ上のコレクションを持つ JournalResource
pub struct StubResource {
    entries: Mutex<Vec<JournalEntry>>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<i64>,
    create_status: Mutex<u16>,
    replace_status: Mutex<u16>,
    delete_fails: Mutex<bool>,
    offline: Mutex<bool>,
}

impl StubResource {
    pub fn new(entries: Vec<JournalEntry>) -> Arc<Self> {
        Arc::new(Self {
            entries: Mutex::new(entries),
            calls: Mutex::new(Vec::new()),
            next_id: Mutex::new(100),
            create_status: Mutex::new(201),
            replace_status: Mutex::new(200),
            delete_fails: Mutex::new(false),
            offline: Mutex::new(false),
        })
    }

    pub fn set_create_status(&self, status: u16) {
        *self.create_status.lock().unwrap() = status;
    }

    pub fn set_replace_status(&self, status: u16) {
        *self.replace_status.lock().unwrap() = status;
    }

    /// 以降の DELETE を 500 で失敗させる
    pub fn fail_deletes(&self) {
        *self.delete_fails.lock().unwrap() = true;
    }

    /// 以降の呼び出しをすべて通信失敗にする
    pub fn go_offline(&self) {
        *self.offline.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn stored(&self) -> Vec<JournalEntry> {
        self.entries.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), Error> {
        self.calls.lock().unwrap().push(call);
        if *self.offline.lock().unwrap() {
            return Err(Error::http("connection refused"));
        }
        Ok(())
    }
}

impl JournalResource for StubResource {
    fn list(&self) -> Result<Vec<JournalEntry>, Error> {
        self.record(Call::List)?;
        Ok(self.stored())
    }

    fn read(&self, id: &EntryId) -> Result<JournalEntry, Error> {
        self.record(Call::Read(id.clone()))?;
        self.stored()
            .into_iter()
            .find(|e| &e.id == id)
            .ok_or_else(|| Error::status(404, "Not Found"))
    }

    fn create(&self, draft: &EntryDraft) -> Result<Acknowledged, Error> {
        self.record(Call::Create(draft.clone()))?;
        let status = *self.create_status.lock().unwrap();
        if status != 201 {
            return Ok(Acknowledged::new(status, None));
        }
        let mut next = self.next_id.lock().unwrap();
        let created = JournalEntry {
            id: EntryId::from(*next),
            title: draft.title.clone(),
            location: draft.location.clone(),
            date: draft.date,
            description: draft.description.clone(),
        };
        *next += 1;
        self.entries.lock().unwrap().push(created.clone());
        Ok(Acknowledged::new(201, Some(created)))
    }

    fn replace(&self, entry: &JournalEntry) -> Result<Acknowledged, Error> {
        self.record(Call::Replace(entry.clone()))?;
        let status = *self.replace_status.lock().unwrap();
        if status != 200 {
            return Ok(Acknowledged::new(status, None));
        }
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => *slot = entry.clone(),
            None => return Err(Error::status(404, "Not Found")),
        }
        Ok(Acknowledged::new(200, Some(entry.clone())))
    }

    fn delete(&self, id: &EntryId) -> Result<(), Error> {
        self.record(Call::Delete(id.clone()))?;
        if *self.delete_fails.lock().unwrap() {
            return Err(Error::status(500, "Internal Server Error"));
        }
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| &e.id != id);
        if entries.len() == before {
            return Err(Error::status(404, "Not Found"));
        }
        Ok(())
    }
}

/// 届いた通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(message.to_string()));
    }
}

/// 決められた順に答える確認（答えが尽きたら拒否）
#[derive(Default)]
pub struct ScriptedConfirmation {
    answers: Mutex<VecDeque<Decision>>,
    prompts: Mutex<Vec<ConfirmPrompt>>,
}

impl ScriptedConfirmation {
    pub fn answering(answers: &[Decision]) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmation for ScriptedConfirmation {
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<Decision, Error> {
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Decision::Declined))
    }
}

/// 受け取ったレコードを溜める Log
#[derive(Default)]
pub struct RecordingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// message が一致する最後のレコード
    pub fn last_with_message(&self, message: &str) -> Option<LogRecord> {
        self.records()
            .into_iter()
            .rev()
            .find(|r| r.message == message)
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// スタブ一式
pub struct Fixture {
    pub resource: Arc<StubResource>,
    pub notifier: Arc<RecordingNotifier>,
    pub confirmation: Arc<ScriptedConfirmation>,
    pub navigator: Arc<PendingNavigator>,
    pub log: Arc<RecordingLog>,
}

impl Fixture {
    pub fn new(entries: Vec<JournalEntry>, answers: &[Decision]) -> Self {
        Self {
            resource: StubResource::new(entries),
            notifier: RecordingNotifier::new(),
            confirmation: ScriptedConfirmation::answering(answers),
            navigator: Arc::new(PendingNavigator::new()),
            log: Arc::new(RecordingLog::default()),
        }
    }

    pub fn deps(&self) -> ControllerDeps {
        ControllerDeps {
            resource: self.resource.clone(),
            confirmation: self.confirmation.clone(),
            notifier: self.notifier.clone(),
            navigator: self.navigator.clone(),
            log: self.log.clone(),
        }
    }

    pub fn shell(&self) -> Shell {
        Shell::new(self.deps(), self.navigator.clone())
    }

    pub fn app(&self) -> App {
        App {
            resource: self.resource.clone(),
            confirmation: self.confirmation.clone(),
            notifier: self.notifier.clone(),
            log: self.log.clone(),
        }
    }
}
