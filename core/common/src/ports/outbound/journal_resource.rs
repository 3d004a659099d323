//! リモート旅行記リソース Outbound ポート
//!
//! `/Travel_Journal[/:id]` のコレクションリソース。実装は common::adapter::HttpJournalResource。
//! 2xx 以外のステータスは Err(Error::Status) として返す（作成・置換の 2xx は Acknowledged で返し、
//! 201 / 200 の判定は呼び出し側に任せる）。

use crate::domain::{EntryDraft, EntryId, JournalEntry};
use crate::error::Error;

/// 作成・置換に対する 2xx 応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledged {
    pub status: u16,
    /// 応答本文のエントリ（本文が無い・読めない場合は None）
    pub entry: Option<JournalEntry>,
}

impl Acknowledged {
    pub fn new(status: u16, entry: Option<JournalEntry>) -> Self {
        Self { status, entry }
    }

    /// 201 Created
    pub fn is_created(&self) -> bool {
        self.status == 201
    }

    /// 200 OK
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// リモート旅行記リソース（Outbound ポート）
pub trait JournalResource: Send + Sync {
    /// コレクション全件（サーバの返した順序のまま）
    fn list(&self) -> Result<Vec<JournalEntry>, Error>;

    /// 1 件取得
    fn read(&self, id: &EntryId) -> Result<JournalEntry, Error>;

    /// 新規作成（id はサーバが採番する）
    fn create(&self, draft: &EntryDraft) -> Result<Acknowledged, Error>;

    /// 全置換（entry.id のリソースを丸ごと置き換える）
    fn replace(&self, entry: &JournalEntry) -> Result<Acknowledged, Error>;

    /// 削除
    fn delete(&self, id: &EntryId) -> Result<(), Error>;
}
