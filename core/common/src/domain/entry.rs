//! 旅行記エントリのドメイン型
//!
//! サーバが発行した id はそのまま往復させる（クライアントが採番・変更しない）。

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::hash::{Hash, Hasher};

/// title / location / description の最大文字数
pub const MAX_FIELD_CHARS: usize = 140;

/// 送信時の日付の形式
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// サーバの日付表現を読む（`YYYY-MM-DD`、RFC3339、先頭が `YYYY-MM-DD` の日時）
pub fn parse_wire_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, WIRE_DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            s.get(..10)
                .and_then(|head| NaiveDate::parse_from_str(head, WIRE_DATE_FORMAT).ok())
        })
}

mod wire_date {
    use super::{parse_wire_date, WIRE_DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(WIRE_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_wire_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {}", raw)))
    }
}

/// サーバ上の表現（json-server 系は数値・文字列のどちらも返しうる）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

/// エントリ ID（不透明）
///
/// 比較はテキスト表現で行う。`/edit/3` から作った id とサーバの `3` は同一とみなす。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(IdRepr);

impl EntryId {
    /// パスセグメント（`/edit/:id` 等）から作る。空なら None
    pub fn from_segment(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            None
        } else {
            Some(Self(IdRepr::Text(s.to_string())))
        }
    }

    pub fn as_key(&self) -> Cow<'_, str> {
        match &self.0 {
            IdRepr::Number(n) => Cow::Owned(n.to_string()),
            IdRepr::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl PartialEq for EntryId {
    fn eq(&self, other: &Self) -> bool {
        self.as_key() == other.as_key()
    }
}

impl Eq for EntryId {}

impl Hash for EntryId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_key())
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        Self(IdRepr::Number(n))
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(IdRepr::Text(s.to_string()))
    }
}

/// 新規作成用のペイロード（id を持たない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub location: String,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub description: String,
}

/// 旅行記エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub location: String,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub description: String,
}

impl JournalEntry {
    /// id を保ったまま内容 4 項目を差し替えた全置換用の値を作る
    pub fn replaced_with(&self, draft: EntryDraft) -> Self {
        Self {
            id: self.id.clone(),
            title: draft.title,
            location: draft.location,
            date: draft.date,
            description: draft.description,
        }
    }

    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            location: self.location.clone(),
            date: self.date,
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_numeric_id_round_trips_as_number() {
        let v = json!({
            "id": 7,
            "title": "Paris Trip",
            "location": "Paris",
            "date": "2024-05-01",
            "description": "Great trip"
        });
        let entry: JournalEntry = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(entry.id.to_string(), "7");
        assert_eq!(entry.date, date("2024-05-01"));
        assert_eq!(serde_json::to_value(&entry).unwrap(), v);
    }

    #[test]
    fn test_text_id_round_trips_as_string() {
        let v = json!({
            "id": "a1b2",
            "title": "t",
            "location": "l",
            "date": "2023-12-31",
            "description": "d"
        });
        let entry: JournalEntry = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(serde_json::to_value(&entry).unwrap()["id"], json!("a1b2"));
    }

    #[test]
    fn test_segment_id_equals_server_number() {
        let from_path = EntryId::from_segment("3").unwrap();
        assert_eq!(from_path, EntryId::from(3));
        assert_ne!(from_path, EntryId::from(4));
        assert!(EntryId::from_segment("  ").is_none());
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = EntryDraft {
            title: "Paris Trip".to_string(),
            location: "Paris".to_string(),
            date: date("2024-05-01"),
            description: "Great trip".to_string(),
        };
        let v = serde_json::to_value(&draft).unwrap();
        assert!(v.get("id").is_none());
        assert_eq!(v["date"], json!("2024-05-01"));
    }

    #[test]
    fn test_replaced_with_keeps_id() {
        let entry = JournalEntry {
            id: EntryId::from(1),
            title: "old".to_string(),
            location: "x".to_string(),
            date: date("2024-01-01"),
            description: "y".to_string(),
        };
        let mut draft = entry.to_draft();
        draft.title = "new".to_string();
        let replaced = entry.replaced_with(draft);
        assert_eq!(replaced.id, entry.id);
        assert_eq!(replaced.title, "new");
        assert_eq!(replaced.location, "x");
    }

    #[test]
    fn test_datetime_date_is_read_as_its_day() {
        let v = json!({
            "id": 2,
            "title": "t",
            "location": "l",
            "date": "2024-02-02T00:00:00.000Z",
            "description": "d"
        });
        let entry: JournalEntry = serde_json::from_value(v).unwrap();
        assert_eq!(entry.date, date("2024-02-02"));
        assert_eq!(serde_json::to_value(&entry).unwrap()["date"], json!("2024-02-02"));
    }

    #[test]
    fn test_parse_wire_date_forms() {
        assert_eq!(parse_wire_date("2024-05-01"), Some(date("2024-05-01")));
        assert_eq!(parse_wire_date("2024-05-01T09:30:00+09:00"), Some(date("2024-05-01")));
        assert_eq!(parse_wire_date("2024-05-01 10:00"), Some(date("2024-05-01")));
        assert_eq!(parse_wire_date("May 1st"), None);
        assert_eq!(parse_wire_date(""), None);
    }
}
