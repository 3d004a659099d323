//! 入力フォームの状態
//!
//! 4 項目を 1 つずつ保持し、更新は「1 項目だけ差し替えた新しいフォーム」を返す。
//! 入力層の検証（必須・最大文字数・日付形式）もここで行う。

use chrono::NaiveDate;
use common::domain::{EntryDraft, JournalEntry, MAX_FIELD_CHARS};
use common::error::Error;

/// 日付の入出力形式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// フォームの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Location,
    Date,
    Description,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Location, Field::Date, Field::Description];

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Location => "Location",
            Self::Date => "Date",
            Self::Description => "Description",
        }
    }

    /// フォーム・CLI 上の名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Location => "location",
            Self::Date => "date",
            Self::Description => "description",
        }
    }

    /// 最大文字数の制限を受けるか（日付は日付入力のため対象外）
    fn has_length_limit(&self) -> bool {
        !matches!(self, Self::Date)
    }
}

/// 検証規則
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRules {
    /// 新規作成: 必須 + 最大 140 文字
    Create,
    /// 編集: 必須のみ
    Edit,
}

/// 入力フォーム（4 項目の文字列スロット）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    title: String,
    location: String,
    date: String,
    description: String,
}

impl EntryForm {
    /// 空のフォーム
    pub fn empty() -> Self {
        Self::default()
    }

    /// サーバから読んだエントリで埋めたフォーム
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            title: entry.title.clone(),
            location: entry.location.clone(),
            date: entry.date.format(DATE_FORMAT).to_string(),
            description: entry.description.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Location => &self.location,
            Field::Date => &self.date,
            Field::Description => &self.description,
        }
    }

    /// 指定項目だけを差し替えた新しいフォームを返す（他の項目はそのまま）
    #[must_use]
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::Title => &mut next.title,
            Field::Location => &mut next.location,
            Field::Date => &mut next.date,
            Field::Description => &mut next.description,
        };
        *slot = value.into();
        next
    }

    /// 入力層の検証を行い、送信用のペイロードにする
    pub fn validate(&self, rules: FieldRules) -> Result<EntryDraft, Error> {
        for field in Field::ALL {
            let value = self.get(field);
            if value.trim().is_empty() {
                return Err(Error::invalid_argument(format!("{} is required", field.label())));
            }
            if rules == FieldRules::Create
                && field.has_length_limit()
                && value.chars().count() > MAX_FIELD_CHARS
            {
                return Err(Error::invalid_argument(format!(
                    "{} must be at most {} characters",
                    field.label(),
                    MAX_FIELD_CHARS
                )));
            }
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            Error::invalid_argument(format!(
                "Date must be a valid date (YYYY-MM-DD): {}",
                self.date
            ))
        })?;
        Ok(EntryDraft {
            title: self.title.clone(),
            location: self.location.clone(),
            date,
            description: self.description.clone(),
        })
    }
}
