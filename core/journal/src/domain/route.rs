//! 画面のパス（`/`, `/add-entry`, `/edit/:id`）

use common::domain::EntryId;
use common::error::Error;
use regex::Regex;
use std::sync::OnceLock;

/// ナビゲーションシェルがマウントする画面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` 一覧
    List,
    /// `/add-entry` 新規作成
    AddEntry,
    /// `/edit/:id` 編集
    Edit(EntryId),
}

fn edit_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/edit/([^/?#]+)/?$").expect("valid edit route pattern"))
}

impl Route {
    /// パスを解析する。どのルートにも一致しなければ Error::invalid_argument
    pub fn parse(path: &str) -> Result<Self, Error> {
        match path {
            "/" | "" => return Ok(Self::List),
            "/add-entry" | "/add-entry/" => return Ok(Self::AddEntry),
            _ => {}
        }
        edit_pattern()
            .captures(path)
            .and_then(|c| c.get(1))
            .and_then(|m| EntryId::from_segment(m.as_str()))
            .map(Self::Edit)
            .ok_or_else(|| Error::invalid_argument(format!("No route matches path: {}", path)))
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::AddEntry => "/add-entry".to_string(),
            Self::Edit(id) => format!("/edit/{}", id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
