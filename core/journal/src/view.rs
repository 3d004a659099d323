//! 画面のテキスト描画
//!
//! 表示は描画だけを担い、状態はコントローラから読むだけ。

use crate::domain::{EntryForm, Field};
use crate::usecase::create::CreateController;
use crate::usecase::edit::{EditController, EditStatus};
use crate::usecase::list::{ListController, ListStatus};
use crate::usecase::shell::Screen;
use common::domain::{JournalEntry, MAX_FIELD_CHARS};

pub const LOADING: &str = "Loading...";
pub const NO_ENTRIES: &str = "No entries here, please add one...";

/// 画面全体を描画する（画面が無ければ空文字）
pub fn render(screen: Option<&Screen>) -> String {
    match screen {
        Some(Screen::List(c)) => render_list(c),
        Some(Screen::Create(c)) => render_create(c),
        Some(Screen::Edit(c)) => render_edit(c),
        None => String::new(),
    }
}

pub fn render_list(c: &ListController) -> String {
    let mut out = String::from("[Add Entry: journal add]\n\n");
    match c.status() {
        ListStatus::Loading => out.push_str(LOADING),
        ListStatus::Empty | ListStatus::LoadFailed => out.push_str(NO_ENTRIES),
        ListStatus::Loaded => out.push_str(&render_table(c.entries())),
    }
    out.push('\n');
    if let Some(entry) = c.selected() {
        out.push('\n');
        out.push_str(&render_details(entry));
    }
    out
}

/// 一覧表（ID 列 + 4 項目）
pub fn render_table(entries: &[JournalEntry]) -> String {
    let headers = ["ID", "Title", "Location", "Date", "Description"];
    let rows: Vec<[String; 5]> = entries
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.title.clone(),
                e.location.clone(),
                e.date.format("%Y-%m-%d").to_string(),
                e.description.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.to_vec()));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

/// 詳細表示
pub fn render_details(entry: &JournalEntry) -> String {
    format!(
        "Entry Details\nTitle: {}\nLocation: {}\nDate: {}\nDescription: {}\n",
        entry.title,
        entry.location,
        entry.date.format("%Y-%m-%d"),
        entry.description
    )
}

fn render_form(form: &EntryForm, required_marker: bool) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        let marker = if required_marker { " *" } else { "" };
        out.push_str(&format!("{}{}: {}\n", field.label(), marker, form.get(field)));
    }
    out
}

pub fn render_create(c: &CreateController) -> String {
    format!(
        "[All Entry: journal list]\n\n{}(title, location, description: max {} characters)\n[Add Entry]\n",
        render_form(c.form(), true),
        MAX_FIELD_CHARS
    )
}

pub fn render_edit(c: &EditController) -> String {
    let mut out = String::from("Edit Entry\n");
    match c.status() {
        EditStatus::Loading => {
            out.push_str(LOADING);
            out.push('\n');
        }
        // 取得失敗時は見出しのみ
        EditStatus::Unavailable => {}
        EditStatus::Ready => {
            if let Some(form) = c.form() {
                out.push_str(&render_form(form, false));
            }
            let label = c.submit_label();
            if c.is_submitting() {
                out.push_str(&format!("[{}] (disabled)\n", label));
            } else {
                out.push_str(&format!("[{}]\n", label));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::domain::EntryId;

    fn entry(id: i64, title: &str) -> JournalEntry {
        JournalEntry {
            id: EntryId::from(id),
            title: title.to_string(),
            location: "Paris".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            description: "Great trip".to_string(),
        }
    }

    #[test]
    fn test_render_table_rows_in_order() {
        let table = render_table(&[entry(2, "Second"), entry(1, "First")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("Second"));
        assert!(lines[3].contains("First"));
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(&[entry(1, "A much longer title"), entry(22, "B")]);
        let lines: Vec<&str> = table.lines().collect();
        let col = lines[0].find("Location").unwrap();
        assert_eq!(lines[2].find("Paris"), Some(col));
        assert_eq!(lines[3].find("Paris"), Some(col));
    }

    #[test]
    fn test_render_details() {
        let text = render_details(&entry(1, "Paris Trip"));
        assert!(text.starts_with("Entry Details"));
        assert!(text.contains("Title: Paris Trip"));
        assert!(text.contains("Date: 2024-05-01"));
    }

    #[test]
    fn test_render_nothing_without_screen() {
        assert_eq!(render(None), "");
    }
}
