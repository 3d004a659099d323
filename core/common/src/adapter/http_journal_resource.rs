//! HTTP 版リモート旅行記リソース（reqwest blocking）
//!
//! `{base_url}/Travel_Journal[/:id]` に対して GET / POST / PUT / DELETE を発行する。
//! 2xx 以外は Error::Status、接続失敗等は Error::Http として返す。
//! 一覧は要素ごとに読み、読めない要素はログに残して飛ばす。

use crate::adapter::NoopLog;
use crate::domain::{BaseUrl, EntryDraft, EntryId, JournalEntry};
use crate::error::Error;
use crate::ports::outbound::{Acknowledged, JournalResource, Log, LogLevel, LogRecord};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;

/// コレクションのパス名
pub const COLLECTION: &str = "Travel_Journal";

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const BODY_SUMMARY_MAX: usize = 200;

/// HTTP 版 JournalResource
pub struct HttpJournalResource {
    client: Client,
    base_url: BaseUrl,
    log: Arc<dyn Log>,
}

impl HttpJournalResource {
    /// ベース URL とタイムアウトからリソースを作る
    pub fn new(base_url: BaseUrl, timeout: Duration) -> Result<Self, Error> {
        // URL として解釈できない設定は起動時に弾く
        Url::parse(&base_url)
            .map_err(|e| Error::invalid_argument(format!("Invalid base URL {}: {}", base_url, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url,
            log: Arc::new(NoopLog),
        })
    }

    /// 読み飛ばした要素などを記録するログを差し替える
    pub fn with_log(mut self, log: Arc<dyn Log>) -> Self {
        self.log = log;
        self
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// `{base}/Travel_Journal`（id 指定時は `{base}/Travel_Journal/{id}`、id はパーセントエンコードする）
    fn url(&self, id: Option<&EntryId>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_argument(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::invalid_argument(format!("Base URL cannot have a path: {}", self.base_url))
            })?;
            segments.pop_if_empty().push(COLLECTION);
            if let Some(id) = id {
                segments.push(&id.as_key());
            }
        }
        Ok(url)
    }

    /// 送信して 2xx ならステータスと本文を返す
    fn send(&self, builder: RequestBuilder) -> Result<(u16, String), Error> {
        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unexpected status");
            let message = if text.trim().is_empty() {
                reason.to_string()
            } else {
                format!("{} ({})", reason, summarize(&text))
            };
            return Err(Error::status(status.as_u16(), message));
        }
        Ok((status.as_u16(), text))
    }
}

fn summarize(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= BODY_SUMMARY_MAX {
        return body.to_string();
    }
    let truncated: String = body.chars().take(BODY_SUMMARY_MAX).collect();
    format!("{}...", truncated)
}

fn parse_json<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, Error> {
    serde_json::from_str(text).map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))
}

impl JournalResource for HttpJournalResource {
    fn list(&self) -> Result<Vec<JournalEntry>, Error> {
        let (_, text) = self.send(self.client.get(self.url(None)?))?;
        let items: Vec<serde_json::Value> = parse_json(&text)?;
        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<JournalEntry>(item) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    let _ = self.log.log(
                        &LogRecord::new(LogLevel::Warn, format!("skipped unreadable entry: {}", e))
                            .layer("adapter")
                            .kind("http")
                            .field("index", index),
                    );
                }
            }
        }
        Ok(entries)
    }

    fn read(&self, id: &EntryId) -> Result<JournalEntry, Error> {
        let (_, text) = self.send(self.client.get(self.url(Some(id))?))?;
        parse_json(&text)
    }

    fn create(&self, draft: &EntryDraft) -> Result<Acknowledged, Error> {
        let (status, text) = self.send(self.client.post(self.url(None)?).json(draft))?;
        Ok(Acknowledged::new(status, serde_json::from_str(&text).ok()))
    }

    fn replace(&self, entry: &JournalEntry) -> Result<Acknowledged, Error> {
        let (status, text) = self.send(self.client.put(self.url(Some(&entry.id))?).json(entry))?;
        Ok(Acknowledged::new(status, serde_json::from_str(&text).ok()))
    }

    fn delete(&self, id: &EntryId) -> Result<(), Error> {
        self.send(self.client.delete(self.url(Some(id))?))?;
        Ok(())
    }
}
