//! config.json の読み込みとクライアント設定の解決
//!
//! ベース URL の優先順位: 明示指定（--base-url） > JOURNAL_BASE_URL > config.json > デフォルト

use crate::adapter::http_journal_resource::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::domain::{BaseUrl, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use serde::Deserialize;
use std::fs;
use std::time::Duration;

/// config.json のルート（全キー省略可）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// JSON 文字列からパース（ファイル読みは load_file_config で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// 解決済みのクライアント設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: BaseUrl,
    pub timeout: Duration,
}

/// config.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_file_config(home: &HomeDir) -> Result<Option<FileConfig>, Error> {
    let path = home.config_path();
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
    FileConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

/// 明示指定・環境変数・config.json からクライアント設定を解決する
pub fn resolve_client_config(
    explicit_base_url: Option<&BaseUrl>,
    env: &dyn EnvResolver,
    file: Option<&FileConfig>,
) -> ClientConfig {
    let base_url = explicit_base_url
        .cloned()
        .or_else(|| env.base_url_from_env())
        .or_else(|| {
            file.and_then(|f| f.base_url.as_deref())
                .filter(|s| !s.trim().is_empty())
                .map(BaseUrl::new)
        })
        .unwrap_or_else(|| BaseUrl::new(DEFAULT_BASE_URL));
    let timeout = file
        .and_then(|f| f.timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);
    ClientConfig { base_url, timeout }
}
