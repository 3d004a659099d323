//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits に合わせる。

use thiserror::Error as ThisError;

/// 引数不正（EX_USAGE）
pub const EXIT_USAGE: i32 = 64;
/// データ不正（EX_DATAERR）
pub const EXIT_DATA: i32 = 65;
/// システムエラー（EX_SOFTWARE）
pub const EXIT_SYSTEM: i32 = 70;
/// I/O・HTTP エラー（EX_IOERR）
pub const EXIT_IO: i32 = 74;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数・入力値の不正
    #[error("{0}")]
    InvalidArgument(String),
    /// 通信失敗（接続不可・タイムアウト等）
    #[error("{0}")]
    Http(String),
    /// 2xx 以外のステータス
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// JSON のパース・シリアライズ失敗
    #[error("{0}")]
    Json(String),
    /// ファイル I/O
    #[error("{0}")]
    Io(String),
    /// 環境変数の不足・不正
    #[error("{0}")]
    Env(String),
    /// 上記以外
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn status(status: u16, msg: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: msg.into(),
        }
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// 使い方の誤りか（main で Usage を表示するかの判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => EXIT_USAGE,
            Self::Json(_) => EXIT_DATA,
            Self::Http(_) | Self::Status { .. } | Self::Io(_) => EXIT_IO,
            Self::System(_) => EXIT_SYSTEM,
        }
    }

    /// レスポンスのステータスコード（Status 以外は None）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
