//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。種別ごとのコンストラクタと sysexits 互換の終了コードを持つ。

use thiserror::Error as ThisError;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 呼び出し側の引数不正（usage エラー）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数・設定の不備（リトライしても直らない）
    #[error("{0}")]
    Env(String),
    /// HTTP リクエスト失敗・上流 API エラー
    #[error("{0}")]
    Http(String),
    /// JSON の整形・解析失敗
    #[error("{0}")]
    Json(String),
    /// I/O エラー
    #[error("{0}")]
    Io(String),
    /// その他のシステムエラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// usage エラーかどうか（main で usage を表示するか判定する）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// sysexits 互換の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Env(_) => 78,
            Error::Http(_) | Error::Json(_) | Error::Io(_) => 74,
            Error::System(_) => 70,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
