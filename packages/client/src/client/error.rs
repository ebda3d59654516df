//! API クライアントのエラー型

use reqwest::StatusCode;
use thiserror::Error;

/// API クライアントエラー
///
/// いずれのエラーもクライアント内ではリトライせず、呼び出し元にそのまま返す。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// トークン発行レスポンスにトークンが含まれていない
    #[error("CSRF トークンを取得できませんでした")]
    TokenUnavailable,

    /// ネットワークエラー（接続失敗、レスポンスボディのデコード失敗を含む）
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 2xx 以外のステータス
    #[error("予期しないステータス {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// 送信前の検証でお問い合わせフォームが不正と判定された
    #[error("お問い合わせフォームが不正です: {0}")]
    InvalidContactForm(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}
