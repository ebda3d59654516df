//! CSRF トークンのセッション管理
//!
//! トークンはクライアントが所有する [`CsrfSession`] にプロセス内でのみ保持する。
//! 永続化もローテーションもしない。状態は「未取得」と「取得済み」の 2 つだけで、
//! 取得済みから未取得に戻ることはない（クライアントを作り直すまで）。
//!
//! ## 同時取得の扱い
//!
//! 未取得の状態で複数の呼び出しが同時に来ても、トークン発行リクエストは 1 回だけ送り、
//! 全員がその結果を受け取る。失敗した場合も待っていた全員が同じエラーを受け取り、
//! セッションは未取得のまま残る。次の呼び出しで再度取得を試みる。

use std::{fmt, future::Future, sync::OnceLock};

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use tokio::sync::Mutex;

use super::{client_impl::PortfolioClientImpl, error::ClientError, response::handle_json};

/// CSRF トークンを付与するヘッダー名
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// トークン発行エンドポイント
const TOKEN_PATH: &str = "get_csrf_token/";

/// レスポンスボディ中のトークンフィールド名（先頭から順に探す）
const TOKEN_FIELDS: &[&str] = &["csrfToken", "token"];

/// CSRF トークン
///
/// 値をログに出さないよう、`Debug` では中身を伏せる。
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// トークン発行レスポンスのボディからトークンを取り出す
    ///
    /// フィールドが存在しない、文字列でない、または空文字列の場合は
    /// `ClientError::TokenUnavailable` を返す。
    pub fn from_response_body(body: &Value) -> Result<Self, ClientError> {
        TOKEN_FIELDS
            .iter()
            .find_map(|field| body.get(field).and_then(Value::as_str))
            .filter(|token| !token.is_empty())
            .map(Self::new)
            .ok_or(ClientError::TokenUnavailable)
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(***)")
    }
}

/// 進行中のトークン取得（完了後も結果を複製して配れる）
type TokenAttempt = Shared<BoxFuture<'static, Result<CsrfToken, ClientError>>>;

/// CSRF トークンのキャッシュ
#[derive(Default)]
pub struct CsrfSession {
    token:    OnceLock<CsrfToken>,
    inflight: Mutex<Option<TokenAttempt>>,
}

impl fmt::Debug for CsrfSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsrfSession")
            .field("token", &self.token.get())
            .finish_non_exhaustive()
    }
}

impl CsrfSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// キャッシュ済みのトークンを返す（未取得なら `None`）
    pub fn cached(&self) -> Option<&CsrfToken> {
        self.token.get()
    }

    /// キャッシュ済みならそれを返し、未取得なら `fetch` で取得してキャッシュする
    ///
    /// 取得中に別の呼び出しが来た場合は `fetch` を呼ばず、進行中の取得の結果
    /// （成功・失敗とも）を受け取る。失敗した取得は完了時に破棄するので、
    /// その後の呼び出しは新しく取得を始める。
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<CsrfToken, ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<CsrfToken, ClientError>> + Send + 'static,
    {
        if let Some(token) = self.token.get() {
            return Ok(token.clone());
        }

        let attempt = {
            let mut inflight = self.inflight.lock().await;
            if let Some(token) = self.token.get() {
                return Ok(token.clone());
            }
            inflight
                .get_or_insert_with(|| fetch().boxed().shared())
                .clone()
        };

        let result = attempt.clone().await;

        // 取得中の記録を消す前にキャッシュする
        if let Ok(token) = &result {
            let _ = self.token.set(token.clone());
        }
        let mut inflight = self.inflight.lock().await;
        if inflight
            .as_ref()
            .is_some_and(|current| current.ptr_eq(&attempt))
        {
            *inflight = None;
        }

        result
    }
}

/// CSRF セッション関連のクライアントトレイト
#[async_trait]
pub trait PortfolioSessionClient: Send + Sync {
    /// CSRF トークンを返す
    ///
    /// キャッシュ済みならリクエストを送らずに返す。未取得なら
    /// `GET get_csrf_token/` を 1 回呼び出し、結果をキャッシュする。
    async fn get_token(&self) -> Result<CsrfToken, ClientError>;

    /// セッションを初期化する
    ///
    /// ホストアプリケーションが描画前に一度だけ待機する初期化ステップ。
    /// 処理内容は [`get_token`](Self::get_token) と同じ。
    async fn initialize(&self) -> Result<CsrfToken, ClientError>;
}

impl PortfolioClientImpl {
    async fn fetch_token(&self) -> Result<CsrfToken, ClientError> {
        let url = self.endpoint(TOKEN_PATH);
        tracing::debug!(path = TOKEN_PATH, "CSRF トークンを取得します");

        let response = self.client.get(&url).send().await?;
        let body: Value = handle_json(response).await?;

        CsrfToken::from_response_body(&body).inspect_err(|_| {
            tracing::warn!("トークン発行レスポンスにトークンが含まれていません");
        })
    }
}

#[async_trait]
impl PortfolioSessionClient for PortfolioClientImpl {
    async fn get_token(&self) -> Result<CsrfToken, ClientError> {
        self.session
            .get_or_fetch(|| {
                let client = self.clone();
                async move { client.fetch_token().await }
            })
            .await
    }

    async fn initialize(&self) -> Result<CsrfToken, ClientError> {
        match self.get_token().await {
            Ok(token) => {
                tracing::info!("CSRF セッションを初期化しました");
                Ok(token)
            }
            Err(e) => {
                tracing::error!(error = %e, "CSRF セッションの初期化に失敗しました");
                Err(e)
            }
        }
    }
}
