//! PortfolioClient スーパートレイトとクライアント実装の構造体

use std::sync::Arc;

use super::{
    contact_client::PortfolioContactClient,
    content_client::PortfolioContentClient,
    error::ClientError,
    session::{CsrfSession, PortfolioSessionClient},
};
use crate::config::ClientConfig;

/// ポートフォリオ API クライアントトレイト（スーパートレイト）
///
/// Session / Content / Contact の各サブトレイトを束ねる。
/// テスト時にはサブトレイト単位でスタブを使用できる。
pub trait PortfolioClient:
    PortfolioSessionClient + PortfolioContentClient + PortfolioContactClient
{
}

/// ブランケット impl: 3 つのサブトレイトをすべて実装する型は
/// 自動的に `PortfolioClient` を実装する。
impl<T> PortfolioClient for T where
    T: PortfolioSessionClient + PortfolioContentClient + PortfolioContactClient
{
}

/// ポートフォリオ API クライアント実装
///
/// `Clone` したクライアントは同じ CSRF セッションを共有する。
#[derive(Clone)]
pub struct PortfolioClientImpl {
    pub(super) base_url: String,
    pub(super) client:   reqwest::Client,
    pub(super) session:  Arc<CsrfSession>,
}

impl PortfolioClientImpl {
    /// 新しいクライアントを作成する
    ///
    /// CSRF トークン発行時にバックエンドが設定する Cookie を状態変更リクエストで
    /// 送り返すため、Cookie ストアを有効にした HTTP クライアントを使う。
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_session(config, Arc::new(CsrfSession::new()))
    }

    /// 既存の CSRF セッションを共有するクライアントを作成する
    pub fn with_session(
        config: &ClientConfig,
        session: Arc<CsrfSession>,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            session,
        })
    }

    /// このクライアントの CSRF セッション
    pub fn session(&self) -> &CsrfSession {
        &self.session
    }

    /// ベース URL と相対パスから URL を組み立てる
    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}
