//! お問い合わせ送信（状態変更系）のクライアント

use async_trait::async_trait;

use super::{
    client_impl::PortfolioClientImpl,
    error::ClientError,
    response::ensure_success,
    session::{CSRF_HEADER, PortfolioSessionClient},
};
use crate::contact::ContactForm;

const CONTACT_PATH: &str = "submit_contact_form/";

/// お問い合わせ送信のクライアントトレイト
#[async_trait]
pub trait PortfolioContactClient: Send + Sync {
    /// お問い合わせフォームを送信する
    ///
    /// `POST submit_contact_form/` を JSON ボディで呼び出す。
    /// 送信前にフォームを検証し、CSRF トークン（未取得なら取得する）を
    /// `X-CSRFToken` ヘッダーに付与する。
    ///
    /// # 戻り値
    ///
    /// ステータスが 2xx なら `Ok(())`。検証エラーの場合はリクエストを一切送らない。
    async fn submit_contact_form(&self, form: &ContactForm) -> Result<(), ClientError>;
}

#[async_trait]
impl PortfolioContactClient for PortfolioClientImpl {
    async fn submit_contact_form(&self, form: &ContactForm) -> Result<(), ClientError> {
        form.validate()?;

        let token = self.get_token().await?;
        let url = self.endpoint(CONTACT_PATH);
        tracing::debug!(path = CONTACT_PATH, "お問い合わせを送信します");

        let response = self
            .client
            .post(&url)
            .header(CSRF_HEADER, token.as_str())
            .json(form)
            .send()
            .await?;
        ensure_success(response).await?;

        tracing::info!("お問い合わせを送信しました");
        Ok(())
    }
}
