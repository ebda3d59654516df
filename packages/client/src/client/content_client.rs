//! コンテンツ取得系のクライアント

use async_trait::async_trait;

use super::{
    client_impl::PortfolioClientImpl,
    error::ClientError,
    response::{handle_bytes, handle_json},
    types::{AnimeEntry, Article, ImageKind, ImagePayload, Reflection},
};

const ANIME_LIST_PATH: &str = "anime_list/";
const REFLECTION_LIST_PATH: &str = "reflection_list/";
const ARTICLE_LIST_PATH: &str = "article_list/";
const IMAGE_PATH: &str = "get_image/";

/// コンテンツ取得系のクライアントトレイト
///
/// 一覧系はレスポンスボディを加工せずに返す。並び替えや絞り込みは
/// 呼び出し側（[`crate::catalog`]）の責務。
#[async_trait]
pub trait PortfolioContentClient: Send + Sync {
    /// アニメ一覧を取得する
    ///
    /// `GET anime_list/` を呼び出す。
    async fn list_anime(&self) -> Result<Vec<AnimeEntry>, ClientError>;

    /// リフレクション一覧を取得する
    ///
    /// `GET reflection_list/` を呼び出す。
    async fn list_reflections(&self) -> Result<Vec<Reflection>, ClientError>;

    /// 記事一覧を取得する
    ///
    /// `GET article_list/` を呼び出す。
    async fn list_articles(&self) -> Result<Vec<Article>, ClientError>;

    /// 画像を取得する
    ///
    /// `GET get_image/?image_id={id}&type={kind}` を呼び出す。
    /// `kind` が `None` の場合は `type` パラメータを付けない。
    ///
    /// # 戻り値
    ///
    /// JSON ではなく画像のバイト列
    async fn get_image(
        &self,
        image_id: &str,
        kind: Option<&ImageKind>,
    ) -> Result<ImagePayload, ClientError>;
}

impl PortfolioClientImpl {
    /// 画像取得 URL を組み立てる
    pub(super) fn image_url(&self, image_id: &str, kind: Option<&ImageKind>) -> String {
        let base = self.endpoint(IMAGE_PATH);
        let image_id = urlencoding::encode(image_id);

        match kind {
            Some(kind) => format!(
                "{base}?image_id={image_id}&type={}",
                urlencoding::encode(kind.as_str())
            ),
            None => format!("{base}?image_id={image_id}"),
        }
    }
}

#[async_trait]
impl PortfolioContentClient for PortfolioClientImpl {
    async fn list_anime(&self) -> Result<Vec<AnimeEntry>, ClientError> {
        let url = self.endpoint(ANIME_LIST_PATH);
        tracing::debug!(path = ANIME_LIST_PATH, "アニメ一覧を取得します");

        let response = self.client.get(&url).send().await?;
        handle_json(response).await
    }

    async fn list_reflections(&self) -> Result<Vec<Reflection>, ClientError> {
        let url = self.endpoint(REFLECTION_LIST_PATH);
        tracing::debug!(path = REFLECTION_LIST_PATH, "リフレクション一覧を取得します");

        let response = self.client.get(&url).send().await?;
        handle_json(response).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ClientError> {
        let url = self.endpoint(ARTICLE_LIST_PATH);
        tracing::debug!(path = ARTICLE_LIST_PATH, "記事一覧を取得します");

        let response = self.client.get(&url).send().await?;
        handle_json(response).await
    }

    async fn get_image(
        &self,
        image_id: &str,
        kind: Option<&ImageKind>,
    ) -> Result<ImagePayload, ClientError> {
        let url = self.image_url(image_id, kind);
        tracing::debug!(path = IMAGE_PATH, image_id, kind = ?kind, "画像を取得します");

        let response = self.client.get(&url).send().await?;
        handle_bytes(response).await
    }
}
