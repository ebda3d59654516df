//! バックエンドレスポンスの共通ハンドリング

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use super::{error::ClientError, types::ImagePayload};

/// ステータスが 2xx であることを確認する
///
/// 2xx 以外の場合はボディを読み切って `ClientError::UnexpectedStatus` を返す。
pub(super) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let path = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%status, path = %path, "バックエンドがエラーを返しました");

    Err(ClientError::UnexpectedStatus { status, body })
}

/// JSON レスポンスをデシリアライズする
///
/// ボディは加工せずにそのまま `T` に変換する。
pub(super) async fn handle_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let response = ensure_success(response).await?;
    let body = response.json::<T>().await?;
    Ok(body)
}

/// バイナリレスポンスを取り出す
pub(super) async fn handle_bytes(response: reqwest::Response) -> Result<ImagePayload, ClientError> {
    let response = ensure_success(response).await?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes: Bytes = response.bytes().await?;

    Ok(ImagePayload {
        content_type,
        bytes,
    })
}
