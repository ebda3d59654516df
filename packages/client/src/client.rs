//! # ポートフォリオ API クライアント
//!
//! バックエンドのコンテンツ API との通信を担当する。
//!
//! ## エンドポイント
//!
//! ベース URL からの相対パス。
//!
//! - `GET get_csrf_token/` - CSRF トークン発行（`{ "csrfToken": "..." }`）
//! - `GET anime_list/` - アニメ一覧
//! - `GET reflection_list/` - リフレクション（雑記）一覧
//! - `GET article_list/` - 記事一覧
//! - `GET get_image/?image_id={id}&type={kind}` - 画像バイナリ
//! - `POST submit_contact_form/` - お問い合わせ送信（`X-CSRFToken` ヘッダー必須）
//!
//! ## 構成
//!
//! - [`PortfolioSessionClient`]: CSRF トークンの取得・初期化
//! - [`PortfolioContentClient`]: 読み取り系エンドポイント
//! - [`PortfolioContactClient`]: お問い合わせ送信（状態変更系）
//! - [`PortfolioClient`]: 上記を束ねるスーパートレイト

mod client_impl;
mod contact_client;
mod content_client;
mod error;
mod response;
mod session;
mod types;

pub use client_impl::{PortfolioClient, PortfolioClientImpl};
pub use contact_client::PortfolioContactClient;
pub use content_client::PortfolioContentClient;
pub use error::ClientError;
pub use session::{CSRF_HEADER, CsrfSession, CsrfToken, PortfolioSessionClient};
pub use types::{AnimeEntry, Article, ImageKind, ImagePayload, Reflection};
