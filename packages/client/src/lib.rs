//! # Folio API クライアント
//!
//! ポートフォリオサイトのバックエンド（コンテンツ API）と通信するクライアントライブラリ。
//!
//! ## モジュール構成
//!
//! - [`config`]: 接続先ベース URL などの設定
//! - [`client`]: HTTP クライアント本体（CSRF セッション、各エンドポイント）
//! - [`catalog`]: 取得したレコードの並び替え・絞り込み（ページ表示用）
//! - [`contact`]: お問い合わせフォームとその検証
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use folio_client::{ClientConfig, PortfolioClientImpl, PortfolioContentClient};
//!
//! let config = ClientConfig::from_env()?;
//! let client = PortfolioClientImpl::new(&config)?;
//!
//! // 描画前に一度だけ CSRF トークンを取得する
//! client.initialize().await?;
//!
//! let anime = client.list_anime().await?;
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod contact;

pub use catalog::{AnimeCatalog, ReflectionFeed, search_articles};
pub use client::{
    AnimeEntry,
    Article,
    ClientError,
    CsrfSession,
    CsrfToken,
    ImageKind,
    ImagePayload,
    PortfolioClient,
    PortfolioClientImpl,
    PortfolioContactClient,
    PortfolioContentClient,
    PortfolioSessionClient,
    Reflection,
};
pub use config::{ClientConfig, ConfigError};
pub use contact::ContactForm;
