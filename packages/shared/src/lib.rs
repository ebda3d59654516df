//! # Folio 共有ユーティリティ
//!
//! ワークスペース内のクレート（client, folio アプリ）で共通に使うユーティリティ。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は feature で必要なものだけ有効にする

pub mod observability;

pub use observability::{LogFormat, TracingConfig};
