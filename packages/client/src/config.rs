//! # クライアント設定
//!
//! 環境変数からバックエンド API の接続先を読み込む。

use std::env;

use thiserror::Error;
use url::Url;

/// ベース URL を指定する環境変数名
pub const BASE_URL_ENV: &str = "FOLIO_API_BASE_URL";

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// ベース URL が http(s) の URL として解釈できない
    #[error("ベース URL が不正です: {0}")]
    InvalidBaseUrl(String),
}

/// API クライアントの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// バックエンド API のベース URL（末尾の `/` は除去済み）
    pub base_url: String,
}

impl ClientConfig {
    /// ベース URL から設定を作成する
    ///
    /// # エラー
    ///
    /// http / https 以外のスキーム、またはパースできない URL の場合は
    /// `ConfigError::InvalidBaseUrl` を返す。
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "{base_url}: http または https である必要があります"
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 環境変数 `FOLIO_API_BASE_URL` から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(BASE_URL_ENV).map_err(|_| ConfigError::Missing(BASE_URL_ENV))?;
        Self::new(&base_url)
    }
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、from_env ではなく new で検証する

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_末尾のスラッシュを除去する() {
        let config = ClientConfig::new("https://example.com/api/").unwrap();

        assert_eq!(config.base_url, "https://example.com/api");
    }

    #[test]
    fn test_スラッシュなしはそのまま保持する() {
        let config = ClientConfig::new("http://localhost:8000/api").unwrap();

        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[rstest]
    #[case("")]
    #[case("not a url")]
    #[case("ftp://example.com/api/")]
    #[case("/api/")]
    fn test_不正なベースurlはエラー(#[case] input: &str) {
        let result = ClientConfig::new(input);

        assert!(
            matches!(result, Err(ConfigError::InvalidBaseUrl(_))),
            "{input:?} は InvalidBaseUrl になること: {result:?}"
        );
    }
}
