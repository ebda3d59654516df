//! バックエンドとやり取りするレコード型
//!
//! レコードはバックエンドの返却値をそのまま保持する受動的なデータで、
//! クライアントでは検証も変換もしない。JSON の値をそのまま包み、
//! カタログ表示に必要なフィールドだけをアクセサで読み出す。
//!
//! フィールドが欠けている、`null` である、型が想定と違う、といったレコードも
//! 一覧の取得は失敗させない。アクセサは文字列なら空文字列、それ以外は `None` を返す。
//! 再シリアライズすると受け取った JSON と完全に一致する。

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn str_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.get(field).and_then(Value::as_str)
}

fn int_field(value: &Value, field: &str) -> Option<i64> {
    value.get(field).and_then(Value::as_i64)
}

/// アニメ一覧の 1 件
///
/// 想定するフィールド: `name`, `year`, `category`, `url`, `image_url`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimeEntry(Value);

impl AnimeEntry {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn name(&self) -> &str {
        str_field(&self.0, "name").unwrap_or_default()
    }

    /// 放送年（整数でなければ `None`）
    pub fn year(&self) -> Option<i32> {
        int_field(&self.0, "year").and_then(|year| i32::try_from(year).ok())
    }

    /// 放送クール（`Fall` / `Summer` / `Spring` / `Winter` / `Movie`）
    pub fn category(&self) -> &str {
        str_field(&self.0, "category").unwrap_or_default()
    }

    pub fn url(&self) -> Option<&str> {
        str_field(&self.0, "url")
    }

    pub fn image_url(&self) -> Option<&str> {
        str_field(&self.0, "image_url")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// リフレクション（雑記）一覧の 1 件
///
/// 想定するフィールド: `id`, `title`, `description`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reflection(Value);

impl Reflection {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn id(&self) -> Option<i64> {
        int_field(&self.0, "id")
    }

    pub fn title(&self) -> &str {
        str_field(&self.0, "title").unwrap_or_default()
    }

    pub fn description(&self) -> Option<&str> {
        str_field(&self.0, "description")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// 記事一覧の 1 件
///
/// 想定するフィールド: `title`, `summary`, `imageUrl`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article(Value);

impl Article {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn title(&self) -> &str {
        str_field(&self.0, "title").unwrap_or_default()
    }

    pub fn summary(&self) -> Option<&str> {
        str_field(&self.0, "summary")
    }

    /// サムネイル画像の URL（バックエンドはキャメルケースの `imageUrl` で返す）
    pub fn image_url(&self) -> Option<&str> {
        str_field(&self.0, "imageUrl")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// 画像の種別（`type` クエリパラメータ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageKind {
    /// リフレクションのサムネイル
    Reflection,
    /// その他の種別（値をそのまま送る）
    Other(String),
}

impl ImageKind {
    pub fn as_str(&self) -> &str {
        match self {
            ImageKind::Reflection => "reflection",
            ImageKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for ImageKind {
    fn from(value: &str) -> Self {
        match value {
            "reflection" => ImageKind::Reflection,
            other => ImageKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 画像エンドポイントのレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// `Content-Type` ヘッダーの値（なければ `None`）
    pub content_type: Option<String>,
    pub bytes:        Bytes,
}
