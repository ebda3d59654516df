//! # お問い合わせフォーム
//!
//! 送信内容とその検証。送信自体は [`crate::PortfolioContactClient`] が行う。

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::client::ClientError;

/// メールアドレスの形式（`local@domain.tld`、空白と余分な `@` を含まない）
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("メールアドレスの正規表現が不正です")
});

/// お問い合わせフォームの送信内容
///
/// `{ "name": ..., "email": ..., "message": ... }` の JSON として送信する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name:    String,
    pub email:   String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name:    name.into(),
            email:   email.into(),
            message: message.into(),
        }
    }

    /// 送信前の検証を行う
    ///
    /// 検証するのはメールアドレスの形式のみ。名前と本文は検証しない。
    ///
    /// # エラー
    ///
    /// メールアドレスが不正な場合は `ClientError::InvalidContactForm` を返す。
    pub fn validate(&self) -> Result<(), ClientError> {
        if !is_valid_email(&self.email) {
            return Err(ClientError::InvalidContactForm(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }
        Ok(())
    }
}

/// メールアドレスの形式が正しいか
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
