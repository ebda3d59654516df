//! # ログ出力の初期化
//!
//! `folio` のログはすべて stderr に書く。stdout はスナップショット JSON など
//! コマンドの出力だけに使う。
//!
//! | 環境変数 | 値 | 既定 |
//! |---|---|---|
//! | `LOG_FORMAT` | `json` / `pretty` | `pretty` |
//! | `RUST_LOG` | `EnvFilter` の書式 | [`DEFAULT_LOG_FILTER`] |

/// `RUST_LOG` がないときのフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,folio=debug,folio_client=debug";

/// `LOG_FORMAT` の環境変数名
const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// ログの書式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON
    Json,
    /// ターミナル向けのテキスト
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する
    ///
    /// 知らない値は警告を stderr に出して `Pretty` として扱う。
    /// トレーシング初期化前に呼ばれるので `tracing` ではなく `eprintln!` を使う。
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            unknown => {
                eprintln!("WARNING: {LOG_FORMAT_ENV}={unknown:?} は未対応のため pretty で出力します");
                Self::Pretty
            }
        }
    }

    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// ログ初期化の設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// ルートスパン `app` に載せるアプリケーション名
    pub app_name:   String,
    pub log_format: LogFormat,
}

impl TracingConfig {
    pub fn new(app_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            app_name: app_name.into(),
            log_format,
        }
    }

    /// 書式を `LOG_FORMAT` から決める
    pub fn from_env(app_name: impl Into<String>) -> Self {
        Self::new(app_name, LogFormat::from_env())
    }
}

/// グローバルなサブスクライバーを登録する
///
/// プロセスで一度だけ呼ぶ。JSON 書式ではイベントのフィールドをトップレベルに展開し、
/// 呼び出し元が張った `app` スパンを `span` として付ける。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let layer = match config.log_format {
        LogFormat::Json => layer
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => layer.boxed(),
    };

    tracing_subscriber::registry().with(filter).with(layer).init();

    tracing::debug!(app = %config.app_name, format = ?config.log_format, "ログ出力を初期化しました");
}
