//! # Folio
//!
//! ポートフォリオサイトのバックエンド API を呼び出すホストアプリケーション。
//!
//! ## 役割
//!
//! - **セッション初期化**: 描画前に CSRF トークンを一度だけ取得する
//! - **スナップショット**: アニメ・リフレクション・記事を取得し、ページと同じ並びで JSON 出力する
//! - **画像取得**: 画像をファイルに保存する
//! - **お問い合わせ送信**: CSRF トークン付きでフォームを送信する
//!
//! ## 環境変数
//!
//! `.env` ファイルがあれば読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `FOLIO_API_BASE_URL` | **Yes** | バックエンド API のベース URL（`--base-url` でも指定可） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,folio=debug,folio_client=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! FOLIO_API_BASE_URL=https://example.com/api/ cargo run -p folio -- snapshot
//! ```

mod cli;
mod snapshot;

use anyhow::Context as _;
use clap::Parser;
use cli::{Cli, Command, ContactArgs, ImageArgs, SnapshotArgs};
use folio_client::{
    ClientConfig,
    ConfigError,
    ContactForm,
    ImageKind,
    PortfolioClientImpl,
    PortfolioContactClient,
    PortfolioContentClient,
    PortfolioSessionClient,
};
use folio_shared::observability::{self, TracingConfig};
use snapshot::{Snapshot, SnapshotOptions};

/// エントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. クライアント設定の読み込み
/// 4. サブコマンドの実行
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let tracing_config = TracingConfig::from_env("folio");
    observability::init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", app = "folio").entered();

    let config =
        load_config(cli.base_url.as_deref()).context("クライアント設定の読み込みに失敗しました")?;

    let client =
        PortfolioClientImpl::new(&config).context("HTTP クライアントの作成に失敗しました")?;

    match cli.command.unwrap_or(Command::Snapshot(SnapshotArgs {
        pages: 1,
        ..Default::default()
    })) {
        Command::Snapshot(args) => run_snapshot(&client, args).await,
        Command::Image(args) => run_image(&client, args).await,
        Command::Contact(args) => run_contact(&client, args).await,
    }
}

/// `--base-url` があればそれを、なければ環境変数を使う
fn load_config(base_url: Option<&str>) -> Result<ClientConfig, ConfigError> {
    match base_url {
        Some(base_url) => ClientConfig::new(base_url),
        None => ClientConfig::from_env(),
    }
}

/// コンテンツを取得してスナップショットを stdout に出力する
async fn run_snapshot(client: &PortfolioClientImpl, args: SnapshotArgs) -> anyhow::Result<()> {
    // 初期化に失敗しても読み取り系は表示する。送信時に改めて取得を試みる
    let session_ready = match client.initialize().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "CSRF セッションなしで続行します");
            false
        }
    };

    let (anime, reflections, articles) = tokio::join!(
        client.list_anime(),
        client.list_reflections(),
        client.list_articles(),
    );

    let options = SnapshotOptions {
        search: args.search,
        year:   args.year,
        pages:  args.pages,
    };
    let snapshot = Snapshot::build(session_ready, anime, reflections, articles, &options);

    let json =
        serde_json::to_string_pretty(&snapshot).context("スナップショットの出力に失敗しました")?;
    println!("{json}");

    Ok(())
}

/// 画像をダウンロードしてファイルに保存する
async fn run_image(client: &PortfolioClientImpl, args: ImageArgs) -> anyhow::Result<()> {
    let kind = args.kind.as_deref().map(ImageKind::from);

    let payload = client
        .get_image(&args.id, kind.as_ref())
        .await
        .with_context(|| format!("画像 {} の取得に失敗しました", args.id))?;

    tokio::fs::write(&args.out, &payload.bytes)
        .await
        .with_context(|| format!("{} への書き込みに失敗しました", args.out.display()))?;

    tracing::info!(
        path = %args.out.display(),
        bytes = payload.bytes.len(),
        content_type = payload.content_type.as_deref().unwrap_or("unknown"),
        "画像を保存しました"
    );
    Ok(())
}

/// お問い合わせを送信する
async fn run_contact(client: &PortfolioClientImpl, args: ContactArgs) -> anyhow::Result<()> {
    let form = ContactForm::new(args.name, args.email, args.message);

    client
        .submit_contact_form(&form)
        .await
        .context("お問い合わせの送信に失敗しました")?;

    println!("お問い合わせを送信しました");
    Ok(())
}
