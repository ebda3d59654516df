//! # コマンドライン引数
//!
//! ```bash
//! # ポートフォリオのコンテンツを JSON で出力（デフォルト）
//! folio snapshot
//!
//! # アニメと記事を検索して出力
//! folio snapshot --search rust
//!
//! # 画像をダウンロード
//! folio image 42 --kind reflection --out thumb.png
//!
//! # お問い合わせを送信
//! folio contact --name Raito --email raito@example.com --message "こんにちは"
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// ポートフォリオ API クライアント
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
pub struct Cli {
    /// バックエンド API のベース URL（省略時は環境変数 `FOLIO_API_BASE_URL`）
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// 実行するサブコマンド（省略時は snapshot）
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// コンテンツを取得して JSON スナップショットを出力する
    Snapshot(SnapshotArgs),
    /// 画像をダウンロードする
    Image(ImageArgs),
    /// お問い合わせを送信する
    Contact(ContactArgs),
}

#[derive(Debug, Default, Args)]
pub struct SnapshotArgs {
    /// アニメ名と記事タイトルの検索語
    #[arg(long)]
    pub search: Option<String>,

    /// 表示するアニメの年（省略時は最新年）
    #[arg(long)]
    pub year: Option<i32>,

    /// 表示するリフレクションのページ数
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

#[derive(Debug, Args)]
pub struct ImageArgs {
    /// 画像 ID
    pub id: String,

    /// 画像の種別（例: reflection）
    #[arg(long)]
    pub kind: Option<String>,

    /// 保存先
    #[arg(short, long, value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli定義が正しい() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_サブコマンド省略時はnone() {
        let cli = Cli::try_parse_from(["folio", "--base-url", "http://localhost/api/"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost/api/"));
    }

    #[test]
    fn test_base_url省略時はnone() {
        let cli = Cli::try_parse_from(["folio", "snapshot"]).unwrap();

        assert_eq!(cli.base_url, None);
    }

    #[test]
    fn test_snapshotの引数をパースする() {
        let cli = Cli::try_parse_from(["folio", "snapshot", "--search", "rust", "--pages", "2"])
            .unwrap();

        let Some(Command::Snapshot(args)) = cli.command else {
            panic!("snapshot を期待した");
        };
        assert_eq!(args.search.as_deref(), Some("rust"));
        assert_eq!(args.pages, 2);
        assert_eq!(args.year, None);
    }

    #[test]
    fn test_pagesは1以上() {
        let result = Cli::try_parse_from(["folio", "snapshot", "--pages", "0"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_contactは全項目必須() {
        let result = Cli::try_parse_from(["folio", "contact", "--name", "Raito"]);

        assert!(result.is_err());
    }
}
