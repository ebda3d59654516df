//! # コンテンツのスナップショット
//!
//! 取得した一覧をカタログ表示に通し、ページと同じ並び・絞り込みで JSON に出力する。
//! 一覧ごとに取得の成否を扱い、失敗した一覧は `errors` に記録して他の一覧は出力する。

use folio_client::{
    AnimeCatalog,
    AnimeEntry,
    Article,
    ClientError,
    Reflection,
    ReflectionFeed,
    catalog::group_by_category,
    search_articles,
};
use serde::Serialize;

/// スナップショットの表示条件
#[derive(Debug, Clone, Default)]
pub struct SnapshotOptions {
    /// アニメ名と記事タイトルの検索語
    pub search: Option<String>,
    /// 表示するアニメの年（`None` なら最新年）
    pub year:   Option<i32>,
    /// 表示するリフレクションのページ数（1 以上）
    pub pages:  u32,
}

#[derive(Debug, Serialize)]
pub struct Snapshot {
    /// CSRF セッションの初期化に成功したか
    pub session_ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime:         Option<AnimeSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflections:   Option<ReflectionSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles:      Option<ArticleSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors:        Vec<SectionError>,
}

#[derive(Debug, Serialize)]
pub struct AnimeSection {
    pub total:         usize,
    pub selected_year: i32,
    pub year_options:  Vec<i32>,
    pub groups:        Vec<CategoryGroup>,
}

#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: &'static str,
    pub entries:  Vec<AnimeEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReflectionSection {
    pub total:    usize,
    pub has_more: bool,
    pub items:    Vec<Reflection>,
}

#[derive(Debug, Serialize)]
pub struct ArticleSection {
    pub total: usize,
    pub items: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct SectionError {
    pub section: &'static str,
    pub message: String,
}

impl Snapshot {
    /// 取得結果からスナップショットを組み立てる
    pub fn build(
        session_ready: bool,
        anime: Result<Vec<AnimeEntry>, ClientError>,
        reflections: Result<Vec<Reflection>, ClientError>,
        articles: Result<Vec<Article>, ClientError>,
        options: &SnapshotOptions,
    ) -> Self {
        let mut errors = Vec::new();
        let search = options.search.as_deref().unwrap_or_default();

        let anime = collect_section("anime", anime, &mut errors)
            .map(|entries| anime_section(entries, search, options.year));
        let reflections = collect_section("reflections", reflections, &mut errors)
            .map(|items| reflection_section(items, options.pages));
        let articles = collect_section("articles", articles, &mut errors).map(|items| {
            let matched: Vec<Article> = search_articles(&items, search).into_iter().cloned().collect();
            ArticleSection {
                total: items.len(),
                items: matched,
            }
        });

        Self {
            session_ready,
            anime,
            reflections,
            articles,
            errors,
        }
    }
}

fn collect_section<T>(
    section: &'static str,
    result: Result<T, ClientError>,
    errors: &mut Vec<SectionError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(section, error = %e, "一覧の取得に失敗しました");
            errors.push(SectionError {
                section,
                message: e.to_string(),
            });
            None
        }
    }
}

fn anime_section(entries: Vec<AnimeEntry>, search: &str, year: Option<i32>) -> AnimeSection {
    let mut catalog = AnimeCatalog::from_entries(entries);
    if let Some(year) = year {
        catalog.select_year(year);
    }

    let matched = catalog.search(search);
    let groups = group_by_category(&matched)
        .into_iter()
        .map(|(category, entries)| CategoryGroup {
            category,
            entries: entries.into_iter().cloned().collect(),
        })
        .collect();

    AnimeSection {
        total: catalog.entries().len(),
        selected_year: catalog.selected_year(),
        year_options: catalog.year_options(),
        groups,
    }
}

fn reflection_section(items: Vec<Reflection>, pages: u32) -> ReflectionSection {
    let mut feed = ReflectionFeed::new(items);
    for _ in 1..pages {
        feed.load_more();
    }

    ReflectionSection {
        total:    feed.len(),
        has_more: feed.has_more(),
        items:    feed.visible().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn anime(name: &str, year: i32, category: &str) -> AnimeEntry {
        AnimeEntry::new(json!({ "name": name, "year": year, "category": category }))
    }

    fn reflection(id: i64) -> Reflection {
        Reflection::new(json!({ "id": id, "title": format!("r{id}") }))
    }

    fn article(title: &str) -> Article {
        Article::new(json!({ "title": title }))
    }

    fn options() -> SnapshotOptions {
        SnapshotOptions {
            pages: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_最新年のアニメをクールごとにまとめる() {
        let snapshot = Snapshot::build(
            true,
            Ok(vec![
                anime("Bocchi", 2022, "Fall"),
                anime("Frieren", 2023, "Fall"),
                anime("Oshi no Ko", 2023, "Spring"),
            ]),
            Ok(Vec::new()),
            Ok(Vec::new()),
            &options(),
        );

        let section = snapshot.anime.unwrap();
        assert_eq!(section.total, 3);
        assert_eq!(section.selected_year, 2023);
        assert_eq!(section.year_options, vec![2023, 2022]);
        let groups: Vec<(&str, Vec<String>)> = section
            .groups
            .iter()
            .map(|g| (g.category, g.entries.iter().map(|e| e.name().to_string()).collect()))
            .collect();
        assert_eq!(
            groups,
            vec![
                ("Fall", vec!["Frieren".to_string()]),
                ("Spring", vec!["Oshi no Ko".to_string()]),
            ]
        );
    }

    #[test]
    fn test_検索語はアニメと記事の両方に適用する() {
        let snapshot = Snapshot::build(
            true,
            Ok(vec![anime("Rust Valley", 2020, "Winter"), anime("Frieren", 2023, "Fall")]),
            Ok(Vec::new()),
            Ok(vec![article("Async Rust"), article("Elm Notes")]),
            &SnapshotOptions {
                search: Some("rust".to_string()),
                ..options()
            },
        );

        let anime = snapshot.anime.unwrap();
        assert_eq!(anime.groups.len(), 1);
        assert_eq!(anime.groups[0].entries[0].name(), "Rust Valley");
        let articles = snapshot.articles.unwrap();
        assert_eq!(articles.total, 2);
        assert_eq!(articles.items, vec![article("Async Rust")]);
    }

    #[test]
    fn test_ページ数だけリフレクションを表示する() {
        let snapshot = Snapshot::build(
            true,
            Ok(Vec::new()),
            Ok((1..=30).map(reflection).collect()),
            Ok(Vec::new()),
            &SnapshotOptions {
                pages: 2,
                ..options()
            },
        );

        let section = snapshot.reflections.unwrap();
        assert_eq!(section.total, 30);
        assert_eq!(section.items.len(), 24);
        assert_eq!(section.items[0].id(), Some(30));
        assert!(section.has_more);
    }

    #[test]
    fn test_失敗した一覧はerrorsに記録し他は出力する() {
        let snapshot = Snapshot::build(
            false,
            Err(ClientError::Network("connection refused".to_string())),
            Ok(vec![reflection(1)]),
            Ok(Vec::new()),
            &options(),
        );

        assert!(snapshot.anime.is_none());
        assert!(snapshot.reflections.is_some());
        assert_eq!(snapshot.errors.len(), 1);
        assert_eq!(snapshot.errors[0].section, "anime");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["session_ready"], json!(false));
        assert!(json.get("anime").is_none());
    }
}
