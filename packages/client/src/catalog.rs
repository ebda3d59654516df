//! # カタログ表示
//!
//! API から取得したレコードを、ページ表示用に並び替え・絞り込みする。
//! クライアントは一覧を加工せずに返すため、表示上の順序や検索はここで扱う。
//!
//! | 型 / 関数 | 対象 | 内容 |
//! |---|---|---|
//! | [`AnimeCatalog`] | アニメ | 年・クール順の並び替え、年での絞り込み、名前検索 |
//! | [`ReflectionFeed`] | リフレクション | 新しい順、12 件ずつの「もっと見る」 |
//! | [`search_articles`] | 記事 | タイトル検索 |

use chrono::Datelike;

use crate::client::{AnimeEntry, Article, Reflection};

/// クールの表示順
pub const CATEGORY_ORDER: [&str; 5] = ["Fall", "Summer", "Spring", "Winter", "Movie"];

/// リフレクションを一度に追加表示する件数
pub const REFLECTION_PAGE_SIZE: usize = 12;

fn category_rank(category: &str) -> Option<usize> {
    CATEGORY_ORDER.iter().position(|c| *c == category)
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// =========================================================================
// アニメ
// =========================================================================

/// アニメ一覧の表示状態
///
/// 並び順は年の降順、同じ年の中では [`CATEGORY_ORDER`] の後ろにあるクールほど先。
/// 未知のクールは同じ年の最後に並ぶ。年が整数でないエントリは全体の最後に並び、
/// 年の範囲と年での絞り込みには含まれない（名前検索では対象になる）。
#[derive(Debug, Clone, PartialEq)]
pub struct AnimeCatalog {
    entries:       Vec<AnimeEntry>,
    latest_year:   i32,
    earliest_year: i32,
    selected_year: i32,
}

impl AnimeCatalog {
    /// 取得した一覧からカタログを作る
    ///
    /// 一覧が空の場合、最新年は今年になる。
    pub fn from_entries(entries: Vec<AnimeEntry>) -> Self {
        Self::with_current_year(entries, chrono::Local::now().year())
    }

    /// 一覧が空のときの基準年を指定してカタログを作る
    pub fn with_current_year(mut entries: Vec<AnimeEntry>, current_year: i32) -> Self {
        entries.sort_by(|a, b| {
            b.year()
                .cmp(&a.year())
                .then_with(|| category_rank(b.category()).cmp(&category_rank(a.category())))
        });

        let latest_year = entries
            .iter()
            .find_map(AnimeEntry::year)
            .unwrap_or(current_year);
        let earliest_year = entries
            .iter()
            .rev()
            .find_map(AnimeEntry::year)
            .unwrap_or(latest_year);

        Self {
            entries,
            latest_year,
            earliest_year,
            selected_year: latest_year,
        }
    }

    /// 並び替え済みの全件
    pub fn entries(&self) -> &[AnimeEntry] {
        &self.entries
    }

    pub fn latest_year(&self) -> i32 {
        self.latest_year
    }

    pub fn earliest_year(&self) -> i32 {
        self.earliest_year
    }

    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    /// 年の選択肢（新しい順、最新年から最古年まで欠けなく）
    pub fn year_options(&self) -> Vec<i32> {
        (self.earliest_year..=self.latest_year).rev().collect()
    }

    pub fn select_year(&mut self, year: i32) {
        self.selected_year = year;
    }

    /// 指定した年のエントリ
    pub fn filter_by_year(&self, year: i32) -> Vec<&AnimeEntry> {
        self.entries.iter().filter(|e| e.year() == Some(year)).collect()
    }

    /// 選択中の年のエントリ
    pub fn visible(&self) -> Vec<&AnimeEntry> {
        self.filter_by_year(self.selected_year)
    }

    /// 名前で検索する（大文字小文字を区別しない部分一致）
    ///
    /// 検索語が空の場合は選択中の年で絞り込んだ結果を返す。
    pub fn search(&self, term: &str) -> Vec<&AnimeEntry> {
        if term.is_empty() {
            return self.visible();
        }

        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| contains_ignore_case(e.name(), &needle))
            .collect()
    }
}

/// クールごとにまとめる
///
/// [`CATEGORY_ORDER`] の順に並べ、該当なしのクールと未知のクールは含めない。
/// 各クール内の順序は入力の順序を保つ。
pub fn group_by_category<'a>(
    entries: &[&'a AnimeEntry],
) -> Vec<(&'static str, Vec<&'a AnimeEntry>)> {
    CATEGORY_ORDER
        .iter()
        .filter_map(|&category| {
            let group: Vec<&AnimeEntry> = entries
                .iter()
                .copied()
                .filter(|e| e.category() == category)
                .collect();
            (!group.is_empty()).then_some((category, group))
        })
        .collect()
}

// =========================================================================
// リフレクション
// =========================================================================

/// リフレクション一覧の表示状態
///
/// ID の降順（新しい順）に並べ、先頭から [`REFLECTION_PAGE_SIZE`] 件ずつ表示する。
/// ID が整数でないリフレクションは最後に並ぶ。
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionFeed {
    reflections:   Vec<Reflection>,
    display_count: usize,
}

impl ReflectionFeed {
    pub fn new(mut reflections: Vec<Reflection>) -> Self {
        reflections.sort_by(|a, b| b.id().cmp(&a.id()));
        Self {
            reflections,
            display_count: REFLECTION_PAGE_SIZE,
        }
    }

    /// 表示中のリフレクション
    pub fn visible(&self) -> &[Reflection] {
        let end = self.display_count.min(self.reflections.len());
        &self.reflections[..end]
    }

    /// 表示件数を 1 ページ分増やす
    pub fn load_more(&mut self) {
        self.display_count += REFLECTION_PAGE_SIZE;
    }

    /// まだ表示していないリフレクションがあるか
    pub fn has_more(&self) -> bool {
        self.display_count < self.reflections.len()
    }

    pub fn len(&self) -> usize {
        self.reflections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reflections.is_empty()
    }
}

// =========================================================================
// 記事
// =========================================================================

/// タイトルで記事を検索する（大文字小文字を区別しない部分一致）
///
/// 検索語が空の場合はタイトルのない記事も含めてすべて返す。
pub fn search_articles<'a>(articles: &'a [Article], term: &str) -> Vec<&'a Article> {
    let needle = term.to_lowercase();
    articles
        .iter()
        .filter(|a| contains_ignore_case(a.title(), &needle))
        .collect()
}
