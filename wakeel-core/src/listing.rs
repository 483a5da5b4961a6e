//! List datasets, filter queries and star ratings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the items of a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Retrieved from the remote endpoint.
    Remote,
    /// Static seed data substituted after a failed retrieval.
    Fallback,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provenance::Remote => "remote",
            Provenance::Fallback => "fallback",
        })
    }
}

/// An immutable, provenance-tagged collection of list items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDataset<T> {
    items: Vec<T>,
    provenance: Provenance,
}

impl<T> ListDataset<T> {
    pub fn new(items: Vec<T>, provenance: Provenance) -> Self {
        Self { items, provenance }
    }

    pub fn remote(items: Vec<T>) -> Self {
        Self::new(items, Provenance::Remote)
    }

    pub fn fallback(items: Vec<T>) -> Self {
        Self::new(items, Provenance::Fallback)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A record that can be shown in a list and matched by a filter query.
pub trait ListRecord {
    /// Remote endpoint path serving a JSON array of this record.
    const ENDPOINT: &'static str;

    /// The text fields a card shows for this record, in display order,
    /// with display defaults already applied.
    fn display_fields(&self) -> Vec<&str>;

    /// Case-folded text a filter query is matched against.
    fn searchable_text(&self) -> String {
        self.display_fields().join(" ").to_lowercase()
    }
}

/// A trimmed, case-folded filter string. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterQuery(String);

impl FilterQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the case-folded `searchable` text contains this query.
    pub fn matches(&self, searchable: &str) -> bool {
        self.0.is_empty() || searchable.contains(self.0.as_str())
    }
}

/// Order-preserving subsequence of `items` matching `query`.
pub fn filter_items<'a, T: ListRecord>(items: &'a [T], query: &FilterQuery) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| query.matches(&item.searchable_text()))
        .collect()
}

pub const STAR_COUNT: u8 = 5;
pub const DEFAULT_RATING: i64 = 4;
pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

/// A five-symbol rating: `filled` filled stars followed by empty ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarRating {
    filled: u8,
}

impl StarRating {
    /// Missing or zero ratings read as the default of 4; everything is
    /// clamped into 0..=5.
    pub fn from_rating(rating: Option<i64>) -> Self {
        let rating = match rating {
            Some(value) if value != 0 => value,
            _ => DEFAULT_RATING,
        };
        Self {
            filled: rating.clamp(0, i64::from(STAR_COUNT)) as u8,
        }
    }

    pub fn filled(&self) -> u8 {
        self.filled
    }

    pub fn empty(&self) -> u8 {
        STAR_COUNT - self.filled
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.filled {
            write!(f, "{}", FILLED_STAR)?;
        }
        for _ in 0..self.empty() {
            write!(f, "{}", EMPTY_STAR)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tag(&'static str, &'static str);

    impl ListRecord for Tag {
        const ENDPOINT: &'static str = "/api/tags";

        fn display_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn test_filter_query_normalizes() {
        let query = FilterQuery::new("  PdF \t");
        assert_eq!(query.as_str(), "pdf");
        assert!(FilterQuery::new("   ").is_empty());
    }

    #[test]
    fn test_filter_items_preserves_order() {
        let items = vec![Tag("b", "PDF"), Tag("a", "Doc"), Tag("c", "pdf")];
        let kept = filter_items(&items, &FilterQuery::new("pdf"));
        let names: Vec<&str> = kept.iter().map(|t| t.0).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_query_can_span_fields() {
        let items = vec![Tag("file Class B", "PDF")];
        assert_eq!(filter_items(&items, &FilterQuery::new("b pdf")).len(), 1);
    }

    #[test]
    fn test_star_rating_defaults_and_clamps() {
        assert_eq!(StarRating::from_rating(None).filled(), 4);
        assert_eq!(StarRating::from_rating(Some(0)).filled(), 4);
        assert_eq!(StarRating::from_rating(Some(7)).filled(), 5);
        assert_eq!(StarRating::from_rating(Some(7)).empty(), 0);
        assert_eq!(StarRating::from_rating(Some(-2)).filled(), 0);
        assert_eq!(StarRating::from_rating(Some(3)).to_string(), "★★★☆☆");
    }

    #[test]
    fn test_dataset_tags_provenance() {
        let dataset = ListDataset::fallback(vec![1, 2, 3]);
        assert_eq!(dataset.provenance(), Provenance::Fallback);
        assert_eq!(dataset.len(), 3);
        assert_eq!(Provenance::Remote.to_string(), "remote");
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    struct Row(String);

    impl ListRecord for Row {
        const ENDPOINT: &'static str = "/api/rows";

        fn display_fields(&self) -> Vec<&str> {
            vec![self.0.as_str()]
        }
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec("[a-zA-Z ]{0,12}".prop_map(Row), 0..20)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The empty query is the identity filter.
        #[test]
        fn prop_empty_query_keeps_everything(rows in arb_rows(), blanks in "[ \t]{0,4}") {
            let kept = filter_items(&rows, &FilterQuery::new(&blanks));
            prop_assert_eq!(kept.len(), rows.len());
            for (kept, original) in kept.iter().zip(rows.iter()) {
                prop_assert!(std::ptr::eq(*kept, original));
            }
        }

        /// Filtering keeps exactly the matching items, in source order.
        #[test]
        fn prop_filter_is_exact_and_ordered(rows in arb_rows(), raw in "[a-zA-Z]{0,3}") {
            let query = FilterQuery::new(&raw);
            let kept = filter_items(&rows, &query);
            let expected: Vec<&Row> = rows
                .iter()
                .filter(|row| row.0.to_lowercase().contains(&raw.to_lowercase()))
                .collect();
            prop_assert_eq!(kept.len(), expected.len());
            for (a, b) in kept.iter().zip(expected.iter()) {
                prop_assert!(std::ptr::eq(*a, *b));
            }
        }

        /// Every rating renders exactly five symbols.
        #[test]
        fn prop_star_rating_totals_five(rating in any::<Option<i64>>()) {
            let stars = StarRating::from_rating(rating);
            prop_assert_eq!(stars.filled() + stars.empty(), STAR_COUNT);
            prop_assert_eq!(stars.to_string().chars().count(), STAR_COUNT as usize);
        }
    }
}
