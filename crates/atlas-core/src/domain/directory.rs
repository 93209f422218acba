//! The country directory and its search / region / pagination query.
//!
//! A [`Directory`] is sorted exactly once, when it is built. Queries are pure
//! functions over that order: they filter, then slice, and never re-sort or
//! memoise anything between calls.

use serde::Serialize;

use crate::domain::{
    collation::compare_names, entities::country::CountrySummary, value_objects::Region,
};

/// Countries per page used by the listing screens.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Parameters of one directory query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    /// Case-insensitive substring of the common name; empty disables it.
    pub filter_text: String,
    /// Exact region match; `None` disables it.
    pub region: Option<Region>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl DirectoryQuery {
    pub fn new(filter_text: impl Into<String>, region: Option<Region>) -> Self {
        Self {
            filter_text: filter_text.into(),
            region,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    fn matches(&self, needle: &str, country: &CountrySummary) -> bool {
        let text_ok = needle.is_empty() || country.name.to_lowercase().contains(needle);
        let region_ok = self.region.is_none_or(|r| r == country.region);
        text_ok && region_ok
    }
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self::new("", None)
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryPage<'a> {
    pub items: Vec<&'a CountrySummary>,
    pub total_matches: usize,
    pub page: usize,
    pub page_size: usize,
}

impl DirectoryPage<'_> {
    /// `ceil(total_matches / page_size)`; zero when nothing matched.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_matches.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The full, sorted country collection for one session.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    countries: Vec<CountrySummary>,
}

impl Directory {
    /// Take ownership of a freshly loaded collection and sort it by name.
    pub fn new(mut countries: Vec<CountrySummary>) -> Self {
        countries.sort_by(|a, b| compare_names(&a.name, &b.name));
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// All countries in display order.
    pub fn countries(&self) -> &[CountrySummary] {
        &self.countries
    }

    /// Filter and paginate.
    ///
    /// Out-of-range pages (including page 0 and a zero page size) produce
    /// an empty slice with the correct `total_matches`.
    pub fn query(&self, query: &DirectoryQuery) -> DirectoryPage<'_> {
        let needle = query.filter_text.to_lowercase();
        let matching: Vec<&CountrySummary> = self
            .countries
            .iter()
            .filter(|c| query.matches(&needle, c))
            .collect();

        let total_matches = matching.len();
        let items = match query.page.checked_sub(1) {
            Some(index) if query.page_size > 0 => matching
                .into_iter()
                .skip(index.saturating_mul(query.page_size))
                .take(query.page_size)
                .collect(),
            _ => Vec::new(),
        };

        DirectoryPage {
            items,
            total_matches,
            page: query.page,
            page_size: query.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::country::fixtures::summary;

    fn alphabet(n: u8) -> Directory {
        // Insert in reverse to prove sorting happens on construction.
        let countries = (0..n)
            .rev()
            .map(|i| {
                let letter = (b'A' + i) as char;
                summary(&format!("{letter}{letter}{letter}"), &letter.to_string(), Region::Europe)
            })
            .collect();
        Directory::new(countries)
    }

    fn names(page: &DirectoryPage<'_>) -> Vec<String> {
        page.items.iter().map(|c| c.name.clone()).collect()
    }

    fn mixed() -> Directory {
        Directory::new(vec![
            summary("FRA", "France", Region::Europe),
            summary("FIN", "Finland", Region::Europe),
            summary("FJI", "Fiji", Region::Oceania),
            summary("PER", "Peru", Region::Americas),
            summary("ZAF", "South Africa", Region::Africa),
        ])
    }

    #[test]
    fn second_page_of_sixteen_holds_last_country() {
        let dir = alphabet(16);
        let page = dir.query(&DirectoryQuery::default().page(2).page_size(15));
        assert_eq!(names(&page), vec!["P"]);
        assert_eq!(page.total_matches, 16);
        assert_eq!(page.total_pages(), 2);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn page_beyond_last_is_empty_not_error() {
        let dir = alphabet(16);
        let page = dir.query(&DirectoryQuery::default().page(3).page_size(15));
        assert!(page.is_empty());
        assert_eq!(page.total_matches, 16);

        let page = dir.query(&DirectoryQuery::default().page(usize::MAX).page_size(15));
        assert!(page.is_empty());
    }

    #[test]
    fn page_zero_and_zero_size_are_empty() {
        let dir = alphabet(5);
        assert!(dir.query(&DirectoryQuery::default().page(0)).is_empty());
        let page = dir.query(&DirectoryQuery::default().page_size(0));
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn empty_filters_return_everything_sorted() {
        let dir = mixed();
        let page = dir.query(&DirectoryQuery::default());
        assert_eq!(
            names(&page),
            vec!["Fiji", "Finland", "France", "Peru", "South Africa"]
        );
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let dir = mixed();
        let page = dir.query(&DirectoryQuery::new("FI", None));
        assert_eq!(names(&page), vec!["Fiji", "Finland"]);

        let page = dir.query(&DirectoryQuery::new("africa", None));
        assert_eq!(names(&page), vec!["South Africa"]);
    }

    #[test]
    fn filters_apply_conjunctively() {
        let dir = mixed();
        let page = dir.query(&DirectoryQuery::new("f", Some(Region::Europe)));
        assert_eq!(names(&page), vec!["Finland", "France"]);
        assert_eq!(page.total_matches, 2);
    }

    #[test]
    fn zero_matches_is_not_an_error() {
        let dir = mixed();
        let page = dir.query(&DirectoryQuery::new("zzz", None));
        assert!(page.is_empty());
        assert_eq!(page.total_matches, 0);
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next());
    }

    #[test]
    fn filtering_preserves_sorted_order_across_pages() {
        let dir = alphabet(26);
        let first = dir.query(&DirectoryQuery::default().page_size(10));
        let second = dir.query(&DirectoryQuery::default().page(2).page_size(10));
        let mut all = names(&first);
        all.extend(names(&second));
        let mut expected = all.clone();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let dir = mixed();
        let q = DirectoryQuery::new("i", Some(Region::Europe));
        assert_eq!(dir.query(&q), dir.query(&q));
    }
}
