//! Paginated list envelope returned by collection endpoints.

use serde::{Deserialize, Serialize};

/// The envelope wrapping every list response: the decoded items for the
/// current page plus the page metadata, passed through to the caller as-is.
///
/// The library does no page traversal on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on the current page
    pub data: Vec<T>,
    /// Current page number (1-based)
    pub page: u32,
    /// Total number of pages
    pub pages: u32,
    /// Total number of results across all pages
    pub results: u32,
}

impl<T> Page<T> {
    /// Consume the envelope, returning just the items.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Returns true when this is the last page.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.page >= self.pages
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_standard_envelope() {
        let json = r#"{"data":[1,2,3],"page":1,"pages":2,"results":6}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, 2);
        assert_eq!(page.results, 6);
        assert!(!page.is_last());
    }

    #[test]
    fn single_page_is_last() {
        let json = r#"{"data":[],"page":1,"pages":1,"results":0}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert!(page.is_last());
    }

    #[test]
    fn into_iterator_yields_items() {
        let page = Page {
            data: vec!["a", "b"],
            page: 1,
            pages: 1,
            results: 2,
        };
        let items: Vec<&str> = page.into_iter().collect();
        assert_eq!(items, vec!["a", "b"]);
    }
}
