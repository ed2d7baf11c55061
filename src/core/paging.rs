//! Pagination contract for listing endpoints
//!
//! The backend is inconsistent about listing shapes: some deployments return
//! a bare array, others wrap it as `{"documents": [...]}` or `{"data":
//! [...]}`, with or without `total`/`totalPages` counters. [`PagedResult`]
//! is the one canonical shape the rest of the client sees; the
//! normalization happens here, once, instead of at each call site.
//!
//! Also home to the page arithmetic shared by the UI and to [`RequestSeq`],
//! the monotonically increasing fetch token used to discard responses that
//! arrive after the user has already navigated elsewhere.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// One page of a listing plus the counters needed to render pagination.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> PagedResult<T> {
    /// An empty result (used for not-found listings, which display as empty
    /// rather than as an error).
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }
}

impl<T: DeserializeOwned> PagedResult<T> {
    /// Normalize any of the backend's listing shapes into a `PagedResult`.
    ///
    /// `limit` is the requested page size, used to derive a page count when
    /// the response does not carry one.
    pub fn from_value(value: Value, limit: u64) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => {
                let total = items.len() as u64;
                Ok(Self {
                    items: decode_items(items)?,
                    total,
                    total_pages: total_pages(total, limit),
                })
            }
            Value::Object(mut map) => {
                let declared_total = map.get("total").and_then(Value::as_u64);
                let declared_pages = map.get("totalPages").and_then(Value::as_u64);

                let items = match (map.remove("documents"), map.remove("data")) {
                    (Some(Value::Array(items)), _) => items,
                    (_, Some(Value::Array(items))) => items,
                    // An explicit null (or absent) list means "nothing here".
                    (Some(Value::Null), _) | (None, None) => {
                        return Ok(Self::empty());
                    }
                    _ => {
                        return Ok(Self {
                            items: Vec::new(),
                            total: 0,
                            total_pages: 1,
                        });
                    }
                };

                let total = declared_total.unwrap_or(items.len() as u64);
                Ok(Self {
                    items: decode_items(items)?,
                    total,
                    total_pages: declared_pages.unwrap_or_else(|| total_pages(total, limit)),
                })
            }
            _ => Ok(Self {
                items: Vec::new(),
                total: 0,
                total_pages: 1,
            }),
        }
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, serde_json::Error> {
    items.into_iter().map(serde_json::from_value).collect()
}

/// Number of pages needed for `total` items at `page_size` per page.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if total == 0 || page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// The page to show after deleting `rows_on_page` down to zero: deleting the
/// sole remaining row of a page past the first rolls back one page.
pub fn page_after_delete(current_page: u64, rows_on_page: usize) -> u64 {
    if rows_on_page == 1 && current_page > 1 {
        current_page - 1
    } else {
        current_page
    }
}

/// 1-based inclusive item range covered by a page, for "Showing X to Y of Z".
pub fn item_range(page: u64, page_size: u64, total: u64) -> (u64, u64) {
    if total == 0 {
        return (0, 0);
    }
    let start = (page - 1) * page_size + 1;
    let end = (page * page_size).min(total);
    (start, end)
}

/// Window of page numbers to render, at most `max_visible` wide, biased to
/// keep the current page centered.
pub fn page_window(current: u64, total: u64, max_visible: u64) -> (u64, u64) {
    if total == 0 {
        return (1, 0);
    }
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start + 1 < max_visible {
        start = end.saturating_sub(max_visible - 1).max(1);
    }
    (start, end)
}

/// Monotonically increasing fetch token.
///
/// Every listing fetch takes a token from [`issue`](Self::issue); the
/// response is applied only if its token still [`is_current`](Self::is_current)
/// when it arrives. A response superseded by a later fetch is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token, superseding all previously issued ones.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `token` is still the latest issued.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalizes_bare_array() {
        let value = json!([{"id": "1"}, {"id": "2"}, {"id": "3"}]);
        let page: PagedResult<Value> = PagedResult::from_value(value, 2).unwrap();

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_normalizes_documents_wrapper() {
        let value = json!({
            "documents": [{"id": "1"}],
            "total": 25,
            "totalPages": 4
        });
        let page: PagedResult<Value> = PagedResult::from_value(value, 7).unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn test_normalizes_data_wrapper_without_counters() {
        let value = json!({"data": [{"id": "1"}, {"id": "2"}]});
        let page: PagedResult<Value> = PagedResult::from_value(value, 7).unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_null_documents_means_empty() {
        let value = json!({"documents": null});
        let page: PagedResult<Value> = PagedResult::from_value(value, 7).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_unexpected_shape_yields_empty_single_page() {
        let value = json!({"documents": "nonsense"});
        let page: PagedResult<Value> = PagedResult::from_value(value, 7).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_total_pages_arithmetic() {
        // 25 items at 7 per page fill 4 pages.
        assert_eq!(total_pages(25, 7), 4);
        assert_eq!(total_pages(21, 7), 3);
        assert_eq!(total_pages(1, 7), 1);
        assert_eq!(total_pages(0, 7), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_page_three_of_twenty_five_covers_items_15_to_21() {
        assert_eq!(item_range(3, 7, 25), (15, 21));
        assert_eq!(item_range(4, 7, 25), (22, 25));
        assert_eq!(item_range(1, 7, 0), (0, 0));
    }

    #[test]
    fn test_delete_last_row_on_later_page_rolls_back() {
        assert_eq!(page_after_delete(2, 1), 1);
        assert_eq!(page_after_delete(1, 1), 1);
        assert_eq!(page_after_delete(2, 3), 2);
    }

    #[test]
    fn test_page_window_centers_current() {
        assert_eq!(page_window(5, 10, 5), (3, 7));
        assert_eq!(page_window(1, 10, 5), (1, 5));
        assert_eq!(page_window(10, 10, 5), (6, 10));
        // Fewer pages than the window shows them all.
        assert_eq!(page_window(2, 3, 5), (1, 3));
    }

    #[test]
    fn test_request_seq_discards_superseded_responses() {
        let mut seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();

        // The late-arriving first response must not be applied.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));

        let third = seq.issue();
        assert!(!seq.is_current(second));
        assert!(seq.is_current(third));
    }

    #[test]
    fn test_decode_failure_propagates() {
        #[derive(serde::Deserialize, Debug)]
        struct Strict {
            #[allow(dead_code)]
            id: u64,
        }
        let value = json!([{"id": "not-a-number"}]);
        let result: Result<PagedResult<Strict>, _> = PagedResult::from_value(value, 5);
        assert!(result.is_err());
    }
}
