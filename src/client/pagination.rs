//! Pagination types for cursor-based listing endpoints
//!
//! Acunetix listing endpoints accept a cursor (`c`), a page size (`l`), a
//! filter expression (`q`), and a sort expression (`s`). Responses carry a
//! `pagination` block describing where the next page starts.

use serde::{Deserialize, Serialize};

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Request parameters for one page of a listing endpoint.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new()
///     .limit(50)
///     .query("severity:3")
///     .sort("last_seen:desc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Opaque continuation token from a previous page
    pub cursor: Option<String>,
    /// Number of items per page (clamped to `MAX_PAGE_SIZE`)
    pub limit: Option<usize>,
    /// Filter expression, passed through unchanged
    pub query: Option<String>,
    /// Sort expression, passed through unchanged
    pub sort: Option<String>,
}

impl PaginationParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cursor to resume from.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the filter expression.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the sort expression.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Effective page size sent to the server.
    pub fn page_size(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Convert to query string parameters.
    ///
    /// Uses Acunetix parameter names:
    /// - `l`: page size (always sent)
    /// - `c`: cursor
    /// - `q`: filter
    /// - `s`: sort
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("l", self.page_size().to_string())];

        if let Some(ref cursor) = self.cursor {
            params.push(("c", cursor.clone()));
        }

        if let Some(ref query) = self.query {
            params.push(("q", query.clone()));
        }

        if let Some(ref sort) = self.sort {
            params.push(("s", sort.clone()));
        }

        params
    }
}

/// Pagination block returned alongside every listing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Number of items matching the query
    #[serde(default)]
    pub count: Option<u64>,

    /// Hash identifying the query the cursors belong to
    #[serde(default)]
    pub cursor_hash: Option<String>,

    /// Cursor list: `[current, next]`, the second entry absent on the last page
    #[serde(default)]
    pub cursors: Vec<Option<String>>,

    /// Sort applied by the server
    #[serde(default)]
    pub sort: Option<String>,

    /// Explicit next cursor (some server versions send this instead of `cursors`)
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl PaginationInfo {
    /// The cursor of the following page, if there is one.
    pub fn next(&self) -> Option<String> {
        if let Some(ref next) = self.next_cursor {
            return Some(next.clone());
        }

        self.cursors
            .get(1)
            .and_then(|c| c.clone())
            .filter(|c| !c.is_empty())
    }
}

/// One page of results: the items plus where the next page starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Cursor of the next page; `None` marks the final page
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// Create the final page of a listing.
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Build a page from a decoded item list and its pagination block.
    pub fn from_response(items: Vec<T>, pagination: Option<PaginationInfo>) -> Self {
        let next_cursor = pagination.and_then(|p| p.next());
        Self::new(items, next_cursor)
    }

    /// Whether another page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }
}
