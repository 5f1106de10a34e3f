//! Search session state machine.
//!
//! Owns the flags and result set behind the result list and decides which of
//! the three render modes is visible: a single loading row while a request is
//! in flight, a single "nothing found" row after an empty search, or one row
//! per result. Each submitted search gets a [`SearchToken`]; completions
//! carrying a superseded token are ignored, so a stale request can never
//! overwrite the state of the search that replaced it.

use super::results::SearchResult;

/// Opaque handle identifying one submitted search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchToken(u64);

/// Rendering-facing projection of one list row.
#[derive(Clone, Debug, PartialEq)]
pub enum RowDescriptor {
    Loading,
    NothingFound,
    Result(SearchResult),
}

pub struct SearchSession {
    has_searched: bool,
    is_loading: bool,
    results: Vec<SearchResult>,
    active_token: Option<SearchToken>,
    next_token: u64,
    revision: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            has_searched: false,
            is_loading: false,
            results: Vec::new(),
            active_token: None,
            next_token: 0,
            revision: 0,
        }
    }

    /// Start a new search: invalidates any prior token, enters the loading
    /// state, and clears the previous result set.
    pub fn begin_search(&mut self) -> SearchToken {
        self.next_token += 1;
        let token = SearchToken(self.next_token);
        self.active_token = Some(token);
        self.is_loading = true;
        self.has_searched = true;
        self.results.clear();
        self.revision += 1;
        token
    }

    /// Whether `token` still identifies the in-flight search.
    pub fn is_current(&self, token: SearchToken) -> bool {
        self.active_token == Some(token)
    }

    /// Record a successful completion. Returns false (and changes nothing)
    /// when a newer search has superseded `token`.
    pub fn complete(&mut self, token: SearchToken, mut results: Vec<SearchResult>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        results.sort_by(SearchResult::display_order);
        self.results = results;
        self.is_loading = false;
        self.active_token = None;
        self.revision += 1;
        true
    }

    /// Record a failed completion: drops back to the pre-search baseline so
    /// the list empties instead of showing a stale "nothing found" row.
    /// Returns false when `token` has been superseded.
    pub fn fail(&mut self, token: SearchToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.has_searched = false;
        self.is_loading = false;
        self.results.clear();
        self.active_token = None;
        self.revision += 1;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Change counter, bumped on every visible state transition. The render
    /// loop and tests use it to observe that something changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn row_count(&self) -> usize {
        if self.is_loading {
            1
        } else if !self.has_searched {
            0
        } else if self.results.is_empty() {
            1
        } else {
            self.results.len()
        }
    }

    pub fn row_content(&self, index: usize) -> Option<RowDescriptor> {
        if self.is_loading {
            (index == 0).then_some(RowDescriptor::Loading)
        } else if !self.has_searched {
            None
        } else if self.results.is_empty() {
            (index == 0).then_some(RowDescriptor::NothingFound)
        } else {
            self.results.get(index).cloned().map(RowDescriptor::Result)
        }
    }

    /// Placeholder rows (loading, nothing found) are never selectable.
    pub fn is_row_selectable(&self, index: usize) -> bool {
        !self.is_loading && index < self.results.len()
    }

    pub fn row_projection(&self) -> Vec<RowDescriptor> {
        (0..self.row_count())
            .filter_map(|i| self.row_content(i))
            .collect()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
