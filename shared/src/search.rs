//! State of the header search dropdown.
//!
//! The dropdown issues a ticket per query. Results are applied only when they
//! answer the latest ticket, so a slow response never overwrites a newer one.

use log::debug;

/// Queries shorter than this (after trimming) do not hit the search service
pub const MIN_QUERY_LEN: usize = 2;
/// Most results shown at once
pub const MAX_RESULTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchDropdown {
    query: String,
    results: Vec<String>,
    open: bool,
    highlighted: Option<usize>,
    loading: bool,
    error: Option<String>,
    latest: u64,
}

impl SearchDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// The input exactly as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// What gets sent to the search service
    pub fn search_term(&self) -> &str {
        self.query.trim()
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Ticket of the query still waiting for results
    pub fn pending(&self) -> Option<SearchTicket> {
        self.loading.then_some(SearchTicket(self.latest))
    }

    /// Records a new query. Returns a ticket when the query should be sent to the
    /// search service, `None` when it is too short.
    pub fn set_query(&mut self, raw: &str) -> Option<SearchTicket> {
        self.query = raw.to_string();
        self.latest += 1;
        self.highlighted = None;
        self.error = None;

        if self.search_term().chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.open = false;
            self.loading = false;
            return None;
        }

        self.loading = true;
        Some(SearchTicket(self.latest))
    }

    /// Applies a search response. Returns false if the ticket was superseded.
    pub fn apply_results(&mut self, ticket: SearchTicket, result: Result<Vec<String>, String>) -> bool {
        if ticket.0 != self.latest {
            debug!("Dropping stale search results for ticket {:?}", ticket);
            return false;
        }

        self.loading = false;
        self.highlighted = None;
        match result {
            Ok(mut results) => {
                results.truncate(MAX_RESULTS);
                self.open = !results.is_empty();
                self.results = results;
            }
            Err(error) => {
                self.results.clear();
                self.open = true;
                self.error = Some(error);
            }
        }
        true
    }

    pub fn highlight_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.open = true;
        self.highlighted = Some(match self.highlighted {
            Some(index) => (index + 1) % self.results.len(),
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.open = true;
        let last = self.results.len() - 1;
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => last,
            Some(index) => index - 1,
        });
    }

    pub fn selected(&self) -> Option<&str> {
        self.highlighted
            .and_then(|index| self.results.get(index))
            .map(String::as_str)
    }

    /// Reopens the list if there is something to show
    pub fn reopen(&mut self) {
        self.open = !self.results.is_empty() || self.error.is_some();
    }

    /// Hides the list, keeping the query and results
    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Clears everything after a selection. In-flight responses become stale.
    pub fn clear(&mut self) {
        let latest = self.latest + 1;
        *self = Self {
            latest,
            ..Self::default()
        };
    }
}
