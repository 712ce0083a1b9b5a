//! Server search bookkeeping.
//!
//! The search box fires requests while the user types; only the most recently
//! started request may replace the visible results.

use crate::api::CLIENT_BASE;
use crate::server::Server;

/// Terms shorter than this never trigger a request.
pub const MIN_TERM_LEN: usize = 3;

/// Results shown at most.
pub const MAX_RESULTS: usize = 5;

pub const TERM_TOO_SHORT: &str = "Please enter at least three characters to begin searching.";

/// Which servers a search covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// Servers the user can access.
    #[default]
    Default,
    /// Every server on the panel (root admins).
    AdminAll,
}

impl SearchScope {
    pub fn for_user(root_admin: bool) -> Self {
        if root_admin { Self::AdminAll } else { Self::Default }
    }
}

/// Whether `term` is long enough to search for.
pub fn is_searchable(term: &str) -> bool {
    term.chars().count() >= MIN_TERM_LEN
}

/// Query parameters for a server search.
pub fn search_query(term: &str, scope: SearchScope) -> Vec<(&'static str, String)> {
    let mut query = vec![("filter[*]", term.to_string())];
    if scope == SearchScope::AdminAll {
        query.push(("type", "admin-all".to_string()));
    }
    query
}

/// URL of the server list endpoint.
pub fn servers_url() -> &'static str {
    CLIENT_BASE
}

/// Keep the first [`MAX_RESULTS`] servers.
pub fn truncate_results(mut servers: Vec<Server>) -> Vec<Server> {
    servers.truncate(MAX_RESULTS);
    servers
}

/// Hands out tickets for search requests; only the newest may be applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchTracker {
    latest: u64,
}

impl SearchTracker {
    /// Start a request, superseding every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether the request holding `ticket` is still the newest.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Drop every outstanding request.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::tests::server;

    #[test]
    fn test_searchable_terms() {
        assert!(!is_searchable(""));
        assert!(!is_searchable("ab"));
        assert!(is_searchable("abc"));
        assert!(!is_searchable("äö"));
    }

    #[test]
    fn test_query() {
        assert_eq!(
            search_query("survival", SearchScope::Default),
            vec![("filter[*]", "survival".to_string())]
        );
        assert_eq!(
            search_query("survival", SearchScope::for_user(true)),
            vec![
                ("filter[*]", "survival".to_string()),
                ("type", "admin-all".to_string())
            ]
        );
    }

    #[test]
    fn test_latest_search_wins() {
        let mut tracker = SearchTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));

        tracker.cancel();
        assert!(!tracker.is_current(second));
    }

    #[test]
    fn test_results_are_truncated() {
        let servers = vec![server(); 8];
        assert_eq!(truncate_results(servers).len(), MAX_RESULTS);
        assert_eq!(truncate_results(vec![server(); 2]).len(), 2);
    }
}
