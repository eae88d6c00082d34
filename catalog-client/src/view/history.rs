//! In-memory session history
//!
//! Mirrors `window.history`: pushed entries carry a [`NavigationState`],
//! and moving back or forward yields the state to dispatch.

use serde::{Deserialize, Serialize};
use shared::Resource;

/// History state of a listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub route: Resource,
    pub page: u32,
}

impl NavigationState {
    pub fn new(route: Resource, page: u32) -> Self {
        Self { route, page }
    }

    /// `<route>/<page>`, e.g. `/movies/2`
    pub fn url(&self) -> String {
        format!("{}/{}", self.route.route(), self.page)
    }
}

/// One history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub state: Option<NavigationState>,
}

#[derive(Debug, Clone)]
pub struct BrowserHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl BrowserHistory {
    /// History with a single stateless entry at `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: url.into(),
                state: None,
            }],
            index: 0,
        }
    }

    /// Append an entry after the current one, discarding forward entries
    pub fn push_state(&mut self, state: NavigationState, url: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            url: url.into(),
            state: Some(state),
        });
        self.index = self.entries.len() - 1;
    }

    /// Overwrite the current entry
    pub fn replace_state(&mut self, state: Option<NavigationState>, url: impl Into<String>) {
        self.entries[self.index] = HistoryEntry {
            url: url.into(),
            state,
        };
    }

    /// Step back; `None` at the first entry.
    ///
    /// The inner option is the entry's state, which is absent for
    /// entries that were never pushed.
    pub fn back(&mut self) -> Option<Option<NavigationState>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].state)
    }

    pub fn forward(&mut self) -> Option<Option<NavigationState>> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].state)
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BrowserHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_url() {
        assert_eq!(NavigationState::new(Resource::Movies, 2).url(), "/movies/2");
        assert_eq!(NavigationState::new(Resource::Actors, 10).url(), "/actors/10");
    }

    #[test]
    fn test_state_serializes_route_string() {
        let json = serde_json::to_value(NavigationState::new(Resource::Actors, 3)).unwrap();
        assert_eq!(json, serde_json::json!({"route": "/actors", "page": 3}));
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = BrowserHistory::default();
        let one = NavigationState::new(Resource::Movies, 1);
        let two = NavigationState::new(Resource::Movies, 2);
        history.push_state(one, one.url());
        history.push_state(two, two.url());
        assert_eq!(history.len(), 3);

        assert_eq!(history.back(), Some(Some(one)));
        assert_eq!(history.back(), Some(None));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(Some(one)));
        assert_eq!(history.current().url, "/movies/1");
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = BrowserHistory::default();
        for page in 1..=3 {
            let state = NavigationState::new(Resource::Actors, page);
            history.push_state(state, state.url());
        }
        history.back();
        history.back();
        let other = NavigationState::new(Resource::Movies, 1);
        history.push_state(other, other.url());
        assert_eq!(history.len(), 3);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_replace_state() {
        let mut history = BrowserHistory::new("/?code=abc&state=xyz");
        history.replace_state(None, "/");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().url, "/");
    }
}
