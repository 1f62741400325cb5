//! Load State
//!
//! Request/loading/error wrapper for one asynchronous load. Every request is
//! issued a ticket; completions carrying an old ticket are dropped, so a
//! response that arrives after the page moved on (or after `cancel`) never
//! overwrites newer state.

use std::fmt::Display;

use tracing::{debug, warn};

/// Text shown in place of content when loading fails
pub const LOAD_ERROR_TEXT: &str = "Error loading content.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    /// Holds the underlying error for logging; the page shows `LOAD_ERROR_TEXT`
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loader<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self { state: LoadState::Idle, generation: 0 }
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Start a request; any earlier ticket becomes stale
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = LoadState::Loading;
        Ticket(self.generation)
    }

    /// Content that needs no request
    pub fn ready(&mut self, value: T) {
        self.generation += 1;
        self.state = LoadState::Ready(value);
    }

    /// Apply a completion. Returns false if the ticket is stale.
    pub fn finish<E: Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.0 != self.generation || !self.is_loading() {
            debug!(ticket = ticket.0, current = self.generation, "dropping stale completion");
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => {
                warn!(error = %err, "load failed");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }

    /// Invalidate the outstanding request, if any
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.is_loading() {
            self.state = LoadState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_clears_loading() {
        let mut loader = Loader::new();
        let ticket = loader.begin();
        assert!(loader.is_loading());
        assert!(loader.finish::<String>(ticket, Ok("# Post".to_string())));
        assert!(!loader.is_loading());
        assert_eq!(loader.state(), &LoadState::Ready("# Post".to_string()));
    }

    #[test]
    fn test_failure_clears_loading() {
        let mut loader: Loader<String> = Loader::new();
        let ticket = loader.begin();
        assert!(loader.finish(ticket, Err("network down")));
        assert!(!loader.is_loading());
        assert!(matches!(loader.state(), LoadState::Failed(msg) if msg == "network down"));
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut loader: Loader<&str> = Loader::new();
        let old = loader.begin();
        let new = loader.begin();
        assert!(!loader.finish::<String>(old, Ok("old")));
        assert!(loader.is_loading());
        assert!(loader.finish::<String>(new, Ok("new")));
        assert_eq!(loader.state(), &LoadState::Ready("new"));
    }

    #[test]
    fn test_cancel_drops_completion() {
        let mut loader: Loader<&str> = Loader::new();
        let ticket = loader.begin();
        loader.cancel();
        assert_eq!(loader.state(), &LoadState::Idle);
        assert!(!loader.finish::<String>(ticket, Ok("late")));
        assert_eq!(loader.state(), &LoadState::Idle);
    }

    #[test]
    fn test_ready_without_request() {
        let mut loader = Loader::new();
        loader.ready("inline");
        assert_eq!(loader.state(), &LoadState::Ready("inline"));
        assert!(!loader.is_loading());
    }
}
