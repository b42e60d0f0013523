//! Request Tokens
//!
//! In-flight requests are never cancelled, so a page that fires a new fetch
//! on every filter change can receive responses out of order. Each fetch
//! takes a token from a monotonically increasing sequence and applies its
//! response only if the token is still the latest one issued.

use std::cell::Cell;
use std::rc::Rc;

/// Per-page counter of issued fetches
#[derive(Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding all earlier ones
    pub fn begin(&self) -> u64 {
        let token = self.latest.get() + 1;
        self.latest.set(token);
        token
    }

    /// Whether a response carrying this token may still be applied
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let requests = RequestSequence::new();
        let token = requests.begin();
        assert!(requests.is_current(token));
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let requests = RequestSequence::new();
        let first = requests.begin();
        let second = requests.begin();

        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let requests = RequestSequence::new();
        let token = requests.begin();

        let handle = requests.clone();
        let newer = handle.begin();

        assert!(!requests.is_current(token));
        assert!(requests.is_current(newer));
    }
}
