//! Simulator session bookkeeping.
//!
//! The backend correlates start/update/stop calls by an opaque session id.
//! Responses can arrive after the session they belong to has been stopped
//! or replaced (slow `/update` on a switched simulator), so every response
//! must be checked against the current session before it is applied —
//! otherwise a stale frame paints into the wrong simulator view.

/// Allocates session ids and rejects responses from superseded sessions.
#[derive(Debug, Default)]
pub struct SessionTracker {
    generation: u64,
    current: Option<String>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new session, superseding any previous one. Returns the id
    /// to send with `/start`.
    pub fn start(&mut self) -> &str {
        self.generation += 1;
        self.current = Some(format!("session_{}", self.generation));
        self.current.as_deref().unwrap_or_default()
    }

    /// End the current session. Returns the id to send with `/stop`.
    pub fn stop(&mut self) -> Option<String> {
        self.current.take()
    }

    /// The live session id, if a session is active.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether a response tagged with `session_id` may be applied.
    /// False for stale ids and while no session is active.
    pub fn accepts(&self, session_id: &str) -> bool {
        self.current.as_deref() == Some(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_allocates_fresh_ids() {
        let mut tracker = SessionTracker::new();
        let first = tracker.start().to_owned();
        let second = tracker.start().to_owned();
        assert_ne!(first, second);
        assert_eq!(tracker.current(), Some(second.as_str()));
    }

    #[test]
    fn stale_response_is_rejected_after_switch() {
        let mut tracker = SessionTracker::new();
        let old = tracker.start().to_owned();
        assert!(tracker.accepts(&old));

        // User switches simulators; the old session's slow /update response
        // arrives afterwards and must not be applied.
        let fresh = tracker.start().to_owned();
        assert!(!tracker.accepts(&old));
        assert!(tracker.accepts(&fresh));
    }

    #[test]
    fn nothing_accepted_after_stop() {
        let mut tracker = SessionTracker::new();
        let id = tracker.start().to_owned();
        assert_eq!(tracker.stop(), Some(id.clone()));
        assert!(!tracker.accepts(&id));
        assert!(tracker.current().is_none());
    }

    #[test]
    fn stop_without_session_is_none() {
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.stop(), None);
    }
}
