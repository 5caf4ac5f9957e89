//! Connection state of the live frame feed

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FeedState {
    /// No feed configured; frames come from a local source
    #[default]
    Offline,
    Connecting,
    Connected,
    Disconnected,
    Error(String),
}

impl FeedState {
    pub fn is_connected(&self) -> bool {
        matches!(self, FeedState::Connected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedState::Offline => "Local",
            FeedState::Connecting => "Connecting...",
            FeedState::Connected => "Connected",
            FeedState::Disconnected => "Disconnected",
            FeedState::Error(_) => "Error",
        }
    }
}

impl fmt::Display for FeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedState::Error(e) => write!(f, "error: {e}"),
            other => f.write_str(other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_state_labels() {
        assert!(FeedState::Connected.is_connected());
        assert!(!FeedState::Offline.is_connected());
        assert_eq!(FeedState::Error("refused".into()).to_string(), "error: refused");
        assert_eq!(FeedState::Connecting.to_string(), "Connecting...");
    }
}
