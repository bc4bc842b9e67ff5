//! API gateway reachability for the status-bar indicator.

/// Result of the most recent health poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStatus {
    Live,
    /// Also the state before the first poll completes.
    #[default]
    Offline,
}

impl LinkStatus {
    pub fn is_live(&self) -> bool {
        matches!(self, LinkStatus::Live)
    }

    /// Status-bar badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Offline => "OFFLINE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(LinkStatus::Live.label(), "LIVE");
        assert_eq!(LinkStatus::Offline.label(), "OFFLINE");
        assert!(LinkStatus::Live.is_live());
        assert!(!LinkStatus::default().is_live());
    }
}
