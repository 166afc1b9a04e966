//! Waiting-time data models.

/// Placeholder shown when a record carries no received timestamp.
pub const NO_TIMESTAMP: &str = "—";

/// Staleness bucket for a waiting email, driving the badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    /// Waiting 12 hours or less.
    #[default]
    Green,
    /// Waiting more than 12 hours, up to 24.
    Yellow,
    /// Waiting more than 24 hours.
    Red,
}

impl Severity {
    /// Stable string form, used by badge styling hooks.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

/// How long an email has been waiting, derived from its received
/// timestamp and an explicit "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingTime {
    /// Human-readable elapsed label, e.g. `"37m"` or `"2d 5h"`.
    pub label: String,
    /// Elapsed whole minutes, floored and clamped at zero. The sortable key.
    pub minutes: u64,
    /// Staleness bucket.
    pub severity: Severity,
}

impl WaitingTime {
    /// The value used for records with no timestamp.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            label: NO_TIMESTAMP.to_string(),
            minutes: 0,
            severity: Severity::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Green < Severity::Yellow);
        assert!(Severity::Yellow < Severity::Red);
    }

    #[test]
    fn test_placeholder() {
        let info = WaitingTime::placeholder();
        assert_eq!(info.label, NO_TIMESTAMP);
        assert_eq!(info.minutes, 0);
        assert_eq!(info.severity, Severity::Green);
    }
}
