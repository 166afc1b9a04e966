//! Email record data models.

use serde::{Deserialize, Serialize};

/// Unique identifier for an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmailId(pub i64);

impl EmailId {
    /// Create a new email ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which triage queue an email was routed to by the upstream classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueStatus {
    /// Held for an advisor to review before anything goes out.
    #[default]
    Review,
    /// Reply was sent automatically without advisor involvement.
    Auto,
}

impl QueueStatus {
    /// Parse from the wire string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "auto" => Self::Auto,
            _ => Self::Review,
        }
    }

    /// Convert to the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::Auto => "auto",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Review => "Needs Review",
            Self::Auto => "Auto-Sent",
        }
    }
}

impl std::str::FromStr for QueueStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Coarse confidence bracket used by the badge styling and the
/// analytics distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// Below 60%.
    Low,
    /// 60% to just under 80%.
    Moderate,
    /// 80% to just under 95%.
    High,
    /// 95% and above.
    VeryHigh,
}

impl ConfidenceTier {
    /// All tiers, lowest first. Matches the analytics chart bracket order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Moderate, Self::High, Self::VeryHigh];

    /// Bucket a confidence score into its tier.
    #[must_use]
    pub fn of(confidence: f64) -> Self {
        if confidence < 0.60 {
            Self::Low
        } else if confidence < 0.80 {
            Self::Moderate
        } else if confidence < 0.95 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Bracket label as shown on the distribution chart axis.
    #[must_use]
    pub const fn bracket(&self) -> &'static str {
        match self {
            Self::Low => "0-60%",
            Self::Moderate => "60-80%",
            Self::High => "80-95%",
            Self::VeryHigh => "95-100%",
        }
    }
}

/// A student email as supplied by the upstream advising pipeline.
///
/// The core never creates or mutates these; it only derives display
/// ordering and per-row presentation data from them. Confidence is
/// injected by the upstream classifier, never computed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Unique identifier.
    pub id: EmailId,
    /// Student display name, if known.
    #[serde(default)]
    pub student_name: Option<String>,
    /// University-issued student identifier, if known. Opaque text.
    #[serde(default)]
    pub uni: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
    /// Queue the email was routed to.
    #[serde(default)]
    pub status: QueueStatus,
    /// When the email arrived. ISO-8601-like; bare values are UTC.
    #[serde(default)]
    pub received_at: String,
    /// Full email text. Opaque display payload.
    #[serde(default)]
    pub body: String,
    /// Knowledge-base citations attached by the upstream composer.
    #[serde(default)]
    pub references: Vec<String>,
}

impl EmailRecord {
    /// Create a record with the required fields; optional fields start empty.
    #[must_use]
    pub fn new(
        id: EmailId,
        subject: impl Into<String>,
        confidence: f64,
        status: QueueStatus,
        received_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            student_name: None,
            uni: None,
            subject: subject.into(),
            confidence,
            status,
            received_at: received_at.into(),
            body: String::new(),
            references: Vec::new(),
        }
    }

    /// Confidence tier for badge styling.
    #[must_use]
    pub fn confidence_tier(&self) -> ConfidenceTier {
        ConfidenceTier::of(self.confidence)
    }

    /// Checks whether the record matches a search query.
    ///
    /// Case-insensitive substring match over student name, UNI, and
    /// subject. The empty query matches everything.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        let contains = |value: Option<&str>| {
            value
                .unwrap_or_default()
                .to_lowercase()
                .contains(query.as_str())
        };

        contains(self.student_name.as_deref())
            || contains(self.uni.as_deref())
            || self.subject.to_lowercase().contains(query.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EmailRecord {
        let mut email = EmailRecord::new(
            EmailId::new(1),
            "Withdraw from course",
            0.87,
            QueueStatus::Review,
            "2024-11-02T10:15:00",
        );
        email.student_name = Some("Jordan".into());
        email.uni = Some("j12345".into());
        email
    }

    #[test]
    fn test_queue_status_roundtrip() {
        for status in [QueueStatus::Review, QueueStatus::Auto] {
            assert_eq!(QueueStatus::parse(status.as_str()), status);
        }
    }

    #[test]
    fn test_queue_status_unknown_defaults_to_review() {
        assert_eq!(QueueStatus::parse("escalated"), QueueStatus::Review);
    }

    #[test]
    fn test_confidence_tier_brackets() {
        assert_eq!(ConfidenceTier::of(0.30), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::of(0.60), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::of(0.79), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::of(0.80), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::of(0.94), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::of(0.95), ConfidenceTier::VeryHigh);
        assert_eq!(ConfidenceTier::of(1.0), ConfidenceTier::VeryHigh);
    }

    #[test]
    fn test_matches_search_fields() {
        let email = record();
        assert!(email.matches_search("jordan"));
        assert!(email.matches_search("J12345"));
        assert!(email.matches_search("withdraw"));
        assert!(!email.matches_search("transcript"));
    }

    #[test]
    fn test_matches_search_empty_query_matches_all() {
        assert!(record().matches_search(""));
        assert!(record().matches_search("   "));
    }

    #[test]
    fn test_matches_search_missing_fields() {
        let email = EmailRecord::new(
            EmailId::new(2),
            "Transcript request",
            0.98,
            QueueStatus::Auto,
            "",
        );
        assert!(!email.matches_search("jordan"));
        assert!(email.matches_search("transcript"));
    }
}
