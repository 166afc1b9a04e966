//! Advisor assignment and saved-draft bookkeeping.

use std::collections::HashMap;

use tracing::debug;

use crate::email::EmailId;

/// Fixed advisor roster offered by the assignment dropdown.
pub const ADVISORS: [&str; 6] = [
    "Winsor",
    "Kelly",
    "Sabrina",
    "Samantha",
    "Christine",
    "Jean",
];

/// Which advisor, if any, each email is assigned to.
///
/// Owned by the enclosing view and passed to the sorter read-only.
#[derive(Debug, Clone, Default)]
pub struct AssignmentBook {
    assignments: HashMap<EmailId, String>,
}

impl AssignmentBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an email to an advisor. An empty or whitespace name clears
    /// the assignment, matching the dropdown's "Unassigned" entry.
    pub fn assign(&mut self, id: EmailId, advisor: impl Into<String>) {
        let advisor = advisor.into();
        let advisor = advisor.trim();
        if advisor.is_empty() {
            self.clear(id);
        } else {
            debug!(email = %id, advisor, "assigned email");
            self.assignments.insert(id, advisor.to_string());
        }
    }

    /// Remove any assignment for the email.
    pub fn clear(&mut self, id: EmailId) {
        self.assignments.remove(&id);
    }

    /// The assigned advisor, if any.
    #[must_use]
    pub fn get(&self, id: EmailId) -> Option<&str> {
        self.assignments.get(&id).map(String::as_str)
    }

    /// Number of assigned emails.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no email is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Reply drafts saved per email.
///
/// Presence of a draft drives the table's draft indicator; the text
/// itself is opaque to the core.
#[derive(Debug, Clone, Default)]
pub struct DraftBook {
    drafts: HashMap<EmailId, String>,
}

impl DraftBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a draft for the email. Saving empty text discards instead.
    pub fn save(&mut self, id: EmailId, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            self.discard(id);
        } else {
            self.drafts.insert(id, text);
        }
    }

    /// Discard any draft for the email.
    pub fn discard(&mut self, id: EmailId) {
        self.drafts.remove(&id);
    }

    /// Whether the email has a saved draft.
    #[must_use]
    pub fn has_draft(&self, id: EmailId) -> bool {
        self.drafts.contains_key(&id)
    }

    /// The saved draft text, if any.
    #[must_use]
    pub fn get(&self, id: EmailId) -> Option<&str> {
        self.drafts.get(&id).map(String::as_str)
    }

    /// Number of saved drafts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    /// Whether no draft is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_clear() {
        let mut book = AssignmentBook::new();
        book.assign(EmailId::new(1), "Kelly");
        assert_eq!(book.get(EmailId::new(1)), Some("Kelly"));

        book.clear(EmailId::new(1));
        assert_eq!(book.get(EmailId::new(1)), None);
        assert!(book.is_empty());
    }

    #[test]
    fn test_empty_name_clears() {
        let mut book = AssignmentBook::new();
        book.assign(EmailId::new(1), "Sabrina");
        book.assign(EmailId::new(1), "   ");
        assert_eq!(book.get(EmailId::new(1)), None);
    }

    #[test]
    fn test_reassign_overwrites() {
        let mut book = AssignmentBook::new();
        book.assign(EmailId::new(1), "Kelly");
        book.assign(EmailId::new(1), "Jean");
        assert_eq!(book.get(EmailId::new(1)), Some("Jean"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_draft_presence() {
        let mut drafts = DraftBook::new();
        assert!(!drafts.has_draft(EmailId::new(1)));

        drafts.save(EmailId::new(1), "Dear Jordan, ...");
        assert!(drafts.has_draft(EmailId::new(1)));
        assert_eq!(drafts.get(EmailId::new(1)), Some("Dear Jordan, ..."));

        drafts.discard(EmailId::new(1));
        assert!(!drafts.has_draft(EmailId::new(1)));
    }

    #[test]
    fn test_empty_draft_discards() {
        let mut drafts = DraftBook::new();
        drafts.save(EmailId::new(1), "text");
        drafts.save(EmailId::new(1), "  ");
        assert!(!drafts.has_draft(EmailId::new(1)));
    }
}
