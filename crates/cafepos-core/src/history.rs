//! # Order History
//!
//! An append-only record of rendered bills for the current session.
//!
//! The billing engine does not write here itself: the calling layer decides
//! whether a generated bill gets logged. Not persisted; a process restart
//! starts with an empty history.

/// Append-only, unbounded, in-memory list of rendered bill texts.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    entries: Vec<String>,
}

impl OrderHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        OrderHistory {
            entries: Vec::new(),
        }
    }

    /// Appends a rendered bill. No dedup, no size bound.
    pub fn append(&mut self, bill_text: impl Into<String>) {
        self.entries.push(bill_text.into());
    }

    /// All entries, oldest first. Read-only view.
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    /// All entries joined by blank lines, the format the history dialog
    /// displays.
    pub fn joined(&self) -> String {
        self.entries.join("\n\n")
    }

    /// Number of recorded bills.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether any bill has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut history = OrderHistory::new();
        assert!(history.is_empty());

        history.append("first bill");
        history.append("second bill");

        assert_eq!(history.len(), 2);
        assert_eq!(history.all(), ["first bill", "second bill"]);
    }

    #[test]
    fn test_no_dedup() {
        let mut history = OrderHistory::new();
        history.append("same bill");
        history.append("same bill");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_joined() {
        let mut history = OrderHistory::new();
        assert_eq!(history.joined(), "");

        history.append("first bill");
        history.append("second bill");
        assert_eq!(history.joined(), "first bill\n\nsecond bill");
    }
}
