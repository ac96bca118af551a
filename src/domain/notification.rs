// ==========================================
// Stockwatch - Notification History Domain Model
// ==========================================
// Append-only record of alert send actions. The log is owned by
// the calling layer and passed around as a value; the engine only
// produces the candidate product list and never writes here.
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// NotificationRecord - one send action
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub sent_at: NaiveDateTime,    // caller-supplied send timestamp
    pub recipient: String,         // e.g. an email address
    pub products: Vec<String>,     // products covered by the send
}

// ==========================================
// NotificationLog - append-only history
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationLog {
    entries: Vec<NotificationRecord>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a send action. Entries are never edited or removed.
    pub fn append(&mut self, sent_at: NaiveDateTime, recipient: &str, products: Vec<String>) {
        self.entries.push(NotificationRecord {
            sent_at,
            recipient: recipient.to_string(),
            products,
        });
    }

    pub fn entries(&self) -> &[NotificationRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_append_only_log() {
        let mut log = NotificationLog::new();
        assert!(log.is_empty());

        let ts = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        log.append(ts, "ops@example.com", vec!["Widget".to_string()]);
        log.append(ts, "ops@example.com", vec!["Gadget".to_string()]);

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].products, vec!["Widget".to_string()]);
        assert_eq!(log.entries()[1].recipient, "ops@example.com");
    }
}
