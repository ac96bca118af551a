// ==========================================
// Stockwatch - Domain Model Layer
// ==========================================
// Record shapes, result rows, risk tiers, notification history.
// No engine logic and no I/O live here.
// ==========================================

pub mod notification;
pub mod record;
pub mod types;
pub mod velocity;

// Re-export core types
pub use notification::{NotificationLog, NotificationRecord};
pub use record::{NormalizedRecord, RawRecord, ValidatedRecord};
pub use types::StockStatus;
pub use velocity::{AlertEntry, ProductVelocity, RestockSuggestion};
