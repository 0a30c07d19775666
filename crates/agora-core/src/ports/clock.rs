use chrono::{DateTime, Utc};

/// Source of the current time used by the visibility rules.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
