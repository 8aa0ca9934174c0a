use crate::invariants::{Endpoint, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub path: Endpoint,
    pub timestamp: Timestamp,
    pub user_agent: String,
    pub status: i64,
    pub size: i64,
}
