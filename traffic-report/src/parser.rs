use csv::{ReaderBuilder, StringRecord};
use std::num::ParseIntError;
use tracing::{debug, info};

use crate::{invariants::Timestamp, models::LogRecord};

// path,timestamp,user_agent,status,size
const FIELD_COUNT: usize = 5;

#[derive(Debug, thiserror::Error)]
enum RowError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid status: {0}")]
    Status(#[source] ParseIntError),
    #[error("invalid size: {0}")]
    Size(#[source] ParseIntError),
    #[error("invalid timestamp: {0}")]
    Timestamp(#[source] chrono::ParseError),
}

/// Parses comma separated access log text into records, in source order.
///
/// Rows that are not a valid `path,timestamp,user_agent,status,size` entry are
/// skipped. `status` and `size` accept any base-10 integer that fits an `i64`.
pub fn parse(text: &str) -> Vec<LogRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0usize;
    // UTF-8 input read in flexible mode: the reader itself never fails.
    for row in reader.records().flatten() {
        let line = row.position().map(|p| p.line());
        match parse_row(&row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                debug!(?line, %reason, "skipping malformed row");
            }
        }
    }
    info!(parsed = records.len(), skipped, "log file parsed");
    records
}

fn parse_row(row: &StringRecord) -> Result<LogRecord, RowError> {
    if row.len() != FIELD_COUNT {
        return Err(RowError::FieldCount(row.len()));
    }
    let timestamp: Timestamp = row[1].parse().map_err(RowError::Timestamp)?;
    let status = row[3].trim().parse().map_err(RowError::Status)?;
    let size = row[4].trim().parse().map_err(RowError::Size)?;
    Ok(LogRecord {
        path: row[0].into(),
        timestamp,
        user_agent: row[2].to_string(),
        status,
        size,
    })
}
