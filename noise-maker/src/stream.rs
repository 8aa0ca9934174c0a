use crate::generator::{generate_csv_row, generate_malformed_row};
use chrono::NaiveDate;
use rand::Rng;
use tokio::io::{AsyncWrite, AsyncWriteExt};

const AVERAGE_ROW_LEN: usize = 160;

pub struct LogShape {
    pub rows: usize,
    pub batch_size: usize,
    pub date: NaiveDate,
    pub malformed_ratio: f64,
}

/// Writes `shape.rows` access log rows to `out`, one batch at a time.
pub async fn write_log_rows<W, R>(
    out: &mut W,
    rng: &mut R,
    shape: &LogShape,
) -> Result<usize, Box<dyn std::error::Error>>
where
    W: AsyncWrite + Unpin + ?Sized,
    R: Rng + ?Sized,
{
    let batch_size = shape.batch_size.max(1);
    let mut written = 0;
    while written < shape.rows {
        let batch = batch_size.min(shape.rows - written);
        let mut buffer = String::with_capacity(batch * AVERAGE_ROW_LEN);
        for _ in 0..batch {
            let row = if rng.random_bool(shape.malformed_ratio) {
                generate_malformed_row(rng, shape.date)
            } else {
                generate_csv_row(rng, shape.date)
            };
            buffer.push_str(&row);
            buffer.push('\n');
        }
        out.write_all(buffer.as_bytes()).await?;
        written += batch;
    }
    out.flush().await?;
    Ok(written)
}
