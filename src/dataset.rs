//! Reading records out of the comma-separated movie dataset.
//!
//! The first row is a header. Each following row must have more than
//! `RATING_COLUMN` columns and a non-empty title; anything else is skipped
//! without counting toward the requested number of records.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::error::{Error, Result};
use crate::record::Record;

pub const TITLE_COLUMN: usize = 2;
pub const RATING_COLUMN: usize = 10;

/// Load at most `limit` valid records from the file, in file order.
pub fn load_records<P: AsRef<Path>>(path: P, limit: usize) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    read_records(file, limit)
}

/// Same as `load_records` over any reader.
pub fn read_records<R: Read>(source: R, limit: usize) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let mut records = Vec::with_capacity(limit.min(1 << 16));
    let mut row = StringRecord::new();

    while records.len() < limit {
        match reader.read_record(&mut row) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => match err.kind() {
                csv::ErrorKind::Utf8 { pos, .. } => {
                    debug!(
                        "skip row on line {}: not valid UTF-8",
                        pos.as_ref().map_or(0, |pos| pos.line())
                    );
                    continue;
                }
                _ => return Err(err.into()),
            },
        }

        let line = row.position().map_or(0, |pos| pos.line());

        match parse_row(&row, line) {
            Ok(record) => records.push(record),
            Err(err) if err.is_malformed_record() => debug!("skip {}", err),
            Err(err) => return Err(err),
        }
    }

    Ok(records)
}

/// Turn one dataset row into a record.
///
/// A rating that does not parse as a number becomes 0.0 instead of rejecting the row.
pub fn parse_row(row: &StringRecord, line: u64) -> Result<Record> {
    if row.len() <= RATING_COLUMN {
        return Err(Error::MalformedRecord {
            line,
            reason: format!(
                "expected more than {} columns, found {}",
                RATING_COLUMN,
                row.len()
            ),
        });
    }

    let title = row.get(TITLE_COLUMN).map_or("", str::trim);
    if title.is_empty() {
        return Err(Error::MalformedRecord {
            line,
            reason: "empty title".to_string(),
        });
    }

    let rating = row
        .get(RATING_COLUMN)
        .and_then(|rating| rating.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    Ok(Record::new(title, rating))
}
