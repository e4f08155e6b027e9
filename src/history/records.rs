//! Draw history loading. CSV layout: a header row, then `date,n1,n2,...` per draw with the
//! date as `YYYY-MM-DD` and the numbers in the order they were drawn. Blank trailing cells
//! are allowed so games with a varying supplementary count share one file.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

pub const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    pub date: NaiveDate,
    pub numbers: Vec<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to read history file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed history csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid draw date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: invalid ball number '{value}'")]
    InvalidNumber { line: u64, value: String },

    #[error("line {line}: draw has no numbers")]
    EmptyDraw { line: u64 },
}

pub fn load_history_csv(path: impl AsRef<Path>) -> Result<Vec<DrawRecord>, HistoryError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| HistoryError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let draws = parse_history_csv(&raw)?;
    tracing::debug!(path = %path.display(), draws = draws.len(), "history loaded");
    Ok(draws)
}

pub fn parse_history_csv(csv_content: &str) -> Result<Vec<DrawRecord>, HistoryError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let mut draws = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        draws.push(DrawRecord::from_record(&record, line)?);
    }
    Ok(draws)
}

impl DrawRecord {
    fn from_record(record: &csv::StringRecord, line: u64) -> Result<Self, HistoryError> {
        let raw_date = record.get(0).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date, HISTORY_DATE_FORMAT).map_err(|_| {
            HistoryError::InvalidDate {
                line,
                value: raw_date.to_string(),
            }
        })?;

        let numbers = record
            .iter()
            .skip(1)
            .filter(|cell| !cell.is_empty())
            .map(|cell| {
                cell.parse::<u32>().map_err(|_| HistoryError::InvalidNumber {
                    line,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if numbers.is_empty() {
            return Err(HistoryError::EmptyDraw { line });
        }
        Ok(Self { date, numbers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_with_ragged_tails() {
        let csv = "date,n1,n2,n3,n4\n2025-01-07, 4, 17, 9, 30\n2025-01-14,5,6,7,\n";
        let draws = parse_history_csv(csv).unwrap();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].numbers, vec![4, 17, 9, 30]);
        assert_eq!(draws[1].numbers, vec![5, 6, 7]);
        assert_eq!(
            draws[1].date,
            NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()
        );
    }

    #[test]
    fn reports_line_of_bad_cells() {
        let err = parse_history_csv("date,n1\n2025-01-07,4\n2025-01-14,x\n").unwrap_err();
        assert!(matches!(err, HistoryError::InvalidNumber { line: 3, ref value } if value == "x"));

        let err = parse_history_csv("date,n1\n14/01/2025,4\n").unwrap_err();
        assert!(matches!(err, HistoryError::InvalidDate { line: 2, .. }));

        let err = parse_history_csv("date,n1\n2025-01-14,\n").unwrap_err();
        assert!(matches!(err, HistoryError::EmptyDraw { line: 2 }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_history_csv("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, HistoryError::Read { .. }));
    }
}
