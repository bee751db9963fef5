//! CSV price loading
//!
//! Reads one numeric column of a comma-delimited file with a header row,
//! e.g. the `Close` column of a daily OHLCV export.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use super::PriceSeries;
use crate::error::{MarkovError, MarkovResult};

/// Zero-based index of `Close` in a Date,Open,High,Low,Close,... export
pub const DEFAULT_CLOSE_COLUMN: usize = 4;

/// Load closing prices from a CSV file
pub fn load_closing_prices<P: AsRef<Path>>(path: P, column: usize) -> MarkovResult<PriceSeries> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let series = read_closing_prices(file, column)?;

    debug!(path = %path.display(), prices = series.len(), "loaded price history");
    Ok(series)
}

/// Read closing prices from any CSV source
///
/// Rows keep file order. A malformed row, or a missing or non-numeric cell,
/// fails the whole load with the 1-based data row number.
pub fn read_closing_prices<R: Read>(reader: R, column: usize) -> MarkovResult<PriceSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut prices = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| MarkovError::data(format!("row {}: malformed record: {e}", row + 1)))?;
        let cell = record.get(column).ok_or_else(|| {
            MarkovError::data(format!(
                "row {}: no column {column} ({} columns present)",
                row + 1,
                record.len()
            ))
        })?;

        let price: f64 = cell.parse().map_err(|_| {
            MarkovError::data(format!("row {}: `{cell}` is not a number", row + 1))
        })?;
        prices.push(price);
    }

    PriceSeries::new(prices)
}
