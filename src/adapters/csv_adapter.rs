//! CSV file price adapter.
//!
//! One file per pair, named `{CODE}.csv` (e.g. `EURUSD.csv`), with the header
//! `date,open,high,low,close,volume`.

use crate::domain::catalog::CurrencyPair;
use crate::domain::error::FxDashError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::price_port::PricePort;
use chrono::NaiveDate;
use csv::StringRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::str::FromStr;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, pair: &CurrencyPair) -> PathBuf {
        self.base_path.join(format!("{}.csv", pair.code()))
    }
}

fn column<T: FromStr>(
    record: &StringRecord,
    index: usize,
    name: &str,
    pair: &CurrencyPair,
) -> Result<T, FxDashError>
where
    T::Err: std::fmt::Display,
{
    let raw = record.get(index).ok_or_else(|| FxDashError::Provider {
        pair: pair.code().to_string(),
        reason: format!("missing {} column", name),
    })?;
    raw.trim().parse().map_err(|e| FxDashError::Provider {
        pair: pair.code().to_string(),
        reason: format!("invalid {} value {:?}: {}", name, raw, e),
    })
}

impl PricePort for CsvAdapter {
    fn fetch_daily(
        &self,
        pair: &CurrencyPair,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, FxDashError> {
        let path = self.csv_path(pair);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no price file for pair");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(FxDashError::Provider {
                    pair: pair.code().to_string(),
                    reason: format!("failed to read {}: {}", path.display(), e),
                });
            }
        };

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| FxDashError::Provider {
                pair: pair.code().to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str: String = column(&record, 0, "date", pair)?;
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                FxDashError::Provider {
                    pair: pair.code().to_string(),
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            if date < start_date || date > end_date {
                continue;
            }

            bars.push(PriceBar {
                date,
                open: column(&record, 1, "open", pair)?,
                high: column(&record, 2, "high", pair)?,
                low: column(&record, 3, "low", pair)?,
                close: column(&record, 4, "close", pair)?,
                volume: column(&record, 5, "volume", pair)?,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}
