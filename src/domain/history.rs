//! Price history loading for the pair universe.
//!
//! Each pair is fetched once per render. Pairs that fail to fetch or come back
//! with too few bars are skipped and reported; they never abort the render.

use crate::domain::catalog::CurrencyPair;
use crate::domain::error::FxDashError;
use crate::domain::ohlcv::PriceSeries;
use crate::ports::price_port::PricePort;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::fmt;

pub const MIN_BARS: usize = 35;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 60;

/// Trailing calendar window ending on the render date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HistoryWindow {
    pub fn trailing(now: DateTime<Utc>, lookback_days: i64) -> Self {
        let end = now.date_naive();
        Self {
            start: end - Duration::days(lookback_days),
            end,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPair {
    pub pair: CurrencyPair,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    NoData,
    InsufficientBars { bars: usize },
    ProviderFailure { reason: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoData => f.write_str("no data"),
            SkipReason::InsufficientBars { bars } => write!(f, "only {} bars", bars),
            SkipReason::ProviderFailure { reason } => write!(f, "provider failure: {}", reason),
        }
    }
}

/// Fetches one pair and enforces the bar floor.
pub fn fetch_series(
    port: &dyn PricePort,
    pair: &CurrencyPair,
    window: HistoryWindow,
    min_bars: usize,
) -> Result<PriceSeries, FxDashError> {
    let bars = port.fetch_daily(pair, window.start, window.end)?;
    if bars.is_empty() || bars.len() < min_bars {
        return Err(FxDashError::InsufficientData {
            pair: pair.code().to_string(),
            bars: bars.len(),
            minimum: min_bars,
        });
    }
    Ok(PriceSeries::new(pair.clone(), bars))
}

#[derive(Debug, Clone, Default)]
pub struct HistoryFetch {
    /// Usable series, in the order the pairs were requested.
    pub series: Vec<PriceSeries>,
    pub skipped: Vec<SkippedPair>,
}

pub fn collect_history(
    port: &dyn PricePort,
    pairs: &[CurrencyPair],
    window: HistoryWindow,
    min_bars: usize,
) -> HistoryFetch {
    let mut fetch = HistoryFetch::default();

    for pair in pairs {
        match fetch_series(port, pair, window, min_bars) {
            Ok(series) => {
                tracing::debug!(pair = %pair, bars = series.len(), "history loaded");
                fetch.series.push(series);
            }
            Err(e) => {
                let reason = match e {
                    FxDashError::InsufficientData { bars: 0, .. } => SkipReason::NoData,
                    FxDashError::InsufficientData { bars, .. } => {
                        SkipReason::InsufficientBars { bars }
                    }
                    FxDashError::Provider { reason, .. } => {
                        SkipReason::ProviderFailure { reason }
                    }
                    other => SkipReason::ProviderFailure {
                        reason: other.to_string(),
                    },
                };
                tracing::warn!(pair = %pair, %reason, "skipping pair");
                fetch.skipped.push(SkippedPair {
                    pair: pair.clone(),
                    reason,
                });
            }
        }
    }

    if !fetch.skipped.is_empty() {
        tracing::info!(
            usable = fetch.series.len(),
            total = pairs.len(),
            "evaluating subset of pair catalog"
        );
    }

    fetch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::parse_pairs;
    use crate::domain::ohlcv::PriceBar;
    use chrono::TimeZone;
    use std::collections::HashMap;

    struct StubPort {
        bars: HashMap<String, usize>,
        failing: Vec<String>,
    }

    impl PricePort for StubPort {
        fn fetch_daily(
            &self,
            pair: &CurrencyPair,
            start_date: NaiveDate,
            _end_date: NaiveDate,
        ) -> Result<Vec<PriceBar>, FxDashError> {
            if self.failing.iter().any(|c| c == pair.code()) {
                return Err(FxDashError::Provider {
                    pair: pair.code().to_string(),
                    reason: "connection reset".into(),
                });
            }
            let n = self.bars.get(pair.code()).copied().unwrap_or(0);
            Ok((0..n)
                .map(|i| PriceBar {
                    date: start_date + Duration::days(i as i64),
                    open: 1.0,
                    high: 1.0,
                    low: 1.0,
                    close: 1.0,
                    volume: 0,
                })
                .collect())
        }
    }

    fn window() -> HistoryWindow {
        HistoryWindow::trailing(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(), 60)
    }

    #[test]
    fn trailing_window_spans_lookback_days() {
        let w = window();
        assert_eq!(w.end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(w.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn fetch_series_enforces_floor() {
        let port = StubPort {
            bars: HashMap::from([("EURUSD".to_string(), 34), ("GBPUSD".to_string(), 35)]),
            failing: vec![],
        };
        let pairs = parse_pairs("EURUSD,GBPUSD").unwrap();

        let err = fetch_series(&port, &pairs[0], window(), MIN_BARS).unwrap_err();
        assert!(matches!(
            err,
            FxDashError::InsufficientData {
                bars: 34,
                minimum: 35,
                ..
            }
        ));

        let series = fetch_series(&port, &pairs[1], window(), MIN_BARS).unwrap();
        assert_eq!(series.len(), 35);
        assert_eq!(series.pair, pairs[1]);
    }

    #[test]
    fn collect_history_skips_without_aborting() {
        let port = StubPort {
            bars: HashMap::from([
                ("EURUSD".to_string(), 40),
                ("USDJPY".to_string(), 10),
                ("AUDUSD".to_string(), 41),
            ]),
            failing: vec!["GBPUSD".to_string()],
        };
        let pairs = parse_pairs("EURUSD,GBPUSD,USDJPY,USDCAD,AUDUSD").unwrap();

        let fetch = collect_history(&port, &pairs, window(), MIN_BARS);

        let usable: Vec<&str> = fetch.series.iter().map(|s| s.pair.code()).collect();
        assert_eq!(usable, vec!["EURUSD", "AUDUSD"]);

        assert_eq!(fetch.skipped.len(), 3);
        assert_eq!(
            fetch.skipped[0].reason,
            SkipReason::ProviderFailure {
                reason: "connection reset".into()
            }
        );
        assert_eq!(
            fetch.skipped[1].reason,
            SkipReason::InsufficientBars { bars: 10 }
        );
        assert_eq!(fetch.skipped[2].reason, SkipReason::NoData);
        assert_eq!(fetch.skipped[2].pair.code(), "USDCAD");
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(SkipReason::NoData.to_string(), "no data");
        assert_eq!(
            SkipReason::InsufficientBars { bars: 12 }.to_string(),
            "only 12 bars"
        );
    }
}
