#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use fxdash::domain::catalog::CurrencyPair;
use fxdash::domain::error::FxDashError;
pub use fxdash::domain::ohlcv::PriceBar;
use fxdash::ports::price_port::PricePort;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub struct MockPricePort {
    pub data: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl MockPricePort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_closes(mut self, code: &str, closes: &[f64]) -> Self {
        self.data
            .insert(code.to_string(), bars_ending(date(2024, 3, 8), closes));
        self
    }

    pub fn with_error(mut self, code: &str, reason: &str) -> Self {
        self.errors.insert(code.to_string(), reason.to_string());
        self
    }
}

impl PricePort for MockPricePort {
    fn fetch_daily(
        &self,
        pair: &CurrencyPair,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, FxDashError> {
        self.calls.borrow_mut().push(pair.code().to_string());
        if let Some(reason) = self.errors.get(pair.code()) {
            return Err(FxDashError::Provider {
                pair: pair.code().to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(pair.code()).cloned().unwrap_or_default())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Daily bars whose last date is `last`, one per close.
pub fn bars_ending(last: NaiveDate, closes: &[f64]) -> Vec<PriceBar> {
    let n = closes.len() as i64;
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: last - Duration::days(n - 1 - i as i64),
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
        })
        .collect()
}

/// 34 flat closes at `base`, then one close moved by `pct`.
pub fn last_move(base: f64, pct: f64) -> Vec<f64> {
    let mut closes = vec![base; 34];
    closes.push(base * (1.0 + pct));
    closes
}

/// 34 closes falling by 1.0 from 100, then a spike to 300.
pub fn downtrend_then_spike() -> Vec<f64> {
    let mut closes: Vec<f64> = (0..34).map(|i| 100.0 - i as f64).collect();
    closes.push(300.0);
    closes
}

/// 25 flat closes then 14 moves: 12 drops of 1.0 and 2 rises of 0.5.
/// RSI(14) ends at 100/13, well inside oversold.
pub fn oversold() -> Vec<f64> {
    let mut changes = vec![-1.0; 12];
    changes.insert(4, 0.5);
    changes.insert(10, 0.5);
    let mut closes = vec![100.0; 25];
    let mut last = 100.0;
    for c in changes {
        last += c;
        closes.push(last);
    }
    closes
}

/// Writes `{code}.csv` into `dir` with bars ending on `last`.
pub fn write_pair_csv(dir: &Path, code: &str, last: NaiveDate, closes: &[f64]) {
    let mut content = String::from("date,open,high,low,close,volume\n");
    for bar in bars_ending(last, closes) {
        let _ = writeln!(
            content,
            "{},{},{},{},{},{}",
            bar.date.format("%Y-%m-%d"),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        );
    }
    fs::write(dir.join(format!("{}.csv", code)), content).unwrap();
}
