//! Daily price bars and the per-pair series evaluated by strategies.

use chrono::NaiveDate;

use crate::domain::catalog::CurrencyPair;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// Chronological daily bars for one pair over the lookback window.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub pair: CurrencyPair,
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Builds a series, sorting bars by date.
    pub fn new(pair: CurrencyPair, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self { pair, bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }
}
