//! RSI (Relative Strength Index) with simple rolling averages.
//!
//! Gains and losses are the positive and negative parts of close-to-close
//! changes (losses stored as magnitudes). At bar i the averages are the plain
//! means of the `n` changes ending at i:
//!
//!   RSI = 100 − 100 / (1 + avg_gain / avg_loss)
//!
//! A point is invalid during warmup (first n bars) and wherever avg_loss is
//! exactly 0, where the ratio is undefined.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::ohlcv::PriceBar;

pub const DEFAULT_PERIOD: usize = 14;

pub fn calculate_rsi(bars: &[PriceBar], period: usize) -> IndicatorSeries {
    let invalid = |bar: &PriceBar| IndicatorPoint {
        date: bar.date,
        valid: false,
        value: IndicatorValue::Simple(0.0),
    };

    if period == 0 || bars.len() < 2 {
        return IndicatorSeries {
            indicator_type: IndicatorType::Rsi(period),
            values: bars.iter().map(invalid).collect(),
        };
    }

    let mut gains = Vec::with_capacity(bars.len() - 1);
    let mut losses = Vec::with_capacity(bars.len() - 1);
    for pair in bars.windows(2) {
        let change = pair[1].close - pair[0].close;
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut values = Vec::with_capacity(bars.len());
    values.push(invalid(&bars[0]));

    for (i, bar) in bars.iter().enumerate().skip(1) {
        if i < period {
            values.push(invalid(bar));
            continue;
        }

        // changes[i - period .. i] are the n changes ending at bar i
        let window = i - period..i;
        let avg_gain = gains[window.clone()].iter().sum::<f64>() / period as f64;
        let avg_loss = losses[window].iter().sum::<f64>() / period as f64;

        if avg_loss == 0.0 {
            values.push(invalid(bar));
            continue;
        }

        let rsi = 100.0 - 100.0 / (1.0 + avg_gain / avg_loss);
        values.push(IndicatorPoint {
            date: bar.date,
            valid: true,
            value: IndicatorValue::Simple(rsi),
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Rsi(period),
        values,
    }
}
