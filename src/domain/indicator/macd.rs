//! MACD (Moving Average Convergence Divergence) indicator.
//!
//! MACD Line = EMA(fast) − EMA(slow)
//! Signal Line = EMA(signal) of MACD Line
//! Histogram = MACD Line − Signal Line
//!
//! All three EMAs use the adjusted form from [`ewm_mean`], so every bar is
//! valid. Default parameters: fast=12, slow=26, signal=9.

use crate::domain::indicator::{
    ewm_mean, IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue,
};
use crate::domain::ohlcv::PriceBar;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

pub fn calculate_macd(
    bars: &[PriceBar],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> IndicatorSeries {
    let indicator_type = IndicatorType::Macd {
        fast,
        slow,
        signal: signal_period,
    };

    if bars.is_empty() || fast == 0 || slow == 0 || signal_period == 0 {
        return IndicatorSeries {
            indicator_type,
            values: Vec::new(),
        };
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let ema_fast = ewm_mean(&closes, fast);
    let ema_slow = ewm_mean(&closes, slow);

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ewm_mean(&macd_line, signal_period);

    let values = bars
        .iter()
        .zip(macd_line.iter().zip(&signal_line))
        .map(|(bar, (&line, &signal))| IndicatorPoint {
            date: bar.date,
            valid: true,
            value: IndicatorValue::Macd { line, signal },
        })
        .collect();

    IndicatorSeries {
        indicator_type,
        values,
    }
}

pub fn calculate_macd_default(bars: &[PriceBar]) -> IndicatorSeries {
    calculate_macd(bars, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::test_support::make_bars;
    use approx::assert_relative_eq;

    fn trending(n: usize) -> Vec<PriceBar> {
        let closes: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
        make_bars(&closes)
    }

    #[test]
    fn macd_every_point_is_a_valid_pair() {
        let series = calculate_macd_default(&trending(40));

        assert_eq!(series.values.len(), 40);
        for point in &series.values {
            assert!(point.valid);
            assert!(matches!(point.value, IndicatorValue::Macd { .. }));
        }
    }

    #[test]
    fn macd_line_is_ema_fast_minus_ema_slow() {
        let bars = trending(10);
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let fast = ewm_mean(&closes, 3);
        let slow = ewm_mean(&closes, 5);
        let series = calculate_macd(&bars, 3, 5, 2);

        for (i, point) in series.values.iter().enumerate() {
            if let IndicatorValue::Macd { line, .. } = point.value {
                assert_relative_eq!(line, fast[i] - slow[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn macd_positive_in_uptrend() {
        let series = calculate_macd_default(&trending(40));
        if let IndicatorValue::Macd { line, signal, .. } = series.values[39].value {
            assert!(line > 0.0);
            // signal lags a rising MACD line
            assert!(line > signal);
        }
    }

    #[test]
    fn macd_flat_series_is_zero() {
        let series = calculate_macd_default(&make_bars(&[1.1; 35]));
        for point in &series.values {
            if let IndicatorValue::Macd { line, signal, .. } = point.value {
                assert_relative_eq!(line, 0.0, epsilon = 1e-12);
                assert_relative_eq!(signal, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn macd_indicator_type() {
        let series = calculate_macd(&trending(3), 5, 10, 3);
        assert_eq!(
            series.indicator_type,
            IndicatorType::Macd {
                fast: 5,
                slow: 10,
                signal: 3
            }
        );
    }

    #[test]
    fn macd_empty_and_zero_periods() {
        assert!(calculate_macd_default(&[]).values.is_empty());

        let bars = trending(3);
        assert!(calculate_macd(&bars, 0, 26, 9).values.is_empty());
        assert!(calculate_macd(&bars, 12, 0, 9).values.is_empty());
        assert!(calculate_macd(&bars, 12, 26, 0).values.is_empty());
    }
}
