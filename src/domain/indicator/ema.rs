//! Exponential Moving Average indicator.
//!
//! α = 2/(span+1), w = 1 − α. The average is taken over the full series so
//! far with bias-adjusted weights:
//!
//!   EMA[t] = Σ w^i · C[t−i] / Σ w^i,  i = 0..=t
//!
//! computed recursively as num[t] = C[t] + w·num[t−1], den[t] = 1 + w·den[t−1].
//! There is no warmup: every bar has a defined value.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::ohlcv::PriceBar;

/// Adjusted exponentially weighted mean of `values` for the given span.
///
/// Returns an empty vector for `span == 0`.
pub fn ewm_mean(values: &[f64], span: usize) -> Vec<f64> {
    if span == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;
    let mut num = 0.0;
    let mut den = 0.0;

    values
        .iter()
        .map(|&v| {
            num = v + decay * num;
            den = 1.0 + decay * den;
            num / den
        })
        .collect()
}

pub fn calculate_ema(bars: &[PriceBar], span: usize) -> IndicatorSeries {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let values = ewm_mean(&closes, span)
        .into_iter()
        .zip(bars)
        .map(|(ema, bar)| IndicatorPoint {
            date: bar.date,
            valid: true,
            value: IndicatorValue::Simple(ema),
        })
        .collect();

    IndicatorSeries {
        indicator_type: IndicatorType::Ema(span),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::test_support::make_bars;
    use approx::assert_relative_eq;

    #[test]
    fn ema_first_value_is_first_close() {
        let ema = ewm_mean(&[10.0, 20.0, 30.0], 12);
        assert_relative_eq!(ema[0], 10.0);
    }

    #[test]
    fn ema_adjusted_weights() {
        // span 3 → α = 0.5, w = 0.5
        let ema = ewm_mean(&[10.0, 20.0, 30.0], 3);
        assert_relative_eq!(ema[1], (20.0 + 0.5 * 10.0) / 1.5, epsilon = 1e-12);
        assert_relative_eq!(
            ema[2],
            (30.0 + 0.5 * 20.0 + 0.25 * 10.0) / 1.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn ema_span_1_tracks_input() {
        let ema = ewm_mean(&[10.0, 20.0, 30.0], 1);
        assert_eq!(ema, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn ema_equal_prices() {
        let ema = ewm_mean(&[1.25; 30], 26);
        for v in ema {
            assert_relative_eq!(v, 1.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn ema_short_span_reacts_faster() {
        let mut prices = vec![1.0; 20];
        prices.push(2.0);
        let short = ewm_mean(&prices, 12);
        let long = ewm_mean(&prices, 26);
        assert!(short[20] > long[20]);
    }

    #[test]
    fn ema_span_0_is_empty() {
        assert!(ewm_mean(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn calculate_ema_is_aligned_with_bars() {
        let bars = make_bars(&[1.0, 2.0, 3.0, 4.0]);
        let series = calculate_ema(&bars, 3);

        assert_eq!(series.indicator_type, IndicatorType::Ema(3));
        assert_eq!(series.values.len(), 4);
        assert!(series.values.iter().all(|p| p.valid));
        assert_eq!(series.values[3].date, bars[3].date);
    }

    #[test]
    fn calculate_ema_empty_bars() {
        let series = calculate_ema(&[], 12);
        assert!(series.values.is_empty());
    }
}
