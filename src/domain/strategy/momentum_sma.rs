//! Momentum + SMA trend filter.
//!
//! momentum = (C[t] − C[t−1]) / C[t−1]
//! trend    = +1 if SMA(3) > SMA(10) else −1
//! score    = momentum · trend, Long if score > 0 else Short
//!
//! Unlike the crossover strategies this one always produces an evaluation for
//! a usable series; a zero score is dropped later by the ranker.

use crate::domain::indicator::calculate_sma;
use crate::domain::ohlcv::PriceSeries;
use crate::domain::signal::{Direction, Evaluation};

pub const SHORT_WINDOW: usize = 3;
pub const LONG_WINDOW: usize = 10;

pub fn evaluate(series: &PriceSeries) -> Option<Evaluation> {
    let bars = &series.bars;
    let [.., prev, last] = bars.as_slice() else {
        return None;
    };
    if prev.close == 0.0 {
        return None;
    }

    let momentum = (last.close - prev.close) / prev.close;
    let sma_short = calculate_sma(bars, SHORT_WINDOW).last_valid()?.value.as_simple()?;
    let sma_long = calculate_sma(bars, LONG_WINDOW).last_valid()?.value.as_simple()?;

    let trend = if sma_short > sma_long { 1.0 } else { -1.0 };
    let score = momentum * trend;
    let direction = if score > 0.0 {
        Direction::Long
    } else {
        Direction::Short
    };

    Some(Evaluation {
        direction,
        entry_price: last.close,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy::test_support::series;
    use approx::assert_relative_eq;

    // SMA(3) = 1.0998, SMA(10) = 1.0950
    const RISING: [f64; 10] = [
        1.0920, 1.0925, 1.0930, 1.0935, 1.0930, 1.0931, 1.0935, 1.0999, 1.0995, 1.1000,
    ];

    #[test]
    fn uptrend_with_positive_momentum_is_long() {
        let eval = evaluate(&series(&RISING)).unwrap();

        assert_eq!(eval.direction, Direction::Long);
        assert_eq!(eval.entry_price, 1.1000);
        assert_relative_eq!(eval.score, (1.1000 - 1.0995) / 1.0995, epsilon = 1e-12);
        assert_relative_eq!(eval.score, 0.000455, epsilon = 1e-6);
    }

    #[test]
    fn uptrend_with_negative_momentum_is_short() {
        let mut closes = RISING.to_vec();
        closes.push(1.0990);
        let eval = evaluate(&series(&closes)).unwrap();

        assert_eq!(eval.direction, Direction::Short);
        assert!(eval.score < 0.0);
        assert_eq!(eval.entry_price, 1.0990);
    }

    #[test]
    fn downtrend_with_negative_momentum_is_long() {
        let closes: Vec<f64> = (0..12).map(|i| 1.2 - i as f64 * 0.001).collect();
        let eval = evaluate(&series(&closes)).unwrap();

        // falling momentum times a −1 trend is a positive score
        assert_eq!(eval.direction, Direction::Long);
        assert!(eval.score > 0.0);
    }

    #[test]
    fn flat_close_still_evaluates_with_zero_score() {
        let eval = evaluate(&series(&[1.25; 35])).unwrap();

        assert_eq!(eval.score, 0.0);
        assert_eq!(eval.direction, Direction::Short);
    }

    #[test]
    fn too_short_series_has_no_evaluation() {
        assert!(evaluate(&series(&[1.1])).is_none());
        assert!(evaluate(&series(&RISING[..9])).is_none());
    }

    #[test]
    fn zero_previous_close_has_no_evaluation() {
        let mut closes = RISING.to_vec();
        closes.push(0.0);
        closes.push(1.0);
        assert!(evaluate(&series(&closes)).is_none());
    }
}
