//! EMA(12) / EMA(26) crossover.
//!
//! Long when EMA(12) crosses above EMA(26) on the last bar, score = short − long.
//! Short on the opposite cross, score = long − short.

use crate::domain::indicator::calculate_ema;
use crate::domain::ohlcv::PriceSeries;
use crate::domain::signal::{Direction, Evaluation};
use crate::domain::strategy::crossover;

pub const SHORT_SPAN: usize = 12;
pub const LONG_SPAN: usize = 26;

pub fn evaluate(series: &PriceSeries) -> Option<Evaluation> {
    let short = calculate_ema(&series.bars, SHORT_SPAN);
    let long = calculate_ema(&series.bars, LONG_SPAN);

    let (short_prev, short_curr) = short.last_two_valid()?;
    let (long_prev, long_curr) = long.last_two_valid()?;
    let (short_prev, short_curr) = (short_prev.value.as_simple()?, short_curr.value.as_simple()?);
    let (long_prev, long_curr) = (long_prev.value.as_simple()?, long_curr.value.as_simple()?);

    let direction = crossover(short_prev, long_prev, short_curr, long_curr)?;
    let score = match direction {
        Direction::Long => short_curr - long_curr,
        Direction::Short => long_curr - short_curr,
    };

    Some(Evaluation {
        direction,
        entry_price: series.last_close()?,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::ewm_mean;
    use crate::domain::strategy::test_support::{downtrend, series, uptrend};

    #[test]
    fn spike_after_downtrend_crosses_long() {
        let mut closes = downtrend(34);
        closes.push(300.0);
        let eval = evaluate(&series(&closes)).unwrap();

        assert_eq!(eval.direction, Direction::Long);
        assert_eq!(eval.entry_price, 300.0);
        assert!(eval.score > 0.0);
    }

    #[test]
    fn crash_after_uptrend_crosses_short() {
        let mut closes = uptrend(34);
        closes.push(1.0);
        let eval = evaluate(&series(&closes)).unwrap();

        assert_eq!(eval.direction, Direction::Short);
        assert_eq!(eval.entry_price, 1.0);
        assert!(eval.score > 0.0);
    }

    #[test]
    fn steady_trend_has_no_cross() {
        assert!(evaluate(&series(&downtrend(40))).is_none());
        assert!(evaluate(&series(&uptrend(40))).is_none());
    }

    #[test]
    fn flat_series_has_no_cross() {
        assert!(evaluate(&series(&[1.0; 35])).is_none());
    }

    #[test]
    fn single_bar_has_no_prior_comparison() {
        assert!(evaluate(&series(&[1.1])).is_none());
    }

    #[test]
    fn fires_exactly_on_flip_bars() {
        let mut closes = downtrend(30);
        closes.extend([200.0, 210.0, 215.0, 50.0, 40.0, 35.0, 34.0, 30.0, 30.0]);

        let short = ewm_mean(&closes, SHORT_SPAN);
        let long = ewm_mean(&closes, LONG_SPAN);

        for end in 1..=closes.len() {
            let eval = evaluate(&series(&closes[..end]));
            if end < 2 {
                assert!(eval.is_none());
                continue;
            }
            let (i, j) = (end - 2, end - 1);
            let flipped_up = short[i] < long[i] && short[j] > long[j];
            let flipped_down = short[i] > long[i] && short[j] < long[j];

            match eval {
                Some(e) if flipped_up => assert_eq!(e.direction, Direction::Long),
                Some(e) if flipped_down => assert_eq!(e.direction, Direction::Short),
                Some(e) => panic!("unexpected {:?} at bar {}", e.direction, j),
                None => assert!(!flipped_up && !flipped_down, "missed cross at bar {}", j),
            }
        }
    }

    #[test]
    fn flip_bars_include_both_directions() {
        let mut closes = downtrend(30);
        closes.extend([200.0, 210.0, 215.0, 50.0, 40.0, 35.0, 34.0, 30.0, 30.0]);

        let directions: Vec<Direction> = (2..=closes.len())
            .filter_map(|end| evaluate(&series(&closes[..end])))
            .map(|e| e.direction)
            .collect();

        assert!(directions.contains(&Direction::Long));
        assert!(directions.contains(&Direction::Short));
    }
}
