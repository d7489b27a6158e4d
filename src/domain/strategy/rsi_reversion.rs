//! RSI(14) oversold/overbought reversion.
//!
//! RSI < 30 → Long, score = 30 − RSI.
//! RSI > 70 → Short, score = RSI − 70.
//! No evaluation in between, during warmup, or when the average loss is 0.

use crate::domain::indicator::calculate_rsi;
use crate::domain::indicator::rsi::DEFAULT_PERIOD;
use crate::domain::ohlcv::PriceSeries;
use crate::domain::signal::{Direction, Evaluation};

pub const PERIOD: usize = DEFAULT_PERIOD;
pub const OVERSOLD: f64 = 30.0;
pub const OVERBOUGHT: f64 = 70.0;

pub fn evaluate(series: &PriceSeries) -> Option<Evaluation> {
    let rsi = calculate_rsi(&series.bars, PERIOD)
        .last_valid()?
        .value
        .as_simple()?;

    let (direction, score) = if rsi < OVERSOLD {
        (Direction::Long, OVERSOLD - rsi)
    } else if rsi > OVERBOUGHT {
        (Direction::Short, rsi - OVERBOUGHT)
    } else {
        return None;
    };

    Some(Evaluation {
        direction,
        entry_price: series.last_close()?,
        score,
    })
}
