//! MACD(12,26,9) signal-line crossover.
//!
//! Long when the MACD line crosses above its signal line on the last bar,
//! score = MACD − signal. Short on the opposite cross, score = signal − MACD.

use crate::domain::indicator::macd::calculate_macd_default;
use crate::domain::indicator::IndicatorValue;
use crate::domain::ohlcv::PriceSeries;
use crate::domain::signal::{Direction, Evaluation};
use crate::domain::strategy::crossover;

fn line_and_signal(value: &IndicatorValue) -> Option<(f64, f64)> {
    match *value {
        IndicatorValue::Macd { line, signal, .. } => Some((line, signal)),
        IndicatorValue::Simple(_) => None,
    }
}

pub fn evaluate(series: &PriceSeries) -> Option<Evaluation> {
    let macd = calculate_macd_default(&series.bars);
    let (prev, curr) = macd.last_two_valid()?;
    let (prev_line, prev_signal) = line_and_signal(&prev.value)?;
    let (line, signal) = line_and_signal(&curr.value)?;

    let direction = crossover(prev_line, prev_signal, line, signal)?;
    let score = match direction {
        Direction::Long => line - signal,
        Direction::Short => signal - line,
    };

    Some(Evaluation {
        direction,
        entry_price: series.last_close()?,
        score,
    })
}
