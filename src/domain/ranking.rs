//! Top-N selection of signals for one strategy.

use crate::domain::signal::Signal;
use crate::domain::trade_levels::round_pips;

pub const DEFAULT_TOP_N: usize = 5;

/// Selects the strongest signals from per-pair results.
///
/// `results` must be in pair-catalog order: entries without a signal or with
/// a zero raw score are dropped, the rest are stable-sorted by the magnitude
/// of the score rounded to 5 decimals, descending, and truncated to `top_n`.
/// Scores that display the same keep catalog order. An empty return is the
/// valid "no signals" state.
pub fn rank<I>(results: I, top_n: usize) -> Vec<Signal>
where
    I: IntoIterator<Item = Option<Signal>>,
{
    let mut qualifying: Vec<Signal> = results
        .into_iter()
        .flatten()
        .filter(|s| s.score != 0.0)
        .collect();

    qualifying.sort_by(|a, b| display_magnitude(b).total_cmp(&display_magnitude(a)));
    qualifying.truncate(top_n);
    qualifying
}

fn display_magnitude(signal: &Signal) -> f64 {
    round_pips(signal.score).abs()
}
