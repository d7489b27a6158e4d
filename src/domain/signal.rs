//! Trade direction, raw strategy evaluations, and priced signals.

use std::fmt;

use crate::domain::catalog::CurrencyPair;
use crate::domain::trade_levels::TradeLevels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => f.write_str("Long"),
            Direction::Short => f.write_str("Short"),
        }
    }
}

/// Output of a strategy evaluator for one pair.
///
/// `score` is strategy-specific: its magnitude ranks signals within a single
/// strategy and is meaningless across strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub direction: Direction,
    pub entry_price: f64,
    pub score: f64,
}

/// A ranked-table row: an evaluation priced with stop-loss and take-profit.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub pair: CurrencyPair,
    pub direction: Direction,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk: f64,
    pub score: f64,
}

impl Signal {
    pub fn new(pair: CurrencyPair, evaluation: Evaluation, levels: TradeLevels) -> Self {
        Self {
            pair,
            direction: evaluation.direction,
            entry_price: evaluation.entry_price,
            stop_loss: levels.stop_loss,
            take_profit: levels.take_profit,
            risk: levels.risk,
            score: evaluation.score,
        }
    }
}
