//! Stop-loss / take-profit levels for a proposed entry.
//!
//! Fixed-percentage model with a 1:3 risk-reward ratio:
//! - Long:  SL = entry·(1 − pct), TP = entry·(1 + 3·pct)
//! - Short: SL = entry·(1 + pct), TP = entry·(1 − 3·pct)
//! - risk = |entry − SL|
//!
//! All outputs are rounded to pip precision (5 decimal places).

use crate::domain::signal::Direction;

pub const DEFAULT_STOP_LOSS_PCT: f64 = 0.01;
pub const REWARD_RISK_RATIO: f64 = 3.0;
pub const PIP_DECIMALS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeLevels {
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk: f64,
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round_pips(value: f64) -> f64 {
    round_to(value, PIP_DECIMALS)
}

pub fn compute_levels(entry_price: f64, direction: Direction, stop_loss_pct: f64) -> TradeLevels {
    let reward_pct = stop_loss_pct * REWARD_RISK_RATIO;
    let (stop_loss, take_profit) = match direction {
        Direction::Long => (
            entry_price * (1.0 - stop_loss_pct),
            entry_price * (1.0 + reward_pct),
        ),
        Direction::Short => (
            entry_price * (1.0 + stop_loss_pct),
            entry_price * (1.0 - reward_pct),
        ),
    };
    let risk = (entry_price - stop_loss).abs();

    TradeLevels {
        stop_loss: round_pips(stop_loss),
        take_profit: round_pips(take_profit),
        risk: round_pips(risk),
    }
}
