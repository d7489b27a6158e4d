//! Signal-generating strategies.
//!
//! Each strategy is a pure function from a [`PriceSeries`] to an optional
//! [`Evaluation`]. [`StrategyKind`] is the closed set the dashboard iterates
//! over, in display order.

pub mod ema_crossover;
pub mod macd_crossover;
pub mod momentum_sma;
pub mod rsi_reversion;

use std::fmt;
use std::str::FromStr;

use crate::domain::error::CatalogError;
use crate::domain::ohlcv::PriceSeries;
use crate::domain::signal::{Direction, Evaluation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    MomentumSma,
    EmaCrossover,
    Rsi,
    Macd,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::MomentumSma,
        StrategyKind::EmaCrossover,
        StrategyKind::Rsi,
        StrategyKind::Macd,
    ];

    /// Heading shown above the strategy's table.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::MomentumSma => "Momentum + SMA Crossover",
            StrategyKind::EmaCrossover => "EMA Crossover",
            StrategyKind::Rsi => "RSI Oversold/Overbought",
            StrategyKind::Macd => "MACD Crossover",
        }
    }

    /// Identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            StrategyKind::MomentumSma => "momentum-sma",
            StrategyKind::EmaCrossover => "ema-crossover",
            StrategyKind::Rsi => "rsi",
            StrategyKind::Macd => "macd",
        }
    }

    pub fn evaluate(&self, series: &PriceSeries) -> Option<Evaluation> {
        match self {
            StrategyKind::MomentumSma => momentum_sma::evaluate(series),
            StrategyKind::EmaCrossover => ema_crossover::evaluate(series),
            StrategyKind::Rsi => rsi_reversion::evaluate(series),
            StrategyKind::Macd => macd_crossover::evaluate(series),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.slug() == wanted)
            .ok_or_else(|| CatalogError::UnknownStrategy(s.trim().to_string()))
    }
}

/// Direction of a crossover between a fast and a slow line at the last bar.
///
/// Fires only when the strict ordering inverts between the previous bar and
/// the current one; touching or staying on the same side yields `None`.
pub(crate) fn crossover(prev_fast: f64, prev_slow: f64, fast: f64, slow: f64) -> Option<Direction> {
    if prev_fast < prev_slow && fast > slow {
        Some(Direction::Long)
    } else if prev_fast > prev_slow && fast < slow {
        Some(Direction::Short)
    } else {
        None
    }
}
