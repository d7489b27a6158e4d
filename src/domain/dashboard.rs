//! Dashboard assembly: history → evaluation → trade levels → ranking.
//!
//! Everything here is render-scoped. A [`Dashboard`] is built from scratch on
//! each call to [`build_dashboard`] and nothing is cached between renders.

use chrono::{DateTime, Utc};

use crate::domain::catalog::{default_pairs, CurrencyPair};
use crate::domain::history::{
    collect_history, HistoryWindow, SkippedPair, DEFAULT_LOOKBACK_DAYS, MIN_BARS,
};
use crate::domain::links::LinkCatalog;
use crate::domain::news::{filter_next_24h, sample_news_events, NewsEvent};
use crate::domain::ohlcv::PriceSeries;
use crate::domain::ranking::{rank, DEFAULT_TOP_N};
use crate::domain::signal::Signal;
use crate::domain::strategy::StrategyKind;
use crate::domain::trade_levels::{compute_levels, round_pips, DEFAULT_STOP_LOSS_PCT};
use crate::ports::price_port::PricePort;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub pairs: Vec<CurrencyPair>,
    pub lookback_days: i64,
    pub min_bars: usize,
    pub top_n: usize,
    pub stop_loss_pct: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            min_bars: MIN_BARS,
            top_n: DEFAULT_TOP_N,
            stop_loss_pct: DEFAULT_STOP_LOSS_PCT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyReport {
    pub strategy: StrategyKind,
    /// Top signals by |score|; empty means "no signals for this strategy".
    pub signals: Vec<Signal>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    /// Per-strategy cap applied by the ranker.
    pub top_n: usize,
    pub strategies: Vec<StrategyReport>,
    pub news: Vec<NewsEvent>,
    pub links: LinkCatalog,
    pub skipped: Vec<SkippedPair>,
}

impl Dashboard {
    /// A dashboard with the static views filled in and no strategy results.
    pub fn without_prices(config: &DashboardConfig, now: DateTime<Utc>) -> Self {
        Self {
            generated_at: now,
            top_n: config.top_n,
            strategies: Vec::new(),
            news: filter_next_24h(&sample_news_events(now), now),
            links: LinkCatalog::default(),
            skipped: Vec::new(),
        }
    }
}

/// Evaluates one strategy over every usable series and ranks the results.
///
/// `series` must be in pair-catalog order so ranking ties resolve by catalog
/// position.
pub fn evaluate_strategy(
    strategy: StrategyKind,
    series: &[PriceSeries],
    config: &DashboardConfig,
) -> StrategyReport {
    tracing::debug!(
        strategy = strategy.name(),
        pairs = series.len(),
        "evaluating strategy"
    );

    let results = series.iter().map(|s| {
        strategy.evaluate(s).map(|mut evaluation| {
            let levels = compute_levels(
                evaluation.entry_price,
                evaluation.direction,
                config.stop_loss_pct,
            );
            evaluation.entry_price = round_pips(evaluation.entry_price);
            Signal::new(s.pair.clone(), evaluation, levels)
        })
    });

    let signals = rank(results, config.top_n);
    tracing::info!(
        strategy = strategy.name(),
        signals = signals.len(),
        "strategy evaluated"
    );

    StrategyReport { strategy, signals }
}

pub fn build_dashboard(
    port: &dyn PricePort,
    config: &DashboardConfig,
    strategies: &[StrategyKind],
    now: DateTime<Utc>,
) -> Dashboard {
    let mut dashboard = Dashboard::without_prices(config, now);
    if strategies.is_empty() {
        return dashboard;
    }

    let window = HistoryWindow::trailing(now, config.lookback_days);
    tracing::info!(
        pairs = config.pairs.len(),
        start = %window.start,
        end = %window.end,
        "loading price history"
    );
    let history = collect_history(port, &config.pairs, window, config.min_bars);

    dashboard.strategies = strategies
        .iter()
        .map(|&strategy| evaluate_strategy(strategy, &history.series, config))
        .collect();
    dashboard.skipped = history.skipped;
    dashboard
}
