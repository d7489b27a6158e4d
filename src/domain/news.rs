//! Synthetic economic-calendar events and the next-24-hours filter.
//!
//! Events are generated relative to an injected `now` so that the window
//! boundaries are deterministic.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

pub const NEWS_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactLevel::Low => f.write_str("Low"),
            ImpactLevel::Medium => f.write_str("Medium"),
            ImpactLevel::High => f.write_str("High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsEvent {
    pub scheduled_time: DateTime<Utc>,
    pub currency: String,
    pub impact: ImpactLevel,
    pub event_name: String,
    pub actual: Option<f64>,
    pub forecast: Option<f64>,
    pub previous: Option<f64>,
}

impl NewsEvent {
    fn sample(
        now: DateTime<Utc>,
        hours_ahead: i64,
        currency: &str,
        impact: ImpactLevel,
        event_name: &str,
        values: Option<(f64, f64, f64)>,
    ) -> Self {
        Self {
            scheduled_time: now + Duration::hours(hours_ahead),
            currency: currency.to_string(),
            impact,
            event_name: event_name.to_string(),
            actual: values.map(|v| v.0),
            forecast: values.map(|v| v.1),
            previous: values.map(|v| v.2),
        }
    }
}

/// The fixed set of sample events shown on the News view.
pub fn sample_news_events(now: DateTime<Utc>) -> Vec<NewsEvent> {
    vec![
        NewsEvent::sample(
            now,
            1,
            "USD",
            ImpactLevel::High,
            "Non-Farm Payrolls",
            Some((210_000.0, 180_000.0, 200_000.0)),
        ),
        NewsEvent::sample(
            now,
            3,
            "EUR",
            ImpactLevel::Medium,
            "ECB Interest Rate Decision",
            Some((0.75, 0.50, 0.50)),
        ),
        NewsEvent::sample(
            now,
            22,
            "JPY",
            ImpactLevel::Low,
            "Trade Balance",
            Some((1.2, 1.5, 1.3)),
        ),
        NewsEvent::sample(now, 26, "GBP", ImpactLevel::High, "BoE Inflation Report", None),
    ]
}

/// Events with `now <= scheduled_time <= now + 24h`, in input order.
pub fn filter_next_24h(events: &[NewsEvent], now: DateTime<Utc>) -> Vec<NewsEvent> {
    let cutoff = now + Duration::hours(NEWS_WINDOW_HOURS);
    events
        .iter()
        .filter(|e| now <= e.scheduled_time && e.scheduled_time <= cutoff)
        .cloned()
        .collect()
}
