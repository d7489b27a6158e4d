//! Yahoo Finance chart API price adapter.
//!
//! Daily bars come from `GET {base_url}/v8/finance/chart/{symbol}` with
//! `period1`/`period2` as Unix seconds and `interval=1d`. Any transport,
//! HTTP status or payload problem is reported as [`FxDashError::Provider`]
//! for the pair so the render can skip it.

use crate::domain::catalog::CurrencyPair;
use crate::domain::error::FxDashError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::price_port::PricePort;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration as StdDuration;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; fxdash)";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<i64>>,
}

pub struct YahooAdapter {
    client: Client,
    base_url: String,
}

impl YahooAdapter {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, FxDashError> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FxDashError::Provider {
                pair: "*".to_string(),
                reason: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chart_url(&self, pair: &CurrencyPair, start_date: NaiveDate, end_date: NaiveDate) -> String {
        let period1 = start_date.and_time(NaiveTime::MIN).and_utc().timestamp();
        // period2 is exclusive; extend to the following midnight to keep end_date
        let period2 = (end_date + Duration::days(1))
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp();
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url,
            pair.symbol(),
            period1,
            period2
        )
    }
}

fn provider_error(pair: &CurrencyPair, reason: impl Into<String>) -> FxDashError {
    FxDashError::Provider {
        pair: pair.code().to_string(),
        reason: reason.into(),
    }
}

/// Converts a chart payload into daily bars within `[start_date, end_date]`.
///
/// Rows without a close are dropped. Missing open/high/low fall back to the
/// close and missing volume to zero. When a date appears twice (the live bar
/// for the current session), the later row wins.
fn parse_chart(
    pair: &CurrencyPair,
    body: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<PriceBar>, FxDashError> {
    let response: ChartResponse = serde_json::from_str(body)
        .map_err(|e| provider_error(pair, format!("malformed chart payload: {}", e)))?;

    if let Some(error) = response.chart.error {
        return Err(provider_error(
            pair,
            format!("{}: {}", error.code, error.description),
        ));
    }

    let Some(data) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };
    let timestamps = data.timestamp.unwrap_or_default();
    let quote = data.indicators.quote.into_iter().next().unwrap_or_default();

    let mut bars: Vec<PriceBar> = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        let Some(close) = quote.close.get(i).copied().flatten() else {
            continue;
        };
        let Some(date) = DateTime::from_timestamp(*ts, 0).map(|t| t.date_naive()) else {
            continue;
        };
        if date < start_date || date > end_date {
            continue;
        }

        let bar = PriceBar {
            date,
            open: quote.open.get(i).copied().flatten().unwrap_or(close),
            high: quote.high.get(i).copied().flatten().unwrap_or(close),
            low: quote.low.get(i).copied().flatten().unwrap_or(close),
            close,
            volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
        };

        bars.push(bar);
    }

    // newest row first within each date so dedup keeps it
    bars.reverse();
    bars.sort_by_key(|b| b.date);
    bars.dedup_by_key(|b| b.date);
    Ok(bars)
}

impl PricePort for YahooAdapter {
    fn fetch_daily(
        &self,
        pair: &CurrencyPair,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, FxDashError> {
        let url = self.chart_url(pair, start_date, end_date);
        tracing::debug!(pair = %pair, %url, "requesting chart");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| provider_error(pair, format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| provider_error(pair, format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            // unknown symbols come back as 404 with a chart.error body
            if let Ok(ChartResponse {
                chart: Chart {
                    error: Some(error), ..
                },
            }) = serde_json::from_str::<ChartResponse>(&body)
            {
                return Err(provider_error(
                    pair,
                    format!("{}: {}", error.code, error.description),
                ));
            }
            return Err(provider_error(pair, format!("HTTP {}", status)));
        }

        parse_chart(pair, &body, start_date, end_date)
    }
}
