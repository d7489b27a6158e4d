//! Configuration loading and validation.
//!
//! Every key is optional. Missing keys take the dashboard defaults; present
//! keys must parse and fall within range or the render is refused.

use std::path::PathBuf;

use crate::domain::catalog::parse_pairs;
use crate::domain::dashboard::DashboardConfig;
use crate::domain::error::FxDashError;
use crate::ports::config_port::ConfigPort;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSource {
    Yahoo,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub source: ProviderSource,
    pub base_url: String,
    pub timeout_secs: u64,
    pub data_dir: Option<PathBuf>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            source: ProviderSource::Yahoo,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: None,
        }
    }
}

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> FxDashError {
    FxDashError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn int_at_least(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
    default: i64,
    minimum: i64,
) -> Result<i64, FxDashError> {
    let value = config
        .get_int(section, key, default)
        .map_err(|raw| invalid(section, key, format!("expected an integer, got {raw:?}")))?;
    if value < minimum {
        return Err(invalid(section, key, format!("must be at least {minimum}")));
    }
    Ok(value)
}

pub fn read_dashboard_config(config: &dyn ConfigPort) -> Result<DashboardConfig, FxDashError> {
    let defaults = DashboardConfig::default();

    let lookback_days = int_at_least(config, "dashboard", "lookback_days", defaults.lookback_days, 1)?;
    let min_bars = int_at_least(config, "dashboard", "min_bars", defaults.min_bars as i64, 2)? as usize;
    let top_n = int_at_least(config, "dashboard", "top_n", defaults.top_n as i64, 1)? as usize;

    let stop_loss_pct = config
        .get_double("dashboard", "stop_loss_pct", defaults.stop_loss_pct)
        .map_err(|raw| invalid("dashboard", "stop_loss_pct", format!("expected a number, got {raw:?}")))?;
    if !(stop_loss_pct > 0.0 && stop_loss_pct < 1.0) {
        return Err(invalid("dashboard", "stop_loss_pct", "must be between 0 and 1"));
    }

    let pairs = match config.get_string("dashboard", "pairs") {
        Some(list) if !list.trim().is_empty() => parse_pairs(&list)?,
        _ => defaults.pairs,
    };

    Ok(DashboardConfig {
        pairs,
        lookback_days,
        min_bars,
        top_n,
        stop_loss_pct,
    })
}

pub fn read_provider_settings(config: &dyn ConfigPort) -> Result<ProviderSettings, FxDashError> {
    let defaults = ProviderSettings::default();

    let source = match config
        .get_string("provider", "source")
        .map(|s| s.trim().to_lowercase())
        .as_deref()
    {
        None | Some("") | Some("yahoo") => ProviderSource::Yahoo,
        Some("csv") => ProviderSource::Csv,
        Some(other) => {
            return Err(invalid(
                "provider",
                "source",
                format!("unknown source {other:?}, expected yahoo or csv"),
            ));
        }
    };

    let base_url = config
        .get_string("provider", "base_url")
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults.base_url);
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(invalid("provider", "base_url", "must be an http(s) URL"));
    }

    let timeout_secs = int_at_least(
        config,
        "provider",
        "timeout_secs",
        defaults.timeout_secs as i64,
        1,
    )? as u64;

    let data_dir = config
        .get_string("provider", "data_dir")
        .filter(|s| !s.trim().is_empty())
        .map(|s| PathBuf::from(s.trim()));
    if source == ProviderSource::Csv && data_dir.is_none() {
        return Err(invalid("provider", "data_dir", "required when source = csv"));
    }

    Ok(ProviderSettings {
        source,
        base_url,
        timeout_secs,
        data_dir,
    })
}
