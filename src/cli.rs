//! CLI definition and dispatch.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::markdown_report::MarkdownReport;
use crate::domain::config_validation::{
    read_dashboard_config, read_provider_settings, ProviderSettings, ProviderSource,
};
use crate::domain::dashboard::{build_dashboard, Dashboard, DashboardConfig};
use crate::domain::error::FxDashError;
use crate::domain::strategy::StrategyKind;
use crate::ports::price_port::PricePort;
use crate::ports::report_port::{ReportPort, Views};

#[derive(Parser, Debug)]
#[command(name = "fxdash", about = "Forex signal dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the full dashboard (Strategies, News, Extras)
    Render {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Read `{CODE}.csv` files from this directory instead of Yahoo
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Render as of this instant (RFC 3339) instead of the current time
        #[arg(long)]
        now: Option<String>,
    },
    /// Render only the Strategies view
    Signals {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// One of momentum-sma, ema-crossover, rsi, macd
        #[arg(long)]
        strategy: Option<String>,
        #[arg(long)]
        now: Option<String>,
    },
    /// Render only the News view
    News {
        #[arg(long)]
        now: Option<String>,
    },
    /// List the configured currency pairs
    Pairs {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Render {
            config,
            output,
            data_dir,
            now,
        } => run_render(
            config.as_deref(),
            output.as_deref(),
            data_dir.as_deref(),
            now.as_deref(),
        ),
        Command::Signals {
            config,
            data_dir,
            strategy,
            now,
        } => run_signals(
            config.as_deref(),
            data_dir.as_deref(),
            strategy.as_deref(),
            now.as_deref(),
        ),
        Command::News { now } => run_news(now.as_deref()),
        Command::Pairs { config } => run_pairs(config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            (&e).into()
        }
    }
}

/// Loads the INI file if one was given; otherwise every key takes its default.
pub fn load_config(path: Option<&Path>) -> Result<FileConfigAdapter, FxDashError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            FileConfigAdapter::from_file(path)
        }
        None => FileConfigAdapter::from_string("").map_err(|reason| FxDashError::ConfigParse {
            file: "<defaults>".into(),
            reason,
        }),
    }
}

pub fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>, FxDashError> {
    match now {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| FxDashError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(Utc::now()),
    }
}

/// Picks the price source. `--data-dir` forces the CSV provider.
pub fn build_price_port(
    settings: &ProviderSettings,
    data_dir_override: Option<&Path>,
) -> Result<Box<dyn PricePort>, FxDashError> {
    if let Some(dir) = data_dir_override {
        return Ok(Box::new(CsvAdapter::new(dir.to_path_buf())));
    }

    match settings.source {
        ProviderSource::Csv => {
            let dir = settings
                .data_dir
                .clone()
                .ok_or_else(|| FxDashError::ConfigInvalid {
                    section: "provider".into(),
                    key: "data_dir".into(),
                    reason: "required when source = csv".into(),
                })?;
            Ok(Box::new(CsvAdapter::new(dir)))
        }
        #[cfg(feature = "yahoo")]
        ProviderSource::Yahoo => {
            use crate::adapters::yahoo_adapter::YahooAdapter;
            Ok(Box::new(YahooAdapter::new(
                &settings.base_url,
                settings.timeout_secs,
            )?))
        }
        #[cfg(not(feature = "yahoo"))]
        ProviderSource::Yahoo => Err(FxDashError::ConfigInvalid {
            section: "provider".into(),
            key: "source".into(),
            reason: "built without the yahoo feature; use source = csv or --data-dir".into(),
        }),
    }
}

/// Writes the selected views to `output`, or to stdout when no path is given.
fn emit(
    report: &dyn ReportPort,
    dashboard: &Dashboard,
    views: Views,
    output: Option<&Path>,
) -> Result<(), FxDashError> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            report.write(dashboard, views, &mut file)?;
            tracing::info!(path = %path.display(), "dashboard written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            report.write(dashboard, views, &mut stdout)?;
        }
    }
    Ok(())
}

fn load_dashboard(
    config_path: Option<&Path>,
    data_dir: Option<&Path>,
    strategies: &[StrategyKind],
    now: DateTime<Utc>,
) -> Result<Dashboard, FxDashError> {
    let adapter = load_config(config_path)?;
    let config = read_dashboard_config(&adapter)?;
    let settings = read_provider_settings(&adapter)?;
    let port = build_price_port(&settings, data_dir)?;

    Ok(build_dashboard(port.as_ref(), &config, strategies, now))
}

fn run_render(
    config_path: Option<&Path>,
    output: Option<&Path>,
    data_dir: Option<&Path>,
    now: Option<&str>,
) -> Result<(), FxDashError> {
    let now = parse_now(now)?;
    let dashboard = load_dashboard(config_path, data_dir, &StrategyKind::ALL, now)?;
    emit(&MarkdownReport::new(), &dashboard, Views::ALL, output)
}

fn run_signals(
    config_path: Option<&Path>,
    data_dir: Option<&Path>,
    strategy: Option<&str>,
    now: Option<&str>,
) -> Result<(), FxDashError> {
    let now = parse_now(now)?;
    let strategies = match strategy {
        Some(name) => vec![name.parse::<StrategyKind>()?],
        None => StrategyKind::ALL.to_vec(),
    };

    let dashboard = load_dashboard(config_path, data_dir, &strategies, now)?;
    let views = Views {
        strategies: true,
        news: false,
        extras: false,
    };
    emit(&MarkdownReport::new(), &dashboard, views, None)
}

fn run_news(now: Option<&str>) -> Result<(), FxDashError> {
    let now = parse_now(now)?;
    let dashboard = Dashboard::without_prices(&DashboardConfig::default(), now);
    let views = Views {
        strategies: false,
        news: true,
        extras: false,
    };
    emit(&MarkdownReport::new(), &dashboard, views, None)
}

fn run_pairs(config_path: Option<&Path>) -> Result<(), FxDashError> {
    let adapter = load_config(config_path)?;
    let config = read_dashboard_config(&adapter)?;

    let mut text = String::new();
    for pair in &config.pairs {
        text.push_str(&format!("{}\t{}\n", pair.code(), pair.symbol()));
    }
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
