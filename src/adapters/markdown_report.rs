//! Markdown report adapter implementing ReportPort.
//!
//! Renders the three dashboard views (Strategies, News, Extras) as a single
//! Markdown document suitable for a terminal or a static page.

use crate::domain::dashboard::{Dashboard, StrategyReport};
use crate::domain::history::SkippedPair;
use crate::domain::links::LinkCatalog;
use crate::domain::news::NewsEvent;
use crate::domain::signal::Signal;
use crate::ports::report_port::{ReportPort, Views};

pub const NO_SIGNALS: &str = "No signals found for this strategy.";
pub const NO_NEWS: &str = "No high-impact news events in the next 24 hours.";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownReport;

impl MarkdownReport {
    pub fn new() -> Self {
        Self
    }
}

/// Formats an optional release figure; integral values keep one decimal.
fn format_value(value: Option<f64>) -> String {
    match value {
        None => "None".to_string(),
        Some(v) if v.fract() == 0.0 => format!("{:.1}", v),
        Some(v) => format!("{}", v),
    }
}

fn signal_row(signal: &Signal) -> String {
    format!(
        "| {} | {} | {:.5} | {:.5} | {:.5} | {:.5} | {:.5} |",
        signal.pair,
        signal.direction,
        signal.entry_price,
        signal.stop_loss,
        signal.take_profit,
        signal.score,
        signal.risk
    )
}

fn render_strategy(out: &mut String, report: &StrategyReport) {
    out.push_str(&format!("### {}\n\n", report.strategy.name()));
    if report.signals.is_empty() {
        out.push_str(&format!("{}\n\n", NO_SIGNALS));
        return;
    }
    out.push_str("| Pair | Direction | Entry | Stop Loss | Take Profit | Score | Risk |\n");
    out.push_str("|------|-----------|-------|-----------|-------------|-------|------|\n");
    for signal in &report.signals {
        out.push_str(&signal_row(signal));
        out.push('\n');
    }
    out.push('\n');
}

fn render_skipped(out: &mut String, skipped: &[SkippedPair]) {
    if skipped.is_empty() {
        return;
    }
    out.push_str(&format!("_Skipped {} pair(s):_\n\n", skipped.len()));
    for s in skipped {
        out.push_str(&format!("- {}: {}\n", s.pair, s.reason));
    }
    out.push('\n');
}

fn render_strategies(out: &mut String, dashboard: &Dashboard) {
    out.push_str(&format!("## Top {} Trades by Strategy (Intraday)\n\n", dashboard.top_n));
    for report in &dashboard.strategies {
        render_strategy(out, report);
    }
    render_skipped(out, &dashboard.skipped);
}

fn render_event(out: &mut String, event: &NewsEvent) {
    out.push_str(&format!("### {} ({} impact)\n\n", event.event_name, event.impact));
    out.push_str(&format!("Currency: {}  \n", event.currency));
    out.push_str(&format!(
        "Scheduled Time: {}  \n",
        event.scheduled_time.format(TIME_FORMAT)
    ));
    out.push_str(&format!("Actual: {}  \n", format_value(event.actual)));
    out.push_str(&format!("Forecast: {}  \n", format_value(event.forecast)));
    out.push_str(&format!("Previous: {}\n\n", format_value(event.previous)));
    out.push_str("---\n\n");
}

fn render_news(out: &mut String, news: &[NewsEvent]) {
    out.push_str("## Forex Economic News - Next 24 Hours\n\n");
    if news.is_empty() {
        out.push_str(&format!("{}\n\n", NO_NEWS));
        return;
    }
    for event in news {
        render_event(out, event);
    }
}

fn render_extras(out: &mut String, links: &LinkCatalog) {
    out.push_str("## Daily Market Predictions & Key Resources\n\n");
    for section in &links.sections {
        out.push_str(&format!("### {}\n\n", section.heading));
        for link in &section.links {
            out.push_str(&format!("- [{}]({})\n", link.title, link.url));
        }
        out.push('\n');
    }
    out.push_str("---\n\n");
    out.push_str(&format!("**Tip:** {}\n", links.footer_tip));
}

impl ReportPort for MarkdownReport {
    fn render(&self, dashboard: &Dashboard, views: Views) -> String {
        let mut out = String::new();
        out.push_str("# Forex Trading Dashboard\n\n");
        out.push_str(&format!(
            "_Generated {}_\n\n",
            dashboard.generated_at.format(TIME_FORMAT)
        ));

        if views.strategies {
            render_strategies(&mut out, dashboard);
        }
        if views.news {
            render_news(&mut out, &dashboard.news);
        }
        if views.extras {
            render_extras(&mut out, &dashboard.links);
        }
        out
    }
}
