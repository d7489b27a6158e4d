//! Dashboard rendering port trait.

use crate::domain::dashboard::Dashboard;
use crate::domain::error::FxDashError;
use std::io::Write;

/// Which views of the dashboard to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Views {
    pub strategies: bool,
    pub news: bool,
    pub extras: bool,
}

impl Views {
    pub const ALL: Views = Views {
        strategies: true,
        news: true,
        extras: true,
    };
}

/// Port for presenting a rendered dashboard.
pub trait ReportPort {
    fn render(&self, dashboard: &Dashboard, views: Views) -> String;

    /// Default implementation: renders to a string and writes it out.
    fn write(
        &self,
        dashboard: &Dashboard,
        views: Views,
        out: &mut dyn Write,
    ) -> Result<(), FxDashError> {
        out.write_all(self.render(dashboard, views).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
