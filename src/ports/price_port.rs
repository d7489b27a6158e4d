//! Price history port trait.

use crate::domain::catalog::CurrencyPair;
use crate::domain::error::FxDashError;
use crate::domain::ohlcv::PriceBar;
use chrono::NaiveDate;

/// Source of daily bars for a currency pair.
///
/// Implementations return whatever bars exist in `[start_date, end_date]`,
/// oldest first; an empty vector is not an error. Network, timeout and
/// payload problems are reported as [`FxDashError::Provider`].
pub trait PricePort {
    fn fetch_daily(
        &self,
        pair: &CurrencyPair,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, FxDashError>;
}
