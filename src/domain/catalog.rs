//! Currency pair catalog.
//!
//! The dashboard covers a fixed list of 26 pairs, identified by the Yahoo
//! Finance symbol (`EURUSD=X`) when talking to a provider and by the bare
//! six-letter code (`EURUSD`) when rendering.

use crate::domain::error::CatalogError;
use std::collections::HashSet;
use std::fmt;

/// Provider symbols of the default catalog, in dashboard order.
pub const DEFAULT_PAIR_SYMBOLS: [&str; 26] = [
    "EURUSD=X", "GBPUSD=X", "USDJPY=X", "AUDUSD=X", "USDCAD=X", "USDCHF=X", "NZDUSD=X",
    "EURGBP=X", "EURJPY=X", "EURAUD=X", "EURCAD=X", "EURCHF=X", "EURNZD=X",
    "GBPJPY=X", "GBPAUD=X", "GBPCAD=X", "GBPCHF=X", "GBPNZD=X",
    "AUDJPY=X", "AUDCAD=X", "AUDCHF=X", "AUDNZD=X",
    "CADJPY=X", "CADCHF=X", "NZDJPY=X", "NZDCAD=X",
];

const SYMBOL_SUFFIX: &str = "=X";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    code: String,
}

impl CurrencyPair {
    /// Accepts `EURUSD`, `eurusd` or `EURUSD=X`.
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyToken);
        }
        let upper = trimmed.to_uppercase();
        let code = upper.strip_suffix(SYMBOL_SUFFIX).unwrap_or(&upper);
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CatalogError::InvalidCode(trimmed.to_string()));
        }
        Ok(Self {
            code: code.to_string(),
        })
    }

    /// Six-letter display code, e.g. `EURUSD`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Provider symbol, e.g. `EURUSD=X`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.code, SYMBOL_SUFFIX)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

pub fn default_pairs() -> Vec<CurrencyPair> {
    DEFAULT_PAIR_SYMBOLS
        .iter()
        .map(|s| CurrencyPair {
            code: s.trim_end_matches(SYMBOL_SUFFIX).to_string(),
        })
        .collect()
}

/// Parses a comma-separated pair list, preserving order.
pub fn parse_pairs(input: &str) -> Result<Vec<CurrencyPair>, CatalogError> {
    let mut pairs = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let pair = CurrencyPair::parse(token)?;
        if !seen.insert(pair.clone()) {
            return Err(CatalogError::DuplicatePair(pair.code));
        }
        pairs.push(pair);
    }

    Ok(pairs)
}
