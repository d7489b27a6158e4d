//! Domain error types.

/// Top-level error type for fxdash.
///
/// Only the outer surface (config, timestamps, report output) treats these as
/// fatal. During a render, [`FxDashError::Provider`] and
/// [`FxDashError::InsufficientData`] are caught per pair and turned into skips.
#[derive(Debug, thiserror::Error)]
pub enum FxDashError {
    #[error("price provider failed for {pair}: {reason}")]
    Provider { pair: String, reason: String },

    #[error("insufficient data for {pair}: have {bars} bars, need {minimum}")]
    InsufficientData {
        pair: String,
        bars: usize,
        minimum: usize,
    },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing a pair catalog override.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("empty token in pair list")]
    EmptyToken,

    #[error("invalid pair code: {0}")]
    InvalidCode(String),

    #[error("duplicate pair: {0}")]
    DuplicatePair(String),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

impl From<&FxDashError> for std::process::ExitCode {
    fn from(err: &FxDashError) -> Self {
        let code: u8 = match err {
            FxDashError::Io(_) | FxDashError::InvalidTimestamp { .. } => 1,
            FxDashError::ConfigParse { .. } | FxDashError::ConfigInvalid { .. } => 2,
            FxDashError::Provider { .. } => 3,
            FxDashError::Catalog(_) => 4,
            FxDashError::InsufficientData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
