//! INI file configuration adapter.

use crate::domain::error::FxDashError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FxDashError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config.load(path).map_err(|reason| FxDashError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_or<T: FromStr>(&self, section: &str, key: &str, default: T) -> Result<T, String> {
        match self.config.get(section, key) {
            Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|_| raw),
            _ => Ok(default),
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> Result<i64, String> {
        self.parse_or(section, key, default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> Result<f64, String> {
        self.parse_or(section, key, default)
    }
}
