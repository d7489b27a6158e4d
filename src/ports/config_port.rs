//! Configuration access port trait.
//!
//! Lookups are by `[section] key`. Numeric getters fall back to `default`
//! when the key is missing; a present but unparseable value is reported as
//! `Err` with the raw text so callers can reject it.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> Result<i64, String>;
    fn get_double(&self, section: &str, key: &str, default: f64) -> Result<f64, String>;
}
