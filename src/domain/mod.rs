//! Core domain types and logic.

pub mod catalog;
pub mod config_validation;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod indicator;
pub mod links;
pub mod news;
pub mod ohlcv;
pub mod ranking;
pub mod signal;
pub mod strategy;
pub mod trade_levels;
