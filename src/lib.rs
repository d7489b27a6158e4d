//! fxdash: single-session forex signal dashboard.
//!
//! Hexagonal architecture: the signal core and dashboard assembly live in
//! [`domain`], port traits in [`ports`], concrete implementations in
//! [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
