//! StabTerm Library
//!
//! Interactive serial test tool for ESP32-based stabilization controllers:
//! session lifecycle over a byte-stream transport, canned test scenarios,
//! and best-effort telemetry parsing.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::session::{Session, Transport};
pub use crate::core::telemetry::parse_telemetry;
pub use crate::domain::config::StabTermConfig;
pub use crate::domain::error::{StabTermError, StabTermResult};
