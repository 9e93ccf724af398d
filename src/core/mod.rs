// Core module - Session, scenarios, and telemetry parsing
pub mod scenario;
pub mod session;
pub mod telemetry;
