use serde::{Deserialize, Serialize};
use std::time::Duration;

/// StabTerm configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabTermConfig {
    /// Global settings
    #[serde(default)]
    pub global: GlobalConfig,
    /// Serial link settings
    #[serde(default)]
    pub link: LinkConfig,
    /// PID gains exercised by the parameter test
    #[serde(default)]
    pub gains: GainsConfig,
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Monitor duration used when the operator input is not a valid integer
    #[serde(default = "default_monitor_secs")]
    pub default_monitor_secs: u64,
}

/// Serial link settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Serial port path
    #[serde(default = "default_port")]
    pub port: String,
    /// Baud rate
    #[serde(default = "default_baud")]
    pub baud: u32,
    /// Pause after opening the port, letting the controller finish booting
    #[serde(default = "default_connect_settle_ms")]
    pub connect_settle_ms: u64,
    /// Pause after sending a command, before reading the response
    #[serde(default = "default_command_settle_ms")]
    pub command_settle_ms: u64,
    /// Interval between polls of the receive buffer
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Per-read timeout
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

/// PID gain values sent by the parameter test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GainsConfig {
    #[serde(default = "default_kp")]
    pub kp: f64,
    #[serde(default = "default_ki")]
    pub ki: f64,
    #[serde(default = "default_kd")]
    pub kd: f64,
}

impl LinkConfig {
    pub fn connect_settle(&self) -> Duration {
        Duration::from_millis(self.connect_settle_ms)
    }

    pub fn command_settle(&self) -> Duration {
        Duration::from_millis(self.command_settle_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_monitor_secs() -> u64 {
    10
}

fn default_port() -> String {
    if cfg!(windows) {
        "COM3".to_string()
    } else {
        "/dev/ttyUSB0".to_string()
    }
}

fn default_baud() -> u32 {
    115200
}

fn default_connect_settle_ms() -> u64 {
    2000
}

fn default_command_settle_ms() -> u64 {
    500
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_read_timeout_ms() -> u64 {
    1000
}

fn default_kp() -> f64 {
    2.5
}

fn default_ki() -> f64 {
    0.15
}

fn default_kd() -> f64 {
    0.8
}

impl Default for StabTermConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            link: LinkConfig::default(),
            gains: GainsConfig::default(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_monitor_secs: default_monitor_secs(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            baud: default_baud(),
            connect_settle_ms: default_connect_settle_ms(),
            command_settle_ms: default_command_settle_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

impl Default for GainsConfig {
    fn default() -> Self {
        Self {
            kp: default_kp(),
            ki: default_ki(),
            kd: default_kd(),
        }
    }
}
