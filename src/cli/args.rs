use clap::{Parser, Subcommand, ValueEnum};

/// Command line arguments for StabTerm
#[derive(Parser, Debug)]
#[command(
    name = "stabterm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serial test tool for ESP32 stabilization controllers",
    long_about = "An interactive test tool for exercising the serial link to an ESP32-based \
                  stabilization controller: set PID gains, query status, and monitor telemetry."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress diagnostic output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Serial port path (overrides configuration)
    #[arg(short, long, global = true)]
    pub port: Option<String>,

    /// Baud rate (overrides configuration)
    #[arg(short, long, global = true)]
    pub baud: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Command to execute; defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive test shell (default)
    Shell,
    /// Run the PID parameter test once and exit
    Pid,
    /// Run the status request test once and exit
    Status,
    /// Monitor telemetry for a bounded duration and exit
    Monitor {
        /// Monitoring duration in seconds
        #[arg(short, long)]
        duration: Option<u64>,
    },
    /// Parse a telemetry sample string without connecting
    Parse {
        /// Sample data string, e.g. "ROLL:1.25,PITCH:-0.50"
        data: String,
    },
    /// List serial ports present on this machine
    ListPorts,
    /// Create a default .stabterm/config.toml
    InitConfig {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,
    },
}

/// Output format options
#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
