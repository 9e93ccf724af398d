use crate::cli::args::{Args, Command, OutputFormat};
use crate::cli::shell::Shell;
use crate::core::scenario::{monitor_telemetry, run_pid_gains, run_status_query};
use crate::core::session::Session;
use crate::core::telemetry::parse_telemetry;
use crate::domain::config::StabTermConfig;
use crate::domain::error::{StabTermError, StabTermResult};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Execute CLI command
pub async fn execute_command(args: Args) -> StabTermResult<()> {
    let config_manager = ConfigManager::new()?;
    let mut config = match &args.config {
        Some(path) => config_manager.load_config_from_path(Path::new(path))?,
        None => config_manager.load_config()?,
    };

    // CLI flags beat config files.
    if let Some(port) = &args.port {
        config.link.port = port.clone();
    }
    if let Some(baud) = args.baud {
        config.link.baud = baud;
    }

    if !args.quiet {
        init_logging(&config.global.log_level, args.verbose)?;
    }

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let session = connect_session(&config).await?;
            Shell::new(session, config).run().await
        }
        Command::Pid => {
            let mut session = connect_session(&config).await?;
            run_pid_gains(&mut session, &config).await;
            session.disconnect();
            Ok(())
        }
        Command::Status => {
            let mut session = connect_session(&config).await?;
            run_status_query(&mut session, &config).await;
            session.disconnect();
            Ok(())
        }
        Command::Monitor { duration } => {
            let secs = duration.unwrap_or(config.global.default_monitor_secs);
            let mut session = connect_session(&config).await?;
            monitor_telemetry(&mut session, Duration::from_secs(secs), &config.link).await;
            session.disconnect();
            Ok(())
        }
        Command::Parse { data } => write_parsed(&data, &args.output),
        Command::ListPorts => list_ports(&args.output),
        Command::InitConfig { path } => init_config(&config_manager, path),
    }
}

/// Open the session or explain to the operator why it could not be opened.
/// A startup connection failure is the one fatal error in this tool.
async fn connect_session(config: &StabTermConfig) -> StabTermResult<Session> {
    let mut session = Session::new(config.link.clone());
    if let Err(e) = session.connect().await {
        eprintln!("Failed to connect: {e}");
        eprintln!("Please check:");
        eprintln!("  1. the controller is connected and powered");
        eprintln!("  2. the serial port ({}) is correct", config.link.port);
        eprintln!("  3. the stabilization firmware is flashed and running");
        return Err(e);
    }

    println!(
        "Connected to {} at {} baud",
        config.link.port, config.link.baud
    );
    Ok(session)
}

fn write_parsed(data: &str, output: &OutputFormat) -> StabTermResult<()> {
    let parsed = parse_telemetry(data);
    match output {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&parsed)
                .map_err(|e| StabTermError::Output(e.to_string()))?;
            println!("{rendered}");
        }
        OutputFormat::Text => {
            let mut keys: Vec<&String> = parsed.keys().collect();
            keys.sort();
            for key in keys {
                println!("{key}: {}", parsed[key]);
            }
        }
    }
    Ok(())
}

fn list_ports(output: &OutputFormat) -> StabTermResult<()> {
    let ports = serialport::available_ports()?;
    match output {
        OutputFormat::Json => {
            let names: Vec<&str> = ports.iter().map(|p| p.port_name.as_str()).collect();
            let rendered = serde_json::to_string_pretty(&names)
                .map_err(|e| StabTermError::Output(e.to_string()))?;
            println!("{rendered}");
        }
        OutputFormat::Text => {
            if ports.is_empty() {
                println!("No serial ports found");
            } else {
                println!("Available serial ports:");
                for port in ports {
                    println!("  {}", port.port_name);
                }
            }
        }
    }
    Ok(())
}

fn init_config(config_manager: &ConfigManager, path: Option<String>) -> StabTermResult<()> {
    let dir = match path {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir()?,
    };
    let written = config_manager.init_project_config(&dir)?;
    println!("Created {}", written.display());
    Ok(())
}
