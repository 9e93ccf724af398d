//! Canned test scenarios: fixed scripts of send/settle/read steps.
//!
//! Failures inside a scenario are reported and the script continues; only
//! the operator decides when to stop.

use crate::core::session::Session;
use crate::domain::config::{LinkConfig, StabTermConfig};
use std::time::{Duration, Instant};
use tracing::warn;

/// Send the three PID gain commands, reading back one echo line after each.
///
/// Every response is printed regardless of content; the controller is not
/// asked to confirm that a value was actually applied.
pub async fn run_pid_gains(session: &mut Session, config: &StabTermConfig) -> Vec<Option<String>> {
    println!("\n=== Testing PID parameters ===");

    let gains = &config.gains;
    let commands = [
        ("Kp", format!("SET_KP:{}", gains.kp)),
        ("Ki", format!("SET_KI:{}", gains.ki)),
        ("Kd", format!("SET_KD:{}", gains.kd)),
    ];

    let mut responses = Vec::with_capacity(commands.len());
    for (label, command) in &commands {
        send_step(session, command);
        tokio::time::sleep(config.link.command_settle()).await;
        let response = session.read_line(config.link.read_timeout()).await;
        println!("{label} response: {}", response.as_deref().unwrap_or(""));
        responses.push(response);
    }
    responses
}

/// Send a single status query and print the raw response line.
pub async fn run_status_query(session: &mut Session, config: &StabTermConfig) -> Option<String> {
    println!("\n=== Testing status request ===");

    send_step(session, "GET_STATUS");
    tokio::time::sleep(config.link.command_settle()).await;
    let response = session.read_line(config.link.read_timeout()).await;
    println!("Status: {}", response.as_deref().unwrap_or(""));
    response
}

/// Print telemetry lines as they arrive until `duration` elapses or the
/// operator interrupts. Returns the collected lines.
pub async fn monitor_telemetry(
    session: &mut Session,
    duration: Duration,
    link: &LinkConfig,
) -> Vec<String> {
    if !session.is_open() {
        warn!("monitor requested on a closed session");
        return Vec::new();
    }

    println!("\n=== Monitoring data for {} seconds ===", duration.as_secs());
    println!("Press Ctrl+C to stop monitoring");

    let started = Instant::now();
    let mut lines = Vec::new();

    while started.elapsed() < duration {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nMonitoring stopped by operator");
                break;
            }
            response = session.read_line(link.poll_interval()) => {
                if let Some(line) = response {
                    println!("Data: {line}");
                    lines.push(line);
                }
            }
        }
    }
    lines
}

fn send_step(session: &mut Session, command: &str) {
    if let Err(e) = session.send_line(command) {
        warn!("failed to send {command}: {e}");
    }
}
