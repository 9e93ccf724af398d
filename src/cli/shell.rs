use crate::core::scenario::{monitor_telemetry, run_pid_gains, run_status_query};
use crate::core::session::Session;
use crate::core::telemetry::parse_telemetry;
use crate::domain::config::StabTermConfig;
use crate::domain::error::StabTermResult;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::warn;

/// Shell lifecycle states.
#[derive(Debug, PartialEq, Eq)]
enum ShellState {
    Running,
    Terminated,
}

/// Interactive operator shell: a numbered menu dispatching to the test
/// scenarios over one owned session.
pub struct Shell {
    session: Session,
    config: StabTermConfig,
    state: ShellState,
}

impl Shell {
    pub fn new(session: Session, config: StabTermConfig) -> Self {
        Self {
            session,
            config,
            state: ShellState::Running,
        }
    }

    /// Run the menu loop until the operator exits or interrupts. The
    /// session is disconnected on every exit path.
    pub async fn run(mut self) -> StabTermResult<()> {
        let mut input = BufReader::new(tokio::io::stdin()).lines();

        while self.state == ShellState::Running {
            print_menu();
            print!("Select test (1-5): ");
            std::io::stdout().flush()?;

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("\nInterrupted by operator");
                    self.state = ShellState::Terminated;
                }
                line = input.next_line() => {
                    match line {
                        Ok(Some(choice)) => {
                            let choice = choice.trim().to_string();
                            self.handle_choice(&choice, &mut input).await?;
                        }
                        Ok(None) => {
                            // stdin closed
                            self.state = ShellState::Terminated;
                        }
                        Err(e) => {
                            warn!("failed to read operator input: {e}");
                            self.state = ShellState::Terminated;
                        }
                    }
                }
            }
        }

        self.session.disconnect();
        Ok(())
    }

    async fn handle_choice<R>(&mut self, choice: &str, input: &mut Lines<R>) -> StabTermResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        match choice {
            "1" => {
                run_pid_gains(&mut self.session, &self.config).await;
            }
            "2" => {
                run_status_query(&mut self.session, &self.config).await;
            }
            "3" => {
                let raw = prompt(input, "Monitoring duration (seconds): ").await?;
                let secs = parse_duration(
                    raw.as_deref().unwrap_or(""),
                    self.config.global.default_monitor_secs,
                );
                monitor_telemetry(&mut self.session, Duration::from_secs(secs), &self.config.link)
                    .await;
            }
            "4" => {
                if let Some(sample) = prompt(input, "Enter sample data string: ").await? {
                    let parsed = parse_telemetry(sample.trim());
                    println!("Parsed data: {parsed:?}");
                }
            }
            "5" => {
                self.state = ShellState::Terminated;
            }
            _ => {
                println!("Invalid choice");
            }
        }
        Ok(())
    }
}

fn print_menu() {
    println!();
    println!("Available tests:");
    println!("  1. Test PID parameters");
    println!("  2. Test status request");
    println!("  3. Monitor real-time data");
    println!("  4. Parse sample data");
    println!("  5. Exit");
}

async fn prompt<R>(input: &mut Lines<R>, text: &str) -> StabTermResult<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}

/// Fall back to the configured default when the operator input is not a
/// valid integer, telling them so.
fn parse_duration(input: &str, default_secs: u64) -> u64 {
    match input.trim().parse::<u64>() {
        Ok(secs) => secs,
        Err(_) => {
            println!("Invalid duration, using {default_secs} seconds");
            default_secs
        }
    }
}
