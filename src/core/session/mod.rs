// Session module - Serial link lifecycle
pub mod transport;

pub use transport::Transport;

use crate::domain::config::LinkConfig;
use crate::domain::error::{StabTermError, StabTermResult};
use crate::infrastructure::serial::SerialTransport;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Owning wrapper around one open serial connection and its lifecycle.
///
/// Created closed; `connect` opens the configured port and `disconnect`
/// (or drop) releases it. There is exactly one owner, so no locking.
pub struct Session {
    link: LinkConfig,
    transport: Option<Box<dyn Transport>>,
}

impl Session {
    /// Create a closed session for the given link configuration.
    pub fn new(link: LinkConfig) -> Self {
        Self {
            link,
            transport: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    pub fn link(&self) -> &LinkConfig {
        &self.link
    }

    /// Open the serial port, then wait out the settle delay so the
    /// controller can finish its boot/reset after the port toggles DTR.
    pub async fn connect(&mut self) -> StabTermResult<()> {
        if self.is_open() {
            return Err(StabTermError::Connect {
                message: "session is already connected".to_string(),
            });
        }

        let transport = SerialTransport::open(&self.link)?;
        self.transport = Some(Box::new(transport));
        info!(port = %self.link.port, baud = self.link.baud, "connected");

        tokio::time::sleep(self.link.connect_settle()).await;
        Ok(())
    }

    /// Install an already-open transport, replacing any current one.
    pub fn attach(&mut self, transport: Box<dyn Transport>) {
        self.transport = Some(transport);
    }

    /// Close the transport if open. Safe to call repeatedly and on a
    /// never-connected session.
    pub fn disconnect(&mut self) {
        if self.transport.take().is_some() {
            info!("disconnected");
        }
    }

    /// Send one command line, terminated with a newline.
    pub fn send_line(&mut self, line: &str) -> StabTermResult<()> {
        let transport = self.transport.as_mut().ok_or_else(|| StabTermError::Send {
            message: "session is not connected".to_string(),
        })?;

        let mut frame = Vec::with_capacity(line.len() + 1);
        frame.extend_from_slice(line.as_bytes());
        frame.push(b'\n');

        transport.write_all(&frame).map_err(|e| StabTermError::Send {
            message: format!("serial write failed: {e}"),
        })?;

        debug!(command = line, "sent");
        Ok(())
    }

    /// Poll the transport until a newline arrives in freshly read bytes or
    /// the timeout elapses, accumulating everything read in the window.
    ///
    /// Returns the trimmed accumulation, or `None` when the session is
    /// closed or nothing printable arrived. Never blocks longer than
    /// `timeout` plus one poll interval.
    pub async fn read_line(&mut self, timeout: Duration) -> Option<String> {
        let poll_interval = self.link.poll_interval();
        let transport = match self.transport.as_mut() {
            Some(transport) => transport,
            None => {
                warn!("read attempted on a closed session");
                return None;
            }
        };

        let deadline = Instant::now() + timeout;
        let mut accumulated: Vec<u8> = Vec::new();

        loop {
            match transport.read_available(&mut accumulated) {
                Ok(fresh) if fresh > 0 => {
                    if accumulated[accumulated.len() - fresh..].contains(&b'\n') {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let err = StabTermError::Read {
                        message: format!("serial read failed: {e}"),
                    };
                    warn!("{err}");
                    return None;
                }
            }

            if Instant::now() >= deadline {
                break;
            }
            tokio::time::sleep(poll_interval).await;
        }

        // Controller output is ASCII in practice; stray bytes are replaced
        // rather than failing the read.
        let text = String::from_utf8_lossy(&accumulated);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.disconnect();
    }
}
