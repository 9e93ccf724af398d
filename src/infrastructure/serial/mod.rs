// Serial module - serialport-backed transport
use crate::core::session::Transport;
use crate::domain::config::LinkConfig;
use crate::domain::error::{StabTermError, StabTermResult};
use serialport::SerialPort;
use std::io::{self, Read, Write};
use tracing::info;

/// `Transport` implementation over a real serial device.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open the configured port. The message covers the usual failures:
    /// device not found, permission denied, port already in use.
    pub fn open(link: &LinkConfig) -> StabTermResult<Self> {
        let port = serialport::new(&link.port, link.baud)
            .timeout(link.read_timeout())
            .open()
            .map_err(|e| StabTermError::Connect {
                message: format!("failed to open {} at {} baud: {e}", link.port, link.baud),
            })?;

        info!(port = %link.port, "serial port opened");
        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.port.write_all(data)?;
        self.port.flush()
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        let available = self.port.bytes_to_read().map_err(io::Error::from)?;
        Ok(available as usize)
    }

    fn read_available(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let available = self.bytes_available()?;
        if available == 0 {
            return Ok(0);
        }

        let mut chunk = vec![0u8; available];
        match self.port.read(&mut chunk) {
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                Ok(n)
            }
            // The driver can time out between the availability check and
            // the read; treat that as nothing waiting.
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_invalid_device() {
        let link = LinkConfig {
            port: "/dev/null".to_string(),
            ..LinkConfig::default()
        };

        let result = SerialTransport::open(&link);
        assert!(matches!(result, Err(StabTermError::Connect { .. })));
    }
}
