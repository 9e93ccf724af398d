#![allow(dead_code)]

use stabterm::Transport;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Answers commands the way the stabilization firmware does: `SET_X:v`
/// is acknowledged with `X_SET:v`, `GET_STATUS` with a status line.
pub struct EchoTransport {
    pending: VecDeque<u8>,
    written: Arc<Mutex<Vec<u8>>>,
}

impl EchoTransport {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto everything written to the transport.
    pub fn written_handle(&self) -> Arc<Mutex<Vec<u8>>> {
        Arc::clone(&self.written)
    }
}

impl Transport for EchoTransport {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.written.lock().unwrap().extend_from_slice(data);

        let line = String::from_utf8_lossy(data);
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("SET_") {
            if let Some((param, value)) = rest.split_once(':') {
                let reply = format!("{param}_SET:{value}\n");
                self.pending.extend(reply.bytes());
            }
        } else if line == "GET_STATUS" {
            self.pending.extend(*b"STATUS:OK,ROLL:0.0,PITCH:0.0\n");
        }
        Ok(())
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        Ok(self.pending.len())
    }

    fn read_available(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let n = self.pending.len();
        buf.extend(self.pending.drain(..));
        Ok(n)
    }
}

/// Never produces data; writes succeed and vanish.
pub struct SilentTransport;

impl Transport for SilentTransport {
    fn write_all(&mut self, _data: &[u8]) -> io::Result<()> {
        Ok(())
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        Ok(0)
    }

    fn read_available(&mut self, _buf: &mut Vec<u8>) -> io::Result<usize> {
        Ok(0)
    }
}

/// Releases scripted chunks at fixed offsets from creation time.
pub struct TimedTransport {
    started: Instant,
    schedule: Vec<(Duration, Vec<u8>)>,
    cursor: usize,
}

impl TimedTransport {
    /// `schedule` must be sorted by offset.
    pub fn new(schedule: Vec<(Duration, Vec<u8>)>) -> Self {
        Self {
            started: Instant::now(),
            schedule,
            cursor: 0,
        }
    }

    fn due(&self) -> usize {
        let elapsed = self.started.elapsed();
        self.schedule[self.cursor..]
            .iter()
            .take_while(|(offset, _)| *offset <= elapsed)
            .map(|(_, chunk)| chunk.len())
            .sum()
    }
}

impl Transport for TimedTransport {
    fn write_all(&mut self, _data: &[u8]) -> io::Result<()> {
        Ok(())
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        Ok(self.due())
    }

    fn read_available(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let elapsed = self.started.elapsed();
        let mut appended = 0;
        while self.cursor < self.schedule.len() && self.schedule[self.cursor].0 <= elapsed {
            let chunk = &self.schedule[self.cursor].1;
            buf.extend_from_slice(chunk);
            appended += chunk.len();
            self.cursor += 1;
        }
        Ok(appended)
    }
}
