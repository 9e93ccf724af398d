use std::io;

/// Byte-oriented transport over the physical serial connection.
///
/// The session drives this with a poll loop; implementations must not
/// block in `bytes_available` or `read_available`.
pub trait Transport: Send {
    /// Write the full buffer to the device.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Number of bytes readable right now.
    fn bytes_available(&mut self) -> io::Result<usize>;

    /// Drain the currently readable bytes into `buf`, returning how many
    /// were appended. Zero means nothing was waiting.
    fn read_available(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}
