//! Terminal output for an SSH channel

use std::io;

use tokio::sync::mpsc;

/// `io::Write` end of a channel's output.
///
/// The crossterm backend writes a frame in many small pieces and flushes
/// once; each flush hands the buffered bytes over as one chunk, which the
/// server forwards to the client as one data packet.
#[derive(Debug)]
pub struct ChannelWriter {
    sender: mpsc::UnboundedSender<Vec<u8>>,
    sink: Vec<u8>,
}

impl ChannelWriter {
    pub fn new(sender: mpsc::UnboundedSender<Vec<u8>>) -> Self {
        Self {
            sender,
            sink: Vec::new(),
        }
    }
}

impl io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.sink.is_empty() {
            return Ok(());
        }
        self.sender
            .send(std::mem::take(&mut self.sink))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "SSH channel closed"))
    }
}
