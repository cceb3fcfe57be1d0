pub mod errors;

use std::io::{BufRead, BufReader, ErrorKind, Read, Write};
use std::time::{Duration, Instant};
use log::{debug, info};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use crate::manager_lamp::errors::LampError;

/// Outcome of waiting for the lamp to answer a configuration line
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// A line (without its terminator) received from the lamp
    Line(String),
    /// Nothing arrived before the deadline
    NoResponse,
}

/// Serial connection to the TriLight lamp
///
/// The port is held for as long as the struct lives and is closed when it is dropped.
pub struct Lamp<P: Read + Write> {
    port: BufReader<P>,
}

impl Lamp<Box<dyn SerialPort>> {
    /// Opens the serial device with 8-N-1 framing and no flow control
    ///
    /// # Arguments
    ///
    /// * 'device_path' - path to the serial device, e.g. /dev/ttyUSB0
    /// * 'baud_rate' - baud rate the lamp firmware listens on
    /// * 'poll_interval' - timeout for each individual read on the port
    pub fn open(device_path: &str, baud_rate: u32, poll_interval: Duration) -> Result<Self, LampError> {
        let port = serialport::new(device_path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(poll_interval)
            .open()
            .map_err(|e| LampError::Unavailable { path: device_path.to_string(), reason: e.to_string() })?;

        info!("opened {} at {} baud", device_path, baud_rate);

        Ok(Lamp::new(port))
    }
}

impl<P: Read + Write> Lamp<P> {
    /// Wraps an already open port
    ///
    /// # Arguments
    ///
    /// * 'port' - anything that can be written to and read from like a serial port
    pub fn new(port: P) -> Self {
        Self { port: BufReader::new(port) }
    }

    /// Writes a complete line to the lamp and flushes it out
    ///
    /// # Arguments
    ///
    /// * 'line' - the line to send, including its terminator
    pub fn send_line(&mut self, line: &str) -> Result<(), LampError> {
        let port = self.port.get_mut();
        port.write_all(line.as_bytes()).map_err(|e| LampError::Write(e.to_string()))?;
        port.flush().map_err(|e| LampError::Write(e.to_string()))?;
        debug!("wrote {} bytes", line.len());

        Ok(())
    }

    /// Waits for one line from the lamp
    ///
    /// The deadline is checked after every read, timed out or not. If some bytes arrived but no
    /// terminator, they are returned as the reply once the deadline passes or the port reports end
    /// of stream. End of stream before any byte means the port went away and is an error.
    ///
    /// # Arguments
    ///
    /// * 'timeout' - the longest total time to wait for the line
    pub fn read_reply(&mut self, timeout: Duration) -> Result<Reply, LampError> {
        let deadline = Instant::now() + timeout;
        let mut buf: Vec<u8> = Vec::new();

        loop {
            let (used, complete) = match self.port.fill_buf() {
                Ok(available) if available.is_empty() => {
                    if buf.is_empty() {
                        return Err(LampError::Read("port closed".to_string()));
                    }
                    break;
                }
                Ok(available) => match available.iter().position(|&b| b == b'\n') {
                    Some(i) => {
                        buf.extend_from_slice(&available[..=i]);
                        (i + 1, true)
                    }
                    None => {
                        buf.extend_from_slice(available);
                        (available.len(), false)
                    }
                },
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted) => (0, false),
                Err(e) => return Err(LampError::from(e)),
            };
            self.port.consume(used);

            if complete || Instant::now() >= deadline {
                break;
            }
        }

        if buf.is_empty() {
            return Ok(Reply::NoResponse);
        }

        let text = String::from_utf8_lossy(&buf);
        let line = text.strip_suffix('\n').unwrap_or(&text);
        let line = line.strip_suffix('\r').unwrap_or(line);

        Ok(Reply::Line(line.to_string()))
    }

    /// Gives access to the wrapped port
    #[cfg(test)]
    pub fn port(&self) -> &P {
        self.port.get_ref()
    }
}
