//! Serial transport for the air mouse board
//!
//! The sample loop only needs four things from the link: open, a liveness
//! check, a bounded non-blocking read and close. [`Transport`] captures that
//! so the loop can run against a scripted transport in tests.

use crate::bridge::channel::BridgeResult;
use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::Read;
use std::time::Duration;

/// Upper bound for a single read once bytes are known to be queued
const READ_TIMEOUT: Duration = Duration::from_millis(50);

/// Byte source feeding the sample loop
pub trait Transport {
    /// Whether the link is usable
    fn is_connected(&mut self) -> bool;

    /// Read at most `buf.len()` bytes that are already queued.
    ///
    /// Never waits for more data. Returns 0 when nothing is queued or the
    /// read fails; both mean "nothing new this cycle".
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Release the underlying handle
    fn close(&mut self);
}

/// [`Transport`] over a system serial port (8N1, DTR asserted)
pub struct SerialTransport {
    name: String,
    port: Option<Box<dyn SerialPort>>,
    connected: bool,
}

impl SerialTransport {
    /// Open `port_name` and prepare it for reading.
    ///
    /// Failing to open the port is an error. Failing to configure it leaves
    /// the transport open but reporting not connected, which the caller
    /// treats as fatal.
    pub fn open(port_name: &str, baud_rate: u32, settle_delay: Duration) -> BridgeResult<Self> {
        let mut port = serialport::new(port_name, baud_rate)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .timeout(READ_TIMEOUT)
            .open()?;

        let mut connected = true;

        // The board only starts talking once DTR is raised
        if let Err(e) = port.write_data_terminal_ready(true) {
            tracing::warn!("Could not raise DTR on {}: {}", port_name, e);
            connected = false;
        }

        if connected {
            if let Err(e) = port.clear(ClearBuffer::All) {
                tracing::warn!("Failed to purge {} buffers: {}", port_name, e);
            }
            std::thread::sleep(settle_delay);
        }

        tracing::info!(
            "Opened {} at {} baud (connected={})",
            port_name,
            baud_rate,
            connected
        );

        Ok(Self {
            name: port_name.to_string(),
            port: Some(port),
            connected,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Transport for SerialTransport {
    fn is_connected(&mut self) -> bool {
        let Some(port) = self.port.as_ref() else {
            return false;
        };

        if self.connected {
            if let Err(e) = port.bytes_to_read() {
                tracing::warn!("{} stopped responding: {}", self.name, e);
                self.connected = false;
            }
        }

        self.connected
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let Some(port) = self.port.as_mut() else {
            return 0;
        };

        let queued = match port.bytes_to_read() {
            Ok(queued) => queued as usize,
            Err(e) => {
                tracing::trace!("Queue check on {} failed: {}", self.name, e);
                return 0;
            }
        };

        let to_read = queued.min(buf.len());
        if to_read == 0 {
            return 0;
        }

        match port.read(&mut buf[..to_read]) {
            Ok(n) => n,
            Err(e) => {
                tracing::trace!("Read from {} failed: {}", self.name, e);
                0
            }
        }
    }

    fn close(&mut self) {
        if self.port.take().is_some() {
            tracing::info!("Closed {}", self.name);
        }
        self.connected = false;
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        self.close();
    }
}
