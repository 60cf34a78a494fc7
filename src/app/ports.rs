//! Port traits — the boundary between the control logic and the outside
//! world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Monitor (domain)
//! ```
//!
//! ESP-IDF adapters implement these traits on the device; the integration
//! tests implement them with recording mocks. The domain core never touches
//! hardware directly.

use core::fmt;
use core::time::Duration;

use crate::app::indicator::IndicatorPattern;
use crate::error::IndicatorError;

// ───────────────────────────────────────────────────────────────
// Network link
// ───────────────────────────────────────────────────────────────

/// Addresses of an attached link, read once per successful attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInfo {
    /// Assigned IPv4 address, dotted decimal.
    pub ip: heapless::String<16>,
    /// Hardware (MAC) address of the station interface.
    pub mac: [u8; 6],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The radio driver failed in a way a retry cannot fix.
    Driver,
    /// Link info was requested while the link is down.
    NotConnected,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver => write!(f, "radio driver fault"),
            Self::NotConnected => write!(f, "link is down"),
        }
    }
}

/// Station-mode network link.
///
/// `connect` issues one attach attempt. An attempt that merely fails to
/// associate returns `Ok(())` — the caller polls [`is_connected`] and
/// retries on its own schedule. `Err` is reserved for unrecoverable driver
/// faults.
///
/// [`is_connected`]: LinkPort::is_connected
pub trait LinkPort {
    fn connect(&mut self) -> Result<(), LinkError>;
    fn disconnect(&mut self);
    fn is_connected(&self) -> bool;
    fn link_info(&self) -> Result<LinkInfo, LinkError>;
}

// ───────────────────────────────────────────────────────────────
// Sensor serial channel
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    Read,
    Write,
    Clear,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "UART read failed"),
            Self::Write => write!(f, "UART write failed"),
            Self::Clear => write!(f, "UART RX clear failed"),
        }
    }
}

/// Byte-oriented serial channel to the gas sensor.
pub trait SerialPort {
    /// Discard everything pending in the receive buffer.
    fn clear_input(&mut self) -> Result<(), SerialError>;

    /// Write the whole buffer.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SerialError>;

    /// Read up to `buf.len()` bytes; returns how many arrived before the
    /// driver timeout.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SerialError>;
}

// ───────────────────────────────────────────────────────────────
// Indicator lights
// ───────────────────────────────────────────────────────────────

/// Three-colour indicator output. `set` reflects all three flags at once
/// and is idempotent: repeating a pattern changes nothing.
pub trait IndicatorPort {
    fn set(&mut self, pattern: IndicatorPattern) -> Result<(), IndicatorError>;
}

// ───────────────────────────────────────────────────────────────
// Collector transport
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    Connect,
    Request,
    Read,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connection failed"),
            Self::Request => write!(f, "request failed"),
            Self::Read => write!(f, "response read failed"),
        }
    }
}

/// Blocking HTTP GET transport. Implementations must fully drain and close
/// the response body before returning the status code.
pub trait HttpPort {
    fn get(&mut self, url: &str) -> Result<u16, TransportError>;
}

// ───────────────────────────────────────────────────────────────
// Time
// ───────────────────────────────────────────────────────────────

/// Blocking sleep. The whole firmware is one cooperative thread; every
/// delay goes through this port so tests observe the exact schedule.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

// ───────────────────────────────────────────────────────────────
// Device context
// ───────────────────────────────────────────────────────────────

/// The explicitly owned bundle of hardware handles.
///
/// There are no process-wide singletons: `main` builds one of these and the
/// control loop lends the individual ports to each component by `&mut`.
pub struct DeviceContext<L, S, I, H, C> {
    pub link: L,
    pub serial: S,
    pub indicator: I,
    pub http: H,
    pub clock: C,
}
