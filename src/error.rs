//! Unified fault types for the CO2 monitor firmware.
//!
//! Crash-only discipline: no fault is ever handled where it is detected.
//! Every fallible routine returns a tagged [`Fault`], the control loop
//! propagates it outward unchanged, and a single resolver performs the
//! terminal report-then-reset action. All variants are `Copy` so they pass
//! through the loop without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level fault
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// All 120 network-attach attempts failed.
    LinkExhausted,
    /// Any other failure on the attach path (driver fault, link info read).
    Link,
    /// The sensor exchange failed or returned a malformed frame.
    Sensor(SensorError),
    /// A collector request failed.
    Reporting(ReportError),
    /// The indicator outputs could not be driven.
    Indicator(IndicatorError),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkExhausted => write!(f, "link: attach attempts exhausted"),
            Self::Link => write!(f, "link: attach failed"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Reporting(e) => write!(f, "reporting: {e}"),
            Self::Indicator(e) => write!(f, "indicator: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor faults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The serial write or read returned an error.
    Serial,
    /// Fewer than the expected 7 response bytes arrived.
    ShortFrame { got: usize },
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "serial I/O failed"),
            Self::ShortFrame { got } => write!(f, "short response frame ({got} of 7 bytes)"),
        }
    }
}

impl From<SensorError> for Fault {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Reporting faults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// The collector answered with a non-200 status.
    Status(u16),
    /// The request never completed (timeout, connection error).
    Transport,
    /// The assembled URL exceeded the fixed buffer.
    UrlOverflow,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "collector returned status {code}"),
            Self::Transport => write!(f, "transport failed"),
            Self::UrlOverflow => write!(f, "URL buffer overflow"),
        }
    }
}

impl From<ReportError> for Fault {
    fn from(e: ReportError) -> Self {
        Self::Reporting(e)
    }
}

// ---------------------------------------------------------------------------
// Indicator faults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorError {
    /// A GPIO write to one of the three lights failed.
    GpioWriteFailed,
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<IndicatorError> for Fault {
    fn from(e: IndicatorError) -> Self {
        Self::Indicator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Fault>;
