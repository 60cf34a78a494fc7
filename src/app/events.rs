//! Lifecycle and fault events reported to the collector.
//!
//! The event vocabulary is a small closed set with fixed wire codes; the
//! collector keys its log on the numeric `eventid`. Events are transient —
//! they exist only for the duration of one report attempt.

use core::fmt;

/// An event and its payload, as sent to the collector's event endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportEvent<'a> {
    /// Assigned IP address, announced once per successful attach.
    IpAddress(&'a str),
    /// Station MAC address, announced once per successful attach.
    MacAddress(&'a str),
    /// Boot marker, announced after the address events.
    BootUp,
    /// The sensor exchange failed; sent just before the reset.
    SensorFail,
    /// The indicator outputs failed; sent just before the reset.
    LedFail,
}

impl<'a> ReportEvent<'a> {
    /// Fixed wire code for the `eventid` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Self::IpAddress(_) => "1",
            Self::MacAddress(_) => "2",
            Self::BootUp => "3",
            Self::SensorFail => "4",
            Self::LedFail => "5",
        }
    }

    /// Payload for the `eventinfo` query parameter.
    pub fn info(&self) -> &'a str {
        match self {
            Self::IpAddress(ip) => ip,
            Self::MacAddress(mac) => mac,
            Self::BootUp => "Boot_Up",
            Self::SensorFail => "Sensor_Fail",
            Self::LedFail => "LED_Fail",
        }
    }
}

impl fmt::Display for ReportEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {} ({})", self.code(), self.info())
    }
}
