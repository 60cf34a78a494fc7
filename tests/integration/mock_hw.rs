//! Mock port implementations for integration tests.
//!
//! Every mock records its full call history so tests can assert on exact
//! ordering and counts without touching real hardware.

use std::collections::VecDeque;

use core::time::Duration;

use co2mon::app::indicator::IndicatorPattern;
use co2mon::app::ports::{
    Clock, DeviceContext, HttpPort, IndicatorPort, LinkError, LinkInfo, LinkPort, SerialError,
    SerialPort, TransportError,
};
use co2mon::config::MonitorConfig;
use co2mon::error::IndicatorError;

// ── Indicator ─────────────────────────────────────────────────

pub struct MockIndicator {
    /// Every pattern passed to `set`, in order.
    pub sets: Vec<IndicatorPattern>,
    pub current: IndicatorPattern,
    /// When true, every `set` fails.
    pub fail: bool,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            sets: Vec::new(),
            current: IndicatorPattern::OFF,
            fail: false,
        }
    }
}

impl IndicatorPort for MockIndicator {
    fn set(&mut self, pattern: IndicatorPattern) -> Result<(), IndicatorError> {
        if self.fail {
            return Err(IndicatorError::GpioWriteFailed);
        }
        self.sets.push(pattern);
        self.current = pattern;
        Ok(())
    }
}

// ── Serial ────────────────────────────────────────────────────

pub struct MockSerial {
    /// Bytes handed out by every `read` call (replayed, not consumed).
    pub response: Vec<u8>,
    pub writes: Vec<Vec<u8>>,
    pub clears: usize,
    pub fail_write: bool,
}

impl MockSerial {
    /// A well-formed 7-byte response carrying `ppm`.
    pub fn answering(ppm: u16) -> Self {
        let [hi, lo] = ppm.to_be_bytes();
        Self {
            response: vec![0xFE, 0x44, 0x02, hi, lo, 0x00, 0x00],
            writes: Vec::new(),
            clears: 0,
            fail_write: false,
        }
    }

    pub fn answering_bytes(response: &[u8]) -> Self {
        Self {
            response: response.to_vec(),
            writes: Vec::new(),
            clears: 0,
            fail_write: false,
        }
    }
}

impl SerialPort for MockSerial {
    fn clear_input(&mut self) -> Result<(), SerialError> {
        self.clears += 1;
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        if self.fail_write {
            return Err(SerialError::Write);
        }
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        let n = self.response.len().min(buf.len());
        buf[..n].copy_from_slice(&self.response[..n]);
        Ok(n)
    }
}

// ── Clock ─────────────────────────────────────────────────────

pub struct MockClock {
    pub sleeps: Vec<Duration>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { sleeps: Vec::new() }
    }
}

impl Clock for MockClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

// ── Link ──────────────────────────────────────────────────────

pub struct MockLink {
    pub connected: bool,
    pub connect_calls: u32,
    /// `Some(n)`: the n-th `connect` call (1-based) brings the link up.
    pub succeed_on_attempt: Option<u32>,
    /// When true, `connect` reports an unrecoverable driver fault.
    pub driver_fault: bool,
    pub disconnects: u32,
    pub ip: &'static str,
    pub mac: [u8; 6],
}

impl MockLink {
    pub fn down() -> Self {
        Self {
            connected: false,
            connect_calls: 0,
            succeed_on_attempt: None,
            driver_fault: false,
            disconnects: 0,
            ip: "192.168.4.17",
            mac: [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE],
        }
    }

    pub fn up() -> Self {
        Self {
            connected: true,
            ..Self::down()
        }
    }
}

impl LinkPort for MockLink {
    fn connect(&mut self) -> Result<(), LinkError> {
        self.connect_calls += 1;
        if self.driver_fault {
            return Err(LinkError::Driver);
        }
        if self.succeed_on_attempt == Some(self.connect_calls) {
            self.connected = true;
        }
        Ok(())
    }

    fn disconnect(&mut self) {
        self.disconnects += 1;
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn link_info(&self) -> Result<LinkInfo, LinkError> {
        if !self.connected {
            return Err(LinkError::NotConnected);
        }
        Ok(LinkInfo {
            ip: self.ip.try_into().unwrap(),
            mac: self.mac,
        })
    }
}

// ── HTTP ──────────────────────────────────────────────────────

pub struct MockHttp {
    /// Every requested URL, in order.
    pub urls: Vec<String>,
    /// Scripted answers, popped per request; empty means 200.
    pub script: VecDeque<Result<u16, TransportError>>,
}

impl MockHttp {
    pub fn ok() -> Self {
        Self {
            urls: Vec::new(),
            script: VecDeque::new(),
        }
    }

    pub fn answering(statuses: &[Result<u16, TransportError>]) -> Self {
        Self {
            urls: Vec::new(),
            script: statuses.iter().copied().collect(),
        }
    }
}

impl HttpPort for MockHttp {
    fn get(&mut self, url: &str) -> Result<u16, TransportError> {
        self.urls.push(url.to_owned());
        self.script.pop_front().unwrap_or(Ok(200))
    }
}

// ── Assembled context ─────────────────────────────────────────

pub type TestContext = DeviceContext<MockLink, MockSerial, MockIndicator, MockHttp, MockClock>;

/// A context with the link up and the sensor answering `ppm`.
pub fn device_up(ppm: u16) -> TestContext {
    DeviceContext {
        link: MockLink::up(),
        serial: MockSerial::answering(ppm),
        indicator: MockIndicator::new(),
        http: MockHttp::ok(),
        clock: MockClock::new(),
    }
}

/// A context with the link down and nothing scripted.
pub fn device_down() -> TestContext {
    DeviceContext {
        link: MockLink::down(),
        serial: MockSerial::answering(600),
        indicator: MockIndicator::new(),
        http: MockHttp::ok(),
        clock: MockClock::new(),
    }
}

pub fn test_config() -> MonitorConfig {
    MonitorConfig::new(
        "ClassroomWiFi",
        "correct-horse",
        "MON_101",
        "A1B2C3D4",
        "https://c.example.org",
    )
    .unwrap()
}
