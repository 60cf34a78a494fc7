//! Monitor configuration.
//!
//! [`MonitorConfig`] carries the static identity handed to the firmware at
//! startup: network credentials, the monitor ID, the collector auth code and
//! base URL. It is immutable for the process lifetime — the control loop
//! owns it and lends it to the other components.
//!
//! The timing and retry schedules are fixed product constants, not tunables;
//! they live here as the single source of truth.

use core::time::Duration;

use serde::{Deserialize, Serialize};

// --- Connectivity schedule ---
/// Network-attach attempts before giving up and restarting.
pub const ATTACH_MAX_ATTEMPTS: u32 = 120;
/// Pause between attach attempts.
pub const ATTACH_RETRY_DELAY: Duration = Duration::from_secs(3);
/// Red flashes per attach attempt ("trying" signal).
pub const ATTEMPT_FLASH_REPEATS: u32 = 2;
/// Green flashes on a successful attach.
pub const SUCCESS_FLASH_REPEATS: u32 = 2;

// --- Sensor protocol ---
/// Settle time after clearing the receive buffer, before the request frame.
pub const SENSOR_SETTLE: Duration = Duration::from_millis(500);
/// Wait for the sensor to assemble its response frame.
pub const SENSOR_RESPONSE_WAIT: Duration = Duration::from_millis(500);

// --- Control loop ---
/// Pause between connected cycles.
pub const CYCLE_INTERVAL: Duration = Duration::from_secs(120);
/// Grace pause before re-attaching when the link is down.
pub const OFFLINE_GRACE: Duration = Duration::from_secs(10);
/// Connected cycles discarded before the first reading (sensor warm-up).
/// The gate is `reading_count > WARMUP_CYCLES`, so counts 0, 1 and 2 are
/// all skipped and the fourth cycle performs the first read.
pub const WARMUP_CYCLES: u32 = 2;

// --- Indicator ---
/// Half-period of every flash routine: light on 0.5 s, off 0.5 s.
pub const FLASH_HALF_PERIOD: Duration = Duration::from_millis(500);
/// All-colour flashes announcing a fresh reading.
pub const READING_FLASH_REPEATS: u32 = 3;

// --- Reporting ---
/// Pause applied when the collector answers non-200, before the reset.
pub const STATUS_FAIL_PAUSE: Duration = Duration::from_secs(60);

/// Static monitor identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// WiFi network name.
    pub ssid: heapless::String<32>,
    /// WiFi passphrase (empty for an open network).
    pub password: heapless::String<64>,
    /// Monitor identifier known to the collector, e.g. `MON_101`.
    pub monitor_id: heapless::String<16>,
    /// Collector authorization token.
    pub auth_code: heapless::String<16>,
    /// Collector base URL, no trailing slash, e.g. `https://example.org`.
    pub base_url: heapless::String<64>,
}

impl MonitorConfig {
    /// Build a config, rejecting values that exceed the fixed capacities.
    pub fn new(
        ssid: &str,
        password: &str,
        monitor_id: &str,
        auth_code: &str,
        base_url: &str,
    ) -> core::result::Result<Self, &'static str> {
        Ok(Self {
            ssid: ssid.try_into().map_err(|()| "SSID too long")?,
            password: password.try_into().map_err(|()| "password too long")?,
            monitor_id: monitor_id.try_into().map_err(|()| "monitor ID too long")?,
            auth_code: auth_code.try_into().map_err(|()| "auth code too long")?,
            base_url: base_url.try_into().map_err(|()| "base URL too long")?,
        })
    }
}
