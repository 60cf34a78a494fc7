//! The control loop.
//!
//! [`Monitor`] owns the identity config and the warm-up counter, and
//! coordinates the components over the port traits:
//!
//! ```text
//!  LinkPort ────▶ ┌──────────────────────────┐ ───▶ IndicatorPort
//!  SerialPort ──▶ │         Monitor          │ ───▶ HttpPort
//!                 │  attach · read · report  │
//!                 └──────────────────────────┘
//! ```
//!
//! Execution is one cooperative thread: every sleep and every I/O call
//! blocks, so ordering within a cycle is fully deterministic. No fault is
//! handled here — [`run`] returns the first [`Fault`] and the caller
//! resolves it (report-if-possible, then hard reset).
//!
//! [`run`]: Monitor::run

use log::{debug, info};

use crate::app::connect;
use crate::app::indicator::{self, IndicatorPattern};
use crate::app::ports::{Clock, DeviceContext, HttpPort, IndicatorPort, LinkPort, SerialPort};
use crate::app::report;
use crate::app::sensor;
use crate::config::{CYCLE_INTERVAL, MonitorConfig, OFFLINE_GRACE, WARMUP_CYCLES};
use crate::error::{Fault, Result};

pub struct Monitor {
    cfg: MonitorConfig,
    /// Connected cycles completed so far. Monotonic within a process
    /// lifetime; only a restart returns it to zero.
    reading_count: u32,
}

impl Monitor {
    pub fn new(cfg: MonitorConfig) -> Self {
        Self {
            cfg,
            reading_count: 0,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.cfg
    }

    pub fn reading_count(&self) -> u32 {
        self.reading_count
    }

    /// Run the startup sequence, then loop until something fails.
    ///
    /// Never returns success — the only exits are faults, and every fault
    /// ends in a restart.
    pub fn run<L, S, I, H, C>(&mut self, dev: &mut DeviceContext<L, S, I, H, C>) -> Fault
    where
        L: LinkPort,
        S: SerialPort,
        I: IndicatorPort,
        H: HttpPort,
        C: Clock,
    {
        info!("monitor {}: starting", self.cfg.monitor_id);
        if let Err(fault) = indicator::startup_sequence(&mut dev.indicator, &mut dev.clock) {
            return fault;
        }
        loop {
            if let Err(fault) = self.cycle(dev) {
                return fault;
            }
        }
    }

    /// One iteration of the control loop.
    ///
    /// Connected: after the warm-up gate opens, clear the indicator, read
    /// the sensor, display and submit the reading; count the cycle and
    /// sleep the fixed cadence either way. Disconnected: short grace sleep,
    /// then re-attach.
    pub fn cycle<L, S, I, H, C>(
        &mut self,
        dev: &mut DeviceContext<L, S, I, H, C>,
    ) -> Result<()>
    where
        L: LinkPort,
        S: SerialPort,
        I: IndicatorPort,
        H: HttpPort,
        C: Clock,
    {
        if dev.link.is_connected() {
            if self.reading_count > WARMUP_CYCLES {
                dev.indicator.set(IndicatorPattern::OFF)?;
                let ppm = sensor::read_co2(&mut dev.serial, &mut dev.clock)?;
                indicator::show_reading(&mut dev.indicator, &mut dev.clock, ppm)?;
                report::submit_reading(&self.cfg, &mut dev.http, ppm)?;
            } else {
                debug!(
                    "warm-up cycle {} of {}, reading skipped",
                    self.reading_count + 1,
                    WARMUP_CYCLES + 1
                );
            }
            self.reading_count += 1;
            dev.clock.sleep(CYCLE_INTERVAL);
        } else {
            dev.clock.sleep(OFFLINE_GRACE);
            connect::attach(&self.cfg, dev)?;
        }
        Ok(())
    }
}
