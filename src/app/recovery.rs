//! Crash-only fault resolution.
//!
//! Exactly one place maps a [`Fault`] to its terminal action. Components
//! never reset; they return tagged faults, the control loop propagates
//! them, and this module performs the pre-reset steps:
//!
//! - sensor fault → best-effort `Sensor_Fail` event report
//! - indicator fault → best-effort `LED_Fail` event report
//! - reporting fault with a non-200 status → fixed 60 s pause
//! - link faults → nothing (no link to report over)
//!
//! The reset call itself lives in `main`, right after [`resolve`] returns.
//! A fault inside the best-effort report is swallowed — the reset happens
//! unconditionally — except that a non-200 answer still earns the pause.

use log::error;

use crate::app::events::ReportEvent;
use crate::app::ports::{Clock, HttpPort};
use crate::app::report;
use crate::config::{MonitorConfig, STATUS_FAIL_PAUSE};
use crate::error::{Fault, ReportError};

/// Perform the pre-reset actions for `fault`.
pub fn resolve<H: HttpPort, C: Clock>(
    fault: Fault,
    cfg: &MonitorConfig,
    http: &mut H,
    clock: &mut C,
) {
    error!("fatal: {} — restarting", fault);
    match fault {
        Fault::LinkExhausted | Fault::Link => {}
        Fault::Sensor(_) => best_effort_report(cfg, http, clock, ReportEvent::SensorFail),
        Fault::Indicator(_) => best_effort_report(cfg, http, clock, ReportEvent::LedFail),
        Fault::Reporting(e) => pause_for(e, clock),
    }
}

fn best_effort_report<H: HttpPort, C: Clock>(
    cfg: &MonitorConfig,
    http: &mut H,
    clock: &mut C,
    event: ReportEvent<'_>,
) {
    if let Err(Fault::Reporting(e)) = report::report_event(cfg, http, event) {
        pause_for(e, clock);
    }
}

fn pause_for<C: Clock>(error: ReportError, clock: &mut C) {
    if matches!(error, ReportError::Status(_)) {
        clock.sleep(STATUS_FAIL_PAUSE);
    }
}
