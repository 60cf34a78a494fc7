//! Crash-only recovery scenarios: every fault ends in a reset request, and
//! the pre-reset actions (best-effort event report, 60 s non-200 pause)
//! follow the fault kind exactly.
//!
//! The reset itself lives in `main`, immediately after
//! `recovery::resolve` returns — resolving exactly once per fault is what
//! these tests pin down.

use co2mon::app::ports::TransportError;
use co2mon::app::recovery;
use co2mon::app::service::Monitor;
use co2mon::config::STATUS_FAIL_PAUSE;
use co2mon::error::{Fault, ReportError, SensorError};

use crate::mock_hw::{device_up, test_config, MockHttp, MockSerial};

/// Step past the warm-up gate so the next cycle reads and submits.
fn warmed(dev: &mut crate::mock_hw::TestContext) -> Monitor {
    let mut monitor = Monitor::new(test_config());
    for _ in 0..3 {
        monitor.cycle(dev).unwrap();
    }
    monitor
}

// ── Reporting faults ──────────────────────────────────────────

#[test]
fn submit_503_pauses_once_then_resets_without_retry() {
    let mut dev = device_up(800);
    let mut monitor = warmed(&mut dev);
    dev.http = MockHttp::answering(&[Ok(503)]);

    let fault = monitor.cycle(&mut dev).unwrap_err();
    assert_eq!(fault, Fault::Reporting(ReportError::Status(503)));
    assert_eq!(dev.http.urls.len(), 1, "the submission itself is never retried");

    recovery::resolve(fault, monitor.config(), &mut dev.http, &mut dev.clock);

    assert_eq!(dev.http.urls.len(), 1, "a reporting fault reports nothing further");
    let pauses = dev
        .clock
        .sleeps
        .iter()
        .filter(|d| **d == STATUS_FAIL_PAUSE)
        .count();
    assert_eq!(pauses, 1, "exactly one 60 s pause before the reset");
}

#[test]
fn transport_failure_resets_with_no_pause() {
    let mut dev = device_up(800);
    let mut monitor = warmed(&mut dev);
    dev.http = MockHttp::answering(&[Err(TransportError::Connect)]);

    let fault = monitor.cycle(&mut dev).unwrap_err();
    assert_eq!(fault, Fault::Reporting(ReportError::Transport));

    recovery::resolve(fault, monitor.config(), &mut dev.http, &mut dev.clock);

    assert!(!dev.clock.sleeps.contains(&STATUS_FAIL_PAUSE));
}

// ── Sensor faults ─────────────────────────────────────────────

#[test]
fn short_frame_reports_sensor_fail_then_resets() {
    let mut dev = device_up(0);
    dev.serial = MockSerial::answering_bytes(&[0xFE, 0x44, 0x02]);
    let mut monitor = warmed(&mut dev);

    let fault = monitor.cycle(&mut dev).unwrap_err();
    assert_eq!(fault, Fault::Sensor(SensorError::ShortFrame { got: 3 }));
    assert!(dev.http.urls.is_empty(), "nothing submitted for a failed read");

    recovery::resolve(fault, monitor.config(), &mut dev.http, &mut dev.clock);

    assert_eq!(dev.http.urls.len(), 1);
    assert!(dev.http.urls[0].ends_with("&eventid=4&eventinfo=Sensor_Fail"));
}

#[test]
fn sensor_fail_report_transport_failure_still_resets() {
    let mut dev = device_up(0);
    dev.serial = MockSerial::answering_bytes(&[0xAA]);
    let mut monitor = warmed(&mut dev);

    let fault = monitor.cycle(&mut dev).unwrap_err();
    dev.http = MockHttp::answering(&[Err(TransportError::Connect)]);

    // Must return normally (the caller resets unconditionally) and must
    // not add the non-200 pause for a transport failure.
    recovery::resolve(fault, monitor.config(), &mut dev.http, &mut dev.clock);
    assert_eq!(dev.http.urls.len(), 1, "the report was attempted");
    assert!(!dev.clock.sleeps.contains(&STATUS_FAIL_PAUSE));
}

#[test]
fn sensor_fail_report_non_200_still_earns_the_pause() {
    let mut dev = device_up(0);
    dev.serial = MockSerial::answering_bytes(&[]);
    let mut monitor = warmed(&mut dev);

    let fault = monitor.cycle(&mut dev).unwrap_err();
    dev.http = MockHttp::answering(&[Ok(500)]);

    recovery::resolve(fault, monitor.config(), &mut dev.http, &mut dev.clock);
    assert!(dev.clock.sleeps.contains(&STATUS_FAIL_PAUSE));
}

// ── Indicator faults ──────────────────────────────────────────

#[test]
fn indicator_fault_reports_led_fail_then_resets() {
    let mut dev = device_up(700);
    let mut monitor = warmed(&mut dev);
    dev.indicator.fail = true;

    let fault = monitor.cycle(&mut dev).unwrap_err();
    assert!(matches!(fault, Fault::Indicator(_)));

    recovery::resolve(fault, monitor.config(), &mut dev.http, &mut dev.clock);
    assert!(dev.http.urls.last().unwrap().ends_with("&eventid=5&eventinfo=LED_Fail"));
}

// ── Link faults ───────────────────────────────────────────────

#[test]
fn link_faults_reset_silently() {
    let mut dev = device_up(0);
    let monitor = Monitor::new(test_config());

    for fault in [Fault::LinkExhausted, Fault::Link] {
        recovery::resolve(fault, monitor.config(), &mut dev.http, &mut dev.clock);
    }

    assert!(dev.http.urls.is_empty());
    assert!(dev.clock.sleeps.is_empty());
}
