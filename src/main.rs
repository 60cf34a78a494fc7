//! CO2 monitor firmware — main entry point.
//!
//! Wires the ESP-IDF adapters into the [`DeviceContext`], hands everything
//! to the control loop and waits for it to fail. All exits converge on the
//! hard reset: bring-up errors, control-loop faults and (via the ESP-IDF
//! panic handler) anything that panics.

use anyhow::Context;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::gpio::{AnyIOPin, AnyOutputPin};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use log::info;

use co2mon::adapters::http::CollectorHttp;
use co2mon::adapters::leds::IndicatorLeds;
use co2mon::adapters::time::StdClock;
use co2mon::adapters::uart::SensorUart;
use co2mon::adapters::wifi::WifiLink;
use co2mon::adapters::reset;
use co2mon::app::ports::DeviceContext;
use co2mon::app::recovery;
use co2mon::app::service::Monitor;
use co2mon::config::MonitorConfig;
use co2mon::pins;

// ── Per-site deployment values ────────────────────────────────

const WIFI_SSID: &str = "ClassroomWiFi";
const WIFI_PASSWORD: &str = "change-me";
const MONITOR_ID: &str = "MON_101";
const AUTH_CODE: &str = "CHANGEME";
const COLLECTOR_BASE_URL: &str = "https://co2.example.org";

// ── Main ──────────────────────────────────────────────────────

fn main() {
    esp_idf_svc::sys::link_patches();

    if let Err(e) = run() {
        // Logger may not be up yet; stderr reaches the console either way.
        eprintln!("co2mon: bring-up failed: {e:#}");
    }
    reset::hard_reset();
}

fn run() -> anyhow::Result<()> {
    esp_idf_logger::init()?;
    info!("co2mon v{} starting", env!("CARGO_PKG_VERSION"));

    let peripherals = Peripherals::take().context("peripherals already taken")?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    let cfg = MonitorConfig::new(
        WIFI_SSID,
        WIFI_PASSWORD,
        MONITOR_ID,
        AUTH_CODE,
        COLLECTOR_BASE_URL,
    )
    .map_err(anyhow::Error::msg)?;

    // SAFETY: pin numbers come from `pins` and are used exactly once each.
    let (uart_tx, uart_rx, led_red, led_yellow, led_green) = unsafe {
        (
            AnyIOPin::new(pins::SENSOR_UART_TX_GPIO),
            AnyIOPin::new(pins::SENSOR_UART_RX_GPIO),
            AnyOutputPin::new(pins::LED_RED_GPIO),
            AnyOutputPin::new(pins::LED_YELLOW_GPIO),
            AnyOutputPin::new(pins::LED_GREEN_GPIO),
        )
    };

    let mut dev = DeviceContext {
        link: WifiLink::new(peripherals.modem, sysloop, nvs, &cfg)?,
        serial: SensorUart::new(peripherals.uart1, uart_tx, uart_rx)?,
        indicator: IndicatorLeds::new(led_red, led_yellow, led_green)?,
        http: CollectorHttp::new(),
        clock: StdClock::new(),
    };

    let mut monitor = Monitor::new(cfg);
    let fault = monitor.run(&mut dev);

    // Terminal: best-effort report and the fixed non-200 pause, then the
    // caller resets.
    recovery::resolve(fault, monitor.config(), &mut dev.http, &mut dev.clock);
    Ok(())
}
