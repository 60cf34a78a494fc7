//! Network attach and identity announcement.
//!
//! [`attach`] owns the bounded retry schedule: up to 120 attempts, 3 s
//! apart, red double-flash per attempt. Exhaustion disconnects the radio
//! and is fatal with no event report — nothing can be delivered without a
//! link. The success path runs exactly once per attach: green double-flash,
//! announce IP / MAC / boot marker to the collector, then light all three
//! colours as the "ready" signal (cleared by the first control cycle).

use core::fmt::Write as _;

use log::{error, info};

use crate::app::events::ReportEvent;
use crate::app::indicator::{self, IndicatorPattern};
use crate::app::ports::{Clock, DeviceContext, HttpPort, IndicatorPort, LinkPort};
use crate::app::report;
use crate::config::{
    ATTACH_MAX_ATTEMPTS, ATTACH_RETRY_DELAY, ATTEMPT_FLASH_REPEATS, MonitorConfig,
    SUCCESS_FLASH_REPEATS,
};
use crate::error::{Fault, Result};

/// Attach to the network and announce this monitor's identity.
pub fn attach<L, S, I, H, C>(
    cfg: &MonitorConfig,
    dev: &mut DeviceContext<L, S, I, H, C>,
) -> Result<()>
where
    L: LinkPort,
    I: IndicatorPort,
    H: HttpPort,
    C: Clock,
{
    let mut attempts: u32 = 0;

    while !dev.link.is_connected() {
        if attempts >= ATTACH_MAX_ATTEMPTS {
            error!("link: still down after {} attempts, giving up", attempts);
            dev.link.disconnect();
            return Err(Fault::LinkExhausted);
        }

        indicator::flash(
            &mut dev.indicator,
            &mut dev.clock,
            IndicatorPattern::RED,
            ATTEMPT_FLASH_REPEATS,
        )?;
        dev.link.connect().map_err(|e| {
            error!("link: {}", e);
            Fault::Link
        })?;
        dev.clock.sleep(ATTACH_RETRY_DELAY);
        attempts += 1;
    }

    info!("link: up after {} attempts", attempts);
    indicator::flash(
        &mut dev.indicator,
        &mut dev.clock,
        IndicatorPattern::GREEN,
        SUCCESS_FLASH_REPEATS,
    )?;

    let link = dev.link.link_info().map_err(|e| {
        error!("link: {}", e);
        Fault::Link
    })?;
    let mac = format_mac(&link.mac);
    info!("link: ip={} mac={}", link.ip, mac);

    report::report_event(cfg, &mut dev.http, ReportEvent::IpAddress(link.ip.as_str()))?;
    report::report_event(cfg, &mut dev.http, ReportEvent::MacAddress(mac.as_str()))?;
    report::report_event(cfg, &mut dev.http, ReportEvent::BootUp)?;

    // Ready signal; stays lit until the first connected cycle clears it.
    dev.indicator.set(IndicatorPattern::ALL)?;
    Ok(())
}

/// Render a MAC address the way the collector stores it:
/// colon-separated lowercase hex.
pub fn format_mac(mac: &[u8; 6]) -> heapless::String<17> {
    let mut s = heapless::String::new();
    let _ = write!(
        s,
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
    s
}
