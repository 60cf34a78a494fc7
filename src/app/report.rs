//! Best-effort reporting to the remote collector.
//!
//! Readings and events go out as single HTTP GET requests against the
//! collector's PHP endpoints. There is no retry, no backoff and no
//! batching: a non-200 status or a transport failure is a [`Fault`] and the
//! device restarts. Missed readings are never buffered or resent.
//!
//! [`Fault`]: crate::error::Fault

use core::fmt::Write as _;

use log::{info, warn};

use crate::app::events::ReportEvent;
use crate::app::ports::HttpPort;
use crate::config::MonitorConfig;
use crate::error::{ReportError, Result};

/// Fits the longest endpoint URL with every parameter at capacity.
type Url = heapless::String<192>;

/// Submit one CO2 reading to the collector.
pub fn submit_reading<H: HttpPort>(cfg: &MonitorConfig, http: &mut H, ppm: u16) -> Result<()> {
    let mut url = Url::new();
    write!(
        url,
        "{}/mon/readingsubmit.php?auth={}&monid={}&val={}",
        cfg.base_url, cfg.auth_code, cfg.monitor_id, ppm
    )
    .map_err(|_| ReportError::UrlOverflow)?;

    info!("report: reading {} ppm", ppm);
    dispatch(http, &url)
}

/// Report one lifecycle or fault event to the collector.
pub fn report_event<H: HttpPort>(
    cfg: &MonitorConfig,
    http: &mut H,
    event: ReportEvent<'_>,
) -> Result<()> {
    let mut url = Url::new();
    write!(
        url,
        "{}/mon/eventreport.php?auth={}&monid={}&eventid={}&eventinfo={}",
        cfg.base_url,
        cfg.auth_code,
        cfg.monitor_id,
        event.code(),
        event.info()
    )
    .map_err(|_| ReportError::UrlOverflow)?;

    info!("report: {}", event);
    dispatch(http, &url)
}

/// Single-attempt GET with the uniform status policy: 200 is success,
/// anything else is a reporting fault carrying the status code.
fn dispatch<H: HttpPort>(http: &mut H, url: &str) -> Result<()> {
    match http.get(url) {
        Ok(200) => Ok(()),
        Ok(status) => {
            warn!("report: collector answered {}", status);
            Err(ReportError::Status(status).into())
        }
        Err(e) => {
            warn!("report: {}", e);
            Err(ReportError::Transport.into())
        }
    }
}
