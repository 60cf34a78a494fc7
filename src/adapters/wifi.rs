//! WiFi station adapter.
//!
//! Implements [`LinkPort`] over the blocking ESP-IDF WiFi driver. The
//! control loop owns the retry schedule, so a failed association here is
//! not an error — `connect` returns `Ok` and the caller polls
//! [`LinkPort::is_connected`]. `Err` is reserved for driver faults a retry
//! cannot fix.

use core::fmt::Write as _;

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::modem::Modem;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use log::{info, warn};

use crate::app::ports::{LinkError, LinkInfo, LinkPort};
use crate::config::MonitorConfig;

pub struct WifiLink<'a> {
    wifi: BlockingWifi<EspWifi<'a>>,
}

impl<'a> WifiLink<'a> {
    /// Bring the station interface up (started, not yet associated).
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        nvs: EspDefaultNvsPartition,
        cfg: &MonitorConfig,
    ) -> anyhow::Result<Self> {
        let esp_wifi = EspWifi::new(modem, sysloop.clone(), Some(nvs))?;
        let mut wifi = BlockingWifi::wrap(esp_wifi, sysloop)?;

        wifi.set_configuration(&Configuration::Client(ClientConfiguration {
            ssid: cfg.ssid.clone(),
            password: cfg.password.clone(),
            ..Default::default()
        }))?;
        wifi.start()?;
        info!("wifi: station started, SSID '{}'", cfg.ssid);
        Ok(Self { wifi })
    }
}

impl LinkPort for WifiLink<'_> {
    fn connect(&mut self) -> Result<(), LinkError> {
        match self.wifi.connect() {
            Ok(()) => {
                // Association succeeded; without an address the attempt
                // still counts as failed, so drop back and let the caller
                // retry on its fixed schedule.
                if self.wifi.wait_netif_up().is_err() {
                    warn!("wifi: associated but no address, dropping link");
                    let _ = self.wifi.disconnect();
                }
                Ok(())
            }
            Err(e) => {
                warn!("wifi: attempt failed ({e})");
                Ok(())
            }
        }
    }

    fn disconnect(&mut self) {
        let _ = self.wifi.disconnect();
        let _ = self.wifi.stop();
        info!("wifi: stopped");
    }

    fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false)
    }

    fn link_info(&self) -> Result<LinkInfo, LinkError> {
        if !self.is_connected() {
            return Err(LinkError::NotConnected);
        }

        let ip_info = self
            .wifi
            .wifi()
            .sta_netif()
            .get_ip_info()
            .map_err(|_| LinkError::Driver)?;
        let mut ip = heapless::String::new();
        write!(ip, "{}", ip_info.ip).map_err(|_| LinkError::Driver)?;

        // Factory MAC from eFuse — stable across reboots.
        let mut mac = [0u8; 6];
        unsafe {
            esp_idf_svc::sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
        }

        Ok(LinkInfo { ip, mac })
    }
}
