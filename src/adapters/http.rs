//! Collector HTTP adapter.
//!
//! Implements [`HttpPort`] with one short-lived connection per request —
//! the collector sees at most one request every two minutes, so keeping a
//! connection warm buys nothing. The response body is drained before the
//! status is returned so the connection closes cleanly.

use core::time::Duration;

use embedded_svc::http::client::Client;
use embedded_svc::io::Read as _;
use esp_idf_svc::http::client::{Configuration, EspHttpConnection};
use log::warn;

use crate::app::ports::{HttpPort, TransportError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct CollectorHttp;

impl CollectorHttp {
    pub fn new() -> Self {
        Self
    }
}

impl HttpPort for CollectorHttp {
    fn get(&mut self, url: &str) -> Result<u16, TransportError> {
        let connection = EspHttpConnection::new(&Configuration {
            timeout: Some(REQUEST_TIMEOUT),
            crt_bundle_attach: Some(esp_idf_svc::sys::esp_crt_bundle_attach),
            ..Default::default()
        })
        .map_err(|e| {
            warn!("http: connection setup failed ({e})");
            TransportError::Connect
        })?;
        let mut client = Client::wrap(connection);

        let request = client.get(url).map_err(|e| {
            warn!("http: request build failed ({e})");
            TransportError::Request
        })?;
        let mut response = request.submit().map_err(|e| {
            warn!("http: request failed ({e})");
            TransportError::Request
        })?;
        let status = response.status();

        // Drain whatever the collector sent back.
        let mut sink = [0u8; 128];
        loop {
            match response.read(&mut sink) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("http: response read failed ({e})");
                    return Err(TransportError::Read);
                }
            }
        }

        Ok(status)
    }
}
