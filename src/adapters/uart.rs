//! Sensor UART adapter.
//!
//! Implements [`SerialPort`] over the blocking ESP-IDF UART driver,
//! configured for the SenseAir S8: 9600 baud, 8N1.

use core::time::Duration;

use esp_idf_svc::hal::delay::TickType;
use esp_idf_svc::hal::gpio::AnyIOPin;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::config::{Config, DataBits, StopBits};
use esp_idf_svc::hal::uart::{Uart, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use log::warn;

use crate::app::ports::{SerialError, SerialPort};
use crate::pins::SENSOR_UART_BAUD;

/// The response frame is buffered during the fixed post-request wait, so
/// reads only need a short driver timeout on top.
const READ_TIMEOUT: Duration = Duration::from_millis(250);

pub struct SensorUart<'d> {
    uart: UartDriver<'d>,
}

impl<'d> SensorUart<'d> {
    pub fn new<U: Uart>(
        uart: impl Peripheral<P = U> + 'd,
        tx: AnyIOPin,
        rx: AnyIOPin,
    ) -> anyhow::Result<Self> {
        let config = Config::new()
            .baudrate(Hertz(SENSOR_UART_BAUD))
            .data_bits(DataBits::DataBits8)
            .parity_none()
            .stop_bits(StopBits::STOP1);
        let uart = UartDriver::new(
            uart,
            tx,
            rx,
            Option::<AnyIOPin>::None,
            Option::<AnyIOPin>::None,
            &config,
        )?;
        Ok(Self { uart })
    }
}

impl SerialPort for SensorUart<'_> {
    fn clear_input(&mut self) -> Result<(), SerialError> {
        self.uart.clear_rx().map_err(|e| {
            warn!("uart: clear_rx failed ({e})");
            SerialError::Clear
        })
    }

    fn write_all(&mut self, mut bytes: &[u8]) -> Result<(), SerialError> {
        while !bytes.is_empty() {
            let written = self.uart.write(bytes).map_err(|e| {
                warn!("uart: write failed ({e})");
                SerialError::Write
            })?;
            if written == 0 {
                return Err(SerialError::Write);
            }
            bytes = &bytes[written..];
        }
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        self.uart
            .read(buf, TickType::from(READ_TIMEOUT).ticks())
            .map_err(|e| {
                warn!("uart: read failed ({e})");
                SerialError::Read
            })
    }
}
