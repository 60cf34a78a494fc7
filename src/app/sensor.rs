//! SenseAir S8 fixed-frame request/response protocol.
//!
//! One exchange per control cycle. The request is a fixed 7-byte Modbus
//! read command; the response carries the CO2 concentration as a big-endian
//! u16 at byte offsets 3–4. The surrounding header and checksum bytes are
//! not validated. No retry happens here — a failed exchange is fatal and the
//! next attempt is whatever the restart provides.

use log::{info, warn};

use crate::app::ports::{Clock, SerialPort};
use crate::config::{SENSOR_RESPONSE_WAIT, SENSOR_SETTLE};
use crate::error::{Result, SensorError};

/// "Read CO2" command frame (address 0xFE, function 0x44, register 0x08).
pub const REQUEST_FRAME: [u8; 7] = [0xFE, 0x44, 0x00, 0x08, 0x02, 0x9F, 0x25];

/// Both request and response are exactly this long.
pub const FRAME_LEN: usize = 7;

/// Execute one full sensor exchange and return the CO2 concentration.
///
/// Strictly ordered: clear RX → settle → write request → wait → read
/// response → parse → clear RX. The trailing clear bounds the RX backlog
/// between the 120 s cycles.
pub fn read_co2<S: SerialPort, C: Clock>(serial: &mut S, clock: &mut C) -> Result<u16> {
    serial.clear_input().map_err(|e| {
        warn!("sensor: {}", e);
        SensorError::Serial
    })?;
    clock.sleep(SENSOR_SETTLE);

    serial.write_all(&REQUEST_FRAME).map_err(|e| {
        warn!("sensor: {}", e);
        SensorError::Serial
    })?;
    clock.sleep(SENSOR_RESPONSE_WAIT);

    let mut frame = [0u8; FRAME_LEN];
    let got = serial.read(&mut frame).map_err(|e| {
        warn!("sensor: {}", e);
        SensorError::Serial
    })?;
    if got < FRAME_LEN {
        warn!("sensor: short frame, {} of {} bytes", got, FRAME_LEN);
        return Err(SensorError::ShortFrame { got }.into());
    }

    let ppm = parse_ppm(&frame);

    serial.clear_input().map_err(|e| {
        warn!("sensor: {}", e);
        SensorError::Serial
    })?;

    info!("sensor: {} ppm", ppm);
    Ok(ppm)
}

/// Concentration is big-endian at offsets 3–4 of the response frame.
pub fn parse_ppm(frame: &[u8; FRAME_LEN]) -> u16 {
    u16::from_be_bytes([frame[3], frame[4]])
}
