//! Hardware adapters.
//!
//! Each module implements one port trait over an ESP-IDF driver. Everything
//! except the clock and the reset shim is compiled for the device only —
//! host builds exercise the domain core against the mock ports in
//! `tests/integration/`.

pub mod reset;
pub mod time;

#[cfg(target_os = "espidf")]
pub mod http;
#[cfg(target_os = "espidf")]
pub mod leds;
#[cfg(target_os = "espidf")]
pub mod uart;
#[cfg(target_os = "espidf")]
pub mod wifi;
