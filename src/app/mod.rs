//! Hardware-agnostic control logic.
//!
//! Everything in this module builds and tests on the host; the ESP-IDF
//! adapters satisfy the port traits on the device.

pub mod connect;
pub mod events;
pub mod indicator;
pub mod ports;
pub mod recovery;
pub mod report;
pub mod sensor;
pub mod service;
