//! GPIO / peripheral pin assignments for the monitor board.
//!
//! Single source of truth — every adapter references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Indicator LEDs (discrete, active HIGH through series resistors)
// ---------------------------------------------------------------------------

pub const LED_GREEN_GPIO: i32 = 25;
pub const LED_YELLOW_GPIO: i32 = 26;
pub const LED_RED_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// CO2 sensor UART (SenseAir S8, 9600 8N1)
// ---------------------------------------------------------------------------

pub const SENSOR_UART_TX_GPIO: i32 = 17;
pub const SENSOR_UART_RX_GPIO: i32 = 16;
pub const SENSOR_UART_BAUD: u32 = 9600;
