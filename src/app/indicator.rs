//! Three-colour indicator control.
//!
//! The indicator is the only local output channel: steady patterns classify
//! the most recent reading, flash patterns signal startup, connectivity
//! retries and fresh readings. All timing goes through the [`Clock`] port so
//! the 0.5 s flash cadence is observable in tests.

use log::debug;

use crate::app::ports::{Clock, IndicatorPort};
use crate::config::{FLASH_HALF_PERIOD, READING_FLASH_REPEATS};
use crate::error::Result;

/// One output state of the three lights. Any combination is legal to set;
/// classification only ever produces single-flag patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorPattern {
    pub red: bool,
    pub yellow: bool,
    pub green: bool,
}

impl IndicatorPattern {
    pub const OFF: Self = Self { red: false, yellow: false, green: false };
    pub const RED: Self = Self { red: true, yellow: false, green: false };
    pub const YELLOW: Self = Self { red: false, yellow: true, green: false };
    pub const GREEN: Self = Self { red: false, yellow: false, green: true };
    pub const ALL: Self = Self { red: true, yellow: true, green: true };

    /// Classify a CO2 reading into a single-colour pattern.
    ///
    /// Thresholds are the deployed product bands: below 1000 ppm green,
    /// 1000–1499 yellow, above 1501 red. 1500 and 1501 fall in no band —
    /// the lights stay cleared there until the thresholds are corrected at
    /// the product level.
    pub fn for_ppm(ppm: u16) -> Option<Self> {
        if ppm < 1000 {
            Some(Self::GREEN)
        } else if ppm < 1500 {
            Some(Self::YELLOW)
        } else if ppm > 1501 {
            Some(Self::RED)
        } else {
            None
        }
    }
}

/// Flash `pattern` `repeats` times: asserted for 0.5 s, cleared for 0.5 s.
pub fn flash<I: IndicatorPort, C: Clock>(
    indicator: &mut I,
    clock: &mut C,
    pattern: IndicatorPattern,
    repeats: u32,
) -> Result<()> {
    for _ in 0..repeats {
        indicator.set(pattern)?;
        clock.sleep(FLASH_HALF_PERIOD);
        indicator.set(IndicatorPattern::OFF)?;
        clock.sleep(FLASH_HALF_PERIOD);
    }
    Ok(())
}

/// Power-on self-test: each colour individually for 0.5 s, then off.
/// Runs before connectivity is up, so a dead light is visible on site
/// even when nothing can be reported yet.
pub fn startup_sequence<I: IndicatorPort, C: Clock>(
    indicator: &mut I,
    clock: &mut C,
) -> Result<()> {
    for pattern in [
        IndicatorPattern::GREEN,
        IndicatorPattern::YELLOW,
        IndicatorPattern::RED,
        IndicatorPattern::OFF,
    ] {
        indicator.set(pattern)?;
        clock.sleep(FLASH_HALF_PERIOD);
    }
    Ok(())
}

/// Announce and display a fresh reading: flash all three colours, then
/// assert the classification band (if any).
pub fn show_reading<I: IndicatorPort, C: Clock>(
    indicator: &mut I,
    clock: &mut C,
    ppm: u16,
) -> Result<()> {
    flash(indicator, clock, IndicatorPattern::ALL, READING_FLASH_REPEATS)?;
    match IndicatorPattern::for_ppm(ppm) {
        Some(pattern) => indicator.set(pattern)?,
        None => debug!("ppm {} matches no band, lights stay cleared", ppm),
    }
    Ok(())
}
