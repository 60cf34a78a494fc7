//! Indicator LED adapter.
//!
//! Three discrete LEDs on push-pull GPIO outputs, active HIGH. Implements
//! [`IndicatorPort`] by reflecting all three flags on every call; setting
//! the pattern that is already lit is a no-op at the pin level.

use esp_idf_svc::hal::gpio::{AnyOutputPin, Output, PinDriver};
use log::warn;

use crate::app::indicator::IndicatorPattern;
use crate::app::ports::IndicatorPort;
use crate::error::IndicatorError;

type Led<'d> = PinDriver<'d, AnyOutputPin, Output>;

pub struct IndicatorLeds<'d> {
    red: Led<'d>,
    yellow: Led<'d>,
    green: Led<'d>,
    current: IndicatorPattern,
}

impl<'d> IndicatorLeds<'d> {
    pub fn new(
        red: AnyOutputPin,
        yellow: AnyOutputPin,
        green: AnyOutputPin,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            red: PinDriver::output(red)?,
            yellow: PinDriver::output(yellow)?,
            green: PinDriver::output(green)?,
            current: IndicatorPattern::OFF,
        })
    }

    pub fn current_pattern(&self) -> IndicatorPattern {
        self.current
    }
}

fn drive(led: &mut Led<'_>, on: bool) -> Result<(), IndicatorError> {
    let result = if on { led.set_high() } else { led.set_low() };
    result.map_err(|e| {
        warn!("leds: GPIO write failed ({e})");
        IndicatorError::GpioWriteFailed
    })
}

impl IndicatorPort for IndicatorLeds<'_> {
    fn set(&mut self, pattern: IndicatorPattern) -> Result<(), IndicatorError> {
        drive(&mut self.red, pattern.red)?;
        drive(&mut self.yellow, pattern.yellow)?;
        drive(&mut self.green, pattern.green)?;
        self.current = pattern;
        Ok(())
    }
}
