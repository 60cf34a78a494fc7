//! The hard-reset primitive.
//!
//! Restarting the chip is the firmware's only recovery action. The call is
//! irrevocable: nothing after it executes, and the process restarts from
//! zero state.

/// Restart the device. Never returns.
#[cfg(target_os = "espidf")]
pub fn hard_reset() -> ! {
    log::warn!("hard reset");
    unsafe { esp_idf_svc::sys::esp_restart() };
    unreachable!("esp_restart returned");
}

/// Host stand-in: terminate the process. A supervisor (or the test harness)
/// plays the role of the boot ROM.
#[cfg(not(target_os = "espidf"))]
pub fn hard_reset() -> ! {
    log::warn!("hard reset");
    std::process::exit(1);
}
