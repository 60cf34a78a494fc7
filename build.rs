fn main() {
    // No-op on host targets; exports the ESP-IDF build environment when
    // cross-compiling for the device.
    embuild::espidf::sysenv::output();
}
