//! Preloaded into the vendor fingerprint HAL so that it sees an unlocked
//! bootloader and an orange verified boot state. `__system_property_get` and
//! `property_get` are interposed; names without an override fall through to
//! the next definition in load order.

mod consts;
mod interceptions;
mod libc;
mod logger;
mod macros;
mod overrides;
mod real;

#[cfg(not(test))]
#[ctor::ctor]
unsafe fn init() {
    logger::init();
}
