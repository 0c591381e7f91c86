/// Tag every line of this library is logged under.
#[cfg_attr(any(test, not(target_os = "android")), allow(dead_code))]
pub const LOG_TAG: &str = "libshims_fingerprint.oplus";

/// Size of a property value buffer, terminator included.
pub const PROPERTY_VALUE_MAX: usize = 92;
