pub use libc::*;

/// `int __system_property_get(const char* name, char* value)` from bionic.
pub type SystemPropertyGetFn =
    unsafe extern "C" fn(name: *const c_char, value: *mut c_char) -> c_int;

/// `int property_get(const char* key, char* value, const char* default_value)` from libcutils.
pub type PropertyGetFn = unsafe extern "C" fn(
    key: *const c_char,
    value: *mut c_char,
    default_value: *const c_char,
) -> c_int;
