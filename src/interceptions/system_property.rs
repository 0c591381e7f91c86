use std::ffi::CStr;

use crate::{
    consts::PROPERTY_VALUE_MAX,
    libc::{PropertyGetFn, SystemPropertyGetFn, c_char, c_int},
    macros::intercept,
    overrides::{OverrideTable, PROPERTY_GET_OVERRIDES, SYSTEM_PROPERTY_GET_OVERRIDES},
};

intercept!(__system_property_get: SystemPropertyGetFn);
unsafe extern "C" fn __system_property_get(name: *const c_char, value: *mut c_char) -> c_int {
    unsafe {
        get_system_property(
            &SYSTEM_PROPERTY_GET_OVERRIDES,
            name,
            value,
            __system_property_get::original(),
        )
    }
}

intercept!(property_get: PropertyGetFn);
unsafe extern "C" fn property_get(
    key: *const c_char,
    value: *mut c_char,
    default_value: *const c_char,
) -> c_int {
    unsafe {
        get_property(
            &PROPERTY_GET_OVERRIDES,
            key,
            value,
            default_value,
            property_get::original(),
        )
    }
}

/// `__system_property_get` with `overrides` applied in front of `original`.
///
/// # Safety
/// `name` must be a valid C string and `value` must hold `PROPERTY_VALUE_MAX` bytes.
pub unsafe fn get_system_property(
    overrides: &OverrideTable,
    name: *const c_char,
    value: *mut c_char,
    original: Option<SystemPropertyGetFn>,
) -> c_int {
    if let Some(entry) = overrides.lookup(unsafe { CStr::from_ptr(name) }) {
        return unsafe { entry.write_to(value) };
    }
    match original {
        Some(original) => unsafe { original(name, value) },
        None => unsafe { write_absent(value, None) },
    }
}

/// `property_get` with `overrides` applied in front of `original`.
///
/// `default_value` only reaches `original`; an override ignores it.
///
/// # Safety
/// `key` must be a valid C string, `default_value` null or a valid C string,
/// and `value` must hold `PROPERTY_VALUE_MAX` bytes.
pub unsafe fn get_property(
    overrides: &OverrideTable,
    key: *const c_char,
    value: *mut c_char,
    default_value: *const c_char,
    original: Option<PropertyGetFn>,
) -> c_int {
    if let Some(entry) = overrides.lookup(unsafe { CStr::from_ptr(key) }) {
        return unsafe { entry.write_to(value) };
    }
    match original {
        Some(original) => unsafe { original(key, value, default_value) },
        None => {
            let default_value =
                (!default_value.is_null()).then(|| unsafe { CStr::from_ptr(default_value) });
            unsafe { write_absent(value, default_value) }
        }
    }
}

/// What the platform accessors produce for a missing property: the default
/// (clipped to fit a value buffer) if there is one, otherwise an empty string.
unsafe fn write_absent(value: *mut c_char, default_value: Option<&CStr>) -> c_int {
    let bytes = default_value.map_or(&[][..], CStr::to_bytes);
    let len = bytes.len().min(PROPERTY_VALUE_MAX - 1);
    unsafe {
        value.copy_from_nonoverlapping(bytes.as_ptr().cast(), len);
        value.add(len).write(0);
    }
    len as c_int
}
