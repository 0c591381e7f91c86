use std::ffi::CStr;

use tracing::trace;

use crate::libc::{c_char, c_int};

/// A property whose real value is hidden behind a fixed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    pub name: &'static CStr,
    pub value: &'static CStr,
}

impl Override {
    /// Writes the value with its terminator into `buf` and returns its length.
    ///
    /// # Safety
    /// `buf` must be valid for writes of a property value, terminator included.
    pub unsafe fn write_to(&self, buf: *mut c_char) -> c_int {
        let bytes = self.value.to_bytes_with_nul();
        unsafe { buf.copy_from_nonoverlapping(bytes.as_ptr().cast(), bytes.len()) };
        trace!("Returning {:?} for {:?}", self.value, self.name);
        self.value.count_bytes() as c_int
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OverrideTable(&'static [Override]);

impl OverrideTable {
    pub const fn new(entries: &'static [Override]) -> Self {
        Self(entries)
    }

    /// First entry whose name is byte-for-byte equal to `name`.
    pub fn lookup(&self, name: &CStr) -> Option<&'static Override> {
        self.0.iter().find(|entry| entry.name == name)
    }

    #[cfg(test)]
    pub fn entries(&self) -> &'static [Override] {
        self.0
    }
}

/// Overrides applied by `__system_property_get`.
pub static SYSTEM_PROPERTY_GET_OVERRIDES: OverrideTable = OverrideTable::new(&[
    Override {
        name: c"ro.boot.vbmeta.device_state",
        value: c"unlocked",
    },
    Override {
        name: c"ro.boot.verifiedbootstate",
        value: c"orange",
    },
]);

/// Overrides applied by `property_get`. Kept apart from the bionic table: the
/// two entry points are hooked independently and their sets differ.
pub static PROPERTY_GET_OVERRIDES: OverrideTable = OverrideTable::new(&[
    // TODO: confirm the HAL still reads ro.boot.mode through property_get before dropping this
    Override {
        name: c"ro.boot.mode",
        value: c"normal",
    },
    Override {
        name: c"ro.boot.vbmeta.device_state",
        value: c"unlocked",
    },
    // looks unused by newer fingerprint HALs
    Override {
        name: c"ro.boot.verifiedbootstate",
        value: c"orange",
    },
]);
