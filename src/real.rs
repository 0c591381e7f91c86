//! Lookup of the genuine definitions behind the intercepted symbols.

use std::{
    ffi::{CStr, CString, c_void},
    mem::{size_of, transmute_copy},
    ptr::NonNull,
    sync::OnceLock,
};

use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no definition of {symbol:?} after this library in load order: {reason}")]
    NotFound { symbol: CString, reason: String },
}

/// Address of a loaded function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSymbol(NonNull<c_void>);

// Loaded code is never unmapped while the shim is resident.
unsafe impl Send for RawSymbol {}
unsafe impl Sync for RawSymbol {}

impl RawSymbol {
    pub fn new(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }

    /// # Safety
    /// `F` must be the function pointer type the symbol was defined with.
    pub unsafe fn cast<F: Copy>(self) -> F {
        const { assert!(size_of::<F>() == size_of::<*mut c_void>()) };
        unsafe { transmute_copy(&self.0.as_ptr()) }
    }
}

pub trait SymbolResolver {
    /// Finds the next definition of `symbol` after the calling module.
    fn resolve_next(&self, symbol: &CStr) -> Result<RawSymbol, ResolveError>;
}

/// `dlsym(RTLD_NEXT, ..)`.
pub struct NextInLoadOrder;

impl SymbolResolver for NextInLoadOrder {
    fn resolve_next(&self, symbol: &CStr) -> Result<RawSymbol, ResolveError> {
        // clear any pending error so the one read below belongs to this lookup
        unsafe { libc::dlerror() };
        let ptr = unsafe { libc::dlsym(libc::RTLD_NEXT, symbol.as_ptr()) };
        RawSymbol::new(ptr).ok_or_else(|| ResolveError::NotFound {
            symbol: symbol.to_owned(),
            reason: last_dl_error(),
        })
    }
}

fn last_dl_error() -> String {
    let err = unsafe { libc::dlerror() };
    if err.is_null() {
        "symbol not found".to_owned()
    } else {
        unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned()
    }
}

/// Process-wide slot for the original definition of one intercepted symbol.
///
/// The first caller resolves; concurrent first callers block until that
/// resolution completes and then all observe the same result. A failed
/// resolution is cached too: the symbol stays unresolved for the life of the
/// process and callers treat every delegated lookup as a missing property.
pub struct Original {
    symbol: &'static CStr,
    slot: OnceLock<Option<RawSymbol>>,
}

impl Original {
    pub const fn new(symbol: &'static CStr) -> Self {
        Self {
            symbol,
            slot: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Option<RawSymbol> {
        self.get_with(&NextInLoadOrder)
    }

    pub fn get_with(&self, resolver: &impl SymbolResolver) -> Option<RawSymbol> {
        // Logging happens after the slot is filled: a log sink that reads a
        // property lands back here and must not wait on its own initializer.
        let mut resolved_here = None;
        let symbol = *self.slot.get_or_init(|| {
            let result = resolver.resolve_next(self.symbol);
            let symbol = result.as_ref().ok().copied();
            resolved_here = Some(result);
            symbol
        });
        match resolved_here {
            Some(Ok(sym)) => {
                debug!(symbol = ?self.symbol, address = ?sym.as_ptr(), "resolved original");
            }
            Some(Err(err)) => {
                error!("{err}; non-overridden properties will read as absent");
            }
            None => {}
        }
        symbol
    }
}
