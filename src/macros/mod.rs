/// Declares an interception point for the libc-style function `$name`.
///
/// Expects a function named `$name` with signature `$fn_sig` in the calling
/// module, and generates:
/// - an exported trampoline with the symbol name `$name` that jumps into it;
/// - a module `$name` whose `original()` returns the next definition of the
///   symbol in load order, resolved once per process.
macro_rules! intercept {
    ($name: ident: $fn_sig: ty) => {
        const _: $fn_sig = $name;

        #[cfg(not(test))] // Don't interpose on the test binary
        const _: () = {
            #[unsafe(naked)]
            #[unsafe(export_name = ::core::stringify!($name))]
            pub unsafe extern "C" fn interpose_fn() {
                #[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
                ::core::arch::naked_asm!("b {}", sym $name);
                #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
                ::core::arch::naked_asm!("jmp {}", sym $name);
            }
        };

        mod $name {
            #[allow(unused)]
            use super::*;

            pub static ORIGINAL: $crate::real::Original = $crate::real::Original::new(
                match ::core::ffi::CStr::from_bytes_with_nul(
                    ::core::concat!(::core::stringify!($name), "\0").as_bytes(),
                ) {
                    Ok(symbol) => symbol,
                    Err(_) => ::core::panic!("symbol name contains a nul byte"),
                },
            );

            pub fn original() -> Option<$fn_sig> {
                ORIGINAL.get().map(|symbol| unsafe { symbol.cast::<$fn_sig>() })
            }
        }
    };
}

pub(crate) use intercept;
