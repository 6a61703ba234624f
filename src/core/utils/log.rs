//! Console logging macros
//!
//! On wasm32 these forward to the browser console via `web_sys::console`.
//! On native targets (tests, benches) they only type-check their arguments:
//! wasm-bindgen imports cannot be called outside a wasm host.
//!
//! Usage:
//! ```rust
//! use shapefield_engine::console_log;
//!
//! let count = 3;
//! console_log!("spawned {} shapes", count);
//! ```

/// Info-level message to the host console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Warning-level message to the host console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
