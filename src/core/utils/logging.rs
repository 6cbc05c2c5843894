//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`. Natively the imported JS
//! functions are unavailable, so the message is formatted and dropped; this
//! keeps native tests quiet without touching the call sites.
//!
//! Usage:
//! ```ignore
//! console_log!("spawned {} particles", n);
//! console_warn!("settings rejected: {}", err);
//! ```

macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
