//! Console logging shorthands.
//!
//! `web_sys::console::*_1` wants a single `JsValue`; these wrap the
//! `format!(..).into()` dance so call-sites read like `println!`.

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        web_sys::console::debug_1(&format!($($arg)*).into())
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        web_sys::console::error_1(&format!($($arg)*).into())
    };
}
