//! Process-wide display level and the logging macros built on it.
//!
//! The core library never touches this: only `main.rs` and the rest of
//! `cli/` read or write `DISPLAY_LEVEL`. An atomic is enough since the CLI
//! is single-threaded; it exists as a static purely so the macros below
//! don't need a logger handle threaded through every call site.

use std::sync::atomic::{AtomicU8, Ordering};

pub static DISPLAY_LEVEL: AtomicU8 = AtomicU8::new(2);
pub static COLOR_ENABLED: AtomicU8 = AtomicU8::new(0);

pub const LEVEL_QUIET: u8 = 0;
pub const LEVEL_ERROR: u8 = 1;
pub const LEVEL_INFO: u8 = 2;
pub const LEVEL_VERBOSE: u8 = 3;
pub const LEVEL_DEBUG: u8 = 4;

pub fn set_display_level(level: u8) {
    DISPLAY_LEVEL.store(level.min(LEVEL_DEBUG), Ordering::Relaxed);
}

pub fn display_level() -> u8 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

pub fn set_color_enabled(enabled: bool) {
    COLOR_ENABLED.store(enabled as u8, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed) != 0
}

pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_YELLOW: &str = "\x1b[33m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Prints to stderr at [`LEVEL_ERROR`] or above, prefixed `airscmp:`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}

/// Prints an error message regardless of display level, unless quieted.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => {
        $crate::displaylevel!($crate::cli::constants::LEVEL_ERROR, $($arg)*)
    };
}

/// Prints to stdout (the frame output) through the normal pipe, never
/// gated by display level.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => {
        print!($($arg)*)
    };
}

/// Prints an error and exits with status 1.
#[macro_export]
macro_rules! end_process {
    ($($arg:tt)*) => {{
        $crate::display!($($arg)*);
        std::process::exit(1);
    }};
}
