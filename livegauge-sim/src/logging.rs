// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Logging macros shared by the livegauge crates.
//!
//! With the `tracing` feature they forward to `tracing` through this crate,
//! so callers need no `tracing` dependency of their own. Without it `info!`
//! prints to stdout, `warn!` to stderr, and `debug!` is compiled out.

#[cfg(feature = "tracing")]
pub use tracing;

#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logging::tracing::warn!($($arg)*)
    };
}

#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logging::tracing::info!($($arg)*)
    };
}

#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::logging::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if false {
            println!($($arg)*);
        }
    };
}
