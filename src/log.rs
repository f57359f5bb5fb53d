#![allow(unused, reason = "logger")]
//! Logging shims.
//!
//! Every macro compiles to nothing unless the `log` feature is enabled, so call sites must only
//! use them in statement position.

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "wicket", $($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!(target: "wicket", $($tt)*);
    };
}

macro_rules! error {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::error!(target: "wicket", $($tt)*);
    };
}

pub(crate) use {debug, warning, error};
