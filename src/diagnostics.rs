//! Diagnostic events.
//!
//! The macros expand to `tracing` events when the `tracing` feature is enabled
//! and to nothing otherwise, so call sites never need their own `cfg` gates.
//! Arguments are not evaluated when the feature is off.

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    };
}

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
