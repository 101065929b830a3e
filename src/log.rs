//! Conditional logging macros.
//!
//! With the `tracing` feature these are `tracing`'s own macros. Without it
//! they expand to nothing, so drawing code can log freely at no cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __planespace_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __planespace_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__planespace_debug as debug, __planespace_warn as warn};
