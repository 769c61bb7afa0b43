//! Internal diagnostics macro.
//!
//! With the `tracing` feature enabled, [`trace_event!`] forwards to
//! `tracing::debug!`. Without it the macro expands to nothing, so cold-path
//! diagnostics cost nothing in default builds. The compression loop never
//! emits events.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
  ($($arg:tt)+) => {
    ::tracing::debug!(target: "blake2s", $($arg)+)
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
  ($($arg:tt)+) => {{}};
}
