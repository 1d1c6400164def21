//! Update dispatch: executors, sinks, and registry fan-out.
//!
//! Delivery is decoupled from the device thread in two steps:
//!
//! 1. [`fan_out`] walks a registry snapshot and hands the reading to each
//!    record's [`Executor`], fire-and-forget.
//! 2. The executor invokes the record's [`UpdateSink`] on that monitor's
//!    declared scheduling context.
//!
//! [`SerialExecutor`] preserves per-monitor reading order; [`InlineExecutor`]
//! runs sinks synchronously on the calling thread (handy for tests and for
//! consumers that are themselves just forwarding into a channel).

mod dispatcher;
mod executor;
mod sink;

pub use dispatcher::fan_out;
pub use executor::{Executor, InlineExecutor, SerialExecutor};
pub use sink::{sink_fn, FnSink, UpdateSink};
