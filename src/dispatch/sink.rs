//! Delivery sinks for location readings.

use std::sync::Arc;

use crate::reading::LocationReading;

/// Destination for readings delivered to one monitor.
///
/// A sink is a single-method capability bound to an executor by the
/// monitor record, decoupling what a consumer does with a reading from
/// where that work runs.
pub trait UpdateSink: Send + Sync {
    /// Handle one location reading.
    fn deliver(&self, reading: LocationReading);
}

/// Sink adapter wrapping a plain function or closure.
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
    F: Fn(LocationReading) + Send + Sync,
{
    /// Wrap a function as a sink.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> UpdateSink for FnSink<F>
where
    F: Fn(LocationReading) + Send + Sync,
{
    fn deliver(&self, reading: LocationReading) {
        (self.0)(reading)
    }
}

/// Convenience constructor: wrap a closure into an `Arc<dyn UpdateSink>`.
pub fn sink_fn<F>(f: F) -> Arc<dyn UpdateSink>
where
    F: Fn(LocationReading) + Send + Sync + 'static,
{
    Arc::new(FnSink::new(f))
}
