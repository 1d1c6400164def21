//! Fan-out of device readings to a registry snapshot.

use std::sync::Arc;

use tracing::trace;

use crate::monitor::MonitorRecord;
use crate::reading::LocationReading;

/// Deliver one reading to every record in a registry snapshot.
///
/// Each record gets the reading on its own executor, fire-and-forget; no
/// ordering exists between different records' executions. The caller is
/// responsible for snapshotting the registry under the coordinator lock
/// before calling, so a record either fully receives or fully misses a
/// given reading.
pub fn fan_out(snapshot: &[MonitorRecord], reading: &LocationReading) {
    for record in snapshot {
        let sink = Arc::clone(&record.sink);
        let reading = reading.clone();
        record
            .executor
            .execute(Box::new(move || sink.deliver(reading)));
    }
    trace!(monitors = snapshot.len(), "Fanned out location reading");
}
