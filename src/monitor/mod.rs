//! Monitor records and the registry that holds them.
//!
//! A monitor is one consumer subscribed to location updates with a declared
//! precision need. Each subscription is captured as an immutable
//! [`MonitorRecord`]; the [`MonitorRegistry`] keeps at most one record per
//! [`MonitorToken`] and computes the reconciled device-wide accuracy.
//!
//! The registry is a plain data structure with no locking of its own - it
//! is owned exclusively by the coordinator and only mutated under the
//! coordinator's lock.

mod record;
mod registry;

pub use record::{MonitorRecord, MonitorToken};
pub use registry::MonitorRegistry;
