//! The sensing-device boundary.
//!
//! The underlying location hardware and its platform permission prompts
//! live outside this library, behind the [`LocationDevice`] trait. The
//! [`DeviceSession`] controller owns the one process-wide device handle
//! and keeps its running state and configured accuracy derived from the
//! registry; [`DeviceEvent`] and [`spawn_event_pump`] carry raw events
//! from platform glue back into the coordinator.

mod events;
mod session;
mod traits;

pub use events::{spawn_event_pump, DeviceEvent};
pub use session::DeviceSession;
pub use traits::LocationDevice;
