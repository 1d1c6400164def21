//! Raw device events and the channel-fed pump that forwards them.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::coordinator::LocationCoordinator;
use crate::permission::AuthorizationStatus;
use crate::reading::LocationReading;

/// One raw event from the sensing device's delegate channel.
#[derive(Debug, Clone)]
pub enum DeviceEvent {
    /// One or more new location fixes, in production order.
    Locations(Vec<LocationReading>),
    /// The platform authorization level changed.
    AuthorizationChanged(AuthorizationStatus),
}

/// Spawn a task that drains device events into the coordinator.
///
/// Platform glue that owns the device sends [`DeviceEvent`]s into the
/// channel; the pump forwards them to the coordinator's `handle_*`
/// methods on whatever runtime it was spawned on. The task exits when
/// every sender has been dropped.
pub fn spawn_event_pump(
    coordinator: Arc<LocationCoordinator>,
    mut events: mpsc::UnboundedReceiver<DeviceEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                DeviceEvent::Locations(readings) => {
                    coordinator.handle_locations(readings);
                }
                DeviceEvent::AuthorizationChanged(status) => {
                    coordinator.handle_authorization_change(status);
                }
            }
        }
        debug!("Device event channel closed, pump exiting");
    })
}
