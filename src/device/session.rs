//! Device session controller.

use std::sync::Arc;

use tracing::{debug, info};

use crate::accuracy::Accuracy;
use crate::permission::AuthorizationStatus;

use super::traits::LocationDevice;

/// Controller for the one process-wide sensing-device handle.
///
/// Owns the device for the lifetime of the coordinator (never explicitly
/// torn down) and tracks the derived state - running flag and last applied
/// accuracy - that must stay consistent with the registry contents. The
/// session itself is not thread-safe; the coordinator mutates it only
/// under its lock.
pub struct DeviceSession {
    device: Arc<dyn LocationDevice>,
    running: bool,
    applied_accuracy: Option<Accuracy>,
}

impl DeviceSession {
    /// Create a session around a device handle.
    pub fn new(device: Arc<dyn LocationDevice>) -> Self {
        Self {
            device,
            running: false,
            applied_accuracy: None,
        }
    }

    /// Whether the platform's sensing capability is enabled system-wide.
    ///
    /// Pure query, delegates to the device.
    pub fn is_available(&self) -> bool {
        self.device.services_enabled()
    }

    /// Current platform authorization level.
    pub fn authorization_status(&self) -> AuthorizationStatus {
        self.device.authorization_status()
    }

    /// Trigger the platform's foreground-permission prompt.
    pub fn request_when_in_use_authorization(&self) {
        debug!("Requesting when-in-use authorization");
        self.device.request_when_in_use_authorization();
    }

    /// Trigger the platform's always-on-permission prompt.
    pub fn request_always_authorization(&self) {
        debug!("Requesting always authorization");
        self.device.request_always_authorization();
    }

    /// Apply a reconciled accuracy to the device.
    ///
    /// The device call is skipped when the value is unchanged; the
    /// observable configuration is identical either way.
    pub fn apply_accuracy(&mut self, accuracy: Accuracy) {
        if self.applied_accuracy == Some(accuracy) {
            return;
        }
        self.device.set_desired_accuracy(accuracy);
        self.applied_accuracy = Some(accuracy);
        debug!(%accuracy, "Applied reconciled accuracy to device");
    }

    /// The accuracy last applied to the device, if any.
    pub fn applied_accuracy(&self) -> Option<Accuracy> {
        self.applied_accuracy
    }

    /// Start continuous updates. Idempotent.
    ///
    /// Activation is permission-gated: without a granted authorization the
    /// start is deferred, and [`handle_authorization_change`] picks it up
    /// once the grant arrives.
    ///
    /// [`handle_authorization_change`]: DeviceSession::handle_authorization_change
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        let status = self.device.authorization_status();
        if !status.grants_updates() {
            debug!(%status, "Start deferred until authorization granted");
            return;
        }
        self.device.start_updates();
        self.running = true;
        info!("Started location updates");
    }

    /// Stop continuous updates. Idempotent.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.device.stop_updates();
        self.running = false;
        info!("Stopped location updates");
    }

    /// Whether the device is currently delivering updates.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// React to a platform authorization change.
    ///
    /// A grant while monitors exist transitions to `start()` even if the
    /// session never started - this covers registration happening before
    /// the user answered the permission prompt.
    pub fn handle_authorization_change(
        &mut self,
        status: AuthorizationStatus,
        has_monitors: bool,
    ) {
        if status.grants_updates() && has_monitors {
            self.start();
        }
    }
}
