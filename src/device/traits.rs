//! External collaborator contract for the sensing device.

use crate::accuracy::Accuracy;
use crate::permission::AuthorizationStatus;

/// Contract with the underlying location-sensing device.
///
/// Implementations wrap the platform's location stack. All methods take
/// `&self`; implementations handle their own interior mutability. This
/// library never inspects or wraps device-level failures - the device's
/// own degradation behavior passes through untouched.
///
/// Event delivery is inverted: the platform glue that owns the device
/// feeds readings and authorization changes back in via
/// [`crate::coordinator::LocationCoordinator::handle_locations`] /
/// [`crate::coordinator::LocationCoordinator::handle_authorization_change`],
/// directly or through [`crate::device::spawn_event_pump`].
pub trait LocationDevice: Send + Sync {
    /// Whether location sensing is enabled system-wide.
    fn services_enabled(&self) -> bool;

    /// Current platform authorization level.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Trigger the platform's foreground-permission prompt.
    ///
    /// The platform deduplicates prompts (shown at most once per app
    /// lifetime); calling this again is harmless.
    fn request_when_in_use_authorization(&self);

    /// Trigger the platform's always-on-permission prompt.
    fn request_always_authorization(&self);

    /// Configure the accuracy applied to subsequent updates.
    ///
    /// Takes effect on the next start, or immediately if already running.
    fn set_desired_accuracy(&self, accuracy: Accuracy);

    /// Begin continuous location updates.
    fn start_updates(&self);

    /// Stop continuous location updates.
    fn stop_updates(&self);
}
