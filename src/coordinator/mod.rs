//! Location coordinator - the public facade.
//!
//! The [`LocationCoordinator`] composes the registry, the accuracy
//! reconciler, the device session, and the update dispatcher. It validates
//! registration requests, mutates the registry, recomputes and applies the
//! reconciled accuracy, starts or stops the device session on subscriber
//! count transitions, and fans device readings out to every monitor.
//!
//! # Concurrency
//!
//! One [`parking_lot::Mutex`] guards the registry and the device session
//! together, so the device's running state and configured accuracy are
//! never observed in a state inconsistent with the registry that produced
//! them. Fan-out snapshots the registry under the lock, then dispatches
//! outside it - no consumer callback ever runs while the lock is held.
//!
//! # Lifecycle
//!
//! A coordinator is an explicit context object constructed once near
//! process startup and alive for the process lifetime; there is no
//! teardown. Construct fresh instances in tests for isolation. For code
//! that genuinely needs ambient access, [`install_global`] / [`global`]
//! hold one process-wide instance.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::accuracy::Accuracy;
use crate::device::{DeviceSession, LocationDevice};
use crate::dispatch::{self, Executor, InlineExecutor, UpdateSink};
use crate::error::RegisterError;
use crate::monitor::{MonitorRecord, MonitorRegistry, MonitorToken};
use crate::permission::AuthorizationStatus;
use crate::reading::LocationReading;

/// Configuration for the location coordinator.
#[derive(Clone)]
pub struct CoordinatorConfig {
    /// Accuracy applied when no monitors are registered.
    pub fallback_accuracy: Accuracy,

    /// Executor used by [`LocationCoordinator::register_default`].
    ///
    /// The default is [`InlineExecutor`] so configuration never requires a
    /// live runtime; production callers that want delivery decoupled from
    /// the device thread should install a
    /// [`SerialExecutor`](crate::dispatch::SerialExecutor) here.
    pub default_executor: Arc<dyn Executor>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            fallback_accuracy: Accuracy::THREE_KILOMETERS,
            default_executor: Arc::new(InlineExecutor),
        }
    }
}

/// State guarded by the coordinator lock.
///
/// Registry and session live under one mutex: every mutation re-runs
/// reconciliation and start/stop before the lock is released.
struct Inner {
    registry: MonitorRegistry,
    session: DeviceSession,
}

/// Multiplexes many monitors onto one location-sensing device.
pub struct LocationCoordinator {
    inner: Mutex<Inner>,
    config: CoordinatorConfig,
}

impl LocationCoordinator {
    /// Create a coordinator around a device handle with default config.
    pub fn new(device: Arc<dyn LocationDevice>) -> Self {
        Self::with_config(device, CoordinatorConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(device: Arc<dyn LocationDevice>, config: CoordinatorConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                registry: MonitorRegistry::new(),
                session: DeviceSession::new(device),
            }),
            config,
        }
    }

    /// Register a monitor.
    ///
    /// Fails with [`RegisterError::MonitoringUnavailable`] when location
    /// sensing is disabled system-wide, and with
    /// [`RegisterError::AlreadyRegistered`] on a duplicate token; the
    /// registry is unchanged in both cases. On success the reconciled
    /// accuracy is reapplied and the device session started (start is
    /// deferred while authorization is outstanding).
    pub fn register(
        &self,
        token: MonitorToken,
        desired_accuracy: Accuracy,
        executor: Arc<dyn Executor>,
        sink: Arc<dyn UpdateSink>,
    ) -> Result<(), RegisterError> {
        let mut inner = self.inner.lock();

        if !inner.session.is_available() {
            debug!(%token, "Registration rejected, location sensing unavailable");
            return Err(RegisterError::MonitoringUnavailable);
        }

        inner
            .registry
            .add(MonitorRecord::new(token, desired_accuracy, executor, sink))?;
        Self::reconcile_and_apply(&self.config, &mut inner);

        info!(
            %token,
            %desired_accuracy,
            monitors = inner.registry.count(),
            "Registered location monitor"
        );
        Ok(())
    }

    /// Register a monitor on the configured default executor.
    pub fn register_default(
        &self,
        token: MonitorToken,
        desired_accuracy: Accuracy,
        sink: Arc<dyn UpdateSink>,
    ) -> Result<(), RegisterError> {
        self.register(
            token,
            desired_accuracy,
            Arc::clone(&self.config.default_executor),
            sink,
        )
    }

    /// Register with the legacy single-output-parameter convention.
    ///
    /// Returns true on success; on failure the error lands in
    /// `error_slot`. Delegates to [`register`](Self::register) with
    /// identical observable effects, for callers that cannot consume a
    /// result type directly.
    pub fn register_checked(
        &self,
        token: MonitorToken,
        desired_accuracy: Accuracy,
        executor: Arc<dyn Executor>,
        sink: Arc<dyn UpdateSink>,
        error_slot: &mut Option<RegisterError>,
    ) -> bool {
        match self.register(token, desired_accuracy, executor, sink) {
            Ok(()) => {
                *error_slot = None;
                true
            }
            Err(e) => {
                *error_slot = Some(e);
                false
            }
        }
    }

    /// Deregister a monitor. Total: unknown tokens are a no-op.
    ///
    /// Removal re-runs reconciliation; the device session stops when the
    /// last monitor leaves.
    pub fn deregister(&self, token: MonitorToken) {
        let mut inner = self.inner.lock();
        if inner.registry.remove(token) {
            Self::reconcile_and_apply(&self.config, &mut inner);
            info!(
                %token,
                monitors = inner.registry.count(),
                "Deregistered location monitor"
            );
        }
    }

    /// Whether any monitors are registered.
    pub fn is_active(&self) -> bool {
        self.inner.lock().registry.count() > 0
    }

    /// Number of registered monitors.
    pub fn monitor_count(&self) -> usize {
        self.inner.lock().registry.count()
    }

    /// The reconciled device-wide accuracy.
    ///
    /// Equals the strictest desired accuracy over registered monitors, or
    /// the configured fallback when none are registered.
    pub fn current_accuracy(&self) -> Accuracy {
        self.inner
            .lock()
            .registry
            .reconcile(self.config.fallback_accuracy)
    }

    /// Whether the platform's sensing capability is enabled system-wide.
    pub fn is_available(&self) -> bool {
        self.inner.lock().session.is_available()
    }

    /// Current platform authorization level.
    pub fn authorization_status(&self) -> AuthorizationStatus {
        self.inner.lock().session.authorization_status()
    }

    /// Whether the user declined location access.
    pub fn is_denied(&self) -> bool {
        self.authorization_status().is_denied()
    }

    /// Whether foreground location access is granted.
    ///
    /// An always-on grant implies foreground capability.
    pub fn is_permitted_when_in_use(&self) -> bool {
        self.authorization_status().grants_updates()
    }

    /// Whether always-on location access is granted.
    pub fn is_permitted_always(&self) -> bool {
        self.authorization_status() == AuthorizationStatus::Always
    }

    /// Declare that foreground permission is required.
    ///
    /// `true` triggers the platform prompt on every assignment (the
    /// platform deduplicates actual prompting); `false` has no effect -
    /// no permission-revocation capability exists.
    pub fn set_requires_when_in_use(&self, required: bool) {
        if required {
            self.inner.lock().session.request_when_in_use_authorization();
        }
    }

    /// Declare that always-on permission is required.
    pub fn set_requires_always(&self, required: bool) {
        if required {
            self.inner.lock().session.request_always_authorization();
        }
    }

    /// Intake for raw location fixes from the device.
    ///
    /// Snapshots the registry under the lock, then fans every reading out
    /// to each monitor's executor outside it. Readings reach each monitor
    /// in production order when its executor is serial.
    pub fn handle_locations(&self, readings: Vec<LocationReading>) {
        let snapshot = {
            let inner = self.inner.lock();
            if inner.registry.is_empty() {
                return;
            }
            inner.registry.snapshot()
        };

        for reading in &readings {
            dispatch::fan_out(&snapshot, reading);
        }
    }

    /// Intake for platform authorization changes.
    ///
    /// A grant while monitors are registered starts the device session
    /// even if it never started - covering registration that happened
    /// before the user answered the permission prompt.
    pub fn handle_authorization_change(&self, status: AuthorizationStatus) {
        let mut inner = self.inner.lock();
        let has_monitors = !inner.registry.is_empty();
        info!(%status, monitors = inner.registry.count(), "Authorization status changed");
        inner.session.handle_authorization_change(status, has_monitors);
    }

    /// Recompute accuracy and align the session with the registry.
    ///
    /// Called under the lock after every registry mutation: accuracy is
    /// applied before start so a fresh session never runs on a stale
    /// setting.
    fn reconcile_and_apply(config: &CoordinatorConfig, inner: &mut Inner) {
        let accuracy = inner.registry.reconcile(config.fallback_accuracy);
        inner.session.apply_accuracy(accuracy);
        if inner.registry.is_empty() {
            inner.session.stop();
        } else {
            inner.session.start();
        }
    }
}

static GLOBAL: OnceLock<Arc<LocationCoordinator>> = OnceLock::new();

/// Install the process-wide coordinator instance.
///
/// Returns the rejected instance if one was already installed. There is
/// no teardown; the installed coordinator lives for the process lifetime.
pub fn install_global(
    coordinator: Arc<LocationCoordinator>,
) -> Result<(), Arc<LocationCoordinator>> {
    GLOBAL.set(coordinator)
}

/// Get the process-wide coordinator, if one was installed.
pub fn global() -> Option<Arc<LocationCoordinator>> {
    GLOBAL.get().cloned()
}
