//! Monitor identity tokens and subscription records.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::accuracy::Accuracy;
use crate::dispatch::{Executor, UpdateSink};

/// Process-unique counter backing [`MonitorToken::next`].
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Opaque identity key for a registered monitor.
///
/// The registry compares tokens for equality only; it never dereferences
/// or owns anything behind them. Callers that already have an
/// address-stable handle can derive a token from it via [`from_raw`];
/// everyone else mints fresh ones with [`next`].
///
/// [`from_raw`]: MonitorToken::from_raw
/// [`next`]: MonitorToken::next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorToken(u64);

impl MonitorToken {
    /// Mint a fresh process-unique token.
    pub fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    /// Build a token from a caller-supplied stable value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw token value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MonitorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One monitor subscription: identity, precision need, and delivery wiring.
///
/// Records are immutable once built; changing a monitor's accuracy means
/// deregistering and registering again.
#[derive(Clone)]
pub struct MonitorRecord {
    /// Identity key, unique within the registry.
    pub token: MonitorToken,

    /// Precision this monitor needs (lower meters = stricter).
    pub desired_accuracy: Accuracy,

    /// Scheduling context the sink must run on.
    pub executor: Arc<dyn Executor>,

    /// Where readings for this monitor are delivered.
    pub sink: Arc<dyn UpdateSink>,
}

impl MonitorRecord {
    /// Create a new monitor record.
    pub fn new(
        token: MonitorToken,
        desired_accuracy: Accuracy,
        executor: Arc<dyn Executor>,
        sink: Arc<dyn UpdateSink>,
    ) -> Self {
        Self {
            token,
            desired_accuracy,
            executor,
            sink,
        }
    }
}

impl fmt::Debug for MonitorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Executor and sink are opaque trait objects
        f.debug_struct("MonitorRecord")
            .field("token", &self.token)
            .field("desired_accuracy", &self.desired_accuracy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{sink_fn, InlineExecutor};

    #[test]
    fn test_next_tokens_are_unique() {
        let a = MonitorToken::next();
        let b = MonitorToken::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_raw_round_trip() {
        let token = MonitorToken::from_raw(42);
        assert_eq!(token.raw(), 42);
        assert_eq!(token, MonitorToken::from_raw(42));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(MonitorToken::from_raw(7).to_string(), "#7");
    }

    #[test]
    fn test_record_debug_shows_token_and_accuracy() {
        let record = MonitorRecord::new(
            MonitorToken::from_raw(3),
            Accuracy::TEN_METERS,
            Arc::new(InlineExecutor),
            sink_fn(|_| {}),
        );
        let debug = format!("{:?}", record);
        assert!(debug.contains("MonitorToken(3)"));
        assert!(debug.contains("10.0"));
    }
}
