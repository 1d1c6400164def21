//! Ordered registry of monitor records with accuracy reconciliation.

use tracing::debug;

use crate::accuracy::Accuracy;
use crate::error::RegisterError;

use super::record::{MonitorRecord, MonitorToken};

/// Ordered collection of monitor records.
///
/// Insertion order is irrelevant to semantics but stable for iteration.
/// At most one record exists per token; [`add`] enforces this.
///
/// [`add`]: MonitorRegistry::add
#[derive(Debug, Default)]
pub struct MonitorRegistry {
    records: Vec<MonitorRecord>,
}

impl MonitorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, rejecting duplicate tokens.
    ///
    /// No side effect beyond storage; the caller re-runs reconciliation.
    pub fn add(&mut self, record: MonitorRecord) -> Result<(), RegisterError> {
        if self.find(record.token).is_some() {
            return Err(RegisterError::AlreadyRegistered {
                token: record.token,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove the record matching `token`, if any.
    ///
    /// Returns true if a record was removed. Removing an unknown token is a
    /// no-op, not an error.
    pub fn remove(&mut self, token: MonitorToken) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.token != token);
        let removed = self.records.len() != before;
        if !removed {
            debug!(%token, "Remove for unknown monitor ignored");
        }
        removed
    }

    /// Look up the record for `token`.
    pub fn find(&self, token: MonitorToken) -> Option<&MonitorRecord> {
        self.records.iter().find(|r| r.token == token)
    }

    /// Number of registered monitors.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Check if no monitors are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clone the current records for lock-free fan-out.
    ///
    /// Fan-out dispatches against this snapshot so a record either fully
    /// receives a reading or fully misses it, never a partial state.
    pub fn snapshot(&self) -> Vec<MonitorRecord> {
        self.records.clone()
    }

    /// Reconcile all desired accuracies into one device-wide setting.
    ///
    /// Returns the strictest (numerically lowest) desired accuracy across
    /// all records, or `fallback` when the registry is empty. Ties need no
    /// break: equal minima are equivalent.
    pub fn reconcile(&self, fallback: Accuracy) -> Accuracy {
        self.records
            .iter()
            .map(|r| r.desired_accuracy)
            .fold(None, |best: Option<Accuracy>, next| match best {
                Some(current) => Some(current.stricter(next)),
                None => Some(next),
            })
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dispatch::{sink_fn, InlineExecutor};

    fn make_record(raw: u64, accuracy: Accuracy) -> MonitorRecord {
        MonitorRecord::new(
            MonitorToken::from_raw(raw),
            accuracy,
            Arc::new(InlineExecutor),
            sink_fn(|_| {}),
        )
    }

    #[test]
    fn test_add_and_count() {
        let mut registry = MonitorRegistry::new();
        assert!(registry.is_empty());

        registry
            .add(make_record(1, Accuracy::KILOMETER))
            .expect("first add should succeed");
        registry
            .add(make_record(2, Accuracy::TEN_METERS))
            .expect("second add should succeed");

        assert_eq!(registry.count(), 2);
        assert!(registry.find(MonitorToken::from_raw(1)).is_some());
        assert!(registry.find(MonitorToken::from_raw(3)).is_none());
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let mut registry = MonitorRegistry::new();
        registry.add(make_record(1, Accuracy::KILOMETER)).unwrap();

        let err = registry
            .add(make_record(1, Accuracy::TEN_METERS))
            .expect_err("duplicate token must be rejected");
        assert_eq!(
            err,
            RegisterError::AlreadyRegistered {
                token: MonitorToken::from_raw(1)
            }
        );

        // Registry unchanged by the rejected add
        assert_eq!(registry.count(), 1);
        assert_eq!(
            registry
                .find(MonitorToken::from_raw(1))
                .unwrap()
                .desired_accuracy,
            Accuracy::KILOMETER
        );
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut registry = MonitorRegistry::new();
        registry.add(make_record(1, Accuracy::KILOMETER)).unwrap();

        assert!(!registry.remove(MonitorToken::from_raw(99)));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_remove_existing() {
        let mut registry = MonitorRegistry::new();
        registry.add(make_record(1, Accuracy::KILOMETER)).unwrap();
        registry.add(make_record(2, Accuracy::TEN_METERS)).unwrap();

        assert!(registry.remove(MonitorToken::from_raw(1)));
        assert_eq!(registry.count(), 1);
        assert!(registry.find(MonitorToken::from_raw(1)).is_none());
        assert!(registry.find(MonitorToken::from_raw(2)).is_some());
    }

    #[test]
    fn test_reconcile_empty_uses_fallback() {
        let registry = MonitorRegistry::new();
        assert_eq!(
            registry.reconcile(Accuracy::THREE_KILOMETERS),
            Accuracy::THREE_KILOMETERS
        );
    }

    #[test]
    fn test_reconcile_picks_strictest() {
        let mut registry = MonitorRegistry::new();
        registry.add(make_record(1, Accuracy::KILOMETER)).unwrap();
        registry
            .add(make_record(2, Accuracy::HUNDRED_METERS))
            .unwrap();
        registry
            .add(make_record(3, Accuracy::THREE_KILOMETERS))
            .unwrap();

        assert_eq!(
            registry.reconcile(Accuracy::THREE_KILOMETERS),
            Accuracy::HUNDRED_METERS
        );
    }

    #[test]
    fn test_reconcile_tracks_removal() {
        let mut registry = MonitorRegistry::new();
        registry.add(make_record(1, Accuracy::KILOMETER)).unwrap();
        registry
            .add(make_record(2, Accuracy::HUNDRED_METERS))
            .unwrap();

        registry.remove(MonitorToken::from_raw(2));
        assert_eq!(
            registry.reconcile(Accuracy::THREE_KILOMETERS),
            Accuracy::KILOMETER
        );

        registry.remove(MonitorToken::from_raw(1));
        assert_eq!(
            registry.reconcile(Accuracy::THREE_KILOMETERS),
            Accuracy::THREE_KILOMETERS
        );
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut registry = MonitorRegistry::new();
        registry.add(make_record(1, Accuracy::KILOMETER)).unwrap();

        let snapshot = registry.snapshot();
        registry.remove(MonitorToken::from_raw(1));

        // The snapshot taken before the removal still holds the record
        assert_eq!(snapshot.len(), 1);
        assert!(registry.is_empty());
    }
}
