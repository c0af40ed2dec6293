//! Update statistics tracking.
//!
//! This module provides thread-safe counters for the warnings raised while
//! building a server list.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::WarningType;

/// Thread-safe warning statistics tracker.
///
/// Tracks warnings by category using atomic counters. All types are initialized
/// to zero on creation, so the tracker can be shared across tasks using `Arc`.
#[derive(Debug)]
pub struct UpdateStats {
    warnings: HashMap<WarningType, AtomicUsize>,
}

impl UpdateStats {
    pub fn new() -> Self {
        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, AtomicUsize::new(0));
        }
        UpdateStats { warnings }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment warning counter for {:?} which is not in the map. \
                 This indicates a bug in UpdateStats initialization.",
                warning
            );
        }
    }

    /// Get the count for a warning type.
    ///
    /// Returns 0 if the warning type is not in the map (should never happen if properly initialized).
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }
}

impl Default for UpdateStats {
    fn default() -> Self {
        Self::new()
    }
}
