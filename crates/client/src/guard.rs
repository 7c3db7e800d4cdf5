//! Per-project in-flight guard.
//!
//! One permit may exist per project id at a time. The permit releases its
//! slot on drop, so the "finally" path is the destructor: a failed request
//! can never leave a project permanently locked.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use metr_core::types::DbId;

/// The set of project ids with a mutation currently in flight.
///
/// Clones share the same underlying set.
#[derive(Debug, Clone, Default)]
pub struct InFlightSet {
    locked: Arc<Mutex<HashSet<DbId>>>,
}

impl InFlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to claim the slot for `project_id`.
    ///
    /// Returns `None` if a mutation for that project is already in flight.
    pub fn try_acquire(&self, project_id: DbId) -> Option<InFlightPermit> {
        let mut locked = self.locked.lock().expect("in-flight set poisoned");
        if locked.insert(project_id) {
            Some(InFlightPermit {
                set: Arc::clone(&self.locked),
                project_id,
            })
        } else {
            None
        }
    }

    /// Whether a mutation for `project_id` is currently in flight.
    pub fn is_locked(&self, project_id: DbId) -> bool {
        self.locked
            .lock()
            .expect("in-flight set poisoned")
            .contains(&project_id)
    }
}

/// An exclusive claim on one project id. Releases on drop.
#[derive(Debug)]
pub struct InFlightPermit {
    set: Arc<Mutex<HashSet<DbId>>>,
    project_id: DbId,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.set
            .lock()
            .expect("in-flight set poisoned")
            .remove(&self.project_id);
    }
}
