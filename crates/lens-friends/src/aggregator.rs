use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::ResolvedProfile;

#[derive(Debug, Default)]
struct Inner {
    profiles: Vec<ResolvedProfile>,
    sealed: bool,
}

/// Append-only collection of matches shared by concurrent resolution units
#[derive(Debug, Default)]
pub struct ResultAggregator {
    inner: Mutex<Inner>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    // A unit that panicked mid-append cannot leave a half-written Vec behind,
    // so the data is still usable after poisoning.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a match. Returns `false` (and drops it) once sealed.
    pub fn append(&self, profile: ResolvedProfile) -> bool {
        let mut inner = self.lock();
        if inner.sealed {
            return false;
        }
        inner.profiles.push(profile);
        true
    }

    /// Copy of everything appended so far
    pub fn snapshot(&self) -> Vec<ResolvedProfile> {
        self.lock().profiles.clone()
    }

    /// Reject all further appends and return the final contents
    pub fn seal(&self) -> Vec<ResolvedProfile> {
        let mut inner = self.lock();
        inner.sealed = true;
        inner.profiles.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
