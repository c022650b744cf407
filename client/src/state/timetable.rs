//! Expansion state for session detail dialogs.
//!
//! Each session card toggles independently: opening one never closes or
//! opens another. Keys are positions in [`SCHEDULE`].

#[cfg(test)]
#[path = "timetable_test.rs"]
mod timetable_test;

use std::collections::BTreeSet;

use super::schedule::{SCHEDULE, ScheduleEntry, Session};

/// Position of a session: `SCHEDULE[entry].sessions()[session]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey {
    pub entry: usize,
    pub session: usize,
}

impl SessionKey {
    #[must_use]
    pub fn new(entry: usize, session: usize) -> Self {
        Self { entry, session }
    }

    /// Look the key up in the schedule. `None` for simple rows or out-of-range indices.
    #[must_use]
    pub fn resolve(self) -> Option<(&'static ScheduleEntry, &'static Session)> {
        let entry = SCHEDULE.get(self.entry)?;
        let session = entry.sessions().get(self.session)?;
        Some((entry, session))
    }
}

/// Every session key in page order.
pub fn all_session_keys() -> impl Iterator<Item = SessionKey> {
    SCHEDULE.iter().enumerate().flat_map(|(entry, row)| {
        (0..row.sessions().len()).map(move |session| SessionKey { entry, session })
    })
}

/// Which session dialogs are currently open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimetableState {
    open: BTreeSet<SessionKey>,
}

impl TimetableState {
    /// Expand a session. Returns `false` if it was already open or the key
    /// does not name a session.
    pub fn open(&mut self, key: SessionKey) -> bool {
        if key.resolve().is_none() {
            return false;
        }
        self.open.insert(key)
    }

    /// Collapse a session. Returns `false` if it was not open.
    pub fn close(&mut self, key: SessionKey) -> bool {
        self.open.remove(&key)
    }

    /// Flip a session and return its new state.
    pub fn toggle(&mut self, key: SessionKey) -> bool {
        if self.close(key) { false } else { self.open(key) }
    }

    #[must_use]
    pub fn is_open(&self, key: SessionKey) -> bool {
        self.open.contains(&key)
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}
