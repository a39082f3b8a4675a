//! Growable record storage.

use std::collections::TryReserveError;

use tracing::debug;

use crate::error::{Result, RosterError};
use crate::record::{DomesticStudent, InternationalStudent, StudentRecord};

/// Initial per-kind capacity reserved by a fresh store.
pub const INITIAL_CAPACITY: usize = 150;

/// Committed records of both kinds, behind a shared growth threshold.
///
/// Both collections reserve `INITIAL_CAPACITY` slots up front. Whenever a
/// commit fills either kind up to the current threshold, the threshold
/// doubles and both collections grow in lockstep; existing entries are
/// preserved and capacity never shrinks during a run. Reservation is
/// fallible, so exhaustion surfaces as an error instead of an abort.
#[derive(Debug)]
pub struct RosterStore {
    domestic: Vec<DomesticStudent>,
    international: Vec<InternationalStudent>,
    capacity: usize,
}

impl RosterStore {
    /// Creates a store with the initial per-kind reservation.
    pub fn new() -> Result<Self> {
        let mut store = Self {
            domestic: Vec::new(),
            international: Vec::new(),
            capacity: INITIAL_CAPACITY,
        };
        store.reserve_to(INITIAL_CAPACITY)?;
        Ok(store)
    }

    /// Commits a validated domestic record.
    pub fn commit_domestic(&mut self, record: DomesticStudent) -> Result<()> {
        self.domestic.push(record);
        self.grow_if_full()
    }

    /// Commits a validated international record.
    pub fn commit_international(&mut self, record: InternationalStudent) -> Result<()> {
        self.international.push(record);
        self.grow_if_full()
    }

    /// Committed domestic records in commit order.
    pub fn domestic(&self) -> &[DomesticStudent] {
        &self.domestic
    }

    /// Committed international records in commit order.
    pub fn international(&self) -> &[InternationalStudent] {
        &self.international
    }

    /// Current shared capacity threshold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total committed records across both kinds.
    pub fn len(&self) -> usize {
        self.domestic.len() + self.international.len()
    }

    /// True when no record of either kind has been committed.
    pub fn is_empty(&self) -> bool {
        self.domestic.is_empty() && self.international.is_empty()
    }

    /// The mixed-kind sequence: domestic entries in commit order followed
    /// by international entries in commit order.
    pub fn collect_all(&self) -> Vec<StudentRecord> {
        let mut all = Vec::with_capacity(self.len());
        all.extend(self.domestic.iter().cloned().map(StudentRecord::from));
        all.extend(self.international.iter().cloned().map(StudentRecord::from));
        all
    }

    /// Doubles the shared threshold once either kind has filled it.
    fn grow_if_full(&mut self) -> Result<()> {
        if self.domestic.len() < self.capacity && self.international.len() < self.capacity {
            return Ok(());
        }
        let next = self.capacity * 2;
        self.reserve_to(next)?;
        self.capacity = next;
        debug!(capacity = next, "record store grown");
        Ok(())
    }

    /// Fallibly reserves room for `target` entries in each collection.
    fn reserve_to(&mut self, target: usize) -> Result<()> {
        self.domestic
            .try_reserve(target.saturating_sub(self.domestic.len()))
            .map_err(|e| storage_exhausted(target, e))?;
        self.international
            .try_reserve(target.saturating_sub(self.international.len()))
            .map_err(|e| storage_exhausted(target, e))?;
        Ok(())
    }
}

fn storage_exhausted(requested: usize, source: TryReserveError) -> RosterError {
    RosterError::StorageExhausted {
        requested,
        detail: source.to_string(),
    }
}
