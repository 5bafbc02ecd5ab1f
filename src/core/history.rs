//! Bounded transition history.
//!
//! The engine records every taken transition into a fixed-capacity ring so
//! the recent path through the machine can be inspected after the fact. The
//! ring is sized once at construction and overwrites its oldest entry when
//! full, keeping `step` allocation-free.

use super::state::StateId;

/// Record of a single taken transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRecord<S: StateId> {
    /// State the machine left.
    pub from: S,
    /// State the machine entered.
    pub to: S,
    /// The tick (zero-based `step` call) on which the transition fired.
    pub tick: u64,
}

/// Fixed-capacity ring of [`TransitionRecord`]s, oldest first.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{TransitionLog, TransitionRecord};
/// use lockstep::state_ids;
///
/// state_ids! {
///     enum Pump {
///         Off,
///         On,
///     }
/// }
///
/// let mut log = TransitionLog::with_capacity(2);
/// log.record(TransitionRecord { from: Pump::Off, to: Pump::On, tick: 0 });
/// log.record(TransitionRecord { from: Pump::On, to: Pump::Off, tick: 3 });
/// log.record(TransitionRecord { from: Pump::Off, to: Pump::On, tick: 4 });
///
/// // Capacity 2: the first record has been overwritten.
/// let ticks: Vec<u64> = log.iter().map(|r| r.tick).collect();
/// assert_eq!(ticks, vec![3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionLog<S: StateId> {
    records: Vec<TransitionRecord<S>>,
    capacity: usize,
    next: usize,
}

impl<S: StateId> TransitionLog<S> {
    /// Capacity used by [`TransitionLog::new`] and by machines built without
    /// an explicit log capacity.
    pub const DEFAULT_CAPACITY: usize = 32;

    /// An empty log with [`Self::DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// An empty log holding at most `capacity` records. A capacity of zero
    /// disables recording entirely.
    pub fn with_capacity(capacity: usize) -> Self {
        TransitionLog {
            records: Vec::with_capacity(capacity),
            capacity,
            next: 0,
        }
    }

    /// Append a record, overwriting the oldest one when the ring is full.
    pub fn record(&mut self, record: TransitionRecord<S>) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() < self.capacity {
            self.records.push(record);
        } else {
            self.records[self.next] = record;
        }
        self.next = (self.next + 1) % self.capacity;
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no transition has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records the ring holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&TransitionRecord<S>> {
        if self.records.is_empty() {
            return None;
        }
        let last = (self.next + self.capacity - 1) % self.capacity;
        self.records.get(last)
    }

    /// Iterate the held records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord<S>> {
        let split = if self.records.len() < self.capacity {
            0
        } else {
            self.next
        };
        self.records[split..].iter().chain(self.records[..split].iter())
    }
}

impl<S: StateId> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}
