use std::collections::{BTreeMap, HashMap};

use super::IndicatorId;

/// Handle returned by [`TimerQueue::schedule`], used to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Remove the highlight marker from a pad.
    ClearHighlight(IndicatorId),
    /// Apply the visible marker to the pad at this index.
    Reveal(usize),
    /// Start handling key-downs.
    EnableInput,
}

/// One-shot timers ordered by deadline, then by registration order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    /// Keyed by (deadline_ms, sequence).
    pending: BTreeMap<(u64, u64), T>,
    /// Sequence -> deadline, for cancellation.
    deadlines: HashMap<u64, u64>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, deadline_ms: u64, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((deadline_ms, seq), payload);
        self.deadlines.insert(seq, deadline_ms);
        TimerId(seq)
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id.0) {
            Some(deadline) => self.pending.remove(&(deadline, id.0)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id.0)
    }

    /// Pop the earliest timer whose deadline is at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerId, u64, T)> {
        let (&(deadline, seq), _) = self.pending.first_key_value()?;
        if deadline > now_ms {
            return None;
        }
        let payload = self.pending.remove(&(deadline, seq))?;
        self.deadlines.remove(&seq);
        Some((TimerId(seq), deadline, payload))
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(|&(deadline, _)| deadline)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
