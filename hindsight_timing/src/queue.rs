// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot-based timer storage with generational cancellation tokens.

use alloc::vec::Vec;

use crate::time::HostTime;

/// Handle to a scheduled timer.
///
/// Tokens are generational: once a timer fires or is cancelled, its slot may be
/// reused, but the old token never matches the new occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId {
    idx: u32,
    generation: u32,
}

#[derive(Debug)]
struct Entry<T> {
    deadline: HostTime,
    seq: u64,
    payload: T,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Option<Entry<T>>,
}

/// A queue of payloads keyed by deadline.
///
/// Due timers are delivered in deadline order; timers sharing a deadline are
/// delivered in scheduling order. Queues are expected to stay small (a handful
/// of live timers), so lookups are linear scans over the slots.
#[derive(Debug)]
pub struct TimerQueue<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    next_seq: u64,
    live: usize,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            next_seq: 0,
            live: 0,
        }
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: HostTime, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let entry = Entry {
            deadline,
            seq,
            payload,
        };
        self.live += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.entry = Some(entry);
            TimerId {
                idx,
                generation: slot.generation,
            }
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 0,
                entry: Some(entry),
            });
            TimerId { idx, generation: 0 }
        }
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the token already fired, was already cancelled, or
    /// never belonged to this queue.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.take(id).is_some()
    }

    /// Returns `true` while `id` is scheduled and has not fired.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.slots
            .get(id.idx as usize)
            .is_some_and(|slot| slot.generation == id.generation && slot.entry.is_some())
    }

    /// Deadline of `id`, if it is still pending.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<HostTime> {
        let slot = self.slots.get(id.idx as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref().map(|e| e.deadline)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.slots
            .iter()
            .filter_map(|slot| slot.entry.as_ref())
            .map(|e| e.deadline)
            .min()
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: HostTime) -> Option<(TimerId, T)> {
        let mut best: Option<(usize, HostTime, u64)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            let Some(entry) = &slot.entry else {
                continue;
            };
            if entry.deadline > now {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, deadline, seq)) => (entry.deadline, entry.seq) < (deadline, seq),
            };
            if better {
                best = Some((idx, entry.deadline, entry.seq));
            }
        }
        let (idx, _, _) = best?;
        let id = TimerId {
            idx: u32::try_from(idx).ok()?,
            generation: self.slots[idx].generation,
        };
        self.take(id).map(|payload| (id, payload))
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        for idx in 0..self.slots.len() {
            if self.slots[idx].entry.is_some() {
                let id = TimerId {
                    idx: u32::try_from(idx).unwrap_or(u32::MAX),
                    generation: self.slots[idx].generation,
                };
                self.take(id);
            }
        }
    }

    fn take(&mut self, id: TimerId) -> Option<T> {
        let slot = self.slots.get_mut(id.idx as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.idx);
        self.live -= 1;
        Some(entry.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Duration;

    #[test]
    fn due_timers_pop_in_deadline_then_schedule_order() {
        let mut q = TimerQueue::new();
        let t = HostTime::from_millis(10);
        q.schedule(t + Duration::from_millis(5), 3);
        q.schedule(t, 1);
        q.schedule(t, 2);

        assert_eq!(q.next_deadline(), Some(t));
        assert_eq!(q.pop_due(t).map(|(_, v)| v), Some(1));
        assert_eq!(q.pop_due(t).map(|(_, v)| v), Some(2));
        assert_eq!(q.pop_due(t), None);
        assert_eq!(
            q.pop_due(t + Duration::from_millis(5)).map(|(_, v)| v),
            Some(3)
        );
        assert!(q.is_empty());
    }

    #[test]
    fn cancelled_timer_is_never_delivered() {
        let mut q = TimerQueue::new();
        let id = q.schedule(HostTime::ZERO, ());
        assert!(q.is_pending(id));
        assert!(q.cancel(id));
        assert!(!q.is_pending(id));
        assert!(!q.cancel(id));
        assert_eq!(q.pop_due(HostTime::from_millis(100)), None);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn stale_token_does_not_cancel_slot_reuse() {
        let mut q = TimerQueue::new();
        let first = q.schedule(HostTime::ZERO, "first");
        assert_eq!(q.pop_due(HostTime::ZERO), Some((first, "first")));

        let second = q.schedule(HostTime::ZERO, "second");
        assert_ne!(first, second);
        assert!(!q.cancel(first));
        assert!(q.is_pending(second));
        assert_eq!(q.deadline(second), Some(HostTime::ZERO));
        assert_eq!(q.deadline(first), None);
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = TimerQueue::new();
        let a = q.schedule(HostTime::ZERO, 1);
        q.schedule(HostTime::from_millis(1), 2);
        q.clear();
        assert!(q.is_empty());
        assert!(!q.is_pending(a));
        assert_eq!(q.next_deadline(), None);
    }
}
