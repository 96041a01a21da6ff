//! Virtual-time task queue.
//!
//! Tasks are ordered by deadline, then by the order they were scheduled, so
//! two tasks due at the same instant run first-in first-out.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

struct Entry<T> {
    deadline: Duration,
    id: TaskId,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.id == other.id
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.id.0.cmp(&other.id.0))
    }
}

/// Single-threaded scheduler over a virtual clock.
///
/// Time only moves when the owner calls [`pop_due`](Self::pop_due) or
/// [`advance_to`](Self::advance_to). Nothing runs by itself: the owner pops
/// due tasks and executes them, which keeps every mutation on one path.
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
    cancelled: FxHashSet<TaskId>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BinaryHeap::new(),
            cancelled: FxHashSet::default(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a task `delay` after the current time. Deadlines past the
    /// end of the clock saturate at `Duration::MAX`.
    pub fn schedule_after(&mut self, delay: Duration, task: T) -> TaskId {
        self.schedule_at(self.now.saturating_add(delay), task)
    }

    /// Schedule a task at an absolute deadline. A deadline in the past is
    /// due immediately.
    pub fn schedule_at(&mut self, deadline: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.push(Reverse(Entry { deadline, id, task }));
        id
    }

    /// Cancel a pending task. Returns false if it already ran or was
    /// never scheduled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let pending = self.queue.iter().any(|Reverse(entry)| entry.id == id);
        pending && self.cancelled.insert(id)
    }

    /// Drop every pending task. The clock is unaffected.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.cancelled.clear();
    }

    /// Deadline of the earliest live task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue
            .iter()
            .filter(|Reverse(entry)| !self.cancelled.contains(&entry.id))
            .map(|Reverse(entry)| entry.deadline)
            .min()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        self.discard_cancelled_head();

        let due = matches!(self.queue.peek(), Some(Reverse(entry)) if entry.deadline <= until);
        if !due {
            return None;
        }

        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.deadline);
        Some(entry.task)
    }

    /// Move the clock forward without running anything. Never moves it back.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len() - self.cancelled.len()
    }

    /// No live tasks pending?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn discard_cancelled_head(&mut self) {
        while let Some(id) = self.queue.peek().map(|Reverse(entry)| entry.id) {
            if !self.cancelled.remove(&id) {
                break;
            }
            self.queue.pop();
        }
    }
}

impl<T> std::fmt::Debug for Scheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("pending", &self.len())
            .finish()
    }
}
