//! Deterministic timer queue
//!
//! Stands in for the browser's timeouts and intervals so every effect is
//! driven from one place. Tasks fire in deadline order; equal deadlines
//! fire in the order they were scheduled. Every task has a handle and can
//! be cancelled.

use hecs::Entity;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Handle to a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Work the widget performs when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    EmitHeart,
    LaunchConfetti(Entity),
    Despawn(Entity),
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    task: Task,
    period_ms: Option<u64>,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    next_order: u64,
    queue: BinaryHeap<Reverse<(u64, u64, TaskId)>>, // (deadline, order, id)
    pending: HashMap<TaskId, Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scene time. While a task fires this is its deadline.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule_once(&mut self, delay_ms: u64, task: Task) -> TaskId {
        self.insert(delay_ms, task, None)
    }

    /// Fires every `period_ms`, first one period from now
    pub fn schedule_repeating(&mut self, period_ms: u64, task: Task) -> TaskId {
        let period_ms = period_ms.max(1);
        self.insert(period_ms, task, Some(period_ms))
    }

    fn insert(&mut self, delay_ms: u64, task: Task, period_ms: Option<u64>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, Pending { task, period_ms });
        self.enqueue(self.now_ms.saturating_add(delay_ms), id);
        id
    }

    fn enqueue(&mut self, deadline: u64, id: TaskId) {
        let order = self.next_order;
        self.next_order += 1;
        self.queue.push(Reverse((deadline, order, id)));
    }

    /// Cancel a task; false when it already fired or was cancelled
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Cancel every pending task, returning how many were dropped
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        self.queue.clear();
        count
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Earliest deadline still pending
    pub fn next_deadline(&mut self) -> Option<u64> {
        self.discard_cancelled();
        self.queue.peek().map(|Reverse((deadline, _, _))| *deadline)
    }

    fn discard_cancelled(&mut self) {
        while let Some(Reverse((_, _, id))) = self.queue.peek() {
            if self.pending.contains_key(id) {
                break;
            }
            self.queue.pop();
        }
    }

    /// Pop the next task due at or before `until_ms`.
    ///
    /// Moves the clock to the task's deadline, so work scheduled while
    /// handling it is timed from when it was meant to fire.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TaskId, Task)> {
        self.discard_cancelled();
        let Reverse((deadline, _, id)) = *self.queue.peek()?;
        if deadline > until_ms {
            return None;
        }
        self.queue.pop();

        let pending = *self.pending.get(&id)?;
        self.now_ms = self.now_ms.max(deadline);
        match pending.period_ms {
            Some(period) => self.enqueue(deadline.saturating_add(period), id),
            None => {
                self.pending.remove(&id);
            }
        }
        Some((id, pending.task))
    }

    /// Move the clock forward without firing anything
    pub fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
