//! Cancellable deferred tasks on a virtual clock
//!
//! The clock only moves when the owner advances it (once per frame in the
//! app, explicitly in tests). Tasks are popped one at a time so that work
//! done by an earlier task can cancel a later one that is already due.

use std::time::Duration;

/// Handle returned when scheduling; used to cancel the task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct ScheduledTask<K> {
    handle: TaskHandle,
    due: Duration,
    interval: Option<Duration>,
    /// Tie-breaker for tasks due at the same instant
    seq: u64,
    task: K,
}

/// Single-threaded timer queue
#[derive(Debug)]
pub struct Scheduler<K> {
    now: Duration,
    next_handle: u64,
    next_seq: u64,
    tasks: Vec<ScheduledTask<K>>,
}

impl<K: Clone> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            next_seq: 0,
            tasks: Vec::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once, `delay` from now
    pub fn schedule_once(&mut self, delay: Duration, task: K) -> TaskHandle {
        self.push(delay, None, task)
    }

    /// Run `task` every `interval`, first after one interval
    pub fn schedule_repeating(&mut self, interval: Duration, task: K) -> TaskHandle {
        // A zero interval would fire forever within one advance
        let interval = interval.max(Duration::from_millis(1));
        self.push(interval, Some(interval), task)
    }

    fn push(&mut self, delay: Duration, interval: Option<Duration>, task: K) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        let seq = self.bump_seq();
        self.tasks.push(ScheduledTask {
            handle,
            due: self.now + delay,
            interval,
            seq,
            task,
        });
        handle
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Remove a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Pop the earliest task due at or before `deadline`, moving the clock to
    /// its due time. Repeating tasks are re-armed one interval later.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TaskHandle, K)> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;

        let due = self.tasks[index].due;
        if due > self.now {
            self.now = due;
        }

        match self.tasks[index].interval {
            Some(interval) => {
                let seq = self.bump_seq();
                let entry = &mut self.tasks[index];
                entry.due += interval;
                entry.seq = seq;
                Some((entry.handle, entry.task.clone()))
            }
            None => {
                let entry = self.tasks.swap_remove(index);
                Some((entry.handle, entry.task))
            }
        }
    }

    /// Move the clock forward to `deadline` without firing anything.
    /// Call after draining `pop_due` for the same deadline.
    pub fn settle(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }

    /// Advance by `dt` and collect every task that fired, in order
    pub fn advance(&mut self, dt: Duration) -> Vec<K> {
        let deadline = self.now + dt;
        let mut fired = Vec::new();
        while let Some((_, task)) = self.pop_due(deadline) {
            fired.push(task);
        }
        self.settle(deadline);
        fired
    }
}

impl<K: Clone> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
