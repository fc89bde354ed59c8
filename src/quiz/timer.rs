//! Tick-driven cancellable timers.
//!
//! The scheduler owns no thread. The caller advances it with `tick()` once per
//! second and receives every timer that reached zero on that tick. A fired or
//! cancelled handle is gone for good, so a timer can fire at most once.

/// What a timer was armed for, tagged with the question index it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Countdown { question: usize },
    Feedback { question: usize },
}

/// Identifies one armed timer. Handles are never reused within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub kind: TimerKind,
}

#[derive(Debug, Clone)]
struct Scheduled {
    handle: TimerHandle,
    kind: TimerKind,
    remaining: u32,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer that fires after `ticks` calls to `tick()`. Zero is treated as one.
    pub fn arm(&mut self, kind: TimerKind, ticks: u32) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push(Scheduled {
            handle,
            kind,
            remaining: ticks.max(1),
        });
        handle
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    pub fn remaining(&self, handle: TimerHandle) -> Option<u32> {
        self.pending
            .iter()
            .find(|s| s.handle == handle)
            .map(|s| s.remaining)
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.remaining(handle).is_some()
    }

    pub fn tick(&mut self) -> Vec<Fired> {
        let mut fired = Vec::new();
        for scheduled in &mut self.pending {
            scheduled.remaining -= 1;
            if scheduled.remaining == 0 {
                fired.push(Fired {
                    handle: scheduled.handle,
                    kind: scheduled.kind,
                });
            }
        }
        self.pending.retain(|s| s.remaining > 0);
        fired
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
