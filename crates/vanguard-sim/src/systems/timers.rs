//! Delayed callback queue driven by the scene clock.

use crate::scene::{CancelToken, TimerCallback};

/// A callback waiting for its deadline.
pub struct PendingTimer {
    pub due_ms: f64,
    seq: u64,
    pub token: CancelToken,
    pub callback: TimerCallback,
}

/// Timers ordered by deadline, ties broken by scheduling order.
#[derive(Default)]
pub struct TimerQueue {
    pending: Vec<PendingTimer>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, token: CancelToken, callback: TimerCallback) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            due_ms,
            seq,
            token,
            callback,
        });
    }

    /// Remove and return every live timer due at `now_ms`, in firing order.
    /// Cancelled timers are discarded on the way.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<PendingTimer> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .filter(|timer| !timer.token.is_cancelled())
            .partition(|timer| timer.due_ms <= now_ms);
        self.pending = waiting;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due
    }

    /// Number of timers that can still fire.
    pub fn live_count(&self) -> usize {
        self.pending
            .iter()
            .filter(|timer| !timer.token.is_cancelled())
            .count()
    }
}
