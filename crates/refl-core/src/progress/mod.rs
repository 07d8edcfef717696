use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Subscriber invoked synchronously with `(completed, total)` after every
/// tick. It runs inline with the simulation loop, so it must be fast and
/// non-blocking.
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send>;

/// Cloneable handle for requesting cooperative cancellation of a run from a
/// controlling thread. The simulation polls the flag at sample boundaries.
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    flag: Arc<AtomicBool>,
}

impl InterruptHandle {
    pub fn request(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Tracks the work units of one simulation run and relays them to a single
/// subscriber.
///
/// One handler per run; the completed counter and interrupt flag are atomics
/// so the controlling thread can observe progress and request cancellation
/// without locks. Once the interrupt flag is raised it stays raised until the
/// next `reset`.
pub struct ProgressHandler {
    total_ticks: usize,
    completed: AtomicUsize,
    interrupted: Arc<AtomicBool>,
    callback: Option<ProgressCallback>,
}

impl Default for ProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressHandler {
    pub fn new() -> Self {
        Self {
            total_ticks: 0,
            completed: AtomicUsize::new(0),
            interrupted: Arc::new(AtomicBool::new(false)),
            callback: None,
        }
    }

    /// Total work units of the upcoming run. Call before `reset` and the
    /// first tick.
    pub fn set_max_ticks_count(&mut self, total_ticks: usize) {
        self.total_ticks = total_ticks;
    }

    /// Clears the completed count and the interrupt flag for a fresh run.
    pub fn reset(&mut self) {
        self.completed.store(0, Ordering::Release);
        self.interrupted.store(false, Ordering::Release);
    }

    /// Registers the single progress subscriber, replacing any previous one.
    pub fn subscribe(&mut self, callback: ProgressCallback) {
        self.callback = Some(callback);
    }

    pub fn unsubscribe(&mut self) {
        self.callback = None;
    }

    /// Adds `delta` completed ticks, saturating at the total, then notifies
    /// the subscriber with the updated snapshot.
    pub fn set_completed_ticks(&self, delta: usize) {
        let current = self.completed.load(Ordering::Acquire);
        let updated = current.saturating_add(delta).min(self.total_ticks);
        self.completed.store(updated, Ordering::Release);
        if let Some(callback) = &self.callback {
            callback(updated, self.total_ticks);
        }
    }

    pub fn completed_ticks(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    pub fn max_ticks_count(&self) -> usize {
        self.total_ticks
    }

    pub fn request_interrupt(&self) {
        self.interrupted.store(true, Ordering::Release);
    }

    pub fn has_interrupt_request(&self) -> bool {
        self.interrupted.load(Ordering::Acquire)
    }

    /// Handle the controlling thread keeps while `run` owns the simulation.
    pub fn interrupt_handle(&self) -> InterruptHandle {
        InterruptHandle {
            flag: Arc::clone(&self.interrupted),
        }
    }
}

impl std::fmt::Debug for ProgressHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressHandler")
            .field("total_ticks", &self.total_ticks)
            .field("completed", &self.completed_ticks())
            .field("interrupted", &self.has_interrupt_request())
            .field("subscribed", &self.callback.is_some())
            .finish()
    }
}
