// ============================================================================
// TIMERS - Delayed callbacks (gloo_timers in the browser)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Runs `task` once after `delay_ms`. Scheduled tasks are never cancelled.
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Queues tasks until the owner fires them; used where no event loop exists
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pending: Rc<RefCell<Vec<(u32, Task)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Fires every task queued so far, in scheduling order. Tasks scheduled
    /// while firing stay queued for the next call.
    pub fn run_pending(&self) -> usize {
        let tasks: Vec<(u32, Task)> = self.pending.borrow_mut().drain(..).collect();
        let count = tasks.len();
        for (_, task) in tasks {
            task();
        }
        count
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        self.pending.borrow_mut().push((delay_ms, task));
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        // Fire-and-forget: the timeout must outlive this call
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
