use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// Frame interval used when the host has no native rendering-pass callback (1000/60 ms).
pub const FALLBACK_FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

pub type FrameTask = Box<dyn FnOnce()>;

/// How the scheduler learns that a rendering pass has been committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStrategy {
    /// The host reports each committed pass through [`PostFrameScheduler::frame_committed`].
    RenderPass,
    /// Compatibility path: a task is due once `interval` has elapsed on the host clock
    /// ([`PostFrameScheduler::advance`]).
    Timer { interval: Duration },
}

impl FrameStrategy {
    pub fn timer_fallback() -> Self {
        Self::Timer {
            interval: FALLBACK_FRAME_INTERVAL,
        }
    }

    /// Native passes when the host has them, the timer otherwise.
    pub fn for_host(has_render_pass_callback: bool) -> Self {
        if has_render_pass_callback {
            Self::RenderPass
        } else {
            Self::timer_fallback()
        }
    }
}

struct Pending {
    submitted_at: Duration,
    task: FrameTask,
}

struct Queues {
    strategy: FrameStrategy,
    clock: Duration,
    pending: VecDeque<Pending>,
    deferred: VecDeque<FrameTask>,
}

/// Runs tasks after the rendering pass current at submission has been committed, plus one
/// deferred turn, so geometry read inside a task reflects a settled frame.
///
/// Guarantees are no-earlier-than and at-least-once: a task never runs before its pass is
/// committed, and runs on the first [`run_deferred`](Self::run_deferred) after that. Tasks
/// posted from inside a running task wait for the next pass.
///
/// Handles are cheap clones sharing one queue; the scheduler is single-threaded.
#[derive(Clone)]
pub struct PostFrameScheduler {
    inner: Rc<RefCell<Queues>>,
}

impl PostFrameScheduler {
    pub fn new(strategy: FrameStrategy) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Queues {
                strategy,
                clock: Duration::ZERO,
                pending: VecDeque::new(),
                deferred: VecDeque::new(),
            })),
        }
    }

    pub fn strategy(&self) -> FrameStrategy {
        self.inner.borrow().strategy
    }

    /// Queue `task`, stamped with the host clock at submission. `now` older than the last
    /// observed clock is clamped to it.
    pub fn post(&self, now: Duration, task: impl FnOnce() + 'static) {
        let mut q = self.inner.borrow_mut();
        let submitted_at = q.clock.max(now);
        q.clock = submitted_at;
        q.pending.push_back(Pending {
            submitted_at,
            task: Box::new(task),
        });
    }

    /// The host committed a rendering pass. Everything pending becomes runnable.
    /// Ignored under [`FrameStrategy::Timer`].
    pub fn frame_committed(&self) -> usize {
        let mut q = self.inner.borrow_mut();
        if q.strategy != FrameStrategy::RenderPass {
            return 0;
        }
        let promoted = q.pending.len();
        let drained: Vec<_> = q.pending.drain(..).map(|p| p.task).collect();
        q.deferred.extend(drained);
        tracing::trace!(promoted, "render pass committed");
        promoted
    }

    /// Move the host clock to `now` and, under [`FrameStrategy::Timer`], promote every task
    /// whose interval has elapsed. The clock never moves backwards.
    pub fn advance(&self, now: Duration) -> usize {
        let mut q = self.inner.borrow_mut();
        q.clock = q.clock.max(now);
        let FrameStrategy::Timer { interval } = q.strategy else {
            return 0;
        };

        let clock = q.clock;
        let mut promoted = 0;
        while q
            .pending
            .front()
            .is_some_and(|p| p.submitted_at + interval <= clock)
        {
            if let Some(p) = q.pending.pop_front() {
                q.deferred.push_back(p.task);
                promoted += 1;
            }
        }
        if promoted > 0 {
            tracing::trace!(promoted, ?clock, "frame timer elapsed");
        }
        promoted
    }

    /// Run every runnable task in submission order; returns how many ran.
    pub fn run_deferred(&self) -> usize {
        let batch = std::mem::take(&mut self.inner.borrow_mut().deferred);
        let ran = batch.len();
        for task in batch {
            task();
        }
        ran
    }

    pub fn pending_len(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn deferred_len(&self) -> usize {
        self.inner.borrow().deferred.len()
    }

    pub fn is_idle(&self) -> bool {
        let q = self.inner.borrow();
        q.pending.is_empty() && q.deferred.is_empty()
    }
}

impl std::fmt::Debug for PostFrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let q = self.inner.borrow();
        f.debug_struct("PostFrameScheduler")
            .field("strategy", &q.strategy)
            .field("clock", &q.clock)
            .field("pending", &q.pending.len())
            .field("deferred", &q.deferred.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/post_frame.rs"]
mod tests;
