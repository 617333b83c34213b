//! Host scheduling boundary.
//!
//! The core never owns a real timer. Hosts provide a per-frame callback
//! subscription and repeating intervals through [`Scheduler`], each paired
//! with an idempotent cancel. All callbacks are cooperative: one runs to
//! completion before the next is dispatched, so implementations need no
//! synchronization. [`ManualScheduler`] is the deterministic, clock-stepped
//! implementation used for time-mocked testing.

use std::cell::RefCell;
use std::rc::Rc;

/// Invoked once per frame with the elapsed milliseconds since the previous
/// frame.
pub type FrameCallback = Box<dyn FnMut(f32)>;
/// Invoked each time a repeating interval elapses.
pub type IntervalCallback = Box<dyn FnMut()>;

/// Opaque handle to a scheduled task.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TaskId(pub u64);

/// Scheduling capability the host must provide.
pub trait Scheduler {
    /// Subscribe `cb` to the host's repaint cadence ("invoke me with the
    /// elapsed time before the next repaint").
    fn request_frames(&mut self, cb: FrameCallback) -> TaskId;
    /// Invoke `cb` every `period_ms` (must be positive).
    fn set_interval(&mut self, period_ms: f32, cb: IntervalCallback) -> TaskId;
    /// Cancel a task. Canceling twice, or canceling an unknown id, is a
    /// no-op.
    fn cancel(&mut self, id: TaskId);
}

enum Task {
    Frame(FrameCallback),
    Interval {
        period_ms: f32,
        next_due_ms: f64,
        cb: IntervalCallback,
    },
}

#[derive(Default)]
struct Inner {
    now_ms: f64,
    next_id: u64,
    tasks: Vec<(TaskId, Task)>,
    cancelled: Vec<TaskId>,
}

/// Deterministic scheduler for tests: time only moves when stepped.
///
/// Clones share the same task table, so a test can keep one handle to step
/// the clock while a driver owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms
    }

    /// Outstanding (non-cancelled) tasks.
    pub fn task_count(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Advance the clock by `dt_ms`: intervals that fell due fire first, in
    /// deadline order (several times each if overdue), then every frame
    /// subscriber runs once with the full `dt_ms` delta.
    pub fn step_frame(&self, dt_ms: f32) {
        let (target_ms, mut tasks) = {
            let mut inner = self.inner.borrow_mut();
            inner.now_ms += f64::from(dt_ms);
            (inner.now_ms, std::mem::take(&mut inner.tasks))
        };

        loop {
            let due = tasks
                .iter()
                .enumerate()
                .filter_map(|(i, (_, task))| match task {
                    Task::Interval { next_due_ms, .. } if *next_due_ms <= target_ms => {
                        Some((i, *next_due_ms))
                    }
                    _ => None,
                })
                .min_by(|a, b| a.1.total_cmp(&b.1));
            let Some((index, _)) = due else { break };
            if let (_, Task::Interval {
                period_ms,
                next_due_ms,
                cb,
            }) = &mut tasks[index]
            {
                cb();
                if *period_ms > 0.0 {
                    *next_due_ms += f64::from(*period_ms);
                } else {
                    // Malformed period; park the task instead of spinning.
                    *next_due_ms = f64::INFINITY;
                }
            }
        }

        for (_, task) in &mut tasks {
            if let Task::Frame(cb) = task {
                cb(dt_ms);
            }
        }

        // Merge back, honoring cancellations and additions made while the
        // callbacks ran.
        let mut inner = self.inner.borrow_mut();
        let cancelled = std::mem::take(&mut inner.cancelled);
        tasks.retain(|(id, _)| !cancelled.contains(id));
        let added = std::mem::take(&mut inner.tasks);
        tasks.extend(added);
        inner.tasks = tasks;
    }
}

impl Scheduler for ManualScheduler {
    fn request_frames(&mut self, cb: FrameCallback) -> TaskId {
        let mut inner = self.inner.borrow_mut();
        let id = TaskId(inner.next_id);
        inner.next_id += 1;
        inner.tasks.push((id, Task::Frame(cb)));
        id
    }

    fn set_interval(&mut self, period_ms: f32, cb: IntervalCallback) -> TaskId {
        let mut inner = self.inner.borrow_mut();
        let id = TaskId(inner.next_id);
        inner.next_id += 1;
        let next_due_ms = inner.now_ms + f64::from(period_ms);
        inner.tasks.push((
            id,
            Task::Interval {
                period_ms,
                next_due_ms,
                cb,
            },
        ));
        id
    }

    fn cancel(&mut self, id: TaskId) {
        let mut inner = self.inner.borrow_mut();
        inner.tasks.retain(|(task_id, _)| *task_id != id);
        inner.cancelled.push(id);
    }
}
