//! Wiring between an indicator, a renderer, and a host scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use crate::indicator::RingIndicator;
use crate::outputs::FrameSink;
use crate::schedule::{Scheduler, TaskId};

/// Owns the scheduled tasks that animate a [`RingIndicator`].
///
/// One frame subscription ticks the indicator and hands the finished frame
/// to the sink; one interval per layer drives redistribution at the layer's
/// staggered cadence. [`IndicatorDriver::shutdown`] (or dropping the
/// driver) cancels everything; teardown is idempotent.
pub struct IndicatorDriver<S: Scheduler> {
    scheduler: S,
    tasks: Vec<TaskId>,
    indicator: Rc<RefCell<RingIndicator>>,
}

impl<S: Scheduler> IndicatorDriver<S> {
    pub fn start(
        indicator: RingIndicator,
        sink: Box<dyn FrameSink>,
        mut scheduler: S,
    ) -> Self {
        let indicator = Rc::new(RefCell::new(indicator));
        let sink = Rc::new(RefCell::new(sink));
        let mut tasks = Vec::new();

        {
            let indicator = Rc::clone(&indicator);
            let sink = Rc::clone(&sink);
            tasks.push(scheduler.request_frames(Box::new(move |dt_ms| {
                let mut indicator = indicator.borrow_mut();
                let frame = indicator.advance(dt_ms);
                sink.borrow_mut().paint(frame);
            })));
        }

        let layer_count = indicator.borrow().layer_count();
        for index in 0..layer_count {
            let period_ms = indicator.borrow().change_interval_ms(index);
            let indicator = Rc::clone(&indicator);
            tasks.push(scheduler.set_interval(
                period_ms,
                Box::new(move || indicator.borrow_mut().redistribute_layer(index)),
            ));
        }

        Self {
            scheduler,
            tasks,
            indicator,
        }
    }

    /// Shared handle to the driven indicator, for frame inspection or
    /// manual redistribution.
    pub fn indicator(&self) -> Rc<RefCell<RingIndicator>> {
        Rc::clone(&self.indicator)
    }

    /// Cancel every outstanding task. Safe to call more than once; the
    /// schedulers' cancels are themselves idempotent.
    pub fn shutdown(&mut self) {
        for id in self.tasks.drain(..) {
            self.scheduler.cancel(id);
        }
    }
}

impl<S: Scheduler> Drop for IndicatorDriver<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
