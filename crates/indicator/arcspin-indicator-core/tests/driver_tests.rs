use std::cell::RefCell;
use std::rc::Rc;

use arcspin_indicator_core::{
    driver::IndicatorDriver,
    indicator::RingIndicator,
    outputs::{Frame, FrameSink},
    presets,
    random::SeededRandom,
    schedule::{ManualScheduler, Scheduler},
};

/// Counts paints and keeps the last frame for inspection.
#[derive(Clone, Default)]
struct CountingSink {
    paints: Rc<RefCell<usize>>,
    last: Rc<RefCell<Option<Frame>>>,
}

impl FrameSink for CountingSink {
    fn paint(&mut self, frame: &Frame) {
        *self.paints.borrow_mut() += 1;
        *self.last.borrow_mut() = Some(frame.clone());
    }
}

fn driven_indicator() -> RingIndicator {
    RingIndicator::with_random_source(
        presets::multi_layer_indicator(3, false, false),
        Box::new(SeededRandom::from_seed(17)),
    )
    .unwrap()
}

/// it should paint one frame per scheduler step with the stepped delta
#[test]
fn frames_reach_the_sink() {
    let scheduler = ManualScheduler::new();
    let sink = CountingSink::default();
    let _driver = IndicatorDriver::start(
        driven_indicator(),
        Box::new(sink.clone()),
        scheduler.clone(),
    );

    for _ in 0..3 {
        scheduler.step_frame(16.0);
    }
    assert_eq!(*sink.paints.borrow(), 3);
    let last = sink.last.borrow();
    let frame = last.as_ref().expect("frame painted");
    assert_eq!(frame.layers.len(), 3);
    assert!(frame.layers.iter().all(|layer| layer.wedges.len() == 3));
}

/// it should fire redistribution intervals at the staggered cadences
#[test]
fn staggered_intervals_fire_in_order() {
    let scheduler = ManualScheduler::new();
    let sink = CountingSink::default();
    let driver = IndicatorDriver::start(
        driven_indicator(),
        Box::new(sink),
        scheduler.clone(),
    );
    let indicator = driver.indicator();

    // Layer cadences are 1500 / 1900 / 2300 ms; at t=1600 only layer 0 has
    // retargeted.
    scheduler.step_frame(1600.0);
    {
        let indicator = indicator.borrow();
        assert!(indicator.layer(0).unwrap().is_transitioning());
        assert!(!indicator.layer(1).unwrap().is_transitioning());
        assert!(!indicator.layer(2).unwrap().is_transitioning());
    }

    // By t=2400 every layer has fired at least once.
    scheduler.step_frame(800.0);
    {
        let indicator = indicator.borrow();
        assert!(indicator.layer(1).unwrap().is_transitioning());
        assert!(indicator.layer(2).unwrap().is_transitioning());
    }
}

/// it should stop all tasks on shutdown and stay quiet afterwards
#[test]
fn shutdown_cancels_everything() {
    let scheduler = ManualScheduler::new();
    let sink = CountingSink::default();
    let mut driver = IndicatorDriver::start(
        driven_indicator(),
        Box::new(sink.clone()),
        scheduler.clone(),
    );

    assert_eq!(scheduler.task_count(), 4); // 1 frame subscription + 3 intervals
    driver.shutdown();
    assert_eq!(scheduler.task_count(), 0);

    scheduler.step_frame(5000.0);
    assert_eq!(*sink.paints.borrow(), 0);

    // Idempotent: a second teardown is a no-op.
    driver.shutdown();
    assert_eq!(scheduler.task_count(), 0);
}

/// it should tear down on drop
#[test]
fn drop_cancels_everything() {
    let scheduler = ManualScheduler::new();
    {
        let _driver = IndicatorDriver::start(
            driven_indicator(),
            Box::new(CountingSink::default()),
            scheduler.clone(),
        );
        assert_eq!(scheduler.task_count(), 4);
    }
    assert_eq!(scheduler.task_count(), 0);
}

/// it should tolerate duplicate cancellation of the same task id
#[test]
fn cancel_is_idempotent() {
    let mut scheduler = ManualScheduler::new();
    let id = scheduler.set_interval(100.0, Box::new(|| {}));
    scheduler.cancel(id);
    scheduler.cancel(id);
    assert_eq!(scheduler.task_count(), 0);
}

/// it should accrue no missed-tick debt while the host stops stepping
#[test]
fn paused_host_has_no_tick_debt() {
    let scheduler = ManualScheduler::new();
    let sink = CountingSink::default();
    let _driver = IndicatorDriver::start(
        driven_indicator(),
        Box::new(sink.clone()),
        scheduler.clone(),
    );

    scheduler.step_frame(16.0);
    let rotation_after_first = sink
        .last
        .borrow()
        .as_ref()
        .unwrap()
        .layers[0]
        .rotation_deg;

    // A long gap is a single large delta, not a backlog of 16 ms ticks.
    scheduler.step_frame(1000.0);
    let rotation_after_gap = sink.last.borrow().as_ref().unwrap().layers[0].rotation_deg;
    assert_eq!(*sink.paints.borrow(), 2);
    let expected = (rotation_after_first + 1000.0 * 0.1).rem_euclid(360.0);
    assert!((rotation_after_gap - expected).abs() < 1e-3);
}

/// it should catch up an overdue interval by firing it repeatedly
#[test]
fn overdue_intervals_fire_multiple_times() {
    let mut scheduler = ManualScheduler::new();
    let fired = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&fired);
    scheduler.set_interval(100.0, Box::new(move || *counter.borrow_mut() += 1));

    scheduler.step_frame(350.0);
    assert_eq!(*fired.borrow(), 3);
}
