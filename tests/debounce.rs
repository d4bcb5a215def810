use std::cell::RefCell;
use std::rc::Rc;

use content_core::sync::{Consumer, DebouncedSync, DEFAULT_QUIET_WINDOW};

#[derive(Default)]
struct ConsumerState {
    loading: Vec<bool>,
    delivered: Vec<String>,
}

#[derive(Clone, Default)]
struct RecordingConsumer(Rc<RefCell<ConsumerState>>);

impl Consumer for RecordingConsumer {
    fn set_loading(&mut self, loading: bool) {
        self.0.borrow_mut().loading.push(loading);
    }

    fn set_canonical_json(&mut self, json: &str) {
        self.0.borrow_mut().delivered.push(json.to_string());
    }
}

impl RecordingConsumer {
    fn delivered(&self) -> Vec<String> {
        self.0.borrow().delivered.clone()
    }

    fn loading(&self) -> Vec<bool> {
        self.0.borrow().loading.clone()
    }
}

fn make_sync(consumer: &RecordingConsumer) -> DebouncedSync {
    DebouncedSync::new(Box::new(consumer.clone()), DEFAULT_QUIET_WINDOW)
}

#[test]
fn invariant_loading_flips_synchronously_on_schedule() {
    let consumer = RecordingConsumer::default();
    let mut sync = make_sync(&consumer);

    sync.schedule("{}".into(), 0);

    assert_eq!(consumer.loading(), vec![true]);
    assert!(consumer.delivered().is_empty());
}

#[test]
fn invariant_burst_coalesces_to_last_value() {
    let consumer = RecordingConsumer::default();
    let mut sync = make_sync(&consumer);

    for (i, at) in [0u64, 50, 100, 150, 200].iter().enumerate() {
        sync.schedule(format!("{{\"v\":{}}}", i + 1), *at);
    }

    // Window rearms from the 5th call at t=200
    assert!(!sync.poll(599));
    assert!(sync.poll(600));
    assert_eq!(consumer.delivered(), vec!["{\"v\":5}".to_string()]);

    // Nothing queued behind the survivor
    assert!(!sync.poll(10_000));
    assert_eq!(consumer.delivered().len(), 1);
}

#[test]
fn invariant_quiet_window_is_trailing_edge() {
    let consumer = RecordingConsumer::default();
    let mut sync = make_sync(&consumer);

    sync.schedule("{\"a\":1}".into(), 0);
    assert!(!sync.poll(399));
    assert!(sync.poll(400));
    assert_eq!(consumer.delivered(), vec!["{\"a\":1}".to_string()]);
}

#[test]
fn invariant_poll_without_pending_is_a_no_op() {
    let consumer = RecordingConsumer::default();
    let mut sync = make_sync(&consumer);

    assert!(!sync.poll(0));
    assert!(!sync.poll(u64::MAX));
    assert!(consumer.delivered().is_empty());
    assert!(consumer.loading().is_empty());
}

#[test]
fn invariant_reset_drops_pending_and_clears_downstream() {
    let consumer = RecordingConsumer::default();
    let mut sync = make_sync(&consumer);

    sync.schedule("{\"a\":1}".into(), 0);
    assert!(sync.has_pending());

    sync.reset();

    assert!(!sync.has_pending());
    assert_eq!(consumer.delivered(), vec![String::new()]);
    assert_eq!(consumer.loading(), vec![true, false]);
    // The superseded value never arrives
    assert!(!sync.poll(1_000));
}

#[test]
fn invariant_finish_loading_bypasses_window() {
    let consumer = RecordingConsumer::default();
    let mut sync = make_sync(&consumer);

    sync.finish_loading();
    assert_eq!(consumer.loading(), vec![false]);
}
