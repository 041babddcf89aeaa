// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use herald_publish::{SharedSubscriber, Subscriber, SubscriberSet};
use herald_test_utils::Recorder;
use std::sync::Arc;

struct Tagged {
    tag: &'static str,
    log: Arc<Recorder<&'static str>>,
}

impl Subscriber<u32> for Tagged {
    fn update(&self, _subject: &u32) {
        self.log.record(self.tag);
    }
}

fn tagged(tag: &'static str, log: &Arc<Recorder<&'static str>>) -> Arc<Tagged> {
    Arc::new(Tagged {
        tag,
        log: Arc::clone(log),
    })
}

#[test]
fn test_notify_follows_insertion_order() {
    // Arrange
    let log = Arc::new(Recorder::new());
    let mut set = SubscriberSet::<u32>::new();
    set.attach(tagged("a", &log));
    set.attach(tagged("b", &log));
    set.attach(tagged("c", &log));

    // Act
    set.notify(&0);

    // Assert
    assert_eq!(log.snapshot(), vec!["a", "b", "c"]);
}

#[test]
fn test_detach_matches_any_clone_of_the_same_allocation() {
    // Arrange
    let log = Arc::new(Recorder::new());
    let a = tagged("a", &log);
    let erased: SharedSubscriber<u32> = a.clone();
    let mut set = SubscriberSet::<u32>::new();
    set.attach(erased);
    set.attach(a.clone());
    set.attach(tagged("b", &log));

    // Act
    let removed = set.detach(&a);

    // Assert
    assert_eq!(removed, 2);
    assert_eq!(set.len(), 1);
    assert!(!set.contains(&a));
}

#[test]
fn test_equal_but_distinct_subscribers_are_not_confused() {
    let log = Arc::new(Recorder::new());
    let first = tagged("same", &log);
    let second = tagged("same", &log);
    let mut set = SubscriberSet::<u32>::new();
    set.attach(first.clone());
    set.attach(second.clone());

    assert_eq!(set.detach(&first), 1);

    assert!(set.contains(&second));
    set.notify(&1);
    assert_eq!(log.len(), 1);
}

#[test]
fn test_snapshot_is_independent_of_later_changes() {
    // Arrange
    let log = Arc::new(Recorder::new());
    let a = tagged("a", &log);
    let mut set = SubscriberSet::<u32>::new();
    set.attach(a.clone());

    // Act
    let snapshot = set.snapshot();
    set.detach(&a);

    // Assert
    assert!(set.is_empty());
    assert_eq!(snapshot.len(), 1);
    snapshot[0].update(&5);
    assert_eq!(log.snapshot(), vec!["a"]);
}

#[test]
fn test_closures_are_subscribers() {
    let log = Arc::new(Recorder::new());
    let mut set = SubscriberSet::<u32>::new();
    {
        let log = Arc::clone(&log);
        set.attach(Arc::new(move |n: &u32| log.record(*n)));
    }

    set.notify(&9);
    set.notify(&10);

    assert_eq!(log.snapshot(), vec![9, 10]);
}
