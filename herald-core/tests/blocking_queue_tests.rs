// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use herald_core::BlockingQueue;
use herald_test_utils::{wait_until, Recorder, DEFAULT_TIMEOUT};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

// Deliberately not Clone: the queue must move items, never copy them.
#[derive(Debug, PartialEq, Eq)]
struct Token(u32);

#[test]
fn test_take_returns_items_in_push_order() {
    // Arrange
    let queue = BlockingQueue::new();

    // Act
    queue.push(Token(1));
    queue.push(Token(2));
    queue.push(Token(3));

    // Assert
    assert_eq!(queue.take(), Some(Token(1)));
    assert_eq!(queue.take(), Some(Token(2)));
    assert_eq!(queue.take(), Some(Token(3)));
    assert!(queue.is_empty());
}

#[test]
fn test_size_and_is_empty_are_snapshots() {
    let queue = BlockingQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.size(), 0);

    queue.push("a");
    queue.push("b");
    assert_eq!(queue.size(), 2);
    assert!(!queue.is_empty());

    let _ = queue.take();
    assert_eq!(queue.size(), 1);
}

#[test]
fn test_take_blocks_until_push() {
    // Arrange
    let queue = Arc::new(BlockingQueue::new());
    let taken = Arc::new(Recorder::new());
    let consumer = {
        let queue = Arc::clone(&queue);
        let taken = Arc::clone(&taken);
        thread::spawn(move || {
            let item = queue.take();
            taken.record(item);
        })
    };

    // Act & Assert
    assert!(!taken.wait_for_len(1, Duration::from_millis(50)));

    queue.push(42);
    assert!(taken.wait_for_len(1, DEFAULT_TIMEOUT));
    consumer.join().unwrap();
    assert_eq!(taken.snapshot(), vec![Some(42)]);
}

#[test]
fn test_stop_wakes_every_blocked_taker() {
    // Arrange
    let queue: Arc<BlockingQueue<u32>> = Arc::new(BlockingQueue::new());
    let consumers: Vec<_> = (0..3)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.take())
        })
        .collect();

    // Act
    queue.stop();

    // Assert
    for consumer in consumers {
        assert_eq!(consumer.join().unwrap(), None);
    }
}

#[test]
fn test_take_after_stop_never_blocks_and_drops_resident_items() {
    // Arrange
    let queue = BlockingQueue::new();
    let payload = Arc::new(());
    queue.push(Arc::clone(&payload));
    queue.push(Arc::clone(&payload));
    assert_eq!(Arc::strong_count(&payload), 3);

    // Act
    queue.stop();

    // Assert
    assert_eq!(Arc::strong_count(&payload), 1);
    assert!(queue.is_empty());
    assert!(queue.take().is_none());
    assert!(queue.take().is_none());
}

#[test]
fn test_stop_is_idempotent() {
    let queue: BlockingQueue<u8> = BlockingQueue::new();

    queue.stop();
    queue.stop();

    assert!(queue.is_stopped());
    assert_eq!(queue.take(), None);
}

#[test]
fn test_push_after_stop_is_discarded() {
    let queue = BlockingQueue::new();
    let payload = Arc::new(());
    queue.stop();

    queue.push(Arc::clone(&payload));

    assert_eq!(queue.size(), 0);
    assert_eq!(Arc::strong_count(&payload), 1);
}

#[test]
fn test_concurrent_producers_keep_per_producer_order() {
    // Arrange
    const PRODUCERS: u32 = 4;
    const PER_PRODUCER: u32 = 250;
    let queue = Arc::new(BlockingQueue::new());

    // Act
    let producers: Vec<_> = (0..PRODUCERS)
        .map(|producer| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for seq in 0..PER_PRODUCER {
                    queue.push((producer, seq));
                }
            })
        })
        .collect();

    let mut received = Vec::new();
    while received.len() < (PRODUCERS * PER_PRODUCER) as usize {
        if let Some(item) = queue.take() {
            received.push(item);
        }
    }
    for producer in producers {
        producer.join().unwrap();
    }

    // Assert
    for producer in 0..PRODUCERS {
        let sequence: Vec<u32> = received
            .iter()
            .filter(|(p, _)| *p == producer)
            .map(|(_, seq)| *seq)
            .collect();
        assert_eq!(sequence, (0..PER_PRODUCER).collect::<Vec<_>>());
    }
    assert!(queue.is_empty());
}

#[test]
fn test_competing_consumers_never_receive_the_same_item() {
    // Arrange
    let queue = Arc::new(BlockingQueue::new());
    let seen = Arc::new(Recorder::new());
    let consumers: Vec<_> = (0..3)
        .map(|_| {
            let queue = Arc::clone(&queue);
            let seen = Arc::clone(&seen);
            thread::spawn(move || {
                while let Some(item) = queue.take() {
                    seen.record(item);
                }
            })
        })
        .collect();

    // Act
    for i in 0..300 {
        queue.push(i);
    }
    assert!(seen.wait_for_len(300, DEFAULT_TIMEOUT));
    queue.stop();
    for consumer in consumers {
        consumer.join().unwrap();
    }

    // Assert
    let mut all = seen.snapshot();
    all.sort_unstable();
    assert_eq!(all, (0..300).collect::<Vec<_>>());
    assert!(wait_until(DEFAULT_TIMEOUT, || queue.is_empty()));
}
