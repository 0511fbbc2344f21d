use std::thread;

use super::{History, SharedHistory};
use crate::sampler::{Delta, MAX_EVENTS};

fn delta(values: &[u64]) -> Delta {
    values.iter().copied().collect()
}

#[test]
fn test_prefilled_with_zeros() {
    let history = History::new(4, 6);
    assert_eq!(history.len(), 4);
    assert_eq!(history.dims(), 6);
    for entry in &history {
        assert_eq!(entry.values(), &[0; 6]);
    }
}

#[test]
fn test_push_evicts_oldest() {
    let mut history = History::new(3, 1);
    for i in 1..=5 {
        history.push(delta(&[i]));
        assert_eq!(history.len(), 3);
    }
    let values: Vec<_> = history.iter().map(|d| d.values()[0]).collect();
    assert_eq!(values, [3, 4, 5]);
    assert_eq!(history.latest(), Some(&delta(&[5])));
}

#[test]
fn test_partial_fill_keeps_zeros_in_front() {
    let mut history = History::new(4, 2);
    history.push(delta(&[1, 2]));
    history.push(delta(&[3, 4]));
    let entries: Vec<_> = history.iter().cloned().collect();
    assert_eq!(
        entries,
        [delta(&[0, 0]), delta(&[0, 0]), delta(&[1, 2]), delta(&[3, 4])]
    );
}

#[test]
fn test_capacity_one() {
    let mut history = History::new(1, 1);
    history.push(delta(&[7]));
    history.push(delta(&[8]));
    assert_eq!(history.capacity(), 1);
    assert_eq!(history.latest(), Some(&delta(&[8])));
}

#[test]
#[should_panic]
fn test_zero_capacity() {
    History::new(0, 1);
}

#[test]
#[should_panic(expected = "exceed the limit")]
fn test_too_many_dims() {
    History::new(4, MAX_EVENTS + 1);
}

#[test]
fn test_max_dims() {
    let history = History::new(2, MAX_EVENTS);
    assert_eq!(history.dims(), MAX_EVENTS);
}

#[test]
#[should_panic]
fn test_push_wrong_dims() {
    let mut history = History::new(2, 2);
    history.push(delta(&[1]));
}

#[test]
fn test_snapshot_is_detached() {
    let shared = SharedHistory::new(History::new(2, 1));
    let before = shared.snapshot();
    shared.push(delta(&[9]));
    assert_eq!(before.latest(), Some(&delta(&[0])));
    assert_eq!(shared.snapshot().latest(), Some(&delta(&[9])));
}

#[test]
fn test_concurrent_snapshots_are_consistent() {
    const CAPACITY: usize = 16;
    const PUSHES: u64 = 10_000;

    let shared = SharedHistory::new(History::new(CAPACITY, 1));

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 1..=PUSHES {
                shared.push(delta(&[i]));
            }
        })
    };

    for _ in 0..1_000 {
        let snapshot = shared.snapshot();
        assert_eq!(snapshot.len(), CAPACITY);
        // Pushed values are consecutive, a torn window would show a gap or a
        // duplicate somewhere after the zero prefix.
        let values: Vec<_> = snapshot.iter().map(|d| d.values()[0]).collect();
        for pair in values.windows(2) {
            assert!(pair[0] == 0 || pair[1] == pair[0] + 1, "{:?}", values);
        }
    }

    writer.join().unwrap();
    let last = shared.snapshot();
    assert_eq!(last.latest(), Some(&delta(&[PUSHES])));
}
