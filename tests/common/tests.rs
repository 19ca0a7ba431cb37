//! Tests for queue behaviour shared by every placement.
//!
//! All the tests here are helpers taking the [`Placement`] under test.
use bounded_priority::{Capacity, Optional, Placement, PriorityQueue, QueueConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SOME: usize = 500;
const MANY: usize = 5000;

fn bounded(capacity: usize, placement: Placement) -> PriorityQueue<u32> {
    let capacity = Capacity::bounded(capacity).unwrap();
    PriorityQueue::with_config(
        QueueConfig::default()
            .with_capacity(capacity)
            .with_placement(placement),
    )
}

fn unbounded(placement: Placement) -> PriorityQueue<u32> {
    PriorityQueue::with_config(QueueConfig::default().with_placement(placement))
}

fn drain(q: &mut PriorityQueue<u32>) -> Vec<u32> {
    let mut out = vec![];
    while let Optional::Some(el) = q.pop() {
        out.push(el);
    }
    out
}

fn do_push_random(q: &mut PriorityQueue<u32>, n: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..n {
        q.push(rng.gen_range(0..1000));
    }
}

pub fn empty_pop(placement: Placement) {
    let mut q = unbounded(placement);
    assert_eq!(q.pop(), Optional::None);
    assert_eq!(q.pop().map_or(|x| x, 77), 77);
}

pub fn len_counts_pushes(placement: Placement) {
    let mut q = bounded(SOME, placement);
    for i in 0..SOME {
        assert_eq!(q.len(), i);
        q.push((i * 7 % 13) as u32);
    }
    assert_eq!(q.len(), SOME);
}

pub fn len_never_exceeds_capacity(placement: Placement) {
    for capacity in [1, 2, 3, 10, SOME] {
        let mut q = bounded(capacity, placement);
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..MANY {
            q.push(rng.gen_range(0..100));
            assert!(q.len() <= capacity);
            assert_eq!(q.len(), (i + 1).min(capacity));
        }
    }
}

pub fn pop_shrinks_by_one(placement: Placement) {
    let mut q = unbounded(placement);
    do_push_random(&mut q, SOME);
    for remaining in (0..SOME).rev() {
        assert!(q.pop().is_some());
        assert_eq!(q.len(), remaining);
    }
    assert!(q.pop().is_none());
}

pub fn clear_empties(placement: Placement) {
    let mut q = bounded(10, placement);
    do_push_random(&mut q, SOME);
    q.clear();
    assert_eq!(q.len(), 0);
    assert!(q.is_empty());
    assert_eq!(q.pop(), Optional::None);

    // Still usable afterwards
    q.push(3);
    assert_eq!(q.pop(), Optional::Some(3));
}

pub fn descending_pushes_pop_in_order(placement: Placement) {
    let mut q = unbounded(placement);
    for el in (0..SOME as u32).rev() {
        q.push(el);
    }
    let expected: Vec<u32> = (0..SOME as u32).rev().collect();
    assert_eq!(drain(&mut q), expected);
}

pub fn pop_round_trip(placement: Placement) {
    let mut q = unbounded(placement);
    q.push(12);
    assert_eq!(q.pop().map_or(|x| x, 0), 12);
    assert_eq!(q.pop().map_or(|x| x, 0), 0);
}

pub fn keeps_all_elements_when_unbounded(placement: Placement) {
    let mut q = unbounded(placement);
    do_push_random(&mut q, MANY);

    let mut expected: Vec<u32> = vec![];
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..MANY {
        expected.push(rng.gen_range(0..1000));
    }
    expected.sort_unstable();

    let mut got = drain(&mut q);
    got.sort_unstable();
    assert_eq!(got, expected);
}
