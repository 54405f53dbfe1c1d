//! RNG determinism tests
//!
//! Same seed must give the same stays; forked streams must be stable and
//! distinct from one another.

use bed_flow_core_rs::{RngManager, RoomKind, StayRanges, StaySampler, UniformStaySampler};

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    for _ in 0..1000 {
        assert_eq!(rng1.next(), rng2.next());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    let a: Vec<u64> = (0..10).map(|_| rng1.next()).collect();
    let b: Vec<u64> = (0..10).map(|_| rng2.next()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_state_resumes_sequence() {
    let mut rng = RngManager::new(777);
    for _ in 0..50 {
        rng.next();
    }

    let mut resumed = RngManager::new(rng.get_state());
    for _ in 0..100 {
        assert_eq!(rng.next(), resumed.next());
    }
}

#[test]
fn test_fork_is_deterministic() {
    let root_a = RngManager::new(2024);
    let root_b = RngManager::new(2024);

    for stream in 0..8 {
        let mut a = root_a.fork(stream);
        let mut b = root_b.fork(stream);
        for _ in 0..20 {
            assert_eq!(a.next(), b.next());
        }
    }
}

#[test]
fn test_forked_streams_differ() {
    let root = RngManager::new(2024);
    let firsts: Vec<u64> = (0..16).map(|s| root.fork(s).next()).collect();

    for i in 0..firsts.len() {
        for j in (i + 1)..firsts.len() {
            assert_ne!(firsts[i], firsts[j], "streams {} and {} collide", i, j);
        }
    }
}

#[test]
fn test_uniform_sampler_reproducible() {
    let mut a = UniformStaySampler::new(RngManager::new(9), StayRanges::default());
    let mut b = UniformStaySampler::new(RngManager::new(9), StayRanges::default());

    for i in 0..500 {
        let room = if i % 2 == 0 { RoomKind::Icu } else { RoomKind::Ward };
        let stay = a.sample_stay(room);
        assert_eq!(stay, b.sample_stay(room));
        assert!((1..=7).contains(&stay), "stay {} outside [1, 7]", stay);
    }
}
