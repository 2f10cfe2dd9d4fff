//! Multi-threaded use of concurrent-mode vectors.

use std::sync::Arc;
use std::thread;

use packed_bitvector::{Mode, PackedBitVector};

const THREADS: usize = 8;

#[test]
fn disjoint_ranges_from_many_threads() {
    let length = THREADS * 1_000;
    let bits = PackedBitVector::new(length, Mode::Concurrent).unwrap();

    thread::scope(|s| {
        for t in 0..THREADS {
            let bits = &bits;
            s.spawn(move || {
                for i in (t * 1_000)..((t + 1) * 1_000) {
                    bits.set(i);
                }
            });
        }
    });

    assert_eq!(bits.count(), length);
    assert_eq!(bits.window(), (0, bits.word_count() - 1));
}

#[test]
fn interleaved_bits_share_words() {
    // Thread t owns every bit i with i % THREADS == t, so every word is
    // written by all threads at once.
    let length = 4_096;
    let bits = Arc::new(PackedBitVector::new(length, Mode::Concurrent).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let bits = Arc::clone(&bits);
            thread::spawn(move || {
                for i in (t..length).step_by(THREADS) {
                    bits.set(i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(bits.count(), length);
    assert!((0..length).all(|i| bits.get(i)));
}

#[test]
fn concurrent_set_and_remove_of_owned_bits() {
    let length = 2_048;
    let bits = PackedBitVector::new(length, Mode::Concurrent).unwrap();
    bits.set_all();

    thread::scope(|s| {
        for t in 0..THREADS {
            let bits = &bits;
            s.spawn(move || {
                for i in (t..length).step_by(THREADS) {
                    if i % 2 == 0 {
                        bits.remove(i);
                    }
                }
            });
        }
    });

    assert_eq!(bits.count(), length / 2);
    assert!((0..length).all(|i| bits.get(i) == (i % 2 == 1)));
}

#[test]
fn readers_during_writes_see_monotonic_growth() {
    let length = 10_000;
    let bits = PackedBitVector::new(length, Mode::Concurrent).unwrap();
    let probe = PackedBitVector::new(length, Mode::Plain).unwrap();
    probe.set(length - 1);

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..length {
                bits.set(i);
            }
        });
        s.spawn(|| {
            let mut last = 0;
            for _ in 0..200 {
                let now = bits.count();
                assert!(now >= last);
                assert!(now <= length);
                last = now;
                let _ = bits.has_intersection_with(&probe);
            }
        });
    });

    assert_eq!(bits.count(), length);
    assert!(bits.has_intersection_with(&probe));
}

#[test]
fn set_algebra_on_shared_operands() {
    let a = PackedBitVector::new(1_000, Mode::Concurrent).unwrap();
    let b = PackedBitVector::new(500, Mode::Plain).unwrap();
    for i in (0..1_000).step_by(3) {
        a.set(i);
    }
    for i in (0..500).step_by(2) {
        b.set(i);
    }

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                let u = a.unify_with(&b);
                let x = a.intersect_with(&b);
                assert_eq!(u.len(), 1_000);
                assert_eq!(x.len(), 500);
                assert_eq!(x.count(), (0..500).filter(|i| i % 6 == 0).count());
                assert!(a.has_intersection_with(&b));
            });
        }
    });
}

#[test]
fn vector_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PackedBitVector>();
}
