use std::thread;

use native_lib::greeting::{greeting, GREETING};

/// The operation returns the constant, byte for byte.
#[test]
fn returns_the_constant() {
    assert_eq!(greeting(), GREETING);
}

/// Repeated calls are idempotent.
#[test]
fn sequential_calls_are_identical() {
    let first = greeting();
    for _ in 0..1_000 {
        assert_eq!(greeting(), first);
    }
}

/// Concurrent callers all observe the constant.
#[test]
fn concurrent_calls_are_identical() {
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(greeting)).collect();
    for handle in handles {
        assert_eq!(handle.join().expect("greeting thread panicked"), GREETING);
    }
}
