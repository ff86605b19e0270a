use std::collections::HashSet;
use std::thread;

use identifiers::rng::{SecureSource, secure_source};

fn address(source: &'static SecureSource) -> usize {
    source as *const SecureSource as usize
}

#[test]
fn test_secure_source_is_a_singleton() {
    assert_eq!(address(secure_source()), address(secure_source()));
}

#[test]
fn test_concurrent_first_use_observes_one_instance() {
    let addresses: HashSet<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..32)
            .map(|_| scope.spawn(|| address(secure_source())))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(addresses.len(), 1);
}

#[test]
fn test_secure_source_produces_fresh_bytes() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    secure_source().fill_bytes(&mut a);
    secure_source().fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_secure_source_shared_across_threads() {
    let outputs: HashSet<[u8; 16]> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let mut buf = [0u8; 16];
                    secure_source().fill_bytes(&mut buf);
                    buf
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(outputs.len(), 8);
}
