use identifiers::rng::{
    fill_random, random_below, random_bool, random_bytes, random_f64, random_i32, random_u64,
};

#[test]
fn test_random_below_respects_bound() {
    for _ in 0..10_000 {
        assert!(random_below(10) < 10);
    }
    assert_eq!(random_below(0), 0);
    assert_eq!(random_below(1), 0);
}

#[test]
fn test_random_f64_in_unit_interval() {
    for _ in 0..10_000 {
        let v = random_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn test_random_bool_takes_both_values() {
    let trues = (0..1_000).filter(|_| random_bool()).count();
    assert!(trues > 0 && trues < 1_000);
}

#[test]
fn test_random_words_vary() {
    let a: Vec<u64> = (0..4).map(|_| random_u64()).collect();
    let b: Vec<u64> = (0..4).map(|_| random_u64()).collect();
    assert_ne!(a, b);

    let c: Vec<i32> = (0..8).map(|_| random_i32()).collect();
    assert!(c.iter().any(|&v| v != c[0]));
}

#[test]
fn test_random_bytes_length() {
    assert!(random_bytes(0).is_empty());
    assert_eq!(random_bytes(33).len(), 33);

    let mut buf = [0u8; 64];
    let filled = fill_random(&mut buf);
    assert_eq!(filled.len(), 64);
    assert!(filled.iter().any(|&b| b != 0));
}
