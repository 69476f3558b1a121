//! Integration tests: the full hash workflow through the public API.
//!
//! Covers determinism, output shape, salt fallback, input sensitivity,
//! default costs, and failure routing to the error sink.

use argon2i_hasher::error::{ARGON2_MEMORY_TOO_LITTLE, ARGON2_TIME_TOO_SMALL};
use argon2i_hasher::{hash_once, HashConfig, HashError, HashInput, Hasher, MemorySink};

const SALT: &[u8] = b"saltsaltsaltsalt";

fn is_lower_hex(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[test]
fn workflow_correct_password_scenario() {
    let first = Hasher::new(32)
        .hash_salted(b"correct-password", SALT)
        .expect("hash should succeed");
    let again = Hasher::new(32)
        .hash_salted(b"correct-password", SALT)
        .expect("hash should succeed");
    let typo = Hasher::new(32)
        .hash_salted(b"correct-passworD", SALT)
        .expect("hash should succeed");

    assert_eq!(first.len(), 64);
    assert!(is_lower_hex(&first), "not lowercase hex: {first}");
    assert_eq!(first, again, "same inputs must give the same digest");
    assert_ne!(first, typo, "one changed byte must change the digest");
}

#[test]
fn workflow_length_contract() {
    for len in [4usize, 8, 16, 31, 32, 64, 100] {
        let hex = Hasher::new(len)
            .hash_salted(b"pw", SALT)
            .expect("hash should succeed");
        assert_eq!(hex.len(), 2 * len, "output_len {len}");
        assert!(is_lower_hex(&hex));
    }
}

#[test]
fn workflow_default_costs_equal_explicit() {
    let input = HashInput::new(b"pw")
        .salt(SALT)
        .secret(b"pepper")
        .associated_data(b"ctx");

    let default = Hasher::new(32).hash_input(&input).unwrap();
    let explicit = Hasher::with_costs(32, 2, 64, 1).hash_input(&input).unwrap();
    let from_config = Hasher::with_config(32, HashConfig::default())
        .hash_input(&input)
        .unwrap();

    assert_eq!(default, explicit);
    assert_eq!(default, from_config);
}

#[test]
fn workflow_missing_salt_uses_zero_bytes() {
    for len in [16usize, 32] {
        let omitted = Hasher::new(len).hash(b"pw").unwrap();
        let empty = Hasher::new(len).hash_salted(b"pw", b"").unwrap();
        let zeros = Hasher::new(len)
            .hash_salted(b"pw", &vec![0u8; len])
            .unwrap();
        assert_eq!(omitted, zeros);
        assert_eq!(empty, zeros);
    }
}

#[test]
fn workflow_each_input_is_bound() {
    let base = || {
        Hasher::new(32)
            .hash_with(b"password", Some(SALT), Some(b"secret"), Some(b"data"))
            .unwrap()
    };
    let reference = base();

    let variants = [
        Hasher::new(32)
            .hash_with(b"passwore", Some(SALT), Some(b"secret"), Some(b"data"))
            .unwrap(),
        Hasher::new(32)
            .hash_with(b"password", Some(b"saltsaltsaltsalu"), Some(b"secret"), Some(b"data"))
            .unwrap(),
        Hasher::new(32)
            .hash_with(b"password", Some(SALT), Some(b"secreu"), Some(b"data"))
            .unwrap(),
        Hasher::new(32)
            .hash_with(b"password", Some(SALT), Some(b"secret"), Some(b"datb"))
            .unwrap(),
    ];

    assert_eq!(reference, base());
    for variant in &variants {
        assert_ne!(&reference, variant);
    }
}

#[test]
fn workflow_costs_change_digest() {
    let a = Hasher::with_costs(32, 2, 64, 1).hash_salted(b"pw", SALT).unwrap();
    let b = Hasher::with_costs(32, 3, 64, 1).hash_salted(b"pw", SALT).unwrap();
    let c = Hasher::with_costs(32, 2, 128, 1).hash_salted(b"pw", SALT).unwrap();
    let d = Hasher::with_costs(32, 2, 64, 2).hash_salted(b"pw", SALT).unwrap();
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn workflow_zero_time_cost_reports_and_survives() {
    let sink = MemorySink::new();
    let mut hasher = Hasher::with_costs(32, 0, 64, 1).with_sink(sink.clone());

    let err = hasher.hash(b"pw").expect_err("t_cost=0 must fail");
    assert!(matches!(err, HashError::Kdf { .. }));
    assert_eq!(err.status_code(), Some(ARGON2_TIME_TOO_SMALL));

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(!messages[0].is_empty());
}

#[test]
fn workflow_memory_below_lane_minimum_fails() {
    let sink = MemorySink::new();
    let mut hasher = Hasher::with_costs(32, 2, 8, 4).with_sink(sink.clone());

    let err = hasher.hash_salted(b"pw", SALT).unwrap_err();
    assert_eq!(err.status_code(), Some(ARGON2_MEMORY_TOO_LITTLE));
    assert_eq!(sink.messages().len(), 1);
}

#[test]
fn workflow_every_failure_is_reported_once() {
    let sink = MemorySink::new();
    let mut hasher = Hasher::with_costs(32, 2, 64, 0).with_sink(sink.clone());

    for _ in 0..3 {
        assert!(hasher.hash(b"pw").is_err());
    }
    assert_eq!(sink.messages().len(), 3);
}

#[test]
fn workflow_closure_sink() {
    let (tx, rx) = std::sync::mpsc::channel::<String>();
    let tx = std::sync::Mutex::new(tx);
    let mut hasher = Hasher::with_costs(32, 0, 64, 1).with_sink(move |msg: &str| {
        let _ = tx.lock().unwrap().send(msg.to_string());
    });

    assert!(hasher.hash(b"pw").is_err());
    let message = rx.try_recv().expect("sink should receive a message");
    assert!(!message.is_empty());
}

#[test]
fn workflow_hash_once() {
    let input = HashInput::new(b"correct-password").salt(SALT);
    let once = hash_once(32, &input).unwrap();
    let reused = Hasher::new(32).hash_input(&input).unwrap();
    assert_eq!(once, reused);
}

#[test]
fn workflow_digest_matches_hex() {
    let mut hasher = Hasher::with_costs(16, 2, 256, 2);
    let input = HashInput::new(b"pw").salt(SALT);
    let digest = hasher.digest(&input).unwrap();

    assert_eq!(digest.len(), 16);
    assert_eq!(digest.to_hex(), hex::encode(digest.as_bytes()));
    assert_eq!(digest.to_hex(), hasher.hash_input(&input).unwrap());
    assert_eq!(digest.config().m_cost, 256);
}
