mod common;

use common::{FailingSource, ScriptedSource};
use regex::Regex;
use srand::{
    Error, generate_random_bytes, generate_random_bytes_from, generate_random_string,
    generate_random_string_from,
};

#[test]
fn bytes_have_requested_length() {
    for n in [0, 1, 15, 16, 64, 1000] {
        assert_eq!(generate_random_bytes(n).unwrap().len(), n);
    }
}

#[test]
fn bytes_are_not_all_zero() {
    let b = generate_random_bytes(64).unwrap();
    assert!(b.iter().any(|&x| x != 0));
}

#[test]
fn two_draws_differ() {
    let a = generate_random_bytes(32).unwrap();
    let b = generate_random_bytes(32).unwrap();
    assert_ne!(a, b);
}

#[test]
fn bytes_come_from_source() {
    let mut src = ScriptedSource::new(&[1, 2, 3, 4]);
    let b = generate_random_bytes_from(&mut src, 3).unwrap();
    assert_eq!(b, vec![1, 2, 3]);
    assert_eq!(src.remaining(), 1);
}

#[test]
fn zero_bytes_does_not_read_source() {
    let b = generate_random_bytes_from(&mut FailingSource, 0).unwrap();
    assert!(b.is_empty());
}

#[test]
fn bytes_source_failure_is_reported() {
    let res = generate_random_bytes_from(&mut FailingSource, 8);
    assert!(matches!(res, Err(Error::EntropySource(_))));
}

#[test]
fn string_of_32_bytes_is_44_chars() {
    let token = generate_random_string(32).unwrap();
    assert_eq!(token.len(), 44);
}

#[test]
fn string_length_follows_base64() {
    for s in 0..40usize {
        let token = generate_random_string(s).unwrap();
        assert_eq!(token.len(), s.div_ceil(3) * 4, "length for {s} bytes");
    }
}

#[test]
fn string_uses_url_safe_alphabet() {
    let re = Regex::new(r"^[A-Za-z0-9_-]*={0,2}$").unwrap();
    for _ in 0..100 {
        let token = generate_random_string(31).unwrap();
        assert!(re.is_match(&token), "unexpected token {token}");
    }
}

#[test]
fn string_encodes_source_bytes() {
    let mut src = ScriptedSource::new(&[0xfb, 0xff, 0xbf]);
    assert_eq!(generate_random_string_from(&mut src, 3).unwrap(), "-_-_");

    let mut src = ScriptedSource::new(&[0x00]);
    assert_eq!(generate_random_string_from(&mut src, 1).unwrap(), "AA==");
}

#[test]
fn string_failure_returns_no_token() {
    let res = generate_random_string_from(&mut FailingSource, 32);
    assert!(matches!(res, Err(Error::EntropySource(_))));
}
