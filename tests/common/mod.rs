#![allow(dead_code)]

use envpairs::{parse_pair, read, EnvMap};

pub fn parse_single_pair(input: &str) -> Option<(String, String)> {
    parse_pair(input).map(|p| p.into_tuple())
}

pub fn assert_pair(input: &str, expected_key: &str, expected_value: &str) {
    let pair = parse_single_pair(input).expect(&format!("Failed to parse pair from input: {:?}", input));
    assert_eq!(pair.0, expected_key, "Key mismatch");
    assert_eq!(pair.1, expected_value, "Value mismatch");
}

pub fn assert_rejected(input: &str) {
    let pair = parse_single_pair(input);
    assert!(pair.is_none(), "Expected {:?} to be rejected but got {:?}", input, pair);
}

pub fn env_map(pairs: &[(&str, &str)]) -> EnvMap {
    pairs.iter().copied().collect()
}

pub fn read_str(input: &str) -> (EnvMap, usize) {
    let mut env = EnvMap::new();
    let n = read(input.as_bytes(), &mut env).expect("reading from a byte slice cannot fail");
    (env, n)
}

pub fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
