mod common;
use common::{env_map, read_str};
use envpairs::{find_file_from, open, read, EnvMap, Error};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::{self, Read};

#[test]
fn test_read() {
    let (env, n) = read_str("FOO=bar\nbar='baz'\nqux=\"#xoo\"\n");

    assert_eq!(n, 3, "return value should be the number of parsed items");
    assert_eq!(env, env_map(&[("FOO", "bar"), ("bar", "baz"), ("qux", "#xoo")]));
}

#[test]
fn test_read_skips_comments_and_blank_lines() {
    let input = "# header\n\n   \nA=1\n   # indented\nB=2\n#C=3\n";
    let (env, n) = read_str(input);

    assert_eq!(n, 2);
    assert_eq!(env, env_map(&[("A", "1"), ("B", "2")]));
}

#[test]
fn test_read_drops_empty_values() {
    let (env, n) = read_str("SET=1\nUNSET=\nQUOTED_EMPTY=''\n");

    assert_eq!(n, 1);
    assert_eq!(env, env_map(&[("SET", "1")]));
}

#[test]
fn test_read_skips_malformed_lines() {
    let (env, n) = read_str("just words\n=\nOK=yes\n");

    assert_eq!(n, 1);
    assert_eq!(env, env_map(&[("OK", "yes")]));
}

#[test]
fn test_read_crlf() {
    let (env, n) = read_str("A=1\r\nB='two'\r\n");

    assert_eq!(n, 2);
    assert_eq!(env, env_map(&[("A", "1"), ("B", "two")]));
}

#[test]
fn test_read_overwrites_existing() {
    let mut env = env_map(&[("A", "old"), ("KEEP", "me")]);
    let n = read("A=new\n".as_bytes(), &mut env).unwrap();

    assert_eq!(n, 1);
    assert_eq!(env, env_map(&[("A", "new"), ("KEEP", "me")]));
}

/// Yields `data` and then fails.
struct FailAfter {
    data: io::Cursor<Vec<u8>>,
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n == 0 {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset"));
        }
        Ok(n)
    }
}

#[test]
fn test_read_error_keeps_partial_results() {
    let reader = FailAfter { data: io::Cursor::new(b"A=1\nB=2\n".to_vec()) };
    let mut env = EnvMap::new();

    let err = read(reader, &mut env).unwrap_err();

    assert_eq!(err.parsed(), 2);
    assert!(matches!(err, Error::Read { line: 3, parsed: 2, .. }), "unexpected error: {:?}", err);
    assert_eq!(env, env_map(&[("A", "1"), ("B", "2")]));
}

#[test]
fn test_read_skips_invalid_utf8_lines() {
    let mut env = EnvMap::new();
    let n = read(&b"A=1\nBAD=\xff\xfe\nC=3\nD=4\n"[..], &mut env).unwrap();

    assert_eq!(n, 3);
    assert_eq!(env, env_map(&[("A", "1"), ("C", "3"), ("D", "4")]));
}

#[test]
fn test_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.env");
    fs::write(&path, "FOO=bar\nbar='baz'\nqux=\"#xoo\"\n").unwrap();

    let mut env = EnvMap::new();
    let n = open(&path, &mut env).unwrap();

    assert_eq!(n, 3);
    assert_eq!(env, env_map(&[("FOO", "bar"), ("bar", "baz"), ("qux", "#xoo")]));
}

#[test]
fn test_open_not_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut env = EnvMap::new();

    let err = open(dir.path().join("doesnot.exist"), &mut env).unwrap_err();

    assert_eq!(err.parsed(), 0, "should return 0 parsed lines");
    assert!(err.is_not_found());
    assert!(err.to_string().contains("doesnot.exist"));
    assert!(env.is_empty());
}

#[test]
fn test_find_file_in_ancestor() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join(".env"), "K=v\n").unwrap();

    let found = find_file_from(&nested, ".env").unwrap();
    assert_eq!(found, dir.path().join(".env"));
}

#[test]
fn test_find_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_file_from(dir.path(), "surely-not-here.env").unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.is_not_found());
}
