use std::io::{self, BufRead};
use crate::parser::parse_pair;
use crate::types::Pair;

/// Lazy iterator over the storable pairs of a line-oriented stream.
///
/// Each line is trimmed; blank lines, `#` comments, lines that are not valid
/// UTF-8, tokens without a separator and pairs with an empty key or value are
/// skipped. The first I/O error is yielded once and ends the iteration.
pub struct PairIter<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    done: bool,
}

impl<R: BufRead> PairIter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            done: false,
        }
    }

    /// 1-based number of the last line pulled from the stream.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for PairIter<R> {
    type Item = io::Result<Pair<'static>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    self.line += 1;
                    self.done = true;
                    return Some(Err(e));
                }
            }
            self.line += 1;

            let line = match std::str::from_utf8(&self.buf) {
                Ok(s) => s.trim(),
                Err(e) => {
                    tracing::trace!(line = self.line, valid_up_to = e.valid_up_to(), "skipping line with invalid UTF-8");
                    continue;
                }
            };
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match parse_pair(line) {
                Some(pair) if pair.is_complete() => return Some(Ok(pair.into_owned())),
                Some(pair) => {
                    tracing::trace!(line = self.line, key = %pair.key, "skipping pair with empty value");
                }
                None => {
                    tracing::trace!(line = self.line, "skipping line without separator");
                }
            }
        }
    }
}
