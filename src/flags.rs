use crate::env::EnvMap;
use crate::parser::parse_pair;

/// The `-name` and `--name` markers of a single flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagMarkers {
    short: String,
    long: String,
}

/// How an argument relates to the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker<'a> {
    /// `-e` or `--e`, the pair follows as the next argument.
    Bare,
    /// `-e=KEY=VALUE`, carries everything after the first `=`.
    Inline(&'a str),
    Unrelated,
}

impl FlagMarkers {
    pub fn new(flag: &str) -> Self {
        Self {
            short: format!("-{}", flag),
            long: format!("--{}", flag),
        }
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    /// Built from an empty flag name; such markers match nothing.
    pub fn is_empty(&self) -> bool {
        self.short.len() == 1
    }

    fn classify<'a>(&self, arg: &'a str) -> Marker<'a> {
        if self.is_empty() {
            return Marker::Unrelated;
        }
        for marker in [self.short.as_str(), self.long.as_str()] {
            if let Some(rest) = arg.strip_prefix(marker) {
                if rest.is_empty() {
                    return Marker::Bare;
                }
                // Anchored at the marker length: `-env=..` is not flag `e`.
                if let Some(payload) = rest.strip_prefix('=') {
                    return Marker::Inline(payload);
                }
            }
        }
        Marker::Unrelated
    }

    /// Pull every pair supplied through this flag out of `args` into `dest`.
    ///
    /// Returns the remaining arguments in their original order and the number
    /// of pairs stored. Empty values are stored. A payload that does not parse
    /// stays in the residual list; a bare marker with nothing usable after it
    /// is dropped.
    pub fn extract<I>(&self, args: I, dest: &mut EnvMap) -> (Vec<String>, usize)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut residual = Vec::new();
        let mut parsed = 0;
        let mut expect_pair = false;

        for arg in args {
            let arg: String = arg.into();

            if expect_pair {
                expect_pair = false;
                if !arg.starts_with('-') {
                    if store_pair(&arg, dest) {
                        parsed += 1;
                    } else {
                        tracing::trace!(flag = %self.short, "payload after bare flag is not a pair");
                        residual.push(arg);
                    }
                    continue;
                }
                tracing::trace!(flag = %self.short, "bare flag followed by another option");
            }

            let stored = match self.classify(&arg) {
                Marker::Bare => {
                    expect_pair = true;
                    continue;
                }
                Marker::Inline(payload) => {
                    let ok = store_pair(payload, dest);
                    if !ok {
                        tracing::trace!(flag = %self.short, "inline flag payload is not a pair");
                    }
                    ok
                }
                Marker::Unrelated => false,
            };

            if stored {
                parsed += 1;
            } else {
                residual.push(arg);
            }
        }

        if expect_pair {
            tracing::trace!(flag = %self.short, "dropping trailing bare flag");
        }
        tracing::debug!(flag = %self.short, parsed, residual = residual.len(), "extracted flag pairs");
        (residual, parsed)
    }
}

fn store_pair(raw: &str, dest: &mut EnvMap) -> bool {
    match parse_pair(raw) {
        Some(pair) => {
            dest.store(pair);
            true
        }
        None => false,
    }
}

/// Extract `-flag KEY=VALUE`, `-flag=KEY=VALUE`, `--flag KEY=VALUE` and
/// `--flag=KEY=VALUE` pairs from `args` into `dest`.
///
/// See [`FlagMarkers::extract`]. An empty flag name matches nothing.
pub fn parse_flag_args<I>(flag: &str, args: I, dest: &mut EnvMap) -> (Vec<String>, usize)
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    FlagMarkers::new(flag).extract(args, dest)
}
