use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use crate::env::EnvMap;
use crate::error::Result;
use crate::flags::parse_flag_args;
use crate::reader::{open, read};
use crate::slice::{environ, parse_slice};

enum Source {
    Environ,
    List(Vec<String>),
    File { path: PathBuf, required: bool },
    Reader(Box<dyn Read>),
    FlagArgs { flag: String, args: Vec<String> },
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Environ => f.write_str("Environ"),
            Source::List(list) => f.debug_tuple("List").field(&list.len()).finish(),
            Source::File { path, required } => f
                .debug_struct("File")
                .field("path", path)
                .field("required", required)
                .finish(),
            Source::Reader(_) => f.write_str("Reader"),
            Source::FlagArgs { flag, args } => f
                .debug_struct("FlagArgs")
                .field("flag", flag)
                .field("args", &args.len())
                .finish(),
        }
    }
}

/// Result of [`EnvLoader::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    pub env: EnvMap,
    /// Arguments left over by the last flag source.
    pub args: Vec<String>,
    /// Pairs stored across all sources, counting overwrites.
    pub parsed: usize,
}

/// Layers several sources into one [`EnvMap`]. Sources apply in the order
/// they were added, so later ones override earlier ones.
#[derive(Debug, Default)]
pub struct EnvLoader {
    sources: Vec<Source>,
}

impl EnvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the current process environment
    pub fn environ(mut self) -> Self {
        self.sources.push(Source::Environ);
        self
    }

    /// Add clean `KEY=VALUE` tokens, e.g. a captured environment
    pub fn env_list<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.sources.push(Source::List(tokens.into_iter().map(Into::into).collect()));
        self
    }

    /// Add a dotenv file that must exist
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::File { path: path.into(), required: true });
        self
    }

    /// Add a dotenv file that is skipped when missing
    pub fn optional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::File { path: path.into(), required: false });
        self
    }

    pub fn reader(mut self, reader: impl Read + 'static) -> Self {
        self.sources.push(Source::Reader(Box::new(reader)));
        self
    }

    /// Add the pairs passed through `flag` in `args`
    pub fn flag_args<I>(mut self, flag: &str, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.sources.push(Source::FlagArgs {
            flag: flag.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Apply all sources. Stops at the first source that fails to load.
    pub fn load(self) -> Result<Loaded> {
        let mut loaded = Loaded::default();

        for source in self.sources {
            tracing::trace!(?source, "loading env source");
            match source {
                Source::Environ => {
                    let (env, n) = environ();
                    loaded.env.merge(env);
                    loaded.parsed += n;
                }
                Source::List(tokens) => {
                    loaded.parsed += parse_slice(&tokens, &mut loaded.env);
                }
                Source::File { path, required } => match open(&path, &mut loaded.env) {
                    Ok(n) => loaded.parsed += n,
                    Err(e) if !required && e.is_not_found() => {
                        tracing::debug!(path = %path.display(), "optional env file missing");
                    }
                    Err(e) => return Err(e),
                },
                Source::Reader(reader) => {
                    loaded.parsed += read(reader, &mut loaded.env)?;
                }
                Source::FlagArgs { flag, args } => {
                    let (residual, n) = parse_flag_args(&flag, args, &mut loaded.env);
                    loaded.args = residual;
                    loaded.parsed += n;
                }
            }
        }

        tracing::debug!(parsed = loaded.parsed, keys = loaded.env.len(), "loaded env");
        Ok(loaded)
    }
}
