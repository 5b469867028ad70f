mod error;
mod types;
mod parser;
mod env;
mod iter;
mod reader;
mod slice;
mod flags;
mod loader;

pub use error::{Error, Result};
pub use types::{Pair, QuoteType};
pub use parser::parse_pair;
pub use env::{getenv, lookup_env, lookup_in, EnvMap};
pub use iter::PairIter;
pub use reader::{find_file, find_file_from, open, read};
pub use slice::{environ, environ_from, parse_slice};
pub use flags::{parse_flag_args, FlagMarkers};
pub use loader::{EnvLoader, Loaded};
