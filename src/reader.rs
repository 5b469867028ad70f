use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use crate::env::EnvMap;
use crate::error::{Error, Result};
use crate::iter::PairIter;

/// Read dotenv-style lines from `reader` into `dest`.
///
/// Returns the number of pairs stored. On an I/O error the pairs read so far
/// stay in `dest` and their count is available through [`Error::parsed`].
pub fn read<R: Read>(reader: R, dest: &mut EnvMap) -> Result<usize> {
    let mut iter = PairIter::new(BufReader::new(reader));
    let mut parsed = 0;

    while let Some(next) = iter.next() {
        match next {
            Ok(pair) => {
                dest.store(pair);
                parsed += 1;
            }
            Err(source) => {
                let line = iter.line();
                tracing::warn!(line, parsed, error = %source, "stream failed");
                return Err(Error::Read { line, parsed, source });
            }
        }
    }

    tracing::debug!(parsed, lines = iter.line(), "read env stream");
    Ok(parsed)
}

/// Open the file at `path` and [`read`] it into `dest`.
pub fn open(path: impl AsRef<Path>, dest: &mut EnvMap) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "opened env file");
    read(file, dest)
}

/// Search for `filename` in the current directory and its ancestors.
pub fn find_file(filename: &str) -> Result<PathBuf> {
    let current = std::env::current_dir().map_err(Error::CurrentDir)?;
    find_file_from(&current, filename)
}

/// Search for `filename` in `start` and its ancestors.
pub fn find_file_from(start: &Path, filename: &str) -> Result<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::NotFound { name: filename.to_string() })
}
