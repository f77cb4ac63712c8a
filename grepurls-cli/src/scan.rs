//! Reading inputs and writing one URI per matching token.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use grepurls::Extractor;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::input::Tokens;

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub tokens: u64,
    pub uris: u64,
    pub files_opened: usize,
}

impl Summary {
    fn add(&mut self, other: Self) {
        self.tokens += other.tokens;
        self.uris += other.uris;
    }
}

/// Errors from a single stream, before the caller knows which one it was.
enum StreamError {
    Read(std::io::Error),
    Write(std::io::Error),
}

/// Writes the URI of every token in `reader` to `out`, one per line.
fn scan_stream<R: BufRead, W: Write>(
    extractor: &Extractor,
    reader: R,
    out: &mut W,
) -> Result<Summary, StreamError> {
    let mut tokens = Tokens::new(reader);
    let mut summary = Summary::default();

    while let Some(token) = tokens.next_token().map_err(StreamError::Read)? {
        summary.tokens += 1;
        if let Some(span) = extractor.find(token) {
            summary.uris += 1;
            out.write_all(span.slice_bytes(token))
                .and_then(|()| out.write_all(b"\n"))
                .map_err(StreamError::Write)?;
        }
    }
    Ok(summary)
}

/// Scans standard input (or any reader standing in for it).
pub fn scan_stdin<R: BufRead, W: Write>(
    extractor: &Extractor,
    stdin: R,
    out: &mut W,
) -> Result<Summary, CliError> {
    scan_stream(extractor, stdin, out).map_err(|err| match err {
        StreamError::Read(err) | StreamError::Write(err) => CliError::Io(err),
    })
}

/// Scans each file in order, skipping those that cannot be opened.
///
/// # Errors
///
/// `NoReadableInput` if not a single file could be opened. A read error
/// part way through a file is logged and the next file is scanned; write
/// errors stop the run.
pub fn scan_files<P: AsRef<Path>, W: Write>(
    extractor: &Extractor,
    paths: &[P],
    out: &mut W,
) -> Result<Summary, CliError> {
    let mut summary = Summary::default();

    for path in paths {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot open input file");
                continue;
            }
        };
        summary.files_opened += 1;
        debug!(path = %path.display(), "scanning");

        match scan_stream(extractor, BufReader::new(file), out) {
            Ok(stats) => summary.add(stats),
            Err(StreamError::Read(source)) => {
                let err = CliError::Read {
                    path: path.to_path_buf(),
                    source,
                };
                warn!("{err}");
            }
            Err(StreamError::Write(err)) => return Err(CliError::Io(err)),
        }
    }

    if summary.files_opened == 0 {
        return Err(CliError::NoReadableInput {
            count: paths.len(),
        });
    }
    Ok(summary)
}
