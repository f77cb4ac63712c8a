use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("none of the {count} input file(s) could be opened")]
    NoReadableInput { count: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// True when the reader of our output went away (`grepurls ... | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = CliError::NoReadableInput { count: 2 };
        assert_eq!(err.to_string(), "none of the 2 input file(s) could be opened");

        let err = CliError::Read {
            path: PathBuf::from("a.log"),
            source: io::Error::new(io::ErrorKind::InvalidData, "bad sector"),
        };
        assert_eq!(err.to_string(), "failed to read a.log: bad sector");
    }

    #[test]
    fn broken_pipe_detection() {
        let err = CliError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(err.is_broken_pipe());
        assert!(!CliError::NoReadableInput { count: 1 }.is_broken_pipe());
    }
}
