//! Command-line definition.
//!
//! Args are built with the clap builder API and pulled into a plain
//! [`Params`] struct, so the rest of the binary never touches `ArgMatches`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use grepurls::{ExtractorConfig, SchemePolicy};

/// Input files (positional, repeatable).
fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Files to scan (standard input if none)")
}

/// Accept any RFC 3986 scheme (--any-scheme).
fn any_scheme_arg() -> Arg {
    Arg::new("any_scheme")
        .long("any-scheme")
        .action(ArgAction::SetTrue)
        .help("Accept any syntactically valid scheme, not only IANA-registered ones")
}

/// Keep enclosing brackets (--no-trim).
fn no_trim_arg() -> Arg {
    Arg::new("no_trim")
        .long("no-trim")
        .action(ArgAction::SetTrue)
        .help("Don't peel enclosing bracket pairs off tokens")
}

/// Log verbosity (-v, repeatable).
fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log more to stderr (-v info, -vv debug, -vvv trace)")
}

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("grepurls")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the first URI found in each whitespace-separated token")
        .after_help(
            r#"EXAMPLES:
  grepurls access.log              # one URI per line
  cat notes.md | grepurls          # read standard input
  grepurls --any-scheme a.txt b.txt

Tokens are split on spaces, tabs and line breaks. Enclosing pairs such as
(), <>, [] and quotes are removed before matching. RUST_LOG overrides -v."#,
        )
        .arg(files_arg())
        .arg(any_scheme_arg())
        .arg(no_trim_arg())
        .arg(verbose_arg())
}

/// Parsed command-line parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub files: Vec<PathBuf>,
    pub any_scheme: bool,
    pub no_trim: bool,
    pub verbose: u8,
}

impl Params {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: m
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            any_scheme: m.get_flag("any_scheme"),
            no_trim: m.get_flag("no_trim"),
            verbose: m.get_count("verbose"),
        }
    }

    pub fn extractor_config(&self) -> ExtractorConfig {
        let policy = if self.any_scheme {
            SchemePolicy::Any
        } else {
            SchemePolicy::Registered
        };
        ExtractorConfig::new()
            .with_scheme_policy(policy)
            .with_trim_brackets(!self.no_trim)
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
