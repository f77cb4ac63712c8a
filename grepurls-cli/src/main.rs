mod cli;
mod error;
mod input;
mod scan;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use grepurls::Extractor;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Params, build_cli};
use error::CliError;
use scan::Summary;

fn main() -> ExitCode {
    // clap prints usage errors and exits with status 2 on its own.
    let matches = build_cli().get_matches();
    let params = Params::from_matches(&matches);
    init_tracing(&params);

    match run(&params) {
        Ok(summary) => {
            info!(
                tokens = summary.tokens,
                uris = summary.uris,
                files = summary.files_opened,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(params: &Params) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(params.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(params: &Params) -> Result<Summary, CliError> {
    let extractor = Extractor::new(params.extractor_config());
    let mut out = BufWriter::new(io::stdout().lock());

    let summary = if params.files.is_empty() {
        scan::scan_stdin(&extractor, io::stdin().lock(), &mut out)?
    } else {
        scan::scan_files(&extractor, &params.files, &mut out)?
    };

    out.flush()?;
    Ok(summary)
}
