//! CLI for rawcopy. Everything is asked interactively; the command line
//! only carries `--help` and `--version`.

use anyhow::{Context, Result};
use clap::Parser;
use rawcopy_core::config::{self, RawcopyConfig};
use rawcopy_core::prompt::Prompter;
use rawcopy_core::session;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Interactive byte-for-byte copy from a file or the console into a new file.
#[derive(Debug, Parser)]
#[command(name = "rawcopy", version)]
#[command(
    about = "rawcopy: copy arbitrary bytes from a file or the console into a file",
    long_about = None
)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        let cfg = load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let work_dir = std::env::current_dir().context("resolve current directory")?;
        run_interactive(io::stdin().lock(), io::stdout().lock(), &work_dir, &cfg)
    }
}

/// One interactive copy over the given console, with file names resolved in
/// `dir`. Prints `Done` once the copy has completed.
pub fn run_interactive<R, W>(
    input: R,
    output: W,
    dir: &Path,
    cfg: &RawcopyConfig,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut prompter = Prompter::new(input, output);
    session::run(&mut prompter, dir, cfg)?;
    prompter.say(format_args!("Done\n"))?;
    Ok(())
}

/// Line printed on stderr for a fatal error, with its whole cause chain.
pub fn error_line(err: &anyhow::Error) -> String {
    format!("rawcopy error: {:#}", err)
}

/// Process exit code: 0 on success, 1 on any fatal error.
pub fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Load the config file. Missing XDG directories fall back to defaults; a
/// present but invalid file is an error.
fn load_config() -> Result<RawcopyConfig> {
    if let Err(e) = config::config_path() {
        tracing::warn!("no config location ({:#}); using defaults", e);
        return Ok(RawcopyConfig::default());
    }
    config::load_or_init()
}
