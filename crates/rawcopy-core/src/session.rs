//! One interactive copy: choose a source, name the files, copy the bytes.

use crate::config::RawcopyConfig;
use crate::copy::{copy_stream, CopyReport};
use crate::error::SessionError;
use crate::prompt::{Prompter, SourceChoice};
use crate::stream::{InputSource, OutputSink};
use std::io::{BufRead, Write};
use std::path::Path;

#[cfg(windows)]
const END_OF_INPUT_HINT: &str = "press Ctrl+Z, then Enter, to finish";
#[cfg(not(windows))]
const END_OF_INPUT_HINT: &str = "press Ctrl+D to finish";

/// Run one copy session. File names are resolved inside `dir`.
///
/// Both files are closed before this returns, whether the copy succeeded
/// or not. A bytes-already-written output file is left in place on failure.
pub fn run<R, W>(
    prompter: &mut Prompter<R, W>,
    dir: &Path,
    cfg: &RawcopyConfig,
) -> Result<CopyReport, SessionError>
where
    R: BufRead,
    W: Write,
{
    let choice = prompter.choose_source()?;
    tracing::info!(?choice, "input source selected");

    let input_name = match choice {
        SourceChoice::File => Some(prompter.input_file_name(dir, cfg.max_name_len)?),
        SourceChoice::Console => None,
    };
    let input_file = match &input_name {
        Some(name) => Some(InputSource::open_file(&name.resolve(dir))?),
        None => None,
    };

    let output_name = prompter.output_file_name(
        dir,
        input_name.as_ref(),
        cfg.max_name_len,
        cfg.warn_extension_mismatch,
    )?;
    let mut sink = OutputSink::create(&output_name.resolve(dir))?;
    tracing::info!(
        input = input_name.as_ref().map(|n| n.as_str()).unwrap_or("<console>"),
        output = %sink.path().display(),
        "copying"
    );

    let report = match input_file {
        Some(mut source) => copy_stream(&mut source, &mut sink, cfg.chunk_size)?,
        None => {
            prompter.say(format_args!(
                "Enter the input data ({}):\n",
                END_OF_INPUT_HINT
            ))?;
            let mut source = InputSource::Console(prompter.console());
            copy_stream(&mut source, &mut sink, cfg.chunk_size)?
        }
    };

    if cfg.sync_output {
        sink.sync()?;
    }
    drop(sink);

    tracing::info!(bytes = report.bytes, chunks = report.chunks, "copy completed");
    prompter.say(format_args!("Success! Write Data Completed.\n"))?;
    Ok(report)
}
