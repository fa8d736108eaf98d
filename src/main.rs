mod cli;
mod error;
mod fastq;
mod samplesheet;
use crate::cli::Cli;
use crate::error::SamplesheetError;
use crate::fastq::{add_fastq_columns, FastqTemplate};
use crate::samplesheet::Samplesheet;
use clap::Parser;
use std::process::ExitCode;

/// Load `FILE_IN`, add the read paths and write `FILE_OUT`.
fn run(args: &Cli) -> Result<(), SamplesheetError> {
    let template = FastqTemplate::new(args.base_dir.as_str());
    log::debug!("Building read paths under {}", template.base_dir());
    let mut sheet = Samplesheet::from_path(&args.file_in)?;
    if sheet.is_empty() {
        log::warn!("{:?} has a header but no rows", args.file_in);
    }
    add_fastq_columns(&mut sheet, &template)?;
    log::debug!("Output columns: {:?}", sheet.headers());
    sheet.to_path(&args.file_out)?;
    log::info!(
        "Added fastq paths for {} rows, written to {:?}",
        sheet.len(),
        args.file_out
    );
    Ok(())
}

/// Print any error to stderr and turn the outcome into a process exit status.
fn exit_status(result: Result<(), SamplesheetError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    ExitCode::from(exit_status(run(&args)))
}
