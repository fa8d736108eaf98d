use clap::Parser;
use std::path::PathBuf;

use crate::fastq::DEFAULT_BASE_DIR;

#[derive(Debug, Parser)]
#[clap(
    version,
    about = "Check samplesheet and add fastq1/fastq2 read paths",
    long_about = None
)]
#[clap(after_help = "Example usage: modify_samplesheet <FILE_IN> <FILE_OUT>")]
pub struct Cli {
    #[clap(short, long, default_value = DEFAULT_BASE_DIR)]
    /// Directory the read paths are built under, used verbatim as a prefix
    pub base_dir: String,

    #[clap(name = "FILE_IN", parse(from_os_str))]
    /// Input samplesheet
    pub file_in: PathBuf,

    #[clap(name = "FILE_OUT", parse(from_os_str))]
    /// Output samplesheet
    pub file_out: PathBuf,
}
