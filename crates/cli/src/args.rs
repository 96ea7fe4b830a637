// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::Parser;

use crate::options::OutputFormat;

/// Statistics for a text file: lines, words, most common letter(s) and
/// average letters per word.
///
/// Numbers count as words, so `these 3 words` has three words.
#[derive(Debug, Clone, Parser)]
#[command(name = "advcounter", version)]
pub struct Args {
    /// Name of the file to parse
    pub file: PathBuf,

    /// Number of decimal digits returned by calculations
    #[arg(short, long, value_name = "integer", default_value_t = 1)]
    pub decimal: u32,

    /// Path for the config file
    #[arg(short, long, default_value = "advcounter.conf")]
    pub config: PathBuf,

    /// Encoding of the input file
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
