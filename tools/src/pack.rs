//! The `pack` subcommand

use crate::utils::{default_output_name, parse_hex_offset, read_from_offset};
use anyhow::{Context, Result};
use clap::Args;
use std::{fs, path::PathBuf};

/// Arguments for the `pack` subcommand
#[derive(Args)]
#[clap(author, version, about = "Compress raw data into the I.T.L. block format", long_about = None)]
pub struct PackArgs {
    /// The file holding the raw data to compress
    path: PathBuf,

    /// Hexadecimal byte offset at which the raw data starts
    #[clap(long, default_value = "0")]
    offset: String,

    /// The output path; defaults to data_<OFFSET>_enc.bin
    #[clap(short, long)]
    output: Option<PathBuf>,
}

/// Compress a file, or a region of one, to disk
///
/// The input must consist of whole 32-byte blocks; anything else is
/// rejected rather than silently truncated.
pub fn pack(args: &PackArgs) -> Result<()> {
    let offset = parse_hex_offset(&args.offset)?;
    let data = read_from_offset(&args.path, offset)?;

    let dest = itl::compress_to_vec(&data).context("Could not compress the input data")?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output_name(offset, "enc"),
    };

    fs::write(&output, &dest)
        .context(format!("Could not write {}", output.to_string_lossy()))?;

    println!("input:  {} bytes", data.len());
    println!("output: {} bytes ({})", dest.len(), output.to_string_lossy());

    Ok(())
}
