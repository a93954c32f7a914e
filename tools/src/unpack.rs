//! The `unpack` subcommand

use crate::utils::{default_output_name, parse_hex_offset, read_from_offset};
use anyhow::{Context, Result};
use clap::Args;
use std::{fs, path::PathBuf};

/// Arguments for the `unpack` subcommand
#[derive(Args)]
#[clap(author, version, about = "Decompress I.T.L. data from a ROM or data file", long_about = None)]
pub struct UnpackArgs {
    /// The file to read compressed data from
    path: PathBuf,

    /// Hexadecimal byte offset at which the compressed data starts
    #[clap(long, default_value = "0")]
    offset: String,

    /// The output path; defaults to data_<OFFSET>_dec.bin
    #[clap(short, long)]
    output: Option<PathBuf>,
}

/// Decompress a file, or a region of one, to disk
pub fn unpack(args: &UnpackArgs) -> Result<()> {
    let offset = parse_hex_offset(&args.offset)?;
    let data = read_from_offset(&args.path, offset)?;

    let dest = itl::decompress_to_vec(&data).context("Could not decompress the input data")?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output_name(offset, "dec"),
    };

    fs::write(&output, &dest)
        .context(format!("Could not write {}", output.to_string_lossy()))?;

    println!("input:  {} bytes", data.len());
    println!("output: {} bytes ({})", dest.len(), output.to_string_lossy());

    Ok(())
}
