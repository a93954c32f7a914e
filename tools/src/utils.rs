use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

/// Parse a byte offset written in hexadecimal, with or without a `0x` prefix
pub fn parse_hex_offset(text: &str) -> Result<u64> {
    let digits = text.trim_start_matches("0x").trim_start_matches("0X");
    u64::from_str_radix(digits, 16).context(format!("'{text}' is not a hexadecimal offset"))
}

/// Read a file from `offset` up to its end
pub fn read_from_offset(path: &Path, offset: u64) -> Result<Vec<u8>> {
    let mut file =
        File::open(path).context(format!("Could not open {}", path.to_string_lossy()))?;

    file.seek(SeekFrom::Start(offset)).context(format!(
        "Could not seek to {offset:#X} in {}",
        path.to_string_lossy()
    ))?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .context(format!("Could not read {}", path.to_string_lossy()))?;

    Ok(data)
}

/// The output naming convention of the original tool: `data_<OFFSET>_<TAG>.bin`
pub fn default_output_name(offset: u64, tag: &str) -> PathBuf {
    PathBuf::from(format!("data_{offset:06X}_{tag}.bin"))
}
