//! # I.T.L. Tools
//!
//! Several Sega Mega Drive games developed by I.T.L. store their assets in a
//! simple block compression format (non-zero-byte bitmaps combined with an
//! XOR chain). This crate provides a command-line utility for extracting
//! those assets from a ROM and packing edited data back in, built on the
//! [`itl`] library crate.
//!
//! ## Unpack
//!
//! Decompress data straight out of a ROM, given the offset where it starts:
//!
//! ```console
//! > itl-tools unpack bonanza_bros.bin --offset 5935E
//! input:  1019 bytes
//! output: 3072 bytes (data_05935E_dec.bin)
//! ```
//!
//! ## Pack
//!
//! Compress a raw data file back into the format the games expect:
//!
//! ```console
//! > itl-tools pack data_05935E_dec.bin
//! input:  3072 bytes
//! output: 1019 bytes (data_000000_enc.bin)
//! ```
//!
//! Both subcommands accept `--output` to override the `data_<OFFSET>_<dec|enc>.bin`
//! naming convention.

pub mod pack;
pub mod unpack;
pub(crate) mod utils;
