//! Several Sega Mega Drive games developed by I.T.L. (Bonanza Bros. among
//! them) store their graphics and level data in a simple proprietary block
//! compression format. This crate reimplements that codec, so that assets can
//! be extracted from a ROM, edited and packed back in.
//!
//! The format works on 32-byte blocks. Each block is split into four groups
//! of eight bytes, every group described by a bitmap token flagging which of
//! its bytes are non-zero (and therefore stored as literals). On top of that,
//! the four-byte words of a block are chained together with a running XOR.
//! See the [`codec`] module for the details.
//!
//! ```
//! let raw = vec![0u8; 64];
//!
//! let packed = itl::compress_to_vec(&raw)?;
//! let unpacked = itl::decompress_to_vec(&packed)?;
//!
//! assert_eq!(unpacked, raw);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod codec;

pub use codec::{
    CompressError, compress_to_vec, compressed_size, decompress_to_vec, decompressed_size,
};
