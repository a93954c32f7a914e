//! Implementation of the I.T.L. block compression scheme
//!
//! Compressed data is a sequence of variable-length blocks, each representing
//! exactly [`BLOCK_LEN`] logical bytes. A block consists of four groups; every
//! group is one token byte followed by a literal byte for each bit set in the
//! token (MSB first). Clear bits stand for zero bytes, which are not stored.
//!
//! Before the bitmap pass, the compressor XORs each four-byte big-endian word
//! of a block with its predecessor, so that runs of identical words collapse
//! to zeroes. The decompressor undoes this with a running prefix-XOR. See
//! [`delta`] for both directions.
//!
//! The compressor's output write position starts at one rather than zero,
//! leaving room to slot each group's token in front of the literals it
//! describes. That convention makes the compressed stream one byte longer
//! than its tokens and literals; the decompressor treats that trailing byte
//! as the start of a block that never completes and discards it.

mod compress;
mod decompress;
pub mod delta;
pub mod wire;

pub use compress::{CompressError, compact_block, compress, compressed_size};
pub use decompress::{End, decompress, decompressed_size, expand_block};

use std::io::{self, Cursor, Seek, SeekFrom};

/// The number of logical bytes represented by one compressed block
pub const BLOCK_LEN: usize = 32;

/// The number of logical bytes governed by one token byte
pub const GROUP_LEN: usize = 8;

/// The number of token groups in a block
pub const GROUPS_PER_BLOCK: usize = BLOCK_LEN / GROUP_LEN;

/// Decompress a whole compressed buffer into a freshly allocated one
///
/// The destination is sized exactly beforehand with [`decompressed_size`],
/// so its length is always a multiple of [`BLOCK_LEN`].
pub fn decompress_to_vec(data: &[u8]) -> io::Result<Vec<u8>> {
    let size = decompressed_size(Cursor::new(data))?;

    let mut dest = vec![0; size as usize];
    decompress(Cursor::new(data), Cursor::new(dest.as_mut_slice()))?;

    Ok(dest)
}

/// Compress a whole raw buffer into a freshly allocated one
///
/// The destination is sized exactly beforehand with [`compressed_size`]. The
/// input length must be a multiple of [`BLOCK_LEN`], or
/// [`CompressError::UnalignedInput`] is returned.
pub fn compress_to_vec(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    let size = compressed_size(Cursor::new(data))?;

    let mut dest = vec![0; size as usize];
    compress(Cursor::new(data), Cursor::new(dest.as_mut_slice()))?;

    Ok(dest)
}

/// Figure out the stream length of a seekable, without moving its position
pub(crate) fn stream_end<S>(mut seeker: S) -> io::Result<u64>
where
    S: Seek,
{
    let pos = seeker.stream_position()?;
    seeker.seek(SeekFrom::End(0))?;
    let end = seeker.stream_position()?;
    seeker.seek(SeekFrom::Start(pos))?;
    Ok(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let raw: Vec<u8> = (0u8..=255).collect();

        let packed = compress_to_vec(&raw).unwrap();
        assert_eq!(
            packed.len() as u64,
            compressed_size(Cursor::new(&raw[..])).unwrap()
        );

        let unpacked = decompress_to_vec(&packed).unwrap();
        assert_eq!(
            unpacked.len() as u64,
            decompressed_size(Cursor::new(&packed[..])).unwrap()
        );

        assert_eq!(unpacked, raw);
    }

    #[test]
    fn round_trip_sparse() {
        let mut raw = vec![0u8; 128];
        raw[5] = 0x31;
        raw[70] = 0x99;
        raw[127] = 0x01;

        let packed = compress_to_vec(&raw).unwrap();
        assert!(packed.len() < raw.len());
        assert_eq!(decompress_to_vec(&packed).unwrap(), raw);
    }

    #[test]
    fn all_zero_blocks() {
        let raw = vec![0u8; 64];

        // four zero tokens per block, plus the reserved trailing slot
        let packed = compress_to_vec(&raw).unwrap();
        assert_eq!(packed, vec![0; 9]);

        assert_eq!(decompress_to_vec(&packed).unwrap(), raw);
    }

    #[test]
    fn empty_input() {
        let packed = compress_to_vec(&[]).unwrap();
        assert_eq!(packed, [0x00]);

        assert!(decompress_to_vec(&packed).unwrap().is_empty());
        assert!(decompress_to_vec(&[]).unwrap().is_empty());
    }
}
