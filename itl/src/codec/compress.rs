use super::{
    BLOCK_LEN, GROUP_LEN, GROUPS_PER_BLOCK, delta, stream_end,
    wire::write_byte,
};
use std::io::{self, Read, Seek, Write};
use thiserror::Error;

/// The value written into the output slot the leading write offset reserves
///
/// The original tool never initializes this byte. Writing a fixed value
/// keeps the output deterministic; the decompressor discards it either way.
const RESERVED_BYTE: u8 = 0x00;

/// Compress raw data from a reader into the writer
///
/// The reader must hold an exact number of 32-byte blocks, or
/// [`CompressError::UnalignedInput`] is returned before anything is written.
/// Each block is run through the inverse XOR chain and then serialized as
/// four token/literal groups; a single reserved byte follows the last block.
pub fn compress<R, W>(mut reader: R, mut writer: W) -> Result<(), CompressError>
where
    R: Read + Seek,
    W: Write,
{
    let mut block = [0; BLOCK_LEN];

    for _ in 0..block_count(&mut reader)? {
        reader.read_exact(&mut block)?;

        delta::difference(&mut block)?;
        compact_block(&block, &mut writer)?;
    }

    write_byte(&mut writer, RESERVED_BYTE)?;
    Ok(())
}

/// The exact number of bytes [`compress`] would produce for this reader
///
/// Performs the same traversal as [`compress`] without writing anything, so
/// a destination buffer can be allocated up front.
pub fn compressed_size<R>(mut reader: R) -> Result<u64, CompressError>
where
    R: Read + Seek,
{
    let mut block = [0; BLOCK_LEN];
    let mut size = 1; // the reserved trailing slot

    for _ in 0..block_count(&mut reader)? {
        reader.read_exact(&mut block)?;

        delta::difference(&mut block)?;
        size += (GROUPS_PER_BLOCK + literal_count(&block)) as u64;
    }

    Ok(size)
}

/// Serialize one (already XOR-inverted) block as token/literal groups
///
/// Every group of eight bytes becomes its bitmap token followed by the
/// group's non-zero bytes in order. Zero bytes are dropped entirely.
pub fn compact_block<W>(block: &[u8; BLOCK_LEN], mut writer: W) -> io::Result<()>
where
    W: Write,
{
    for group in block.chunks_exact(GROUP_LEN) {
        write_byte(&mut writer, group_token(group))?;

        for &byte in group {
            if byte != 0x00 {
                write_byte(&mut writer, byte)?;
            }
        }
    }

    Ok(())
}

/// Errors that might be returned from [`compress()`]
#[derive(Debug, Error)]
pub enum CompressError {
    /// Something went wrong with reading or writing from I/O
    #[error("Reading/writing from I/O failed")]
    Io(#[from] io::Error),

    /// The raw input must consist of whole 32-byte blocks
    #[error("The input length ({len} bytes) is not a multiple of 32")]
    UnalignedInput { len: u64 },
}

/// The bitmap byte flagging a group's non-zero bytes, MSB first
fn group_token(group: &[u8]) -> u8 {
    group.iter().enumerate().fold(0, |token, (index, &byte)| {
        token | u8::from(byte != 0x00) << (GROUP_LEN - 1 - index)
    })
}

fn literal_count(block: &[u8; BLOCK_LEN]) -> usize {
    block.iter().filter(|&&byte| byte != 0x00).count()
}

/// The number of whole blocks left in the reader, rejecting ragged input
fn block_count<R>(mut reader: R) -> Result<u64, CompressError>
where
    R: Read + Seek,
{
    let len = stream_end(&mut reader)? - reader.stream_position()?;

    if len % BLOCK_LEN as u64 != 0 {
        return Err(CompressError::UnalignedInput { len });
    }

    Ok(len / BLOCK_LEN as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tokens_flag_nonzero_bytes_msb_first() {
        let mut block = [0; BLOCK_LEN];
        block[0] = 0x0A;
        block[7] = 0x0B;

        let mut dest = Vec::new();
        compact_block(&block, &mut dest).unwrap();

        assert_eq!(dest[..3], [0x81, 0x0A, 0x0B]);
        assert_eq!(dest[3..], [0x00, 0x00, 0x00]);
    }

    #[test]
    fn compact_all_nonzero_block() {
        let mut dest = Vec::new();
        compact_block(&[0xFF; BLOCK_LEN], &mut dest).unwrap();

        let mut expected = Vec::new();
        for _ in 0..GROUPS_PER_BLOCK {
            expected.push(0xFF);
            expected.extend([0xFF; GROUP_LEN]);
        }
        assert_eq!(dest, expected);
    }

    #[test]
    fn all_zero_block() {
        let mut dest = Vec::new();
        compress(Cursor::new([0x00; BLOCK_LEN]), &mut dest).unwrap();

        // four empty tokens, then the reserved slot
        assert_eq!(dest, [0x00; 5]);
    }

    #[test]
    fn single_leading_byte() {
        let mut raw = [0x00; BLOCK_LEN];
        raw[0] = 0x01;

        let mut dest = Vec::new();
        compress(Cursor::new(raw), &mut dest).unwrap();

        // the XOR chain spills the first word into the second, so the first
        // group's token flags bytes 0 and 4
        assert_eq!(dest, [0x88, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn rejects_unaligned_input() {
        let mut dest = Vec::new();

        assert!(matches!(
            compress(Cursor::new([0x00; 33]), &mut dest),
            Err(CompressError::UnalignedInput { len: 33 })
        ));
        assert!(dest.is_empty());
    }

    #[test]
    fn size_matches_output() {
        let raw: Vec<u8> = (0u8..96).map(|i| if i % 3 == 0 { i } else { 0 }).collect();

        let mut dest = Vec::new();
        compress(Cursor::new(&raw[..]), &mut dest).unwrap();

        assert_eq!(
            compressed_size(Cursor::new(&raw[..])).unwrap(),
            dest.len() as u64
        );
    }
}
