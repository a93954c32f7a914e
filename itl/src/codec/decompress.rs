use super::{
    BLOCK_LEN, GROUP_LEN, GROUPS_PER_BLOCK, delta, stream_end,
    wire::{read_byte, write_byte},
};
use std::io::{Cursor, Read, Result, Seek, Write};

/// The result of expanding one compressed block
///
/// See [`expand_block`] for more information on when each variant is returned
#[derive(Debug, PartialEq, Eq)]
pub enum End {
    /// All four tokens and the literals they describe were present
    Complete,

    /// The reader ran out mid-block; the logical bytes not reached are zero
    Truncated,
}

/// Expand one compressed block into its 32 logical bytes
///
/// Reads up to four groups, each one token byte followed by a literal byte
/// for every set token bit (MSB first). Clear bits produce zeroes without
/// consuming input. If the reader runs out before the block is whole, the
/// remaining logical bytes are left zeroed and [`End::Truncated`] is
/// returned.
pub fn expand_block<R>(mut reader: R, block: &mut [u8; BLOCK_LEN]) -> Result<End>
where
    R: Read + Seek,
{
    let end = stream_end(&mut reader)?;

    block.fill(0);
    let mut dest = Cursor::new(block.as_mut_slice());

    for _ in 0..GROUPS_PER_BLOCK {
        if reader.stream_position()? == end {
            return Ok(End::Truncated);
        }

        let mut token = read_byte(&mut reader)?;

        for _ in 0..GROUP_LEN {
            let literal = if token & 0x80 != 0 {
                if reader.stream_position()? == end {
                    return Ok(End::Truncated);
                }

                read_byte(&mut reader)?
            } else {
                0
            };

            token <<= 1;
            write_byte(&mut dest, literal)?;
        }
    }

    Ok(End::Complete)
}

/// Decompress blocks from a reader until its input runs out
///
/// Every complete block is expanded, run through the XOR chain and written
/// out, so the output length is always a multiple of [`BLOCK_LEN`]. A
/// truncated trailing fragment (such as the reserved byte the compressor
/// leaves behind) is dropped rather than padded into a block of its own.
pub fn decompress<R, W>(mut reader: R, mut writer: W) -> Result<()>
where
    R: Read + Seek,
    W: Write,
{
    let end = stream_end(&mut reader)?;
    let mut block = [0; BLOCK_LEN];

    while reader.stream_position()? < end {
        if expand_block(&mut reader, &mut block)? == End::Truncated {
            break;
        }

        delta::accumulate(&mut block)?;
        writer.write_all(&block)?;
    }

    Ok(())
}

/// The exact number of bytes [`decompress`] would produce for this reader
///
/// Performs the same traversal as [`decompress`] without writing anything,
/// so a destination buffer can be allocated up front.
pub fn decompressed_size<R>(mut reader: R) -> Result<u64>
where
    R: Read + Seek,
{
    let end = stream_end(&mut reader)?;
    let mut block = [0; BLOCK_LEN];
    let mut size = 0;

    while reader.stream_position()? < end {
        if expand_block(&mut reader, &mut block)? == End::Truncated {
            break;
        }

        size += BLOCK_LEN as u64;
    }

    Ok(size)
}
