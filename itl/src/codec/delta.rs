//! The XOR chain applied to a block's four-byte words
//!
//! After the bitmap pass has restored a block's literal bytes, each word
//! still has to be XORed with everything that came before it; conversely the
//! compressor first reduces each word to its XOR with the previous one, so
//! that blocks full of repeating words compress down to a handful of tokens.

use super::{
    BLOCK_LEN,
    wire::{peek_u32, write_u32},
};
use std::io::{Cursor, Result};

/// The number of bytes in one word of the XOR chain
pub const WORD_LEN: usize = 4;

/// Turn each word into the running XOR of itself and all words before it
///
/// This is the forward direction, used when decompressing. It is undone by
/// [`difference`].
pub fn accumulate(block: &mut [u8; BLOCK_LEN]) -> Result<()> {
    let mut acc = 0;

    for offset in (0..BLOCK_LEN).step_by(WORD_LEN) {
        let word = peek_u32(Cursor::new(&block[offset..]))? ^ acc;
        write_u32(Cursor::new(&mut block[offset..]), word)?;
        acc = word;
    }

    Ok(())
}

/// Turn each word into the XOR of itself and the preceding original word
///
/// This is the inverse direction, used when compressing. The words are
/// processed back to front so that every step still sees the undisturbed
/// value of its predecessor; the first word is left as-is.
pub fn difference(block: &mut [u8; BLOCK_LEN]) -> Result<()> {
    for index in (1..BLOCK_LEN / WORD_LEN).rev() {
        let offset = index * WORD_LEN;

        let word = peek_u32(Cursor::new(&block[offset..]))?
            ^ peek_u32(Cursor::new(&block[offset - WORD_LEN..]))?;
        write_u32(Cursor::new(&mut block[offset..]), word)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_laws() {
        let original: [u8; BLOCK_LEN] =
            core::array::from_fn(|i| (i as u8).wrapping_mul(37).wrapping_add(11));

        let mut block = original;
        accumulate(&mut block).unwrap();
        assert_ne!(block, original);
        difference(&mut block).unwrap();
        assert_eq!(block, original);

        difference(&mut block).unwrap();
        accumulate(&mut block).unwrap();
        assert_eq!(block, original);
    }

    #[test]
    fn accumulate_chains_words() {
        let mut block = [0; BLOCK_LEN];
        block[0] = 0x01;

        accumulate(&mut block).unwrap();

        // the first word ripples through the entire block
        for offset in (0..BLOCK_LEN).step_by(WORD_LEN) {
            assert_eq!(block[offset..offset + WORD_LEN], [0x01, 0x00, 0x00, 0x00]);
        }
    }

    #[test]
    fn difference_keeps_first_word() {
        let mut block = [0; BLOCK_LEN];
        block[0] = 0x01;

        difference(&mut block).unwrap();

        let mut expected = [0; BLOCK_LEN];
        expected[0] = 0x01;
        expected[WORD_LEN] = 0x01;
        assert_eq!(block, expected);
    }

    #[test]
    fn repeated_words_cancel_out() {
        let mut block = [0x5A; BLOCK_LEN];

        difference(&mut block).unwrap();

        let mut expected = [0; BLOCK_LEN];
        expected[..WORD_LEN].fill(0x5A);
        assert_eq!(block, expected);
    }
}
