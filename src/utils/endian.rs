// src/utils/endian.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte width of the words handled by this crate
pub(crate) const WORD_SIZE: usize = 4;

/// Reverse the four bytes of one word held in a raw byte group
#[inline]
pub(crate) fn swap_word_bytes(word: &mut [u8; WORD_SIZE]) {
    let value = LittleEndian::read_u32(&word[..]);
    BigEndian::write_u32(&mut word[..], value);
}
