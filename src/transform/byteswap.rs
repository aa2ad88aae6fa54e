// src/transform/byteswap.rs
use crate::error::{Result, TransformError};
use crate::execution::Execution;
use crate::utils::{swap_word_bytes, WORD_SIZE};
use bytemuck::{Pod, PodCastError};

/// Reverse the byte order of a 32-bit value
///
/// Byte 0 swaps with byte 3 and byte 1 swaps with byte 2.
///
/// ```
/// use array_transform::bswap_u32;
///
/// assert_eq!(bswap_u32(0x01020304), 0x04030201);
/// ```
#[inline]
pub const fn bswap_u32(u: u32) -> u32 {
    ((u & 0x0000_00FF) << 24)
        | ((u & 0x0000_FF00) << 8)
        | ((u & 0x00FF_0000) >> 8)
        | ((u >> 24) & 0x0000_00FF)
}

/// Reverse the byte order of a 32-bit value in place
#[inline]
pub fn bswap_u32_in_place(u: &mut u32) {
    *u = bswap_u32(*u);
}

/// Reverse the byte order of every element, using the default execution strategy
///
/// # Example
///
/// ```
/// use array_transform::byteswap32;
///
/// let mut data = vec![0x01020304u32, 0xAABBCCDD];
/// byteswap32(&mut data);
/// assert_eq!(data, vec![0x04030201, 0xDDCCBBAA]);
/// ```
pub fn byteswap32(values: &mut [u32]) {
    byteswap32_with(values, Execution::default());
}

/// Reverse the byte order of every element using `execution`
pub fn byteswap32_with(values: &mut [u32], execution: Execution) {
    log::trace!("byteswap32: len={} execution={:?}", values.len(), execution);
    execution.for_each_mut(values, bswap_u32_in_place);
}

/// Byte-swap any slice of 4-byte plain-old-data values
///
/// Useful for `f32` and `i32` buffers read in the opposite byte order. Fails
/// with [`TransformError::Cast`] when `T` is not 4 bytes wide or the slice is
/// not aligned for `u32` access.
///
/// ```
/// use array_transform::byteswap32_pod;
///
/// let mut data = [f32::from_bits(0x0000_803F)];
/// byteswap32_pod(&mut data).unwrap();
/// assert_eq!(data[0], 1.0);
/// ```
pub fn byteswap32_pod<T: Pod>(values: &mut [T]) -> Result<()> {
    byteswap32_pod_with(values, Execution::default())
}

pub fn byteswap32_pod_with<T: Pod>(values: &mut [T], execution: Execution) -> Result<()> {
    if std::mem::size_of::<T>() != WORD_SIZE {
        return Err(TransformError::Cast(PodCastError::SizeMismatch));
    }

    // An empty slice's dangling pointer may not be u32-aligned
    if values.is_empty() {
        return Ok(());
    }

    let words: &mut [u32] = bytemuck::try_cast_slice_mut(values)?;
    byteswap32_with(words, execution);
    Ok(())
}

/// Byte-swap every 4-byte group of a raw byte buffer
///
/// No alignment requirement. The length must be a multiple of 4.
///
/// ```
/// use array_transform::byteswap32_bytes;
///
/// let mut bytes = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
/// byteswap32_bytes(&mut bytes).unwrap();
/// assert_eq!(bytes, vec![4, 3, 2, 1, 8, 7, 6, 5]);
/// ```
pub fn byteswap32_bytes(bytes: &mut [u8]) -> Result<()> {
    byteswap32_bytes_with(bytes, Execution::default())
}

pub fn byteswap32_bytes_with(bytes: &mut [u8], execution: Execution) -> Result<()> {
    if bytes.len() % WORD_SIZE != 0 {
        return Err(TransformError::LengthMismatch {
            len: bytes.len(),
            width: WORD_SIZE,
        });
    }

    // [u8; 4] has alignment 1, so this only fails on length
    let words: &mut [[u8; WORD_SIZE]] = bytemuck::try_cast_slice_mut(bytes)?;
    log::trace!("byteswap32_bytes: words={} execution={:?}", words.len(), execution);
    execution.for_each_mut(words, swap_word_bytes);
    Ok(())
}
