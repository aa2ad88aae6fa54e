// src/c_api.rs
//! C API
//!
//! C-compatible exports of the array transforms. Every function takes a raw
//! pointer and an element count, mutates the buffer in place and returns
//! nothing. The default [`Execution`](crate::Execution) strategy is used.
//!
//! A null pointer or a zero count is a no-op. Otherwise the pointer and count
//! are trusted as-is: no bounds are checked.
//!
//! ```c
//! uint32_t words[2] = { 0x01020304u, 0xAABBCCDDu };
//! atx_byteswap32(words, 2);
//!
//! float samples[3] = { 1.0f, 2.0f, 3.0f };
//! atx_scale_shift_f32(samples, 3, 0.5f, -1.0f);
//! ```

use crate::transform;
use core::slice;

/// Build a mutable slice from a C pointer, treating null as empty
///
/// # Safety
///
/// See the safety section of the public functions.
unsafe fn slice_from_raw<'a, T>(ptr: *mut T, len: usize) -> &'a mut [T] {
    if ptr.is_null() || len == 0 {
        &mut []
    } else {
        slice::from_raw_parts_mut(ptr, len)
    }
}

/// Reverse the byte order of a single 32-bit value.
///
/// # Safety
///
/// `value` must be null or point to a valid, aligned `uint32_t`.
#[no_mangle]
pub unsafe extern "C" fn atx_bswap_u32(value: *mut u32) {
    if let Some(value) = value.as_mut() {
        transform::bswap_u32_in_place(value);
    }
}

/// Reverse the byte order of `len` 32-bit values starting at `values`.
///
/// # Safety
///
/// `values` must be null or valid for reads and writes of `len` aligned
/// `uint32_t` elements, with no other access to that memory during the call.
#[no_mangle]
pub unsafe extern "C" fn atx_byteswap32(values: *mut u32, len: usize) {
    transform::byteswap32(slice_from_raw(values, len));
}

/// Apply `x * scale + shift` to `len` floats starting at `values`.
///
/// # Safety
///
/// `values` must be null or valid for reads and writes of `len` aligned
/// `float` elements, with no other access to that memory during the call.
#[no_mangle]
pub unsafe extern "C" fn atx_scale_shift_f32(values: *mut f32, len: usize, scale: f32, shift: f32) {
    transform::scale_shift_f32(slice_from_raw(values, len), scale, shift);
}

/// Apply `x * scale + shift` to `len` 32-bit integers starting at `values`.
///
/// Overflow wraps around modulo 2^32.
///
/// # Safety
///
/// `values` must be null or valid for reads and writes of `len` aligned
/// `int32_t` elements, with no other access to that memory during the call.
#[no_mangle]
pub unsafe extern "C" fn atx_scale_shift_i32(values: *mut i32, len: usize, scale: i32, shift: i32) {
    transform::scale_shift_i32(slice_from_raw(values, len), scale, shift);
}
