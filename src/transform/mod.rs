// src/transform/mod.rs
//! In-place transforms over 32-bit numeric slices
//!
//! - [`byteswap32`] and friends reverse the byte order of each 32-bit word
//! - [`scale_shift_f32`] and [`scale_shift_i32`] apply `x * scale + shift`
//!
//! Each function has a `*_with` variant taking an [`Execution`](crate::Execution)
//! strategy. All strategies give bit-identical results.

mod byteswap;
mod scale_shift;

pub use byteswap::*;
pub use scale_shift::*;
