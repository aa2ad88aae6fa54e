// src/lib.rs
//! # array-transform
//!
//! In-place transforms over flat 32-bit numeric arrays: byte-swapping and
//! scale/shift (`x * scale + shift`).
//!
//! ## Features
//!
//! - 🔁 **Byte-swap**: reverse the byte order of `u32` words, POD slices or raw byte buffers
//! - 📐 **Scale/Shift**: affine transform for `f32` and `i32` that skips identity arithmetic
//! - ⚡ **Parallel**: rayon or scoped threads, bit-identical to a sequential pass
//! - 🔌 **C API**: pointer + length exports for non-Rust callers
//!
//! ## Quick Start
//!
//! ```rust
//! use array_transform::*;
//!
//! fn main() -> Result<()> {
//!     // Big-endian words read from disk
//!     let mut words = vec![0x01020304u32, 0xAABBCCDD];
//!     byteswap32(&mut words);
//!     assert_eq!(words, vec![0x04030201, 0xDDCCBBAA]);
//!
//!     // Calibrate samples
//!     let mut samples = vec![2.0f32, -3.0];
//!     scale_shift_f32(&mut samples, 2.0, 1.0);
//!     assert_eq!(samples, vec![5.0, -5.0]);
//!
//!     // Reject integer overflow instead of wrapping
//!     let mut counts = vec![i32::MAX];
//!     assert!(scale_shift_i32_checked(&mut counts, 2, 0).is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Choosing an execution strategy
//!
//! ```rust
//! use array_transform::*;
//!
//! let mut data: Vec<i32> = (0..100_000).collect();
//! scale_shift_i32_with(&mut data, 3, 1, Execution::Threads(4));
//! assert_eq!(data[10], 31);
//! ```

// Modules
pub mod error;
pub mod types;
pub mod execution;
pub mod transform;
pub mod c_api;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{TransformError, Result};

pub use types::{
    Affine,
    Branch,
    ScaleShift,
};

pub use execution::{Execution, DEFAULT_MIN_LEN};

pub use transform::{
    bswap_u32,
    bswap_u32_in_place,
    byteswap32,
    byteswap32_with,
    byteswap32_pod,
    byteswap32_pod_with,
    byteswap32_bytes,
    byteswap32_bytes_with,
    scale_shift_f32,
    scale_shift_f32_with,
    scale_shift_i32,
    scale_shift_i32_with,
    scale_shift_i32_checked,
    scale_shift_i32_checked_with,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use array_transform::prelude::*;
    //! ```

    pub use crate::error::{TransformError, Result};
    pub use crate::execution::Execution;
    pub use crate::types::ScaleShift;
    pub use crate::transform::{byteswap32, scale_shift_f32, scale_shift_i32};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_reference_values() {
        let mut words = vec![0x01020304u32];
        byteswap32(&mut words);
        assert_eq!(words, vec![0x04030201]);

        let mut floats = vec![2.0f32, -3.0];
        scale_shift_f32(&mut floats, 2.0, 1.0);
        assert_eq!(floats, vec![5.0, -5.0]);

        let mut ints = vec![3];
        scale_shift_i32(&mut ints, 4, 2);
        assert_eq!(ints, vec![14]);
    }

    #[test]
    fn test_threaded_matches_sequential() {
        use crate::test_helpers::*;

        let mut words = generate_test_words(4096);
        let mut expected_words = words.clone();
        byteswap32_with(&mut expected_words, Execution::Sequential);
        byteswap32_with(&mut words, Execution::Threads(4));
        assert_eq!(words, expected_words);

        let mut floats = generate_test_data_f32(4096);
        let mut expected_floats = floats.clone();
        scale_shift_f32_with(&mut expected_floats, 1.5, -2.0, Execution::Sequential);
        scale_shift_f32_with(&mut floats, 1.5, -2.0, Execution::Threads(4));
        assert_eq!(floats, expected_floats);

        let mut ints = generate_test_data_i32(4096);
        let mut expected_ints = ints.clone();
        scale_shift_i32_with(&mut expected_ints, -7, 11, Execution::Sequential);
        scale_shift_i32_with(&mut ints, -7, 11, Execution::Threads(4));
        assert_eq!(ints, expected_ints);
    }

    #[test]
    fn test_error_display() {
        let err = TransformError::Overflow { index: 3, value: 7 };
        assert_eq!(err.to_string(), "Integer overflow at index 3 (value 7)");

        let err = TransformError::LengthMismatch { len: 6, width: 4 };
        assert_eq!(
            err.to_string(),
            "Length mismatch: 6 bytes is not a multiple of the 4-byte word width"
        );
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let mut data = vec![1.0f32, 2.0];
        ScaleShift::new(3.0f32, 0.0).apply_with(&mut data, Execution::Sequential);
        assert_eq!(data, vec![3.0, 6.0]);
    }
}
