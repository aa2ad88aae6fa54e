// python/src/lib.rs
//! Python bindings for array-transform using PyO3
//!
//! Every function mutates a one-dimensional NumPy array in place:
//!
//! ```python
//! import numpy as np
//! import array_transform_python as at
//!
//! words = np.array([0x01020304], dtype=np.uint32)
//! at.byteswap32(words)
//!
//! samples = np.array([2.0, -3.0], dtype=np.float32)
//! at.scale_shift_f32(samples, 2.0, 1.0)   # -> [5.0, -5.0]
//! ```

use pyo3::prelude::*;
use pyo3::exceptions::{PyOverflowError, PyValueError};
use numpy::{Element, PyReadwriteArray1};

use array_transform as atx;

fn transform_error_to_pyerr(err: atx::TransformError) -> PyErr {
    match err {
        atx::TransformError::Overflow { .. } => PyOverflowError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Borrow the array's storage as a mutable slice, rejecting strided views
fn contiguous_slice<'a, T: Element>(array: &'a mut PyReadwriteArray1<'_, T>) -> PyResult<&'a mut [T]> {
    array
        .as_slice_mut()
        .map_err(|_| transform_error_to_pyerr(atx::TransformError::NotContiguous))
}

/// Reverse the byte order of a single 32-bit value
#[pyfunction]
fn bswap_u32(value: u32) -> u32 {
    atx::bswap_u32(value)
}

/// Reverse the byte order of every element of a uint32 array in place
#[pyfunction]
fn byteswap32(mut array: PyReadwriteArray1<'_, u32>) -> PyResult<()> {
    atx::byteswap32(contiguous_slice(&mut array)?);
    Ok(())
}

/// Apply `x * scale + shift` to a float32 array in place
#[pyfunction]
#[pyo3(signature = (array, scale=1.0, shift=0.0))]
fn scale_shift_f32(mut array: PyReadwriteArray1<'_, f32>, scale: f32, shift: f32) -> PyResult<()> {
    atx::scale_shift_f32(contiguous_slice(&mut array)?, scale, shift);
    Ok(())
}

/// Apply `x * scale + shift` to an int32 array in place
///
/// Overflow wraps around unless `checked` is true, in which case an
/// OverflowError is raised and the array is left unchanged.
#[pyfunction]
#[pyo3(signature = (array, scale=1, shift=0, checked=false))]
fn scale_shift_i32(
    mut array: PyReadwriteArray1<'_, i32>,
    scale: i32,
    shift: i32,
    checked: bool,
) -> PyResult<()> {
    let values = contiguous_slice(&mut array)?;
    if checked {
        atx::scale_shift_i32_checked(values, scale, shift).map_err(transform_error_to_pyerr)
    } else {
        atx::scale_shift_i32(values, scale, shift);
        Ok(())
    }
}

/// Python module for in-place array transforms
#[pymodule]
fn array_transform_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bswap_u32, m)?)?;
    m.add_function(wrap_pyfunction!(byteswap32, m)?)?;
    m.add_function(wrap_pyfunction!(scale_shift_f32, m)?)?;
    m.add_function(wrap_pyfunction!(scale_shift_i32, m)?)?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
