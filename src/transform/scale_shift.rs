// src/transform/scale_shift.rs
use crate::error::{Result, TransformError};
use crate::execution::Execution;
use crate::types::{Branch, ScaleShift};

/// Apply `x * scale + shift` to every element in place
///
/// The arithmetic is skipped where it would be an identity:
///
/// | `scale` | `shift` | update |
/// |---------|---------|--------|
/// | `1.0` | `0.0` | none, bits preserved |
/// | `1.0` | other | `x + shift` |
/// | other | `0.0` | `x * scale` |
/// | other | other | `x * scale + shift` |
///
/// Comparisons are IEEE-754 equality, so a shift of `-0.0` counts as zero and
/// a NaN scale counts as "not one".
///
/// ```
/// use array_transform::scale_shift_f32;
///
/// let mut data = vec![2.0f32, -3.0];
/// scale_shift_f32(&mut data, 2.0, 1.0);
/// assert_eq!(data, vec![5.0, -5.0]);
/// ```
pub fn scale_shift_f32(values: &mut [f32], scale: f32, shift: f32) {
    ScaleShift::new(scale, shift).apply(values);
}

pub fn scale_shift_f32_with(values: &mut [f32], scale: f32, shift: f32, execution: Execution) {
    ScaleShift::new(scale, shift).apply_with(values, execution);
}

/// Apply `x * scale + shift` to every element in place
///
/// Same shortcuts as [`scale_shift_f32`] with exact integer comparisons.
///
/// # Overflow
///
/// Both the multiply and the add wrap around modulo 2^32 (two's complement),
/// in debug and release builds alike. Use [`scale_shift_i32_checked`] to
/// reject inputs that would overflow instead.
///
/// ```
/// use array_transform::scale_shift_i32;
///
/// let mut data = vec![3, i32::MAX];
/// scale_shift_i32(&mut data, 4, 2);
/// assert_eq!(data, vec![14, -2]);
/// ```
pub fn scale_shift_i32(values: &mut [i32], scale: i32, shift: i32) {
    ScaleShift::new(scale, shift).apply(values);
}

pub fn scale_shift_i32_with(values: &mut [i32], scale: i32, shift: i32, execution: Execution) {
    ScaleShift::new(scale, shift).apply_with(values, execution);
}

/// Overflow-checked variant of [`scale_shift_i32`]
///
/// Every element is checked before any is written. On overflow the buffer is
/// left unchanged and the first offending element is reported.
pub fn scale_shift_i32_checked(values: &mut [i32], scale: i32, shift: i32) -> Result<()> {
    scale_shift_i32_checked_with(values, scale, shift, Execution::default())
}

pub fn scale_shift_i32_checked_with(
    values: &mut [i32],
    scale: i32,
    shift: i32,
    execution: Execution,
) -> Result<()> {
    let transform = ScaleShift::new(scale, shift);
    let check: fn(i32, i32, i32) -> Option<i32> = match transform.branch() {
        Branch::Identity => return Ok(()),
        Branch::ShiftOnly => |v, _, shift| v.checked_add(shift),
        Branch::ScaleOnly => |v, scale, _| v.checked_mul(scale),
        Branch::Fused => |v, scale, shift| v.checked_mul(scale)?.checked_add(shift),
    };

    if let Some((index, &value)) = values
        .iter()
        .enumerate()
        .find(|&(_, &v)| check(v, scale, shift).is_none())
    {
        log::debug!("scale_shift_i32_checked: overflow at index {} (value {})", index, value);
        return Err(TransformError::Overflow { index, value });
    }

    // Nothing overflows, so wrapping arithmetic gives the exact result
    transform.apply_with(values, execution);
    Ok(())
}
