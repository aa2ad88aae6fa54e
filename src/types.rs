// src/types.rs
use crate::execution::Execution;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for i32 {}
}

/// Which code path a scale/shift pair selects
///
/// The paths are not interchangeable for floats: skipping the multiply or the
/// add keeps signed zeros and NaN payloads that `x * 1.0` or `x + 0.0` could
/// otherwise alter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// `scale == 1 && shift == 0`: buffer left untouched
    Identity,
    /// `scale == 1 && shift != 0`: add only
    ShiftOnly,
    /// `scale != 1 && shift == 0`: multiply only
    ScaleOnly,
    /// `scale != 1 && shift != 0`: multiply then add
    Fused,
}

impl Branch {
    pub fn name(&self) -> &'static str {
        match self {
            Branch::Identity => "identity",
            Branch::ShiftOnly => "shift-only",
            Branch::ScaleOnly => "scale-only",
            Branch::Fused => "fused",
        }
    }
}

/// Element types that support the scale/shift transform.
///
/// Implemented for `f32` (IEEE-754 arithmetic) and `i32` (two's-complement
/// wraparound). The trait is sealed.
pub trait Affine: Copy + Send + Sync + sealed::Sealed {
    const ONE: Self;
    const ZERO: Self;

    fn is_one(self) -> bool;
    fn is_zero(self) -> bool;
    fn scale(self, by: Self) -> Self;
    fn shift(self, by: Self) -> Self;

    /// `self * scale + shift`, two separate operations
    #[inline]
    fn scale_shift(self, scale: Self, shift: Self) -> Self {
        self.scale(scale).shift(shift)
    }
}

impl Affine for f32 {
    const ONE: Self = 1.0;
    const ZERO: Self = 0.0;

    #[inline]
    fn is_one(self) -> bool {
        self == 1.0
    }

    // -0.0 == 0.0, NaN != 0.0
    #[inline]
    fn is_zero(self) -> bool {
        self == 0.0
    }

    #[inline]
    fn scale(self, by: Self) -> Self {
        self * by
    }

    #[inline]
    fn shift(self, by: Self) -> Self {
        self + by
    }
}

impl Affine for i32 {
    const ONE: Self = 1;
    const ZERO: Self = 0;

    #[inline]
    fn is_one(self) -> bool {
        self == 1
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == 0
    }

    #[inline]
    fn scale(self, by: Self) -> Self {
        self.wrapping_mul(by)
    }

    #[inline]
    fn shift(self, by: Self) -> Self {
        self.wrapping_add(by)
    }
}

/// A scale/shift pair applied as `x * scale + shift`
///
/// # Example
///
/// ```
/// use array_transform::types::{Branch, ScaleShift};
///
/// let transform = ScaleShift::new(2.0f32, 1.0);
/// assert_eq!(transform.branch(), Branch::Fused);
///
/// let mut data = vec![2.0f32, -3.0];
/// transform.apply(&mut data);
/// assert_eq!(data, vec![5.0, -5.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleShift<T> {
    pub scale: T,
    pub shift: T,
}

impl<T: Affine> ScaleShift<T> {
    pub fn new(scale: T, shift: T) -> Self {
        ScaleShift { scale, shift }
    }

    pub fn identity() -> Self {
        ScaleShift { scale: T::ONE, shift: T::ZERO }
    }

    pub fn branch(&self) -> Branch {
        match (self.scale.is_one(), self.shift.is_zero()) {
            (true, true) => Branch::Identity,
            (true, false) => Branch::ShiftOnly,
            (false, true) => Branch::ScaleOnly,
            (false, false) => Branch::Fused,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.branch() == Branch::Identity
    }

    /// Transform a single value following the same branch rules as [`apply`](Self::apply)
    #[inline]
    pub fn apply_value(&self, value: T) -> T {
        match self.branch() {
            Branch::Identity => value,
            Branch::ShiftOnly => value.shift(self.shift),
            Branch::ScaleOnly => value.scale(self.scale),
            Branch::Fused => value.scale_shift(self.scale, self.shift),
        }
    }

    /// Transform `values` in place using the default execution strategy
    pub fn apply(&self, values: &mut [T]) {
        self.apply_with(values, Execution::default());
    }

    /// Transform `values` in place using `execution`
    ///
    /// The branch is chosen once per call, so each element sees exactly one
    /// loop body.
    pub fn apply_with(&self, values: &mut [T], execution: Execution) {
        let branch = self.branch();
        log::trace!(
            "scale/shift: branch={} len={} execution={:?}",
            branch.name(),
            values.len(),
            execution
        );

        let (scale, shift) = (self.scale, self.shift);
        match branch {
            Branch::Identity => {}
            Branch::ShiftOnly => execution.for_each_mut(values, move |v| *v = v.shift(shift)),
            Branch::ScaleOnly => execution.for_each_mut(values, move |v| *v = v.scale(scale)),
            Branch::Fused => {
                execution.for_each_mut(values, move |v| *v = v.scale_shift(scale, shift))
            }
        }
    }
}

impl<T: Affine> Default for ScaleShift<T> {
    fn default() -> Self {
        Self::identity()
    }
}
