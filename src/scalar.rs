//! Scalar element type shared by every component in this crate.
//!
//! The original design ships hand-duplicated 32-bit and 64-bit variants of
//! every type (see `float/` and `fixed/` in the prior art). Here a single
//! generic implementation is monomorphised over [`Scalar`], sealed so it is
//! only ever `f32` or `f64`. Transcendental functions dispatch to `std` or
//! to `libm`, the same `std`/`libm` split the prior art used per-function.

use core::ops::{Add, Div, Mul, Neg, Sub};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point element type usable throughout this crate.
///
/// Implemented for `f32` and `f64` only. Bundles the arithmetic and
/// trigonometric operations the FFT, window, and band-fill math need.
pub trait Scalar:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + private::Sealed
    + Send
    + Sync
    + 'static
{
    /// `2 * pi`, precomputed at the element's own precision.
    const TWO_PI: Self;

    fn zero() -> Self;
    fn one() -> Self;

    /// Converts a `usize` exactly (all values this crate deals with fit).
    fn from_usize(n: usize) -> Self;

    /// Converts an `isize`, used by [`crate::buffer::ComplexBuffer::shift`].
    fn from_isize(n: isize) -> Self;

    /// Widens to `f64`, used for bin-index rounding in band-fill math.
    fn to_f64(self) -> f64;

    /// Narrows from `f64`, the inverse of [`Scalar::to_f64`].
    fn from_f64(x: f64) -> Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn round(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

impl Scalar for f32 {
    const TWO_PI: Self = core::f32::consts::TAU;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_usize(n: usize) -> Self {
        n as Self
    }

    fn from_isize(n: isize) -> Self {
        n as Self
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(x: f64) -> Self {
        x as Self
    }

    #[cfg(feature = "std")]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
    #[cfg(not(feature = "std"))]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    #[cfg(feature = "std")]
    fn abs(self) -> Self {
        f32::abs(self)
    }
    #[cfg(not(feature = "std"))]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    #[cfg(feature = "std")]
    fn round(self) -> Self {
        f32::round(self)
    }
    #[cfg(not(feature = "std"))]
    fn round(self) -> Self {
        libm::roundf(self)
    }

    #[cfg(feature = "std")]
    fn sin(self) -> Self {
        f32::sin(self)
    }
    #[cfg(not(feature = "std"))]
    fn sin(self) -> Self {
        libm::sinf(self)
    }

    #[cfg(feature = "std")]
    fn cos(self) -> Self {
        f32::cos(self)
    }
    #[cfg(not(feature = "std"))]
    fn cos(self) -> Self {
        libm::cosf(self)
    }

    #[cfg(feature = "std")]
    fn atan2(self, other: Self) -> Self {
        f32::atan2(self, other)
    }
    #[cfg(not(feature = "std"))]
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
}

impl Scalar for f64 {
    const TWO_PI: Self = core::f64::consts::TAU;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_usize(n: usize) -> Self {
        n as Self
    }

    fn from_isize(n: isize) -> Self {
        n as Self
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(x: f64) -> Self {
        x
    }

    #[cfg(feature = "std")]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    #[cfg(not(feature = "std"))]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[cfg(feature = "std")]
    fn abs(self) -> Self {
        f64::abs(self)
    }
    #[cfg(not(feature = "std"))]
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    #[cfg(feature = "std")]
    fn round(self) -> Self {
        f64::round(self)
    }
    #[cfg(not(feature = "std"))]
    fn round(self) -> Self {
        libm::round(self)
    }

    #[cfg(feature = "std")]
    fn sin(self) -> Self {
        f64::sin(self)
    }
    #[cfg(not(feature = "std"))]
    fn sin(self) -> Self {
        libm::sin(self)
    }

    #[cfg(feature = "std")]
    fn cos(self) -> Self {
        f64::cos(self)
    }
    #[cfg(not(feature = "std"))]
    fn cos(self) -> Self {
        libm::cos(self)
    }

    #[cfg(feature = "std")]
    fn atan2(self, other: Self) -> Self {
        f64::atan2(self, other)
    }
    #[cfg(not(feature = "std"))]
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
}
