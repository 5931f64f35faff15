//! Amplitude-envelope windows applied to a [`crate::kernel::FilterKernel`].

use alloc::vec;
use alloc::vec::Vec;

use crate::scalar::Scalar;

/// Computes the coefficient vector for a window shape of a given size.
///
/// Implement this to plug an alternative window into
/// [`Window::from_shape`]; the default shape used throughout this crate is
/// [`Blackman`].
pub trait WindowShape<T: Scalar> {
    fn coefficients(&self, size: usize) -> Vec<T>;
}

/// The classic three-term Blackman window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blackman;

impl<T: Scalar> WindowShape<T> for Blackman {
    fn coefficients(&self, size: usize) -> Vec<T> {
        if size <= 1 {
            return vec![T::one(); size];
        }
        let a0 = T::from_f64(7938.0 / 18608.0);
        let a1 = T::from_f64(9240.0 / 18608.0);
        let a2 = T::from_f64(1430.0 / 18608.0);
        let denom = T::from_usize(size - 1);

        (0..size)
            .map(|i| {
                let phase = T::from_usize(i) / denom;
                let two_pi_phase = T::TWO_PI * phase;
                a0 - a1 * two_pi_phase.cos() + a2 * (two_pi_phase + two_pi_phase).cos()
            })
            .collect()
    }
}

/// An immutable, precomputed amplitude envelope of `size` coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Window<T: Scalar> {
    coefficients: Vec<T>,
}

impl<T: Scalar> Window<T> {
    /// Builds a Blackman window of `size` coefficients.
    pub fn new(size: usize) -> Self {
        Self::from_shape(size, Blackman)
    }

    /// Builds a window from any [`WindowShape`].
    pub fn from_shape(size: usize, shape: impl WindowShape<T>) -> Self {
        Self {
            coefficients: shape.coefficients(size),
        }
    }

    pub fn size(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Multiplies `real[0..size]` by this window's coefficients in place.
    pub fn apply(&self, real: &mut [T]) {
        for (sample, &coeff) in real.iter_mut().zip(self.coefficients.iter()) {
            *sample = *sample * coeff;
        }
    }

    /// Multiplies both channels by this window's coefficients in place.
    pub fn apply_complex(&self, real: &mut [T], imag: &mut [T]) {
        self.apply(real);
        self.apply(imag);
    }

    /// Applies to the first `size()` samples of a [`crate::buffer::ComplexBuffer`].
    pub fn apply_buffer(&self, buffer: &mut crate::buffer::ComplexBuffer<T>) {
        let size = self.size();
        self.apply_complex(&mut buffer.re_mut()[..size], &mut buffer.im_mut()[..size]);
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
