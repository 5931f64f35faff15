//! Frequency-domain filter description bound to one convolution instance.

use core::ops::{Deref, DerefMut};

use crate::buffer::ComplexBuffer;
use crate::error::{ConvolutionError, Result};
use crate::fft::FourierTransform;
use crate::instance::InstanceId;
use crate::kernel::FilterKernel;
use crate::scalar::Scalar;

/// A [`ComplexBuffer`] of size `fft_size`, bound to exactly one convolution
/// instance, holding the spectrum currently applied to every block.
///
/// Defaults to the identity response (`re = 1, im = 0` at every bin), the
/// spectrum of a pass-through filter. Dereferences to [`ComplexBuffer`] for
/// every bin/band editing operation; this type adds only the instance tag
/// and [`FrequencyResponse::set_filter_kernel`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse<T: Scalar> {
    instance: InstanceId,
    buffer: ComplexBuffer<T>,
}

impl<T: Scalar> FrequencyResponse<T> {
    pub(crate) fn identity(instance: InstanceId, fft_size: usize) -> Self {
        let mut buffer = ComplexBuffer::new(fft_size);
        buffer.set_all_real(T::one());
        Self { instance, buffer }
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Recomputes this response as the forward FFT of `kernel`'s impulse
    /// response. `fft` must be the owning convolution's transform engine.
    ///
    /// Rejects with [`ConvolutionError::WrongInstance`] if `kernel` was
    /// built for a different convolution.
    pub fn set_filter_kernel(&mut self, kernel: &FilterKernel<T>, fft: &FourierTransform<T>) -> Result<()> {
        if kernel.instance() != self.instance {
            return Err(ConvolutionError::WrongInstance);
        }
        let (re, im) = kernel.parts();
        let (out_re, out_im) = self.buffer.parts_mut();
        fft.transform(re, im, out_re, out_im, false)
    }
}

impl<T: Scalar> Deref for FrequencyResponse<T> {
    type Target = ComplexBuffer<T>;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl<T: Scalar> DerefMut for FrequencyResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
