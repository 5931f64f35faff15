//! Time-domain filter kernel bound to one convolution instance.

use alloc::rc::Rc;
use core::ops::{Deref, DerefMut};

use crate::buffer::ComplexBuffer;
use crate::error::{ConvolutionError, Result};
use crate::fft::FourierTransform;
use crate::instance::InstanceId;
use crate::response::FrequencyResponse;
use crate::scalar::Scalar;
use crate::window::Window;

/// A [`ComplexBuffer`] of size `fft_size` holding a causal, windowed,
/// zero-padded impulse response, bound to exactly one convolution instance.
///
/// Defaults to the identity delta (`re[0] = 1`, elsewhere zero), the
/// impulse response of a pass-through filter. Dereferences to
/// [`ComplexBuffer`] so callers may edit the impulse response directly
/// (e.g. to build a kernel by hand rather than from a frequency response).
#[derive(Clone)]
pub struct FilterKernel<T: Scalar> {
    instance: InstanceId,
    buffer: ComplexBuffer<T>,
    window: Rc<Window<T>>,
}

impl<T: Scalar> FilterKernel<T> {
    pub(crate) fn identity(instance: InstanceId, fft_size: usize, window: Rc<Window<T>>) -> Self {
        let mut buffer = ComplexBuffer::new(fft_size);
        buffer.re_mut()[0] = T::one();
        Self {
            instance,
            buffer,
            window,
        }
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn window(&self) -> &Window<T> {
        &self.window
    }

    /// Overrides this kernel's window. Must match `window_size = size()/2 + 1`.
    pub fn set_window(&mut self, window: Rc<Window<T>>) -> Result<()> {
        let expected = self.buffer.len() / 2 + 1;
        if window.size() != expected {
            return Err(ConvolutionError::LengthMismatch);
        }
        self.window = window;
        Ok(())
    }

    /// Rebuilds this kernel from a frequency response: inverse FFT, centre
    /// by a quarter-length circular shift, window, and zero-pad.
    ///
    /// `shift_scratch` is caller-supplied scratch of the same size as this
    /// kernel, avoiding a per-call allocation in the hot construction path.
    /// Rejects with [`ConvolutionError::WrongInstance`] if `response` was
    /// built for a different convolution.
    pub fn set_frequency_response(
        &mut self,
        response: &FrequencyResponse<T>,
        fft: &FourierTransform<T>,
        shift_scratch: &mut ComplexBuffer<T>,
    ) -> Result<()> {
        if response.instance() != self.instance {
            return Err(ConvolutionError::WrongInstance);
        }

        let (re, im) = response.parts();
        {
            let (out_re, out_im) = self.buffer.parts_mut();
            fft.transform(re, im, out_re, out_im, true)?;
        }

        let fft_size = self.buffer.len();
        let quarter = (fft_size / 4) as isize;
        self.buffer.shift_into(-quarter, shift_scratch.re_mut(), shift_scratch.im_mut());
        core::mem::swap(&mut self.buffer, shift_scratch);

        let window_size = self.window.size();
        self.window
            .apply_complex(&mut self.buffer.re_mut()[..window_size], &mut self.buffer.im_mut()[..window_size]);
        self.buffer.re_mut()[window_size..].fill(T::zero());
        self.buffer.im_mut()[window_size..].fill(T::zero());

        Ok(())
    }
}

impl<T: Scalar> Deref for FilterKernel<T> {
    type Target = ComplexBuffer<T>;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl<T: Scalar> DerefMut for FilterKernel<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;
