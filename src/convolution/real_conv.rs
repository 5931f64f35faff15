use alloc::vec;
use alloc::vec::Vec;

use crate::error::{ConvolutionError, Result};
use crate::kernel::FilterKernel;
use crate::response::FrequencyResponse;
use crate::scalar::Scalar;

use super::{ConvolutionCore, Observer};

/// Streaming convolution of `size` real samples per block (`size` must be
/// even), exploiting the fact that one complex FFT of two packed real
/// sequences yields both their spectra.
pub struct ConvolutionReal<T: Scalar> {
    core: ConvolutionCore<T>,
    half: usize,
    size: usize,
    pending: Vec<T>,
}

impl<T: Scalar> ConvolutionReal<T> {
    /// Builds an engine processing `size` real samples per block. `size`
    /// must be even; the internal complex block size is `size / 2`.
    pub fn new(size: usize) -> Result<Self> {
        if size % 2 != 0 {
            return Err(ConvolutionError::NotEven);
        }
        let half = size / 2;
        let core = ConvolutionCore::new(half * 2, half + 1)?;
        Ok(Self {
            core,
            half,
            size,
            pending: vec![T::zero(); half],
        })
    }

    pub fn from_shared(other: &Self) -> Result<Self> {
        let core = ConvolutionCore::from_shared(&other.core)?;
        Ok(Self {
            core,
            half: other.half,
            size: other.size,
            pending: vec![T::zero(); other.half],
        })
    }

    /// The user-facing block size (`= 2 * internal complex size`).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fft_size(&self) -> usize {
        self.core.fft_size
    }

    pub fn window_size(&self) -> usize {
        self.half + 1
    }

    pub fn filter_kernel_mut(&mut self) -> &mut FilterKernel<T> {
        self.core.filter_kernel_mut()
    }

    /// A fresh identity kernel tagged for this instance, to edit directly
    /// before calling [`ConvolutionReal::set_filter_kernel`].
    pub fn new_kernel(&self) -> FilterKernel<T> {
        self.core.new_kernel()
    }

    /// A fresh identity response tagged for this instance, to edit directly
    /// before calling [`ConvolutionReal::set_frequency_response`].
    pub fn new_frequency_response(&self) -> FrequencyResponse<T> {
        self.core.new_frequency_response()
    }

    /// Installs `kernel` as the active filter. Unlike the complex variant,
    /// the imaginary part of the impulse response is **not** forced to
    /// zero: callers building an impulse-response kernel by hand for this
    /// variant are responsible for supplying a real-only kernel, since the
    /// output packing below assumes no cross-coupling between the two
    /// packed real streams.
    pub fn set_filter_kernel(&mut self, kernel: FilterKernel<T>) -> Result<()> {
        self.core.set_filter_kernel(kernel)
    }

    pub fn set_frequency_response(&mut self, response: &FrequencyResponse<T>) -> Result<()> {
        self.core.set_frequency_response(response)
    }

    pub fn set_observer(&mut self, pre: Option<Observer<T>>, post: Option<Observer<T>>) {
        self.core.set_observer(pre, post);
    }

    pub fn clear_observer(&mut self) {
        self.core.clear_observer();
    }

    /// Convolves one block of `size` real samples, emitting `size` samples
    /// of the running linear convolution.
    pub fn convolve(&mut self, input: &[T], output: &mut [T]) -> Result<()> {
        let n = self.half;
        if input.len() < self.size || output.len() < self.size {
            return Err(ConvolutionError::BufferTooSmall);
        }

        self.core.buffer_a.re_mut()[..n].copy_from_slice(&input[..n]);
        self.core.buffer_a.im_mut()[..n].copy_from_slice(&input[n..2 * n]);

        self.core.convolve_freq_domain()?;

        for i in 0..n {
            output[i] = self.core.buffer_a.re()[i] + self.pending[i];
            output[i + n] = self.core.buffer_a.re()[i + n] + self.core.buffer_a.im()[i];
            self.pending[i] = self.core.buffer_a.im()[i + n];
        }

        self.core.buffer_a.re_mut()[n..].fill(T::zero());
        self.core.buffer_a.im_mut()[n..].fill(T::zero());

        Ok(())
    }

    /// Copies the pending overlap-add tail (length `size / 2`) into `out`
    /// and clears it.
    pub fn drain(&mut self, out: &mut [T]) -> Result<()> {
        let n = self.half;
        if out.len() < n {
            return Err(ConvolutionError::BufferTooSmall);
        }
        out[..n].copy_from_slice(&self.pending);
        self.pending.fill(T::zero());
        Ok(())
    }

    pub fn flush(&mut self) {
        self.pending.fill(T::zero());
    }
}

#[cfg(test)]
#[path = "real_conv_tests.rs"]
mod tests;
