use crate::buffer::ComplexBuffer;
use crate::error::{ConvolutionError, Result};
use crate::kernel::FilterKernel;
use crate::response::FrequencyResponse;
use crate::scalar::Scalar;

use super::{ConvolutionCore, Observer};

/// Streaming convolution of `N` complex samples per block.
///
/// Often used to process two independent real channels at once, one in the
/// real part and one in the imaginary part — see
/// [`ConvolutionComplex::convolve`].
pub struct ConvolutionComplex<T: Scalar> {
    core: ConvolutionCore<T>,
    size: usize,
    pending: ComplexBuffer<T>,
}

impl<T: Scalar> ConvolutionComplex<T> {
    /// Builds an engine processing `size` complex samples per block
    /// (`fft_size = 2 * size`, `window_size = size + 1`).
    pub fn new(size: usize) -> Result<Self> {
        let core = ConvolutionCore::new(size * 2, size + 1)?;
        Ok(Self {
            core,
            size,
            pending: ComplexBuffer::new(size),
        })
    }

    /// Builds a new, independent-state engine sharing `other`'s FFT engine
    /// and default window (but with its own kernel, response, and tail).
    pub fn from_shared(other: &Self) -> Result<Self> {
        let core = ConvolutionCore::from_shared(&other.core)?;
        Ok(Self {
            core,
            size: other.size,
            pending: ComplexBuffer::new(other.size),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fft_size(&self) -> usize {
        self.core.fft_size
    }

    pub fn window_size(&self) -> usize {
        self.size + 1
    }

    pub fn filter_kernel_mut(&mut self) -> &mut FilterKernel<T> {
        self.core.filter_kernel_mut()
    }

    /// A fresh identity kernel tagged for this instance, to edit directly
    /// before calling [`ConvolutionComplex::set_filter_kernel`].
    pub fn new_kernel(&self) -> FilterKernel<T> {
        self.core.new_kernel()
    }

    /// A fresh identity response tagged for this instance, to edit directly
    /// before calling [`ConvolutionComplex::set_frequency_response`].
    pub fn new_frequency_response(&self) -> FrequencyResponse<T> {
        self.core.new_frequency_response()
    }

    /// Installs `kernel` as the active filter. The complex variant treats
    /// the two packed streams as sharing one kernel, so the imaginary part
    /// of the impulse response is zeroed first.
    pub fn set_filter_kernel(&mut self, mut kernel: FilterKernel<T>) -> Result<()> {
        kernel.set_all_imag(T::zero());
        self.core.set_filter_kernel(kernel)
    }

    /// Rebuilds the active kernel from a frequency response (inverse FFT,
    /// centring shift, window, zero-pad), then installs it.
    pub fn set_frequency_response(&mut self, response: &FrequencyResponse<T>) -> Result<()> {
        self.core.set_frequency_response(response)
    }

    pub fn set_observer(&mut self, pre: Option<Observer<T>>, post: Option<Observer<T>>) {
        self.core.set_observer(pre, post);
    }

    pub fn clear_observer(&mut self) {
        self.core.clear_observer();
    }

    /// Convolves one block of `size` complex samples, emitting `size`
    /// samples of the running linear convolution and carrying the overlap
    /// tail internally for the next call.
    pub fn convolve(&mut self, in_re: &[T], in_im: &[T], out_re: &mut [T], out_im: &mut [T]) -> Result<()> {
        let n = self.size;
        if in_re.len() < n || in_im.len() < n || out_re.len() < n || out_im.len() < n {
            return Err(ConvolutionError::BufferTooSmall);
        }

        self.core.buffer_a.re_mut()[..n].copy_from_slice(&in_re[..n]);
        self.core.buffer_a.im_mut()[..n].copy_from_slice(&in_im[..n]);

        self.core.convolve_freq_domain()?;

        for i in 0..n {
            out_re[i] = self.core.buffer_a.re()[i] + self.pending.re()[i];
            out_im[i] = self.core.buffer_a.im()[i] + self.pending.im()[i];
            self.pending.re_mut()[i] = self.core.buffer_a.re()[i + n];
            self.pending.im_mut()[i] = self.core.buffer_a.im()[i + n];
        }

        self.core.buffer_a.re_mut()[n..].fill(T::zero());
        self.core.buffer_a.im_mut()[n..].fill(T::zero());

        Ok(())
    }

    /// Copies the pending overlap-add tail into `out` and clears it.
    pub fn drain(&mut self, out_re: &mut [T], out_im: &mut [T]) -> Result<()> {
        let n = self.size;
        if out_re.len() < n || out_im.len() < n {
            return Err(ConvolutionError::BufferTooSmall);
        }
        out_re[..n].copy_from_slice(self.pending.re());
        out_im[..n].copy_from_slice(self.pending.im());
        self.pending.zero();
        Ok(())
    }

    /// Discards the pending overlap-add tail without emitting it.
    pub fn flush(&mut self) {
        self.pending.zero();
    }
}

#[cfg(test)]
#[path = "complex_conv_tests.rs"]
mod tests;
