//! Streaming overlap-add convolution: shared frequency-domain core plus the
//! real and complex block-packing variants.

mod complex_conv;
mod real_conv;

pub use complex_conv::ConvolutionComplex;
pub use real_conv::ConvolutionReal;

use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::buffer::ComplexBuffer;
use crate::error::{ConvolutionError, Result};
use crate::fft::{FourierTransform, Scaling};
use crate::instance::InstanceId;
use crate::kernel::FilterKernel;
use crate::response::FrequencyResponse;
use crate::scalar::Scalar;
use crate::window::Window;

/// A pre- or post-convolve observation hook; receives mutable references to
/// the live time-domain and frequency-domain scratch buffers.
pub type Observer<T> = Box<dyn FnMut(&mut ComplexBuffer<T>, &mut ComplexBuffer<T>)>;

/// Frequency-domain engine shared by [`ConvolutionComplex`] and
/// [`ConvolutionReal`]; owns the FFT, default window, active kernel and
/// response, and the two scratch buffers the block-packing variants reuse
/// as time buffer / spectrum across the forward and inverse transform.
pub(crate) struct ConvolutionCore<T: Scalar> {
    pub(crate) fft: Rc<FourierTransform<T>>,
    pub(crate) default_window: Rc<Window<T>>,
    pub(crate) instance: InstanceId,
    pub(crate) fft_size: usize,
    kernel: FilterKernel<T>,
    frequency_response: FrequencyResponse<T>,
    pub(crate) buffer_a: ComplexBuffer<T>,
    pub(crate) buffer_b: ComplexBuffer<T>,
    shift_scratch: ComplexBuffer<T>,
    on_pre_convolve: Option<Observer<T>>,
    on_post_convolve: Option<Observer<T>>,
}

impl<T: Scalar> ConvolutionCore<T> {
    pub(crate) fn new(fft_size: usize, window_size: usize) -> Result<Self> {
        let fft = Rc::new(FourierTransform::new(fft_size, Scaling::Inverse)?);
        let default_window = Rc::new(Window::new(window_size));
        Self::build(fft, default_window, fft_size)
    }

    pub(crate) fn from_shared(other: &Self) -> Result<Self> {
        Self::build(other.fft.clone(), other.default_window.clone(), other.fft_size)
    }

    fn build(fft: Rc<FourierTransform<T>>, default_window: Rc<Window<T>>, fft_size: usize) -> Result<Self> {
        let instance = InstanceId::next();
        let kernel = FilterKernel::identity(instance, fft_size, default_window.clone());
        let frequency_response = FrequencyResponse::identity(instance, fft_size);
        Ok(Self {
            fft,
            default_window,
            instance,
            fft_size,
            kernel,
            frequency_response,
            buffer_a: ComplexBuffer::new(fft_size),
            buffer_b: ComplexBuffer::new(fft_size),
            shift_scratch: ComplexBuffer::new(fft_size),
            on_pre_convolve: None,
            on_post_convolve: None,
        })
    }

    /// Installs `kernel` as the active filter: computes its spectrum once
    /// and stores both the kernel and the derived response.
    ///
    /// `filter_kernel_mut` gives access to the stored kernel for inspection
    /// or manual impulse-response edits, but such edits take effect only on
    /// the next call to `set_filter_kernel` — this is the single sync point
    /// between the stored kernel and the spectrum actually used by
    /// `convolve_freq_domain`.
    pub(crate) fn set_filter_kernel(&mut self, kernel: FilterKernel<T>) -> Result<()> {
        if kernel.instance() != self.instance {
            return Err(ConvolutionError::WrongInstance);
        }
        self.frequency_response.set_filter_kernel(&kernel, &self.fft)?;
        self.kernel = kernel;
        Ok(())
    }

    pub(crate) fn filter_kernel_mut(&mut self) -> &mut FilterKernel<T> {
        &mut self.kernel
    }

    /// A fresh identity kernel tagged for this instance, for a caller to
    /// edit directly (impulse response) before calling `set_filter_kernel`.
    pub(crate) fn new_kernel(&self) -> FilterKernel<T> {
        FilterKernel::identity(self.instance, self.fft_size, self.default_window.clone())
    }

    /// A fresh identity response tagged for this instance, for a caller to
    /// edit directly (bin/band ops) before calling `set_frequency_response`.
    pub(crate) fn new_frequency_response(&self) -> FrequencyResponse<T> {
        FrequencyResponse::identity(self.instance, self.fft_size)
    }

    /// Recomputes the active kernel from `response` using this core's own
    /// FFT engine and shift scratch (no allocation).
    pub(crate) fn set_frequency_response(&mut self, response: &FrequencyResponse<T>) -> Result<()> {
        let instance = self.instance;
        let mut kernel = FilterKernel::identity(instance, self.fft_size, self.default_window.clone());
        kernel.set_frequency_response(response, &self.fft, &mut self.shift_scratch)?;
        self.set_filter_kernel(kernel)
    }

    pub(crate) fn set_observer(&mut self, pre: Option<Observer<T>>, post: Option<Observer<T>>) {
        self.on_pre_convolve = pre;
        self.on_post_convolve = post;
    }

    pub(crate) fn clear_observer(&mut self) {
        self.on_pre_convolve = None;
        self.on_post_convolve = None;
    }

    /// Forward FFT `buffer_a -> buffer_b`, optional pre-observer, elementwise
    /// multiply by the active response in place in `buffer_b`, inverse FFT
    /// `buffer_b -> buffer_a`, optional post-observer.
    pub(crate) fn convolve_freq_domain(&mut self) -> Result<()> {
        {
            let (a_re, a_im) = self.buffer_a.parts();
            let (b_re, b_im) = self.buffer_b.parts_mut();
            self.fft.transform(a_re, a_im, b_re, b_im, false)?;
        }

        if let Some(cb) = self.on_pre_convolve.as_mut() {
            cb(&mut self.buffer_a, &mut self.buffer_b);
        }

        self.buffer_b.cross_with(&self.frequency_response);

        {
            let (b_re, b_im) = self.buffer_b.parts();
            let (a_re, a_im) = self.buffer_a.parts_mut();
            self.fft.transform(b_re, b_im, a_re, a_im, true)?;
        }

        if let Some(cb) = self.on_post_convolve.as_mut() {
            cb(&mut self.buffer_a, &mut self.buffer_b);
        }

        Ok(())
    }
}
