//! Fixed-size radix-2 decimation-in-time FFT.
//!
//! Holds precomputed bit-reversal and twiddle tables so that a transform call
//! performs no allocation and no trigonometry.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{ConvolutionError, Result};
use crate::scalar::Scalar;

/// Scaling convention applied by [`FourierTransform::transform`].
///
/// Matches the four conventions in common DSP use: unscaled round-trip
/// (`None`), scale-on-forward (`Forward`), scale-on-inverse (`Inverse`, the
/// convention this crate's convolution engine configures its internal FFT
/// with), and symmetric `1/sqrt(N)` scaling on both directions (`Both`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    None,
    Forward,
    Inverse,
    Both,
}

/// An immutable, fixed-size complex FFT engine.
///
/// `N` must be a power of two. Construction precomputes a bit-reversal
/// permutation and half-length cosine/sine twiddle tables; `transform` then
/// performs no allocation.
pub struct FourierTransform<T: Scalar> {
    n: usize,
    log2n: u32,
    scaling: Scaling,
    bitrev: Vec<usize>,
    cos_table: Vec<T>,
    sin_table: Vec<T>,
}

impl<T: Scalar> FourierTransform<T> {
    /// Builds the engine for a fixed size `n` (must be a power of two).
    pub fn new(n: usize, scaling: Scaling) -> Result<Self> {
        if n == 0 || !n.is_power_of_two() {
            return Err(ConvolutionError::NotPowerOfTwo);
        }

        let log2n = n.trailing_zeros();
        let mut bitrev = vec![0usize; n];
        precompute_bitrev(&mut bitrev, n);

        let half = n / 2;
        let mut cos_table = vec![T::zero(); half];
        let mut sin_table = vec![T::zero(); half];
        for i in 0..half {
            let angle = -T::TWO_PI * T::from_usize(i) / T::from_usize(n);
            cos_table[i] = angle.cos();
            sin_table[i] = angle.sin();
        }

        Ok(Self {
            n,
            log2n,
            scaling,
            bitrev,
            cos_table,
            sin_table,
        })
    }

    /// Transform size.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Configured scaling convention.
    pub fn scaling(&self) -> Scaling {
        self.scaling
    }

    fn scale_factor(&self, inverse: bool) -> T {
        match (self.scaling, inverse) {
            (Scaling::None, _) => T::one(),
            (Scaling::Forward, false) => T::one() / T::from_usize(self.n),
            (Scaling::Forward, true) => T::one(),
            (Scaling::Inverse, false) => T::one(),
            (Scaling::Inverse, true) => T::one() / T::from_usize(self.n),
            (Scaling::Both, _) => T::one() / T::from_usize(self.n).sqrt(),
        }
    }

    /// Forward or inverse DFT of `(in_re, in_im)` into `(out_re, out_im)`.
    ///
    /// All four slices must have length at least `n`. `in_re`/`out_re` and
    /// `in_im`/`out_im` must not alias the same backing storage (partial
    /// aliasing across real/imaginary channels is not checked).
    pub fn transform(
        &self,
        in_re: &[T],
        in_im: &[T],
        out_re: &mut [T],
        out_im: &mut [T],
        inverse: bool,
    ) -> Result<()> {
        let n = self.n;
        if in_re.len() < n || in_im.len() < n || out_re.len() < n || out_im.len() < n {
            return Err(ConvolutionError::BufferTooSmall);
        }
        if core::ptr::eq(in_re.as_ptr(), out_re.as_ptr())
            || core::ptr::eq(in_im.as_ptr(), out_im.as_ptr())
        {
            return Err(ConvolutionError::AliasedBuffers);
        }

        let scale = self.scale_factor(inverse);

        // 1. Bit-reversed copy, fused with the transform's only scaling step.
        for i in 0..n {
            let r = self.bitrev[i];
            out_re[i] = in_re[r] * scale;
            out_im[i] = in_im[r] * scale;
        }

        // 2. Butterflies, stage by stage.
        let sign = if inverse { -T::one() } else { T::one() };
        for s in 0..self.log2n {
            let n1 = 1usize << s;
            let n2 = n1 << 1;
            let twiddle_step = 1usize << (self.log2n - s - 1);

            for j in 0..n1 {
                let t = j * twiddle_step;
                let cos = self.cos_table[t];
                let sin = self.sin_table[t] * sign;

                let mut k = j;
                while k < n {
                    let k2 = k + n1;
                    let br = out_re[k2];
                    let bi = out_im[k2];
                    let temp_re = cos * br - sin * bi;
                    let temp_im = cos * bi + sin * br;

                    out_re[k2] = out_re[k] - temp_re;
                    out_im[k2] = out_im[k] - temp_im;
                    out_re[k] = out_re[k] + temp_re;
                    out_im[k] = out_im[k] + temp_im;

                    k += n2;
                }
            }
        }

        Ok(())
    }
}

/// Fills `bitrev[0..n]` with the bit-reversed index of each position, for
/// `n` a power of two.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    bitrev[0] = 0;
    let mut j = 0usize;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        bitrev[i] = j;
    }
}

#[cfg(test)]
#[path = "fft_tests.rs"]
mod tests;
