//! Owning pair of equal-length real/imaginary arrays with the scalar,
//! bulk-edit, shift, and frequency-domain editing operations used throughout
//! this crate.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{ConvolutionError, Result};
use crate::scalar::Scalar;

/// A fixed-size complex buffer stored as two parallel real-valued arrays.
///
/// The arrays never change length after construction, and are directly
/// readable/writable by callers (`re`/`im`/`re_mut`/`im_mut`) as well as
/// through the symmetry-preserving operations below.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBuffer<T: Scalar> {
    re: Vec<T>,
    im: Vec<T>,
}

impl<T: Scalar> ComplexBuffer<T> {
    /// A zeroed buffer of `size` complex samples.
    pub fn new(size: usize) -> Self {
        Self {
            re: vec![T::zero(); size],
            im: vec![T::zero(); size],
        }
    }

    /// Wraps caller-supplied arrays. Both must have the same length.
    pub fn from_parts(re: Vec<T>, im: Vec<T>) -> Result<Self> {
        if re.len() != im.len() {
            return Err(ConvolutionError::LengthMismatch);
        }
        Ok(Self { re, im })
    }

    /// Number of complex samples.
    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn re(&self) -> &[T] {
        &self.re
    }

    pub fn im(&self) -> &[T] {
        &self.im
    }

    pub fn re_mut(&mut self) -> &mut [T] {
        &mut self.re
    }

    pub fn im_mut(&mut self) -> &mut [T] {
        &mut self.im
    }

    /// Both arrays at once, for callers (e.g. FFT transforms) that need
    /// disjoint mutable access to each.
    pub fn parts(&self) -> (&[T], &[T]) {
        (&self.re, &self.im)
    }

    pub fn parts_mut(&mut self) -> (&mut [T], &mut [T]) {
        (&mut self.re, &mut self.im)
    }

    // ---- scalar ops --------------------------------------------------

    pub fn squared(&self, i: usize) -> T {
        self.re[i] * self.re[i] + self.im[i] * self.im[i]
    }

    pub fn magnitude(&self, i: usize) -> T {
        self.squared(i).sqrt()
    }

    pub fn phase(&self, i: usize) -> T {
        self.im[i].atan2(self.re[i])
    }

    // ---- bulk edits ----------------------------------------------------

    pub fn fill_real_range(&mut self, range: core::ops::Range<usize>, value: T) {
        self.re[range].fill(value);
    }

    pub fn fill_imag_range(&mut self, range: core::ops::Range<usize>, value: T) {
        self.im[range].fill(value);
    }

    pub fn set_all_real(&mut self, value: T) {
        self.re.fill(value);
    }

    pub fn set_all_imag(&mut self, value: T) {
        self.im.fill(value);
    }

    pub fn fill_both(&mut self, re: T, im: T) {
        self.re.fill(re);
        self.im.fill(im);
    }

    pub fn zero(&mut self) {
        self.fill_both(T::zero(), T::zero());
    }

    /// Writes `self = self * other`, elementwise.
    ///
    /// Use this (rather than [`ComplexBuffer::cross`]) when `self` is itself
    /// one of the two operands — each output sample depends only on the
    /// corresponding input sample, so this is safe to call in place.
    pub fn cross_with(&mut self, other: &ComplexBuffer<T>) {
        assert_eq!(self.len(), other.len(), "cross_with: length mismatch");
        for i in 0..self.len() {
            let (lr, li) = (self.re[i], self.im[i]);
            let (rr, ri) = (other.re[i], other.im[i]);
            self.re[i] = lr * rr - li * ri;
            self.im[i] = lr * ri + li * rr;
        }
    }

    /// Writes the elementwise complex product `left * right` into `self`.
    ///
    /// `left` and `right` must be distinct from `self` (the borrow checker
    /// enforces this at the call site); if `self` is itself one of the
    /// operands use [`ComplexBuffer::cross_with`] instead.
    pub fn cross(&mut self, left: &ComplexBuffer<T>, right: &ComplexBuffer<T>) {
        assert_eq!(self.len(), left.len(), "cross: length mismatch");
        assert_eq!(self.len(), right.len(), "cross: length mismatch");
        for i in 0..self.len() {
            let (lr, li) = (left.re[i], left.im[i]);
            let (rr, ri) = (right.re[i], right.im[i]);
            self.re[i] = lr * rr - li * ri;
            self.im[i] = lr * ri + li * rr;
        }
    }

    /// Exchanges the real and imaginary arrays.
    pub fn swap(&mut self) {
        core::mem::swap(&mut self.re, &mut self.im);
    }

    // ---- time-domain shift ---------------------------------------------

    /// Returns a circularly-shifted copy: `new[i] = self[(i+delta) mod N]`.
    ///
    /// Positive `delta` shifts left, negative shifts right. Tolerates
    /// `|delta| >= N`. Allocates two new `N`-sized vectors; see
    /// [`ComplexBuffer::shift_into`] for an allocation-free variant.
    pub fn shift(&self, delta: isize) -> ComplexBuffer<T> {
        let n = self.len();
        let mut out = ComplexBuffer::new(n);
        self.shift_into(delta, &mut out.re, &mut out.im);
        out
    }

    /// Allocation-free circular shift into caller-supplied scratch slices.
    pub fn shift_into(&self, delta: isize, out_re: &mut [T], out_im: &mut [T]) {
        let n = self.len();
        if n == 0 {
            return;
        }
        let n_isize = n as isize;
        let shift = delta.rem_euclid(n_isize) as usize;
        for i in 0..n {
            let src = (i + shift) % n;
            out_re[i] = self.re[src];
            out_im[i] = self.im[src];
        }
    }

    // ---- frequency-domain bin edits with Hermitian symmetry -------------

    /// `bin == 0` or `bin == N/2` (Nyquist) are self-mirroring and have no
    /// separate symmetric counterpart.
    fn mirror(&self, bin: usize) -> Option<usize> {
        let n = self.len();
        if bin == 0 || bin == n / 2 {
            None
        } else {
            Some(n - bin)
        }
    }

    /// Writes `v` to `re[bin]`, and to `re[N-bin]` if `bin` has a mirror
    /// (even symmetry of the real part of a Hermitian spectrum).
    pub fn set_bin_real(&mut self, bin: usize, v: T) {
        self.re[bin] = v;
        if let Some(m) = self.mirror(bin) {
            self.re[m] = v;
        }
    }

    /// Writes `v` to `im[bin]`, and `-v` to `im[N-bin]` if `bin` has a
    /// mirror (odd symmetry of the imaginary part of a Hermitian spectrum).
    pub fn set_bin_imag(&mut self, bin: usize, v: T) {
        self.im[bin] = v;
        if let Some(m) = self.mirror(bin) {
            self.im[m] = -v;
        }
    }

    pub fn set_bin(&mut self, bin: usize, re: T, im: T) {
        self.set_bin_real(bin, re);
        self.set_bin_imag(bin, im);
    }

    pub fn set_bin_polar(&mut self, bin: usize, magnitude: T, phase: T) {
        let (sin, cos) = (phase.sin(), phase.cos());
        self.set_bin(bin, magnitude * cos, magnitude * sin);
    }

    // ---- band fills ------------------------------------------------------

    /// Core band-fill routine shared by the real/imag/full/polar overloads.
    ///
    /// `re_val`/`im_val` being `None` means "leave that channel untouched";
    /// at least one must be `Some`.
    fn fill_raw(&mut self, start_freq: T, end_freq: T, re_val: Option<T>, im_val: Option<T>) -> Result<()> {
        if re_val.is_none() && im_val.is_none() {
            return Err(ConvolutionError::NoChannelSelected);
        }

        let neg_start = start_freq < T::zero();
        let neg_end = end_freq < T::zero();
        if neg_start != neg_end {
            return Err(ConvolutionError::MixedSidebandSigns);
        }

        let mut sf = start_freq;
        let mut ef = end_freq;
        let mut im_val = im_val;
        if neg_start {
            sf = -sf;
            ef = -ef;
            if let Some(v) = im_val.as_mut() {
                *v = -*v;
            }
        }
        if sf > ef {
            core::mem::swap(&mut sf, &mut ef);
        }
        if ef > T::from_f64(0.5) || sf < T::zero() {
            return Err(ConvolutionError::FrequencyOutOfRange);
        }

        let n = self.len();
        let start_frac = sf * T::from_usize(n);
        let end_frac = ef * T::from_usize(n);
        let start_bin = frac_to_bin(start_frac);
        let end_bin = frac_to_bin(end_frac);
        let start_contrib = contribution(start_frac);
        let end_contrib = contribution(end_frac);

        if end_bin > start_bin + 1 {
            for bin in (start_bin + 1)..end_bin {
                if let Some(re) = re_val {
                    self.set_bin_real(bin, re);
                }
                if let Some(im) = im_val {
                    self.set_bin_imag(bin, im);
                }
            }
        }

        let blend = |existing: T, value: T, contrib: T| existing * (T::one() - contrib) + value * contrib;

        let existing_re = self.re[start_bin];
        let existing_im = self.im[start_bin];
        if let Some(re) = re_val {
            self.set_bin_real(start_bin, blend(existing_re, re, start_contrib));
        }
        if let Some(im) = im_val {
            self.set_bin_imag(start_bin, blend(existing_im, im, start_contrib));
        }

        let existing_re = self.re[end_bin];
        let existing_im = self.im[end_bin];
        if let Some(re) = re_val {
            self.set_bin_real(end_bin, blend(existing_re, re, end_contrib));
        }
        if let Some(im) = im_val {
            self.set_bin_imag(end_bin, blend(existing_im, im, end_contrib));
        }

        Ok(())
    }

    /// Fills an inclusive band of bins with a complex value, blending
    /// sub-bin-accurate endpoints. `start_freq`/`end_freq` are fractions of
    /// the sample rate in `[-0.5, 0.5]` and must share a sign.
    pub fn fill(&mut self, start_freq: T, end_freq: T, re: T, im: T) -> Result<()> {
        self.fill_raw(start_freq, end_freq, Some(re), Some(im))
    }

    pub fn fill_real(&mut self, start_freq: T, end_freq: T, re: T) -> Result<()> {
        self.fill_raw(start_freq, end_freq, Some(re), None)
    }

    pub fn fill_imag(&mut self, start_freq: T, end_freq: T, im: T) -> Result<()> {
        self.fill_raw(start_freq, end_freq, None, Some(im))
    }

    pub fn fill_polar(&mut self, start_freq: T, end_freq: T, magnitude: T, phase: T) -> Result<()> {
        let (sin, cos) = (phase.sin(), phase.cos());
        self.fill(start_freq, end_freq, magnitude * cos, magnitude * sin)
    }

    /// Physical-unit overload of [`ComplexBuffer::fill`]: frequencies in Hz,
    /// divided by `sample_rate` to obtain cycles/sample.
    pub fn fill_hz(&mut self, start_hz: T, end_hz: T, sample_rate: T, re: T, im: T) -> Result<()> {
        self.fill(start_hz / sample_rate, end_hz / sample_rate, re, im)
    }

    pub fn fill_real_hz(&mut self, start_hz: T, end_hz: T, sample_rate: T, re: T) -> Result<()> {
        self.fill_real(start_hz / sample_rate, end_hz / sample_rate, re)
    }

    pub fn fill_imag_hz(&mut self, start_hz: T, end_hz: T, sample_rate: T, im: T) -> Result<()> {
        self.fill_imag(start_hz / sample_rate, end_hz / sample_rate, im)
    }

    pub fn fill_polar_hz(
        &mut self,
        start_hz: T,
        end_hz: T,
        sample_rate: T,
        magnitude: T,
        phase: T,
    ) -> Result<()> {
        self.fill_polar(start_hz / sample_rate, end_hz / sample_rate, magnitude, phase)
    }

    // ---- energy ------------------------------------------------------

    /// Energy of a single bin: both sidebands except at DC/Nyquist, which
    /// are self-mirroring.
    pub fn energy(&self, bin: usize) -> T {
        let n = self.len();
        if bin == 0 || bin == n / 2 {
            self.squared(bin)
        } else {
            self.squared(bin) + self.squared(n - bin)
        }
    }

    /// Integrates `energy` over a band, using the same fractional-endpoint
    /// weighting as [`ComplexBuffer::fill`].
    pub fn energy_band(&self, start_freq: T, end_freq: T) -> Result<T> {
        let neg_start = start_freq < T::zero();
        let neg_end = end_freq < T::zero();
        if neg_start != neg_end {
            return Err(ConvolutionError::MixedSidebandSigns);
        }
        let mut sf = if neg_start { -start_freq } else { start_freq };
        let mut ef = if neg_end { -end_freq } else { end_freq };
        if sf > ef {
            core::mem::swap(&mut sf, &mut ef);
        }
        if ef > T::from_f64(0.5) || sf < T::zero() {
            return Err(ConvolutionError::FrequencyOutOfRange);
        }

        let n = self.len();
        let start_frac = sf * T::from_usize(n);
        let end_frac = ef * T::from_usize(n);
        let start_bin = frac_to_bin(start_frac);
        let end_bin = frac_to_bin(end_frac);
        let start_contrib = contribution(start_frac);
        let end_contrib = contribution(end_frac);

        if start_bin == end_bin {
            let contrib = if start_contrib > end_contrib {
                start_contrib
            } else {
                end_contrib
            };
            return Ok(self.energy(start_bin) * contrib);
        }

        let mut total = self.energy(start_bin) * start_contrib + self.energy(end_bin) * end_contrib;
        for bin in (start_bin + 1)..end_bin {
            total = total + self.energy(bin);
        }
        Ok(total)
    }

    // ---- even/odd decomposition ------------------------------------------

    /// Splits the spectrum of a complex time-domain signal `x = r + j*s`
    /// into the spectra `out_real = FFT(r)` and `out_imag = FFT(s)`.
    pub fn decompose_even_odd(&self, out_real: &mut ComplexBuffer<T>, out_imag: &mut ComplexBuffer<T>) {
        let n = self.len();
        let half = T::from_f64(0.5);

        // DC and Nyquist carry no cross-term with the other channel.
        out_real.re[0] = self.re[0];
        out_real.im[0] = T::zero();
        out_imag.re[0] = T::zero();
        out_imag.im[0] = self.im[0];
        if n % 2 == 0 {
            let nyq = n / 2;
            out_real.re[nyq] = self.re[nyq];
            out_real.im[nyq] = T::zero();
            out_imag.re[nyq] = T::zero();
            out_imag.im[nyq] = self.im[nyq];
        }

        for i in 1..(n / 2) {
            let k = n - i;
            let re_even = (self.re[i] + self.re[k]) * half;
            let re_odd = (self.re[i] - self.re[k]) * half;
            let im_even = (self.im[i] + self.im[k]) * half;
            let im_odd = (self.im[i] - self.im[k]) * half;

            out_real.re[i] = re_even;
            out_real.re[k] = re_even;
            out_real.im[i] = im_odd;
            out_real.im[k] = -im_odd;

            out_imag.re[i] = re_odd;
            out_imag.re[k] = -re_odd;
            out_imag.im[i] = im_even;
            out_imag.im[k] = im_even;
        }
    }
}

fn frac_to_bin<T: Scalar>(frac: T) -> usize {
    frac.round().to_f64() as usize
}

fn contribution<T: Scalar>(frac: T) -> T {
    T::one() - (frac - frac.round()).abs()
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
