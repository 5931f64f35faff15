//! Error type for every precondition violation in this crate.

use core::fmt;

/// Programming-error conditions rejected by this crate's public API.
///
/// These are the synchronous, fail-fast checks described in the design: a
/// caller that trips one of these has violated a documented precondition,
/// not hit a transient or data-dependent failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionError {
    /// An FFT (or convolution) size was not a power of two.
    NotPowerOfTwo,
    /// A block/transform size was odd where an even size is required
    /// (the real convolution variant packs two interleaved real streams).
    NotEven,
    /// A slice passed to an operation was shorter than the required length.
    BufferTooSmall,
    /// `transform` was called with an input and output slice for the same
    /// channel backed by the same memory.
    AliasedBuffers,
    /// A `FilterKernel` or `FrequencyResponse` was passed to a `Convolution`
    /// it was not constructed for.
    WrongInstance,
    /// `ComplexBuffer::from_parts` was given real/imag vectors of unequal
    /// length.
    LengthMismatch,
    /// A band fill or energy query had `start_freq`/`end_freq` of opposite
    /// sign.
    MixedSidebandSigns,
    /// A band fill or energy query had a frequency outside `[-0.5, 0.5]`.
    FrequencyOutOfRange,
    /// A band fill specified neither the real nor the imaginary channel.
    NoChannelSelected,
}

impl fmt::Display for ConvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvolutionError::NotPowerOfTwo => write!(f, "size must be a power of two"),
            ConvolutionError::NotEven => {
                write!(f, "size must be even (real variant packs two real streams)")
            }
            ConvolutionError::BufferTooSmall => {
                write!(f, "input or output buffer is shorter than the required size")
            }
            ConvolutionError::AliasedBuffers => write!(
                f,
                "input and output slices for the same channel must not alias"
            ),
            ConvolutionError::WrongInstance => write!(
                f,
                "kernel or frequency response belongs to a different Convolution instance"
            ),
            ConvolutionError::LengthMismatch => {
                write!(f, "real and imaginary arrays must have equal length")
            }
            ConvolutionError::MixedSidebandSigns => {
                write!(f, "start_freq and end_freq must have the same sign")
            }
            ConvolutionError::FrequencyOutOfRange => {
                write!(f, "frequency must lie in [-0.5, 0.5] cycles/sample")
            }
            ConvolutionError::NoChannelSelected => {
                write!(f, "band fill must target the real channel, imaginary channel, or both")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvolutionError {}

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = core::result::Result<T, ConvolutionError>;
