#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod buffer;
pub mod convolution;
pub mod error;
pub mod fft;
pub mod instance;
pub mod kernel;
pub mod response;
pub mod scalar;
pub mod window;

pub use buffer::ComplexBuffer;
pub use convolution::{ConvolutionComplex, ConvolutionReal};
pub use error::{ConvolutionError, Result};
pub use fft::{FourierTransform, Scaling};
pub use instance::InstanceId;
pub use kernel::FilterKernel;
pub use response::FrequencyResponse;
pub use scalar::Scalar;
pub use window::{Blackman, Window, WindowShape};
