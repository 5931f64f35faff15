//! Cross-instance safety tag shared by [`crate::kernel::FilterKernel`] and
//! [`crate::response::FrequencyResponse`].

use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// An opaque generation counter identifying one `ConvolutionCore`.
///
/// Handed out once per `ConvolutionCore` construction and stored on every
/// `FilterKernel`/`FrequencyResponse` built for it. Operations that cross
/// the convolution/kernel boundary compare tags and return
/// [`crate::error::ConvolutionError::WrongInstance`] on mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Hands out a fresh, globally unique id.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceId;

    #[test]
    fn ids_are_distinct() {
        let a = InstanceId::next();
        let b = InstanceId::next();
        assert_ne!(a, b);
    }
}
