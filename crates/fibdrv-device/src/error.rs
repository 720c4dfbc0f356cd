//! Device error type.

use fibdrv_core::FibError;

/// Errors surfaced by the device emulation.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Another session holds the device.
    #[error("device or resource busy")]
    Busy,

    /// The rendered value does not fit the caller's buffer.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes offered.
        available: usize,
    },

    /// The evaluator failed.
    #[error(transparent)]
    Compute(#[from] FibError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(DeviceError::Busy.to_string(), "device or resource busy");
        let err = DeviceError::BufferTooSmall {
            needed: 21,
            available: 8,
        };
        assert_eq!(err.to_string(), "buffer too small: need 21 bytes, have 8");
    }

    #[test]
    fn compute_is_transparent() {
        let err = DeviceError::from(FibError::Config("x".into()));
        assert_eq!(err.to_string(), "configuration error: x");
    }
}
