//! Error handling and exit codes.

use fibdrv_core::{exit_codes, FibError};
use fibdrv_device::DeviceError;

/// Exit code for a calculation error.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Bignum(_) | FibError::Overflow { .. } => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for a device error.
pub fn handle_device_error(err: &DeviceError) -> i32 {
    match err {
        DeviceError::Busy => exit_codes::ERROR_BUSY,
        DeviceError::BufferTooSmall { .. } => exit_codes::ERROR_GENERIC,
        DeviceError::Compute(inner) => handle_error(inner),
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(device) = err.downcast_ref::<DeviceError>() {
        handle_device_error(device)
    } else if let Some(fib) = err.downcast_ref::<FibError>() {
        handle_error(fib)
    } else {
        exit_codes::ERROR_GENERIC
    }
}
