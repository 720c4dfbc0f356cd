//! Device and session.

use std::io::SeekFrom;
use std::sync::Arc;
use std::time::{Duration, Instant};

use fibdrv_bignum::render;
use fibdrv_core::{Calculator, FastDoubling};
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, trace};

use crate::error::DeviceError;

/// Path the device is conventionally exposed at.
pub const DEVICE_PATH: &str = "/dev/fibonacci";

/// Largest reachable file position (and so the largest index served).
pub const MAX_LENGTH: u64 = 1000;

/// State shared by every session of one device.
#[derive(Debug, Default)]
struct DeviceState {
    last_elapsed: Duration,
    opens: u64,
}

/// The emulated `/dev/fibonacci` device.
pub struct FibDevice {
    state: Mutex<DeviceState>,
    calculator: Arc<dyn Calculator>,
}

impl FibDevice {
    /// A device backed by fast doubling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Arc::new(FastDoubling::new()))
    }

    /// A device backed by the given calculator.
    #[must_use]
    pub fn with_calculator(calculator: Arc<dyn Calculator>) -> Self {
        Self {
            state: Mutex::new(DeviceState::default()),
            calculator,
        }
    }

    /// Open an exclusive session at position 0.
    ///
    /// Fails with [`DeviceError::Busy`] while another session is alive.
    pub fn open(&self) -> Result<FibSession<'_>, DeviceError> {
        let Some(mut state) = self.state.try_lock() else {
            debug!(path = DEVICE_PATH, "device is in use");
            return Err(DeviceError::Busy);
        };
        state.opens += 1;
        debug!(path = DEVICE_PATH, opens = state.opens, "session opened");
        Ok(FibSession {
            state,
            calculator: self.calculator.as_ref(),
            pos: 0,
        })
    }

    /// Name of the calculator serving reads.
    #[must_use]
    pub fn calculator_name(&self) -> &str {
        self.calculator.name()
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// An open handle on a [`FibDevice`]. Dropping it releases the device.
pub struct FibSession<'a> {
    state: MutexGuard<'a, DeviceState>,
    calculator: &'a dyn Calculator,
    pos: u64,
}

impl FibSession<'_> {
    /// Current file position.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Move the file position, clamped into `[0, MAX_LENGTH]`.
    ///
    /// `SeekFrom::End(d)` lands on `MAX_LENGTH - d`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn seek(&mut self, pos: SeekFrom) -> u64 {
        let max = MAX_LENGTH as i64;
        let target = match pos {
            SeekFrom::Start(offset) => i64::try_from(offset).unwrap_or(i64::MAX),
            SeekFrom::Current(delta) => (self.pos as i64).saturating_add(delta),
            SeekFrom::End(delta) => max.saturating_sub(delta),
        };
        self.pos = target.clamp(0, max) as u64;
        self.pos
    }

    /// Render F(position) into `buf` and return the byte count.
    ///
    /// The position does not advance.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let started = Instant::now();
        let value = self.calculator.calculate(self.pos)?;
        self.state.last_elapsed = started.elapsed();

        let text = render(&value);
        let bytes = text.as_bytes();
        if bytes.len() > buf.len() {
            return Err(DeviceError::BufferTooSmall {
                needed: bytes.len(),
                available: buf.len(),
            });
        }
        buf[..bytes.len()].copy_from_slice(bytes);
        trace!(
            pos = self.pos,
            len = bytes.len(),
            elapsed_ns = self.elapsed_ns(),
            "read"
        );
        Ok(bytes.len())
    }

    /// The timing side channel: nanoseconds the last read spent computing.
    ///
    /// The payload is ignored.
    pub fn write(&mut self, _buf: &[u8]) -> u64 {
        self.elapsed_ns()
    }

    fn elapsed_ns(&self) -> u64 {
        u64::try_from(self.state.last_elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Drop for FibSession<'_> {
    fn drop(&mut self) {
        debug!(path = DEVICE_PATH, "session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibdrv_core::FixedWidth;

    fn read_string(session: &mut FibSession<'_>) -> String {
        let mut buf = [0u8; 256];
        let len = session.read(&mut buf).unwrap();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn open_is_exclusive() {
        let device = FibDevice::new();
        let first = device.open().unwrap();
        assert!(matches!(device.open(), Err(DeviceError::Busy)));
        drop(first);
        assert!(device.open().is_ok());
    }

    #[test]
    fn fresh_session_starts_at_zero() {
        let device = FibDevice::new();
        {
            let mut session = device.open().unwrap();
            session.seek(SeekFrom::Start(50));
        }
        let session = device.open().unwrap();
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn seek_variants() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        assert_eq!(session.seek(SeekFrom::Start(10)), 10);
        assert_eq!(session.seek(SeekFrom::Current(5)), 15);
        assert_eq!(session.seek(SeekFrom::Current(-3)), 12);
        assert_eq!(session.seek(SeekFrom::End(1)), MAX_LENGTH - 1);
        assert_eq!(session.seek(SeekFrom::End(0)), MAX_LENGTH);
    }

    #[test]
    fn seek_clamps() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        assert_eq!(session.seek(SeekFrom::Start(5000)), MAX_LENGTH);
        assert_eq!(session.seek(SeekFrom::Start(u64::MAX)), MAX_LENGTH);
        assert_eq!(session.seek(SeekFrom::Current(i64::MAX)), MAX_LENGTH);
        assert_eq!(session.seek(SeekFrom::Current(-5000)), 0);
        assert_eq!(session.seek(SeekFrom::End(-7)), MAX_LENGTH);
        assert_eq!(session.seek(SeekFrom::End(i64::MAX)), 0);
    }

    #[test]
    fn read_renders_value_at_position() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        assert_eq!(read_string(&mut session), "0");
        session.seek(SeekFrom::Start(100));
        assert_eq!(read_string(&mut session), "354224848179261915075");
        assert_eq!(session.position(), 100);
    }

    #[test]
    fn read_at_max_length() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        session.seek(SeekFrom::End(0));
        assert_eq!(read_string(&mut session).len(), 209);
    }

    #[test]
    fn read_into_small_buffer() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        session.seek(SeekFrom::Start(100));
        let mut buf = [0u8; 8];
        let err = session.read(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            DeviceError::BufferTooSmall {
                needed: 21,
                available: 8
            }
        ));
    }

    #[test]
    fn read_propagates_calculator_errors() {
        let device = FibDevice::with_calculator(Arc::new(FixedWidth));
        let mut session = device.open().unwrap();
        session.seek(SeekFrom::Start(94));
        assert!(matches!(
            session.read(&mut [0u8; 64]),
            Err(DeviceError::Compute(_))
        ));
    }

    #[test]
    fn write_reports_last_read_time() {
        let device = FibDevice::new();
        let mut session = device.open().unwrap();
        assert_eq!(session.write(b"testing writing"), 0);
        session.seek(SeekFrom::End(0));
        read_string(&mut session);
        let first = session.write(b"");
        assert!(first > 0);
        assert_eq!(session.write(b"again"), first);
    }

    #[test]
    fn calculator_name() {
        assert_eq!(FibDevice::new().calculator_name(), "FastDoubling");
    }
}
