use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::error::CoreError;

/// Longest string `read_string` will scan before giving up on a terminator.
pub const MAX_STRING_LEN: usize = 256;

const DATETIME_LEN: usize = 14;
const TICKS_PER_SECOND: f64 = 3000.0;

/// Fixed-width little-endian scalar that can live at an absolute offset.
pub trait LeScalar: Copy + PartialEq + fmt::Debug {
    const WIDTH: usize;

    fn decode(bytes: &[u8]) -> Self;
    fn encode(self, out: &mut [u8]);
}

macro_rules! impl_le_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LeScalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn decode(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(buf)
                }

                fn encode(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_le_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaveTimestamp {
    pub year: u16,
    pub month: u16,
    pub day_of_week: u16,
    pub day: u16,
    pub hours: u16,
    pub minutes: u16,
    pub seconds: u16,
}

impl fmt::Display for SaveTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hours, self.minutes, self.seconds
        )
    }
}

/// The whole savegame held in memory. Its length is fixed at construction;
/// every accessor is bounds-checked and no write can grow or shrink it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteStore {
    bytes: Vec<u8>,
}

impl ByteStore {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn span(&self, offset: usize, width: usize) -> Result<Range<usize>, CoreError> {
        match offset.checked_add(width) {
            Some(end) if end <= self.bytes.len() => Ok(offset..end),
            _ => Err(CoreError::OutOfBounds {
                offset,
                width,
                len: self.bytes.len(),
            }),
        }
    }

    pub fn read<T: LeScalar>(&self, offset: usize) -> Result<T, CoreError> {
        let range = self.span(offset, T::WIDTH)?;
        Ok(T::decode(&self.bytes[range]))
    }

    pub fn write<T: LeScalar>(&mut self, offset: usize, value: T) -> Result<(), CoreError> {
        let range = self.span(offset, T::WIDTH)?;
        value.encode(&mut self.bytes[range]);
        Ok(())
    }

    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<&[u8], CoreError> {
        let range = self.span(offset, len)?;
        Ok(&self.bytes[range])
    }

    pub fn write_bytes(&mut self, offset: usize, data: &[u8]) -> Result<(), CoreError> {
        let range = self.span(offset, data.len())?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }

    /// Read a NUL-terminated UTF-8 string starting at `offset`.
    pub fn read_string(&self, offset: usize) -> Result<String, CoreError> {
        if offset >= self.bytes.len() {
            return Err(CoreError::OutOfBounds {
                offset,
                width: 1,
                len: self.bytes.len(),
            });
        }

        let window = &self.bytes[offset..self.bytes.len().min(offset + MAX_STRING_LEN)];
        let malformed = CoreError::MalformedString {
            offset,
            limit: MAX_STRING_LEN,
        };
        let Some(end) = window.iter().position(|&b| b == 0) else {
            return Err(malformed);
        };
        String::from_utf8(window[..end].to_vec()).map_err(|_| malformed)
    }

    /// Seven packed u16 fields: year, month, day-of-week, day, hour, minute, second.
    pub fn read_datetime(&self, offset: usize) -> Result<SaveTimestamp, CoreError> {
        self.span(offset, DATETIME_LEN)?;
        Ok(SaveTimestamp {
            year: self.read(offset)?,
            month: self.read(offset + 2)?,
            day_of_week: self.read(offset + 4)?,
            day: self.read(offset + 6)?,
            hours: self.read(offset + 8)?,
            minutes: self.read(offset + 10)?,
            seconds: self.read(offset + 12)?,
        })
    }

    /// Durations are stored as a u64 count of thirds of a millisecond.
    pub fn read_scaled_duration(&self, offset: usize) -> Result<f64, CoreError> {
        let ticks: u64 = self.read(offset)?;
        Ok(ticks as f64 / TICKS_PER_SECOND)
    }
}
