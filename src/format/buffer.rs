use core::fmt;

use writeable::Writeable;

/// The number of bytes a [`FormatBuffer`] holds, which covers the longest
/// output of every option combination.
pub const FORMAT_BUFFER_CAPACITY: usize = 50;

/// A fixed capacity ASCII buffer holding one formatted string.
///
/// Writes that do not fit are rejected whole, so the buffer can never be
/// overrun.
#[derive(Clone, Copy)]
pub struct FormatBuffer {
    bytes: [u8; FORMAT_BUFFER_CAPACITY],
    len: u8,
}

impl Default for FormatBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatBuffer {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; FORMAT_BUFFER_CAPACITY],
            len: 0,
        }
    }

    /// Writes `writeable` into a new buffer.
    ///
    /// Output that exceeds the capacity leaves the buffer empty.
    pub(crate) fn from_writeable<T: Writeable + ?Sized>(writeable: &T) -> Self {
        let mut buffer = Self::new();
        let result = writeable.write_to(&mut buffer);
        debug_assert!(
            result.is_ok(),
            "formatted output exceeded the buffer capacity"
        );
        if result.is_err() {
            buffer.clear();
        }
        buffer
    }

    /// Returns the number of bytes written.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns the written bytes, without any terminator.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only whole `str`s are ever appended.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl fmt::Write for FormatBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let start = self.len();
        let end = start + s.len();
        let Some(slot) = self.bytes.get_mut(start..end) else {
            return Err(fmt::Error);
        };
        slot.copy_from_slice(s.as_bytes());
        self.len = end as u8;
        Ok(())
    }
}

impl AsRef<str> for FormatBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for FormatBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::ops::Deref for FormatBuffer {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq for FormatBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for FormatBuffer {}

impl core::hash::Hash for FormatBuffer {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<str> for FormatBuffer {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for FormatBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for FormatBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for FormatBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FormatBuffer, FORMAT_BUFFER_CAPACITY};
    use core::fmt::Write;

    #[test]
    fn writes_within_capacity() {
        let mut buffer = FormatBuffer::new();
        buffer.write_str("2018-09-13").unwrap();
        buffer.write_char('T').unwrap();
        assert_eq!(buffer.as_str(), "2018-09-13T");
        assert_eq!(buffer.len(), 11);
        assert_eq!(buffer, "2018-09-13T");
        assert!(!buffer.is_empty());
    }

    #[test]
    fn rejects_overflowing_writes() {
        let mut buffer = FormatBuffer::new();
        let fill = "0123456789".repeat(FORMAT_BUFFER_CAPACITY / 10);
        buffer.write_str(&fill).unwrap();
        assert_eq!(buffer.len(), FORMAT_BUFFER_CAPACITY);
        assert!(buffer.write_char('x').is_err());
        assert_eq!(buffer.as_str(), fill);

        let mut buffer = FormatBuffer::new();
        buffer.write_str("abc").unwrap();
        assert!(buffer.write_str(&fill).is_err());
        // A rejected write leaves earlier output untouched.
        assert_eq!(buffer.as_str(), "abc");
    }
}
