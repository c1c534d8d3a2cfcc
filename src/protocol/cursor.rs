//! # Byte Cursor
//!
//! A sequential, bounds-checked reader over an immutable byte buffer.
//!
//! The cursor only moves forward. Lookahead is done with [`ByteCursor::peek_at`],
//! which never consumes. Iterating the cursor yields the remaining bytes once;
//! a fresh cursor is needed to scan the buffer again.

use crate::error::DecodeError;

/// Forward-only reader over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset into the buffer (`0..=len`)
    #[inline]
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Number of bytes not yet consumed
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Byte at `position + offset`, without consuming anything.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.position
            .checked_add(offset)
            .and_then(|index| self.data.get(index))
            .copied()
    }

    /// Next byte, or `None` once the buffer is exhausted.
    #[inline]
    pub fn read_one(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    /// Next byte where the command grammar requires one.
    ///
    /// # Errors
    ///
    /// [`DecodeError::EndOfStream`] if the buffer is exhausted.
    pub fn read_one_or_fail(&mut self) -> Result<u8, DecodeError> {
        self.read_one().ok_or(DecodeError::EndOfStream {
            position: self.position,
        })
    }

    /// Take up to `count` bytes and advance past them.
    ///
    /// The returned slice is shorter than `count` when fewer bytes remain.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidArgument`] when `count` is zero.
    pub fn take_n(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        if count == 0 {
            return Err(DecodeError::InvalidArgument {
                command: "take",
                value: count,
            });
        }

        let end = self.position.saturating_add(count).min(self.data.len());
        let slice = &self.data[self.position..end];
        self.position = end;
        Ok(slice)
    }

    /// Take exactly `N` bytes.
    ///
    /// # Errors
    ///
    /// [`DecodeError::EndOfStream`] if fewer than `N` bytes remain. The
    /// cursor is left at the end of the buffer in that case.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let slice = self.take_n(N)?;
        slice.try_into().map_err(|_| DecodeError::EndOfStream {
            position: self.position,
        })
    }
}

impl Iterator for ByteCursor<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.read_one()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_one_advances() {
        let mut cursor = ByteCursor::new(&[0x01, 0x02]);
        assert_eq!(cursor.read_one(), Some(0x01));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.read_one(), Some(0x02));
        assert_eq!(cursor.read_one(), None);
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_read_one_or_fail_at_end() {
        let mut cursor = ByteCursor::new(&[0xAA]);
        assert_eq!(cursor.read_one_or_fail(), Ok(0xAA));
        assert_eq!(
            cursor.read_one_or_fail(),
            Err(DecodeError::EndOfStream { position: 1 })
        );
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = ByteCursor::new(b"abc");
        assert_eq!(cursor.peek_at(0), Some(b'a'));
        assert_eq!(cursor.peek_at(2), Some(b'c'));
        assert_eq!(cursor.peek_at(3), None);
        assert_eq!(cursor.peek_at(usize::MAX), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_take_zero_is_invalid() {
        let mut cursor = ByteCursor::new(b"abc");
        assert!(matches!(
            cursor.take_n(0),
            Err(DecodeError::InvalidArgument { value: 0, .. })
        ));
    }

    #[test]
    fn test_take_truncates() {
        let mut cursor = ByteCursor::new(b"abc");
        assert_eq!(cursor.take_n(2), Ok(&b"ab"[..]));
        assert_eq!(cursor.take_n(5), Ok(&b"c"[..]));
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_methods_through_mut_reference() {
        fn consume(cursor: &mut ByteCursor<'_>) -> (usize, usize) {
            let taken = cursor.take_n(2).map(<[u8]>::len).unwrap_or(0);
            (taken, cursor.offset())
        }

        let mut cursor = ByteCursor::new(b"abc");
        assert_eq!(consume(&mut cursor), (2, 2));
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_take_array_short() {
        let mut cursor = ByteCursor::new(&[0x30, 0x05]);
        assert_eq!(
            cursor.take_array::<3>(),
            Err(DecodeError::EndOfStream { position: 2 })
        );
    }

    #[test]
    fn test_iteration_is_single_pass() {
        let mut cursor = ByteCursor::new(b"xy");
        let collected: Vec<u8> = cursor.by_ref().collect();
        assert_eq!(collected, b"xy");
        assert_eq!(cursor.next(), None);
    }
}
