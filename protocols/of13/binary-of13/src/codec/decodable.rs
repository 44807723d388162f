use crate::Error;
use core::convert::TryInto;

/// Reconstructs a record from a sequence of bytes.
pub trait Decodable: Sized {
    /// Reads the record from the cursor's current position.
    ///
    /// Implementations check that the cursor holds at least the record's minimum size before
    /// reading the first field.
    fn from_cursor(cursor: &mut Cursor<'_>) -> Result<Self, Error>;

    /// Decodes the record from the start of `data`. Bytes following the record are ignored.
    fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        Self::from_cursor(&mut Cursor::new(data))
    }
}

/// Bounds-checked big-endian reader over a borrowed byte slice.
///
/// Every read first checks that enough bytes remain; on failure nothing is consumed and the
/// error reports the absolute offset that would have been needed.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, offset: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails with [`Error::TruncatedInput`] unless at least `len` bytes remain.
    #[inline]
    pub fn require(&self, len: usize) -> Result<(), Error> {
        if self.remaining() < len {
            return Err(Error::TruncatedInput {
                expected: self.offset + len,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        self.require(len)?;
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    /// Consumes everything left in the cursor.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let bytes = &self.data[self.offset..];
        self.offset = self.data.len();
        bytes
    }

    /// Steps over `len` reserved bytes without looking at them.
    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.read_bytes(len).map(|_| ())
    }

    /// Splits off the next `len` bytes as an independent cursor.
    pub fn sub_cursor(&mut self, len: usize) -> Result<Cursor<'a>, Error> {
        self.read_bytes(len).map(Cursor::new)
    }

    /// Returns the next `N` bytes without consuming them.
    pub fn peek_array<const N: usize>(&self, at: usize) -> Result<[u8; N], Error> {
        self.require(at + N)?;
        let start = self.offset + at;
        // length checked above
        Ok(self.data[start..start + N].try_into().unwrap_or([0; N]))
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_bool(&mut self) -> Result<bool, Error> {
        Ok(self.read_u8()? != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_big_endian() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0x01];
        let mut c = Cursor::new(&data);
        assert_eq!(c.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(c.read_u16().unwrap(), 0x9abc);
        assert!(c.read_bool().unwrap());
        assert!(c.is_empty());
    }

    #[test]
    fn test_failed_read_consumes_nothing() {
        let data = [1, 2, 3];
        let mut c = Cursor::new(&data);
        c.skip(1).unwrap();
        assert_eq!(
            c.read_u32(),
            Err(Error::TruncatedInput {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(c.position(), 1);
        assert_eq!(c.read_u16().unwrap(), 0x0203);
    }

    #[test]
    fn test_peek_and_sub_cursor() {
        let data = [0, 0, 0, 9, 7, 7, 7, 7, 7];
        let mut c = Cursor::new(&data);
        assert_eq!(c.peek_array::<2>(2).unwrap(), [0, 9]);
        let mut sub = c.sub_cursor(4).unwrap();
        assert_eq!(sub.read_u32().unwrap(), 9);
        assert_eq!(c.remaining(), 5);
        assert_eq!(c.read_rest(), &[7, 7, 7, 7, 7]);
        assert!(c.peek_array::<1>(0).is_err());
    }
}
