use crate::{codec::GetSize, Error};

/// Serializes a record into bytes.
pub trait Encodable: GetSize {
    /// Writes every field, in wire order, through `writer`.
    fn to_writer(&self, writer: &mut Writer<'_>) -> Result<(), Error>;

    /// Encodes the record at the start of `dst` and returns the number of bytes written.
    ///
    /// Fails with [`Error::WriteError`] before writing anything if `dst` is smaller than
    /// [`GetSize::get_size`].
    fn to_bytes(&self, dst: &mut [u8]) -> Result<usize, Error> {
        let size = self.get_size();
        if dst.len() < size {
            return Err(Error::WriteError(size, dst.len()));
        }
        let mut writer = Writer::new(&mut dst[..size]);
        self.to_writer(&mut writer)?;
        Ok(writer.written())
    }
}

/// Big-endian writer over a borrowed mutable byte slice.
#[derive(Debug)]
pub struct Writer<'a> {
    dst: &'a mut [u8],
    offset: usize,
}

impl<'a> Writer<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Writer { dst, offset: 0 }
    }

    /// Bytes written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.offset
    }

    fn reserve(&mut self, len: usize) -> Result<&mut [u8], Error> {
        let end = self.offset + len;
        if end > self.dst.len() {
            return Err(Error::WriteError(end, self.dst.len()));
        }
        let slot = &mut self.dst[self.offset..end];
        self.offset = end;
        Ok(slot)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Fills `len` reserved bytes with zeros, whatever the destination held before.
    pub fn pad(&mut self, len: usize) -> Result<(), Error> {
        for b in self.reserve(len)?.iter_mut() {
            *b = 0;
        }
        Ok(())
    }

    pub fn write_u8(&mut self, v: u8) -> Result<(), Error> {
        self.write_bytes(&[v])
    }

    pub fn write_u16(&mut self, v: u16) -> Result<(), Error> {
        self.write_bytes(&v.to_be_bytes())
    }

    pub fn write_u32(&mut self, v: u32) -> Result<(), Error> {
        self.write_bytes(&v.to_be_bytes())
    }

    pub fn write_bool(&mut self, v: bool) -> Result<(), Error> {
        self.write_u8(v as u8)
    }

    pub fn write<T: Encodable + ?Sized>(&mut self, v: &T) -> Result<(), Error> {
        v.to_writer(self)
    }
}
