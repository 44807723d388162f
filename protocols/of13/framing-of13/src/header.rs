use binary_of13::{Cursor, Decodable, Encodable, Error, Fixed, Writer};
use const_of13::{OFP_HEADER_SIZE, OFP_VERSION_1_3};
use core::convert::TryFrom;

/// The OpenFlow message header: `version:1, type:1, length:2, xid:4`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
    version: u8,
    msg_type: u8,
    msg_length: u16,
    xid: u32,
}

impl Header {
    pub const SIZE: usize = OFP_HEADER_SIZE;

    /// Builds an OpenFlow 1.3 header for a message of `len` bytes, header included.
    #[inline]
    pub fn from_len(len: usize, msg_type: u8, xid: u32) -> Result<Header, Error> {
        let msg_length = u16::try_from(len).map_err(|_| Error::LengthOverflow(len))?;
        Ok(Self {
            version: OFP_VERSION_1_3,
            msg_type,
            msg_length,
            xid,
        })
    }

    pub(crate) fn with_xid(self, xid: u32) -> Header {
        Self { xid, ..self }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn msg_type(&self) -> u8 {
        self.msg_type
    }

    /// Total message length announced by the header, header included.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.msg_length as usize
    }

    pub fn xid(&self) -> u32 {
        self.xid
    }
}

impl Fixed for Header {
    const SIZE: usize = OFP_HEADER_SIZE;
}

impl Encodable for Header {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        w.write_u8(self.version)?;
        w.write_u8(self.msg_type)?;
        w.write_u16(self.msg_length)?;
        w.write_u32(self.xid)
    }
}

impl Decodable for Header {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(OFP_HEADER_SIZE)?;
        Ok(Self {
            version: c.read_u8()?,
            msg_type: c.read_u8()?,
            msg_length: c.read_u16()?,
            xid: c.read_u32()?,
        })
    }
}
