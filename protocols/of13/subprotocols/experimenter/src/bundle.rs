use binary_of13::{
    seq::{encode_seq, seq_size},
    Cursor, Decodable, Encodable, Error, GetSize, Writer,
};
use const_of13::{
    BUNDLE_ADD_HEADER_SIZE, BUNDLE_CONTROL_HEADER_SIZE, BUNDLE_PROPERTY_ALIGNMENT,
    BUNDLE_PROPERTY_HEADER_SIZE, OFP_HEADER_LEN_OFFSET, OFP_HEADER_SIZE,
};
use core::convert::TryFrom;
use std::fmt;

fn padding_for(len: usize) -> usize {
    (BUNDLE_PROPERTY_ALIGNMENT - len % BUNDLE_PROPERTY_ALIGNMENT) % BUNDLE_PROPERTY_ALIGNMENT
}

/// A bundle property: `type:2, length:2, body`, zero-padded to a multiple of 8 bytes.
/// `length` counts the header and the body but not the padding.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleProperty {
    pub prop_type: u16,
    pub body: Vec<u8>,
}

impl BundleProperty {
    fn unpadded_len(&self) -> usize {
        BUNDLE_PROPERTY_HEADER_SIZE + self.body.len()
    }
}

impl GetSize for BundleProperty {
    fn get_size(&self) -> usize {
        let len = self.unpadded_len();
        len + padding_for(len)
    }
}

impl Encodable for BundleProperty {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        let len = self.unpadded_len();
        w.write_u16(self.prop_type)?;
        w.write_u16(u16::try_from(len).map_err(|_| Error::LengthOverflow(len))?)?;
        w.write_bytes(&self.body)?;
        w.pad(padding_for(len))
    }
}

impl Decodable for BundleProperty {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(BUNDLE_PROPERTY_HEADER_SIZE)?;
        let prop_type = c.read_u16()?;
        let len = c.read_u16()? as usize;
        if len < BUNDLE_PROPERTY_HEADER_SIZE {
            return Err(Error::BadLength {
                declared: len,
                minimum: BUNDLE_PROPERTY_HEADER_SIZE,
            });
        }
        let body = c.read_bytes(len - BUNDLE_PROPERTY_HEADER_SIZE)?.to_vec();
        c.skip(padding_for(len))?;
        Ok(Self { prop_type, body })
    }
}

// Properties have variable size, so they are read one header at a time until the payload ends.
fn decode_properties(c: &mut Cursor<'_>) -> Result<Vec<BundleProperty>, Error> {
    let mut properties = Vec::new();
    while !c.is_empty() {
        properties.push(BundleProperty::from_cursor(c)?);
    }
    Ok(properties)
}

/// Opens, closes, commits or discards a bundle, or replies to one of those requests.
///
/// Layout: `bundle_id:4, ctrl_type:2, flags:2, properties`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleControl {
    pub bundle_id: u32,
    /// One of the `OFPBCT_*` constants.
    pub ctrl_type: u16,
    /// `OFPBF_ATOMIC` and/or `OFPBF_ORDERED`.
    pub flags: u16,
    pub properties: Vec<BundleProperty>,
}

impl GetSize for BundleControl {
    fn get_size(&self) -> usize {
        BUNDLE_CONTROL_HEADER_SIZE + seq_size(&self.properties)
    }
}

impl Encodable for BundleControl {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        w.write_u32(self.bundle_id)?;
        w.write_u16(self.ctrl_type)?;
        w.write_u16(self.flags)?;
        encode_seq(&self.properties, w)
    }
}

impl Decodable for BundleControl {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(BUNDLE_CONTROL_HEADER_SIZE)?;
        let bundle_id = c.read_u32()?;
        let ctrl_type = c.read_u16()?;
        let flags = c.read_u16()?;
        let properties = decode_properties(c)?;
        Ok(Self {
            bundle_id,
            ctrl_type,
            flags,
            properties,
        })
    }
}

impl fmt::Display for BundleControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BundleControl(bundle_id: {}, ctrl_type: {}, flags: {:#06x}, properties: {})",
            self.bundle_id,
            self.ctrl_type,
            self.flags,
            self.properties.len()
        )
    }
}

/// Adds one OpenFlow message to an open bundle.
///
/// Layout: `bundle_id:4, pad:2, flags:2, message, properties`. `message` is a complete
/// OpenFlow message kept as raw bytes; its extent comes from the length in its own header.
/// When properties follow, the message is zero-padded to a multiple of 8 bytes.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleAdd {
    pub bundle_id: u32,
    pub flags: u16,
    pub message: Vec<u8>,
    pub properties: Vec<BundleProperty>,
}

impl BundleAdd {
    /// Checks that `message` is a complete OpenFlow message: at least a header long, and
    /// exactly as long as the length in that header.
    pub fn check_message(&self) -> Result<(), Error> {
        let len = self.message.len();
        if len < OFP_HEADER_SIZE {
            return Err(Error::BadLength {
                declared: len,
                minimum: OFP_HEADER_SIZE,
            });
        }
        let at = OFP_HEADER_LEN_OFFSET;
        let declared = u16::from_be_bytes([self.message[at], self.message[at + 1]]) as usize;
        if declared != len {
            return Err(Error::BadLength {
                declared,
                minimum: len,
            });
        }
        Ok(())
    }

    fn message_padding(&self) -> usize {
        if self.properties.is_empty() {
            0
        } else {
            padding_for(self.message.len())
        }
    }
}

impl GetSize for BundleAdd {
    fn get_size(&self) -> usize {
        BUNDLE_ADD_HEADER_SIZE
            + self.message.len()
            + self.message_padding()
            + seq_size(&self.properties)
    }
}

impl Encodable for BundleAdd {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        self.check_message()?;
        w.write_u32(self.bundle_id)?;
        w.pad(2)?;
        w.write_u16(self.flags)?;
        w.write_bytes(&self.message)?;
        w.pad(self.message_padding())?;
        encode_seq(&self.properties, w)
    }
}

impl Decodable for BundleAdd {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(BUNDLE_ADD_HEADER_SIZE + OFP_HEADER_SIZE)?;
        let bundle_id = c.read_u32()?;
        c.skip(2)?;
        let flags = c.read_u16()?;

        let len_bytes = c.peek_array::<2>(OFP_HEADER_LEN_OFFSET)?;
        let message_len = u16::from_be_bytes(len_bytes) as usize;
        if message_len < OFP_HEADER_SIZE {
            return Err(Error::BadLength {
                declared: message_len,
                minimum: OFP_HEADER_SIZE,
            });
        }
        let message = c.read_bytes(message_len)?.to_vec();

        let properties = if c.is_empty() {
            Vec::new()
        } else {
            c.skip(padding_for(message_len))?;
            decode_properties(c)?
        };
        Ok(Self {
            bundle_id,
            flags,
            message,
            properties,
        })
    }
}

impl fmt::Display for BundleAdd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BundleAdd(bundle_id: {}, flags: {:#06x}, message_len: {}, properties: {})",
            self.bundle_id,
            self.flags,
            self.message.len(),
            self.properties.len()
        )
    }
}
