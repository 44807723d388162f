use binary_of13::{
    seq::{decode_seq, encode_seq, seq_size},
    Cursor, Decodable, Encodable, Error, Fixed, GetSize, Writer,
};
use const_of13::{TLV_OPTION_SIZE, TLV_TABLE_MOD_HEADER_SIZE, TLV_TABLE_REPLY_HEADER_SIZE};
use std::fmt;

/// One TLV field allocation: maps the TLV `(opt_class, opt_type, opt_length)` to the
/// metadata field slot `index`.
///
/// Layout: `opt_class:2, opt_type:1, opt_length:1, index:2, pad:2`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TlvOption {
    pub opt_class: u16,
    pub opt_type: u8,
    /// Length of the TLV value in bytes.
    pub opt_length: u8,
    /// Field slot the TLV is mapped to.
    pub index: u16,
}

impl Fixed for TlvOption {
    const SIZE: usize = TLV_OPTION_SIZE;
}

impl Encodable for TlvOption {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        w.write_u16(self.opt_class)?;
        w.write_u8(self.opt_type)?;
        w.write_u8(self.opt_length)?;
        w.write_u16(self.index)?;
        w.pad(2)
    }
}

impl Decodable for TlvOption {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(Self::SIZE)?;
        let opt_class = c.read_u16()?;
        let opt_type = c.read_u8()?;
        let opt_length = c.read_u8()?;
        let index = c.read_u16()?;
        c.skip(2)?;
        Ok(Self {
            opt_class,
            opt_type,
            opt_length,
            index,
        })
    }
}

impl fmt::Display for TlvOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TlvOption(class: {:#06x}, type: {}, length: {}, index: {})",
            self.opt_class, self.opt_type, self.opt_length, self.index
        )
    }
}

fn fmt_options(f: &mut fmt::Formatter<'_>, options: &[TlvOption]) -> fmt::Result {
    write!(f, "[")?;
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", option)?;
    }
    write!(f, "]")
}

/// Adds, deletes or clears TLV field allocations on the switch.
///
/// Layout: `command:2, pad:6, options`. The options run to the end of the payload with no
/// count, and are applied in order.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvTableMod {
    /// One of `NXTTMC_ADD`, `NXTTMC_DELETE`, `NXTTMC_CLEAR`.
    pub command: u16,
    pub options: Vec<TlvOption>,
}

impl TlvTableMod {
    pub fn new(command: u16, options: Vec<TlvOption>) -> Self {
        Self { command, options }
    }
}

impl GetSize for TlvTableMod {
    fn get_size(&self) -> usize {
        TLV_TABLE_MOD_HEADER_SIZE + seq_size(&self.options)
    }
}

impl Encodable for TlvTableMod {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        w.write_u16(self.command)?;
        w.pad(6)?;
        encode_seq(&self.options, w)
    }
}

impl Decodable for TlvTableMod {
    /// The cursor must end exactly where the message payload ends.
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(TLV_TABLE_MOD_HEADER_SIZE)?;
        let command = c.read_u16()?;
        c.skip(6)?;
        let options = decode_seq(c)?;
        Ok(Self { command, options })
    }
}

impl fmt::Display for TlvTableMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TlvTableMod(command: {}, options: ", self.command)?;
        fmt_options(f, &self.options)?;
        write!(f, ")")
    }
}

/// Asks the switch for its TLV allocation table. Has no body.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TlvTableRequest;

impl Fixed for TlvTableRequest {
    const SIZE: usize = 0;
}

impl Encodable for TlvTableRequest {
    fn to_writer(&self, _: &mut Writer<'_>) -> Result<(), Error> {
        Ok(())
    }
}

impl Decodable for TlvTableRequest {
    fn from_cursor(_: &mut Cursor<'_>) -> Result<Self, Error> {
        Ok(TlvTableRequest)
    }
}

impl fmt::Display for TlvTableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TlvTableRequest")
    }
}

/// The switch's TLV allocation capacity and current allocations.
///
/// Layout: `max_space:4, max_fields:2, pad:10, options`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvTableReply {
    /// Bytes of TLV value space the switch can allocate.
    pub max_space: u32,
    /// Number of field slots available.
    pub max_fields: u16,
    pub options: Vec<TlvOption>,
}

impl GetSize for TlvTableReply {
    fn get_size(&self) -> usize {
        TLV_TABLE_REPLY_HEADER_SIZE + seq_size(&self.options)
    }
}

impl Encodable for TlvTableReply {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        w.write_u32(self.max_space)?;
        w.write_u16(self.max_fields)?;
        w.pad(10)?;
        encode_seq(&self.options, w)
    }
}

impl Decodable for TlvTableReply {
    /// The cursor must end exactly where the message payload ends.
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(TLV_TABLE_REPLY_HEADER_SIZE)?;
        let max_space = c.read_u32()?;
        let max_fields = c.read_u16()?;
        c.skip(10)?;
        let options = decode_seq(c)?;
        Ok(Self {
            max_space,
            max_fields,
            options,
        })
    }
}

impl fmt::Display for TlvTableReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TlvTableReply(max_space: {}, max_fields: {}, options: ",
            self.max_space, self.max_fields
        )?;
        fmt_options(f, &self.options)?;
        write!(f, ")")
    }
}
