use binary_of13::{Cursor, Decodable, Encodable, Fixed, Writer};
use const_of13::{
    EVICTION_IMPORTANCE_INSTRUCTION_SIZE, OFPIT_EXPERIMENTER, ONFIST_ET_EVICTION_IMPORTANCE,
    ONF_EXPERIMENTER_ID,
};
use framing_of13::{Action, Error, InstrHeader, Instruction};
use std::fmt;

/// Flow instruction carrying an eviction importance: when a table is full, flows with a lower
/// importance are evicted first.
///
/// Layout: `instr_header:4, vendor:4, experimenter_type:4, importance:2, pad:4`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvictionImportanceInstruction {
    /// Instruction type of the generic header. The header length is always the instruction
    /// size, so it is not stored.
    pub instr_type: u16,
    pub vendor: u32,
    pub experimenter_type: u32,
    pub importance: u16,
}

impl EvictionImportanceInstruction {
    pub fn new(importance: u16) -> Self {
        Self {
            instr_type: OFPIT_EXPERIMENTER,
            vendor: ONF_EXPERIMENTER_ID,
            experimenter_type: ONFIST_ET_EVICTION_IMPORTANCE,
            importance,
        }
    }
}

impl Fixed for EvictionImportanceInstruction {
    const SIZE: usize = EVICTION_IMPORTANCE_INSTRUCTION_SIZE;
}

impl Encodable for EvictionImportanceInstruction {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), binary_of13::Error> {
        w.write(&Instruction::header(self)?)?;
        w.write_u32(self.vendor)?;
        w.write_u32(self.experimenter_type)?;
        w.write_u16(self.importance)?;
        w.pad(4)
    }
}

impl Decodable for EvictionImportanceInstruction {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, binary_of13::Error> {
        c.require(Self::SIZE)?;
        let header = InstrHeader::from_cursor(c)?;
        let vendor = c.read_u32()?;
        let experimenter_type = c.read_u32()?;
        let importance = c.read_u16()?;
        c.skip(4)?;
        Ok(Self {
            instr_type: header.instr_type,
            vendor,
            experimenter_type,
            importance,
        })
    }
}

impl Instruction for EvictionImportanceInstruction {
    fn header(&self) -> Result<InstrHeader, binary_of13::Error> {
        InstrHeader::from_len(self.instr_type, Self::SIZE)
    }

    fn add_action(&mut self, _action: Action, _prepend: bool) -> Result<(), Error> {
        Err(Error::OperationNotSupported(
            "EvictionImportanceInstruction carries no action list",
        ))
    }
}

impl fmt::Display for EvictionImportanceInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EvictionImportanceInstruction(type: {}, vendor: {:#010x}, importance: {})",
            self.experimenter_type, self.vendor, self.importance
        )
    }
}
