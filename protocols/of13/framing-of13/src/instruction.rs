use crate::Error;
use binary_of13::{Cursor, Decodable, Encodable, Fixed, GetSize, Writer};
use const_of13::{
    ACTIONS_INSTRUCTION_HEADER_SIZE, ACTION_HEADER_SIZE, INSTRUCTION_HEADER_SIZE,
    OFPIT_APPLY_ACTIONS, OFPIT_WRITE_ACTIONS,
};
use core::convert::TryFrom;

/// Generic instruction header: `type:2, length:2`. `length` counts the whole instruction.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InstrHeader {
    pub instr_type: u16,
    pub length: u16,
}

impl InstrHeader {
    /// Header for an instruction of `len` bytes.
    pub fn from_len(instr_type: u16, len: usize) -> Result<Self, binary_of13::Error> {
        let length = u16::try_from(len).map_err(|_| binary_of13::Error::LengthOverflow(len))?;
        Ok(Self { instr_type, length })
    }
}

impl Fixed for InstrHeader {
    const SIZE: usize = INSTRUCTION_HEADER_SIZE;
}

impl Encodable for InstrHeader {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), binary_of13::Error> {
        w.write_u16(self.instr_type)?;
        w.write_u16(self.length)
    }
}

impl Decodable for InstrHeader {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, binary_of13::Error> {
        c.require(Self::SIZE)?;
        Ok(Self {
            instr_type: c.read_u16()?,
            length: c.read_u16()?,
        })
    }
}

/// An action kept as its type and its undecoded body: `type:2, length:2, body`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub action_type: u16,
    pub body: Vec<u8>,
}

impl GetSize for Action {
    fn get_size(&self) -> usize {
        ACTION_HEADER_SIZE + self.body.len()
    }
}

impl Encodable for Action {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), binary_of13::Error> {
        let len = self.get_size();
        w.write_u16(self.action_type)?;
        w.write_u16(u16::try_from(len).map_err(|_| binary_of13::Error::LengthOverflow(len))?)?;
        w.write_bytes(&self.body)
    }
}

impl Decodable for Action {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, binary_of13::Error> {
        c.require(ACTION_HEADER_SIZE)?;
        let action_type = c.read_u16()?;
        let len = c.read_u16()? as usize;
        if len < ACTION_HEADER_SIZE {
            return Err(binary_of13::Error::BadLength {
                declared: len,
                minimum: ACTION_HEADER_SIZE,
            });
        }
        let body = c.read_bytes(len - ACTION_HEADER_SIZE)?.to_vec();
        Ok(Self { action_type, body })
    }
}

/// An entry of a flow's instruction list.
///
/// Instructions that carry an action list accept new actions; every other instruction refuses
/// them with [`Error::OperationNotSupported`].
pub trait Instruction: Encodable {
    /// Header as it would be encoded now, with the length taken from the current contents.
    fn header(&self) -> Result<InstrHeader, binary_of13::Error>;

    /// Adds `action` at the front of the action list if `prepend`, at the back otherwise.
    fn add_action(&mut self, action: Action, prepend: bool) -> Result<(), Error>;
}

/// Write-actions or apply-actions instruction: `type:2, length:2, pad:4, actions`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionsInstruction {
    instr_type: u16,
    actions: Vec<Action>,
}

impl ActionsInstruction {
    pub fn new_write_actions() -> Self {
        Self {
            instr_type: OFPIT_WRITE_ACTIONS,
            actions: Vec::new(),
        }
    }

    pub fn new_apply_actions() -> Self {
        Self {
            instr_type: OFPIT_APPLY_ACTIONS,
            actions: Vec::new(),
        }
    }

    pub fn instr_type(&self) -> u16 {
        self.instr_type
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl GetSize for ActionsInstruction {
    fn get_size(&self) -> usize {
        ACTIONS_INSTRUCTION_HEADER_SIZE + binary_of13::seq::seq_size(&self.actions)
    }
}

impl Encodable for ActionsInstruction {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), binary_of13::Error> {
        w.write(&self.header()?)?;
        w.pad(4)?;
        binary_of13::seq::encode_seq(&self.actions, w)
    }
}

impl Decodable for ActionsInstruction {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, binary_of13::Error> {
        c.require(ACTIONS_INSTRUCTION_HEADER_SIZE)?;
        let header = InstrHeader::from_cursor(c)?;
        let len = header.length as usize;
        if len < ACTIONS_INSTRUCTION_HEADER_SIZE {
            return Err(binary_of13::Error::BadLength {
                declared: len,
                minimum: ACTIONS_INSTRUCTION_HEADER_SIZE,
            });
        }
        c.skip(4)?;
        let mut body = c.sub_cursor(len - ACTIONS_INSTRUCTION_HEADER_SIZE)?;
        let mut actions = Vec::new();
        while !body.is_empty() {
            actions.push(Action::from_cursor(&mut body)?);
        }
        Ok(Self {
            instr_type: header.instr_type,
            actions,
        })
    }
}

impl Instruction for ActionsInstruction {
    fn header(&self) -> Result<InstrHeader, binary_of13::Error> {
        InstrHeader::from_len(self.instr_type, self.get_size())
    }

    fn add_action(&mut self, action: Action, prepend: bool) -> Result<(), Error> {
        if prepend {
            self.actions.insert(0, action);
        } else {
            self.actions.push(action);
        }
        Ok(())
    }
}
