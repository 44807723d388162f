use binary_of13::{Cursor, Decodable, Encodable, Error, Fixed, Writer};
use const_of13::CONTROLLER_ID_SIZE;
use std::fmt;

/// Tags the connection it is sent on with a controller identity, so the switch can tell
/// auxiliary connections of different controllers apart.
///
/// Layout: `pad:6, id:2`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ControllerId {
    pub id: u16,
}

impl Fixed for ControllerId {
    const SIZE: usize = CONTROLLER_ID_SIZE;
}

impl Encodable for ControllerId {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        w.pad(6)?;
        w.write_u16(self.id)
    }
}

impl Decodable for ControllerId {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(Self::SIZE)?;
        c.skip(6)?;
        Ok(Self { id: c.read_u16()? })
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControllerId(id: {})", self.id)
    }
}
