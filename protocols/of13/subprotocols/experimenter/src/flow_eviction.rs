use binary_of13::{Cursor, Decodable, Encodable, Error, Fixed, Writer};
use const_of13::{GET_FLOW_EVICTION_SIZE, SET_FLOW_EVICTION_SIZE};
use std::fmt;

/// Turns eviction on or off for one flow table. Also the body of the get-eviction reply,
/// where it reports the table's current state.
///
/// Layout: `table_id:1, enabled:1, pad:6`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SetFlowEviction {
    pub table_id: u8,
    pub enabled: bool,
}

impl Fixed for SetFlowEviction {
    const SIZE: usize = SET_FLOW_EVICTION_SIZE;
}

impl Encodable for SetFlowEviction {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        w.write_u8(self.table_id)?;
        w.write_bool(self.enabled)?;
        w.pad(6)
    }
}

impl Decodable for SetFlowEviction {
    /// Any non-zero flag byte reads as enabled.
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(Self::SIZE)?;
        let table_id = c.read_u8()?;
        let enabled = c.read_bool()?;
        c.skip(6)?;
        Ok(Self { table_id, enabled })
    }
}

impl fmt::Display for SetFlowEviction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SetFlowEviction(table_id: {}, enabled: {})",
            self.table_id, self.enabled
        )
    }
}

/// Asks whether eviction is enabled on one flow table.
///
/// Layout: `table_id:1, pad:7`.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GetFlowEviction {
    pub table_id: u8,
}

impl Fixed for GetFlowEviction {
    const SIZE: usize = GET_FLOW_EVICTION_SIZE;
}

impl Encodable for GetFlowEviction {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), Error> {
        w.write_u8(self.table_id)?;
        w.pad(7)
    }
}

impl Decodable for GetFlowEviction {
    fn from_cursor(c: &mut Cursor<'_>) -> Result<Self, Error> {
        c.require(Self::SIZE)?;
        let table_id = c.read_u8()?;
        c.skip(7)?;
        Ok(Self { table_id })
    }
}

impl fmt::Display for GetFlowEviction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GetFlowEviction(table_id: {})", self.table_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binary_of13::{from_bytes, to_bytes};

    #[test]
    fn test_set_flow_eviction_bytes() {
        let m = SetFlowEviction {
            table_id: 3,
            enabled: true,
        };
        let bytes = to_bytes(&m).unwrap();
        assert_eq!(bytes, vec![0x03, 0x01, 0, 0, 0, 0, 0, 0]);
        assert_eq!(from_bytes::<SetFlowEviction>(&bytes), Ok(m));
    }

    #[test]
    fn test_nonzero_flag_is_enabled() {
        let decoded: SetFlowEviction = from_bytes(&[7, 0x80, 1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(
            decoded,
            SetFlowEviction {
                table_id: 7,
                enabled: true
            }
        );
    }

    #[test]
    fn test_get_flow_eviction_bytes() {
        let bytes = to_bytes(&GetFlowEviction { table_id: 0xff }).unwrap();
        assert_eq!(bytes, vec![0xff, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            from_bytes::<GetFlowEviction>(&bytes[..1]),
            Err(Error::TruncatedInput {
                expected: 8,
                actual: 1
            })
        );
    }

    #[quickcheck_macros::quickcheck]
    fn test_set_flow_eviction_roundtrip(table_id: u8, enabled: bool) -> bool {
        let m = SetFlowEviction { table_id, enabled };
        from_bytes::<SetFlowEviction>(&to_bytes(&m).unwrap()) == Ok(m)
    }

    #[quickcheck_macros::quickcheck]
    fn test_get_flow_eviction_roundtrip(table_id: u8) -> bool {
        let m = GetFlowEviction { table_id };
        from_bytes::<GetFlowEviction>(&to_bytes(&m).unwrap()) == Ok(m)
    }
}
