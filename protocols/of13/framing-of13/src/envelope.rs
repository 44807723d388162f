use crate::{header::Header, Error};
use binary_of13::{Cursor, Decodable, Encodable, GetSize, Writer};
use const_of13::{EXPERIMENTER_HEADER_SIZE, OFPT_EXPERIMENTER};

/// A payload that travels inside an experimenter message.
///
/// The vendor ID and experimenter type are a property of the payload, never chosen separately
/// by whoever builds the envelope.
pub trait ExperimenterPayload: Encodable {
    fn vendor(&self) -> u32;
    fn experimenter_type(&self) -> u32;
}

/// An outbound experimenter message: `header:8, vendor:4, experimenter_type:4, payload`.
///
/// The only constructor is [`VendorEnvelope::from_message`], which takes the vendor ID and
/// experimenter type from the payload and the length from the payload size, so an envelope
/// whose metadata disagrees with its payload cannot be built.
#[cfg_attr(feature = "with_serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VendorEnvelope<T> {
    header: Header,
    vendor: u32,
    experimenter_type: u32,
    payload: T,
}

impl<T: ExperimenterPayload> VendorEnvelope<T> {
    pub fn from_message(payload: T, xid: u32) -> Result<Self, Error> {
        let len = EXPERIMENTER_HEADER_SIZE + payload.get_size();
        let header = Header::from_len(len, OFPT_EXPERIMENTER, xid)?;
        Ok(Self {
            header,
            vendor: payload.vendor(),
            experimenter_type: payload.experimenter_type(),
            payload,
        })
    }
}

impl<T> VendorEnvelope<T> {
    /// Sets the transaction ID, the one header field the session layer owns.
    pub fn set_xid(&mut self, xid: u32) {
        self.header = self.header.with_xid(xid);
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn vendor(&self) -> u32 {
        self.vendor
    }

    pub fn experimenter_type(&self) -> u32 {
        self.experimenter_type
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: ExperimenterPayload> GetSize for VendorEnvelope<T> {
    fn get_size(&self) -> usize {
        EXPERIMENTER_HEADER_SIZE + self.payload.get_size()
    }
}

impl<T: ExperimenterPayload> Encodable for VendorEnvelope<T> {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), binary_of13::Error> {
        w.write(&self.header)?;
        w.write_u32(self.vendor)?;
        w.write_u32(self.experimenter_type)?;
        w.write(&self.payload)
    }
}

/// An inbound experimenter message whose payload has not been decoded yet.
///
/// `payload` is exactly `header.len() - 16` bytes long: bytes that follow the message in the
/// input buffer are never part of it, so count-free lists inside the payload end where the
/// message ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimenterFrame<'a> {
    header: Header,
    vendor: u32,
    experimenter_type: u32,
    payload: &'a [u8],
}

impl<'a> ExperimenterFrame<'a> {
    pub fn from_bytes(data: &'a [u8]) -> Result<Self, Error> {
        let mut cursor = Cursor::new(data);
        let header = Header::from_cursor(&mut cursor)?;
        if header.msg_type() != OFPT_EXPERIMENTER {
            return Err(Error::NotAnExperimenterMessage(header.msg_type()));
        }
        if header.len() < EXPERIMENTER_HEADER_SIZE {
            return Err(binary_of13::Error::BadLength {
                declared: header.len(),
                minimum: EXPERIMENTER_HEADER_SIZE,
            }
            .into());
        }
        cursor.require(header.len() - Header::SIZE)?;
        let vendor = cursor.read_u32()?;
        let experimenter_type = cursor.read_u32()?;
        let payload = cursor.read_bytes(header.len() - EXPERIMENTER_HEADER_SIZE)?;
        Ok(Self {
            header,
            vendor,
            experimenter_type,
            payload,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn vendor(&self) -> u32 {
        self.vendor
    }

    pub fn experimenter_type(&self) -> u32 {
        self.experimenter_type
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binary_of13::{to_bytes, Fixed};
    use const_of13::{NX_EXPERIMENTER_ID, NXT_SET_CONTROLLER_ID};

    #[derive(Debug, Clone, PartialEq)]
    struct Id(u16);

    impl Fixed for Id {
        const SIZE: usize = 2;
    }

    impl Encodable for Id {
        fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), binary_of13::Error> {
            w.write_u16(self.0)
        }
    }

    impl ExperimenterPayload for Id {
        fn vendor(&self) -> u32 {
            NX_EXPERIMENTER_ID
        }
        fn experimenter_type(&self) -> u32 {
            NXT_SET_CONTROLLER_ID
        }
    }

    #[test]
    fn test_envelope_takes_metadata_from_payload() {
        let env = VendorEnvelope::from_message(Id(7), 42).unwrap();
        assert_eq!(env.vendor(), NX_EXPERIMENTER_ID);
        assert_eq!(env.experimenter_type(), NXT_SET_CONTROLLER_ID);
        assert_eq!(env.header().len(), 18);
        assert_eq!(env.header().xid(), 42);
        let mut env = env;
        env.set_xid(43);
        assert_eq!(env.header().xid(), 43);
        env.set_xid(42);
        assert_eq!(
            to_bytes(&env).unwrap(),
            vec![4, 4, 0, 18, 0, 0, 0, 42, 0, 0, 0x23, 0x20, 0, 0, 0, 20, 0, 7]
        );
    }

    #[test]
    fn test_frame_payload_is_bounded_by_header_length() {
        let mut bytes = to_bytes(&VendorEnvelope::from_message(Id(7), 1).unwrap()).unwrap();
        bytes.extend_from_slice(&[0xaa, 0xbb, 0xcc]);
        let frame = ExperimenterFrame::from_bytes(&bytes).unwrap();
        assert_eq!(frame.payload(), &[0, 7]);
        assert_eq!(frame.vendor(), NX_EXPERIMENTER_ID);
        assert_eq!(frame.experimenter_type(), NXT_SET_CONTROLLER_ID);
    }

    #[test]
    fn test_frame_shorter_than_announced() {
        let bytes = to_bytes(&VendorEnvelope::from_message(Id(7), 1).unwrap()).unwrap();
        assert_eq!(
            ExperimenterFrame::from_bytes(&bytes[..17]),
            Err(Error::BinaryError(binary_of13::Error::TruncatedInput {
                expected: 18,
                actual: 17
            }))
        );
    }

    #[test]
    fn test_frame_rejects_bad_length_and_type() {
        let bytes = [4, 4, 0, 12, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            ExperimenterFrame::from_bytes(&bytes),
            Err(Error::BinaryError(binary_of13::Error::BadLength {
                declared: 12,
                minimum: 16
            }))
        );
        let bytes = [4, 14, 0, 8, 0, 0, 0, 0];
        assert_eq!(
            ExperimenterFrame::from_bytes(&bytes),
            Err(Error::NotAnExperimenterMessage(14))
        );
    }
}
