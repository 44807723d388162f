//! Converts raw experimenter payloads into Rust types and back.
//!
//! [`ExperimenterTypes`] lists every experimenter type this crate can decode. Turning a type
//! code into an `ExperimenterTypes` is the only lookup dispatch performs: an unknown code is
//! rejected with [`ParserError::UnknownExperimenterType`] before any decoder runs, and adding a
//! message means adding one variant and one match arm.
//!
//! [`parse_experimenter_frame`] is the entry point for a complete message as received from the
//! wire; [`dispatch`] decodes a payload that has already been taken out of its envelope.

mod error;
pub mod factories;

pub use error::ParserError;
pub use factories::ExperimenterEnvelope;

use binary_of13::{from_bytes, Encodable, GetSize, Writer};
use const_of13::{
    NXT_SET_CONTROLLER_ID, NXT_TLV_TABLE_MOD, NXT_TLV_TABLE_REPLY, NXT_TLV_TABLE_REQUEST,
    NX_EXPERIMENTER_ID, ONF_ET_BUNDLE_ADD_MESSAGE, ONF_ET_BUNDLE_CONTROL,
    ONF_ET_GET_EVICTION_REPLY, ONF_ET_GET_EVICTION_REQUEST, ONF_ET_SET_EVICTION,
    ONF_EXPERIMENTER_ID,
};
use core::convert::{TryFrom, TryInto};
use experimenter_of13::{
    BundleAdd, BundleControl, ControllerId, GetFlowEviction, SetFlowEviction, TlvTableMod,
    TlvTableReply, TlvTableRequest,
};
use framing_of13::{ExperimenterFrame, ExperimenterPayload, VendorEnvelope};
use std::fmt;
use tracing::{debug, trace};

/// Every experimenter message this crate knows how to decode.
///
/// The get-eviction reply reports a table's state and so shares the [`SetFlowEviction`] body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExperimenterMessage {
    SetControllerId(ControllerId),
    TlvTableMod(TlvTableMod),
    TlvTableRequest(TlvTableRequest),
    TlvTableReply(TlvTableReply),
    BundleControl(BundleControl),
    BundleAdd(BundleAdd),
    SetFlowEviction(SetFlowEviction),
    GetFlowEvictionRequest(GetFlowEviction),
    GetFlowEvictionReply(SetFlowEviction),
}

/// A list of 32-bit experimenter type variants this crate dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ExperimenterTypes {
    SetControllerId = NXT_SET_CONTROLLER_ID,
    TlvTableMod = NXT_TLV_TABLE_MOD,
    TlvTableRequest = NXT_TLV_TABLE_REQUEST,
    TlvTableReply = NXT_TLV_TABLE_REPLY,
    BundleControl = ONF_ET_BUNDLE_CONTROL,
    BundleAdd = ONF_ET_BUNDLE_ADD_MESSAGE,
    SetFlowEviction = ONF_ET_SET_EVICTION,
    GetFlowEvictionRequest = ONF_ET_GET_EVICTION_REQUEST,
    GetFlowEvictionReply = ONF_ET_GET_EVICTION_REPLY,
}

impl ExperimenterTypes {
    /// Experimenter ID of the namespace the type belongs to.
    pub fn vendor(&self) -> u32 {
        match self {
            Self::SetControllerId
            | Self::TlvTableMod
            | Self::TlvTableRequest
            | Self::TlvTableReply => NX_EXPERIMENTER_ID,
            Self::BundleControl
            | Self::BundleAdd
            | Self::SetFlowEviction
            | Self::GetFlowEvictionRequest
            | Self::GetFlowEvictionReply => ONF_EXPERIMENTER_ID,
        }
    }
}

impl TryFrom<u32> for ExperimenterTypes {
    type Error = ParserError;

    fn try_from(v: u32) -> Result<ExperimenterTypes, ParserError> {
        match v {
            NXT_SET_CONTROLLER_ID => Ok(ExperimenterTypes::SetControllerId),
            NXT_TLV_TABLE_MOD => Ok(ExperimenterTypes::TlvTableMod),
            NXT_TLV_TABLE_REQUEST => Ok(ExperimenterTypes::TlvTableRequest),
            NXT_TLV_TABLE_REPLY => Ok(ExperimenterTypes::TlvTableReply),
            ONF_ET_BUNDLE_CONTROL => Ok(ExperimenterTypes::BundleControl),
            ONF_ET_BUNDLE_ADD_MESSAGE => Ok(ExperimenterTypes::BundleAdd),
            ONF_ET_SET_EVICTION => Ok(ExperimenterTypes::SetFlowEviction),
            ONF_ET_GET_EVICTION_REQUEST => Ok(ExperimenterTypes::GetFlowEvictionRequest),
            ONF_ET_GET_EVICTION_REPLY => Ok(ExperimenterTypes::GetFlowEvictionReply),
            _ => Err(ParserError::UnknownExperimenterType(v)),
        }
    }
}

impl<'a> TryFrom<(u32, &'a [u8])> for ExperimenterMessage {
    type Error = ParserError;

    /// `v.1` must be exactly the message payload: list-carrying messages read until it ends.
    fn try_from(v: (u32, &'a [u8])) -> Result<Self, Self::Error> {
        let msg_type: ExperimenterTypes = v.0.try_into()?;
        match msg_type {
            ExperimenterTypes::SetControllerId => {
                let message: ControllerId = from_bytes(v.1)?;
                Ok(ExperimenterMessage::SetControllerId(message))
            }
            ExperimenterTypes::TlvTableMod => {
                let message: TlvTableMod = from_bytes(v.1)?;
                Ok(ExperimenterMessage::TlvTableMod(message))
            }
            ExperimenterTypes::TlvTableRequest => {
                let message: TlvTableRequest = from_bytes(v.1)?;
                Ok(ExperimenterMessage::TlvTableRequest(message))
            }
            ExperimenterTypes::TlvTableReply => {
                let message: TlvTableReply = from_bytes(v.1)?;
                Ok(ExperimenterMessage::TlvTableReply(message))
            }
            ExperimenterTypes::BundleControl => {
                let message: BundleControl = from_bytes(v.1)?;
                Ok(ExperimenterMessage::BundleControl(message))
            }
            ExperimenterTypes::BundleAdd => {
                let message: BundleAdd = from_bytes(v.1)?;
                Ok(ExperimenterMessage::BundleAdd(message))
            }
            ExperimenterTypes::SetFlowEviction => {
                let message: SetFlowEviction = from_bytes(v.1)?;
                Ok(ExperimenterMessage::SetFlowEviction(message))
            }
            ExperimenterTypes::GetFlowEvictionRequest => {
                let message: GetFlowEviction = from_bytes(v.1)?;
                Ok(ExperimenterMessage::GetFlowEvictionRequest(message))
            }
            ExperimenterTypes::GetFlowEvictionReply => {
                let message: SetFlowEviction = from_bytes(v.1)?;
                Ok(ExperimenterMessage::GetFlowEvictionReply(message))
            }
        }
    }
}

/// Decodes the payload of an experimenter message.
///
/// `vendor` comes from the enclosing envelope and is not checked against the type code;
/// `payload` must be exactly the bytes after the experimenter header, with nothing after them.
pub fn dispatch(
    vendor: u32,
    experimenter_type: u32,
    payload: &[u8],
) -> Result<ExperimenterMessage, ParserError> {
    trace!(
        "Dispatching experimenter message: vendor={:#010x} type={} len={}",
        vendor,
        experimenter_type,
        payload.len()
    );
    ExperimenterMessage::try_from((experimenter_type, payload))
}

/// Decodes a complete experimenter message starting at `data[0]`.
///
/// Only the first `header.len()` bytes belong to the message; anything after them is left to
/// the caller. The frame's vendor ID must be the namespace of its experimenter type, otherwise
/// the frame is rejected with [`ParserError::VendorMismatch`].
pub fn parse_experimenter_frame(data: &[u8]) -> Result<ExperimenterEnvelope, ParserError> {
    let frame = ExperimenterFrame::from_bytes(data)?;
    debug!(
        "Parsed experimenter frame: xid={} type={} len={}",
        frame.header().xid(),
        frame.experimenter_type(),
        frame.header().len()
    );
    let message = dispatch(frame.vendor(), frame.experimenter_type(), frame.payload())?;
    let expected = message.message_type().vendor();
    if frame.vendor() != expected {
        return Err(ParserError::VendorMismatch {
            expected,
            actual: frame.vendor(),
        });
    }
    Ok(VendorEnvelope::from_message(message, frame.header().xid())?)
}

impl ExperimenterMessage {
    pub fn message_type(&self) -> ExperimenterTypes {
        match self {
            Self::SetControllerId(_) => ExperimenterTypes::SetControllerId,
            Self::TlvTableMod(_) => ExperimenterTypes::TlvTableMod,
            Self::TlvTableRequest(_) => ExperimenterTypes::TlvTableRequest,
            Self::TlvTableReply(_) => ExperimenterTypes::TlvTableReply,
            Self::BundleControl(_) => ExperimenterTypes::BundleControl,
            Self::BundleAdd(_) => ExperimenterTypes::BundleAdd,
            Self::SetFlowEviction(_) => ExperimenterTypes::SetFlowEviction,
            Self::GetFlowEvictionRequest(_) => ExperimenterTypes::GetFlowEvictionRequest,
            Self::GetFlowEvictionReply(_) => ExperimenterTypes::GetFlowEvictionReply,
        }
    }
}

impl ExperimenterPayload for ExperimenterMessage {
    fn vendor(&self) -> u32 {
        self.message_type().vendor()
    }

    fn experimenter_type(&self) -> u32 {
        self.message_type() as u32
    }
}

impl GetSize for ExperimenterMessage {
    fn get_size(&self) -> usize {
        match self {
            ExperimenterMessage::SetControllerId(a) => a.get_size(),
            ExperimenterMessage::TlvTableMod(a) => a.get_size(),
            ExperimenterMessage::TlvTableRequest(a) => a.get_size(),
            ExperimenterMessage::TlvTableReply(a) => a.get_size(),
            ExperimenterMessage::BundleControl(a) => a.get_size(),
            ExperimenterMessage::BundleAdd(a) => a.get_size(),
            ExperimenterMessage::SetFlowEviction(a) => a.get_size(),
            ExperimenterMessage::GetFlowEvictionRequest(a) => a.get_size(),
            ExperimenterMessage::GetFlowEvictionReply(a) => a.get_size(),
        }
    }
}

impl Encodable for ExperimenterMessage {
    fn to_writer(&self, w: &mut Writer<'_>) -> Result<(), binary_of13::Error> {
        match self {
            ExperimenterMessage::SetControllerId(a) => a.to_writer(w),
            ExperimenterMessage::TlvTableMod(a) => a.to_writer(w),
            ExperimenterMessage::TlvTableRequest(a) => a.to_writer(w),
            ExperimenterMessage::TlvTableReply(a) => a.to_writer(w),
            ExperimenterMessage::BundleControl(a) => a.to_writer(w),
            ExperimenterMessage::BundleAdd(a) => a.to_writer(w),
            ExperimenterMessage::SetFlowEviction(a) => a.to_writer(w),
            ExperimenterMessage::GetFlowEvictionRequest(a) => a.to_writer(w),
            ExperimenterMessage::GetFlowEvictionReply(a) => a.to_writer(w),
        }
    }
}

impl fmt::Display for ExperimenterMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimenterMessage::SetControllerId(m) => write!(f, "SetControllerId(id: {})", m.id),
            ExperimenterMessage::TlvTableMod(m) => write!(f, "{m}"),
            ExperimenterMessage::TlvTableRequest(m) => write!(f, "{m}"),
            ExperimenterMessage::TlvTableReply(m) => write!(f, "{m}"),
            ExperimenterMessage::BundleControl(m) => write!(f, "{m}"),
            ExperimenterMessage::BundleAdd(m) => write!(f, "{m}"),
            ExperimenterMessage::SetFlowEviction(m) => write!(f, "{m}"),
            ExperimenterMessage::GetFlowEvictionRequest(m) => {
                write!(f, "GetFlowEvictionRequest(table_id: {})", m.table_id)
            }
            ExperimenterMessage::GetFlowEvictionReply(m) => write!(
                f,
                "GetFlowEvictionReply(table_id: {}, enabled: {})",
                m.table_id, m.enabled
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use const_of13::{NXT_CT_FLUSH_ZONE, NXT_RESUME, NXT_SET_FLOW_FORMAT};

    const ALL_TYPES: [u32; 9] = [
        NXT_SET_CONTROLLER_ID,
        NXT_TLV_TABLE_MOD,
        NXT_TLV_TABLE_REQUEST,
        NXT_TLV_TABLE_REPLY,
        ONF_ET_BUNDLE_CONTROL,
        ONF_ET_BUNDLE_ADD_MESSAGE,
        ONF_ET_SET_EVICTION,
        ONF_ET_GET_EVICTION_REQUEST,
        ONF_ET_GET_EVICTION_REPLY,
    ];

    // Smallest valid payload for each type: a zeroed fixed part, plus an 8-byte embedded
    // message for bundle-add.
    fn minimal_payload(t: u32) -> Vec<u8> {
        match t {
            NXT_TLV_TABLE_REQUEST => vec![],
            NXT_TLV_TABLE_REPLY => vec![0; 16],
            ONF_ET_BUNDLE_ADD_MESSAGE => vec![0, 0, 0, 1, 0, 0, 0, 0, 4, 20, 0, 8, 0, 0, 0, 1],
            _ => vec![0; 8],
        }
    }

    #[test]
    fn test_every_known_type_resolves_to_a_decoder() {
        for t in ALL_TYPES.iter() {
            let message = dispatch(0, *t, &minimal_payload(*t)).unwrap();
            assert_eq!(message.message_type() as u32, *t);
            assert_eq!(message.experimenter_type(), *t);
        }
    }

    #[test]
    fn test_vendor_follows_namespace() {
        let nx = dispatch(0, NXT_TLV_TABLE_REQUEST, &[]).unwrap();
        assert_eq!(nx.vendor(), NX_EXPERIMENTER_ID);
        let onf = dispatch(0, ONF_ET_GET_EVICTION_REPLY, &[0; 8]).unwrap();
        assert_eq!(onf.vendor(), ONF_EXPERIMENTER_ID);
    }

    #[test]
    fn test_reply_shares_set_eviction_body() {
        let payload = [5, 1, 0, 0, 0, 0, 0, 0];
        let message = dispatch(ONF_EXPERIMENTER_ID, ONF_ET_GET_EVICTION_REPLY, &payload).unwrap();
        assert_eq!(
            message,
            ExperimenterMessage::GetFlowEvictionReply(SetFlowEviction {
                table_id: 5,
                enabled: true
            })
        );
    }

    #[test]
    fn test_known_constants_without_decoder_are_rejected() {
        for t in [NXT_SET_FLOW_FORMAT, NXT_RESUME, NXT_CT_FLUSH_ZONE].iter() {
            assert_eq!(
                dispatch(NX_EXPERIMENTER_ID, *t, &[0; 8]),
                Err(ParserError::UnknownExperimenterType(*t))
            );
        }
    }

    #[test]
    fn test_short_payload_reports_truncation() {
        assert_eq!(
            dispatch(NX_EXPERIMENTER_ID, NXT_SET_CONTROLLER_ID, &[0; 4]),
            Err(ParserError::BinaryError(binary_of13::Error::TruncatedInput {
                expected: 8,
                actual: 4
            }))
        );
    }

    #[test]
    fn test_display_names_the_variant() {
        let controller = ExperimenterMessage::SetControllerId(ControllerId { id: 3 });
        assert_eq!(controller.to_string(), "SetControllerId(id: 3)");
        let request = ExperimenterMessage::GetFlowEvictionRequest(GetFlowEviction { table_id: 1 });
        assert_eq!(request.to_string(), "GetFlowEvictionRequest(table_id: 1)");
        let reply = ExperimenterMessage::GetFlowEvictionReply(SetFlowEviction {
            table_id: 1,
            enabled: false,
        });
        assert_eq!(
            reply.to_string(),
            "GetFlowEvictionReply(table_id: 1, enabled: false)"
        );
        let set = ExperimenterMessage::SetFlowEviction(SetFlowEviction {
            table_id: 1,
            enabled: true,
        });
        assert_eq!(set.to_string(), "SetFlowEviction(table_id: 1, enabled: true)");
    }

    #[quickcheck_macros::quickcheck]
    fn test_unknown_types_never_decode(t: u32, payload: Vec<u8>) -> bool {
        if ALL_TYPES.contains(&t) {
            return true;
        }
        dispatch(0, t, &payload) == Err(ParserError::UnknownExperimenterType(t))
    }
}
