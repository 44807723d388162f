//! Envelope factories for each outbound experimenter message.
//!
//! Every factory returns an envelope with transaction ID 0; the session layer assigns the real
//! one through [`VendorEnvelope::set_xid`] before sending.

use crate::ExperimenterMessage;
use experimenter_of13::{
    BundleAdd, BundleControl, BundleProperty, ControllerId, GetFlowEviction, SetFlowEviction,
    TlvOption, TlvTableMod, TlvTableReply, TlvTableRequest,
};
use framing_of13::{Error, VendorEnvelope};

pub type ExperimenterEnvelope = VendorEnvelope<ExperimenterMessage>;

fn wrap(message: ExperimenterMessage) -> Result<ExperimenterEnvelope, Error> {
    VendorEnvelope::from_message(message, 0)
}

pub fn new_set_controller_id(id: u16) -> Result<ExperimenterEnvelope, Error> {
    wrap(ExperimenterMessage::SetControllerId(ControllerId { id }))
}

pub fn new_tlv_table_mod(
    command: u16,
    options: Vec<TlvOption>,
) -> Result<ExperimenterEnvelope, Error> {
    wrap(ExperimenterMessage::TlvTableMod(TlvTableMod::new(
        command, options,
    )))
}

pub fn new_tlv_table_request() -> Result<ExperimenterEnvelope, Error> {
    wrap(ExperimenterMessage::TlvTableRequest(TlvTableRequest))
}

pub fn new_tlv_table_reply(
    max_space: u32,
    max_fields: u16,
    options: Vec<TlvOption>,
) -> Result<ExperimenterEnvelope, Error> {
    wrap(ExperimenterMessage::TlvTableReply(TlvTableReply {
        max_space,
        max_fields,
        options,
    }))
}

pub fn new_set_flow_eviction(table_id: u8, enabled: bool) -> Result<ExperimenterEnvelope, Error> {
    wrap(ExperimenterMessage::SetFlowEviction(SetFlowEviction {
        table_id,
        enabled,
    }))
}

pub fn new_get_flow_eviction_request(table_id: u8) -> Result<ExperimenterEnvelope, Error> {
    wrap(ExperimenterMessage::GetFlowEvictionRequest(GetFlowEviction {
        table_id,
    }))
}

/// Reply to a get-eviction request, reporting the table's current state.
pub fn new_get_flow_eviction_reply(
    table_id: u8,
    enabled: bool,
) -> Result<ExperimenterEnvelope, Error> {
    wrap(ExperimenterMessage::GetFlowEvictionReply(SetFlowEviction {
        table_id,
        enabled,
    }))
}

pub fn new_bundle_control(
    bundle_id: u32,
    ctrl_type: u16,
    flags: u16,
    properties: Vec<BundleProperty>,
) -> Result<ExperimenterEnvelope, Error> {
    wrap(ExperimenterMessage::BundleControl(BundleControl {
        bundle_id,
        ctrl_type,
        flags,
        properties,
    }))
}

/// `message` must be a complete encoded OpenFlow message, header included, whose header
/// length matches its size.
pub fn new_bundle_add(
    bundle_id: u32,
    flags: u16,
    message: Vec<u8>,
    properties: Vec<BundleProperty>,
) -> Result<ExperimenterEnvelope, Error> {
    let add = BundleAdd {
        bundle_id,
        flags,
        message,
        properties,
    };
    add.check_message()?;
    wrap(ExperimenterMessage::BundleAdd(add))
}
