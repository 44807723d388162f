use binary_of13::to_bytes;
use experimenter_of13::{
    BundleAdd, BundleControl, ControllerId, GetFlowEviction, SetFlowEviction, TlvTableMod,
    TlvTableReply, TlvTableRequest,
};
use framing_of13::VendorEnvelope;
use parsers_of13::{parse_experimenter_frame, ExperimenterMessage};
use quickcheck::{Arbitrary, Gen};

#[derive(Clone, Debug)]
struct AnyMessage(ExperimenterMessage);

impl Arbitrary for AnyMessage {
    fn arbitrary(g: &mut Gen) -> Self {
        let message = match u8::arbitrary(g) % 9 {
            0 => ExperimenterMessage::SetControllerId(ControllerId::from_gen(g)),
            1 => ExperimenterMessage::TlvTableMod(TlvTableMod::from_gen(g)),
            2 => ExperimenterMessage::TlvTableRequest(TlvTableRequest),
            3 => ExperimenterMessage::TlvTableReply(TlvTableReply::from_gen(g)),
            4 => ExperimenterMessage::BundleControl(BundleControl::from_gen(g)),
            5 => ExperimenterMessage::BundleAdd(BundleAdd::from_gen(g)),
            6 => ExperimenterMessage::SetFlowEviction(SetFlowEviction::from_gen(g)),
            7 => ExperimenterMessage::GetFlowEvictionRequest(GetFlowEviction::from_gen(g)),
            _ => ExperimenterMessage::GetFlowEvictionReply(SetFlowEviction::from_gen(g)),
        };
        AnyMessage(message)
    }
}

#[quickcheck_macros::quickcheck]
fn every_message_survives_the_wire(message: AnyMessage, xid: u32) -> bool {
    let env = VendorEnvelope::from_message(message.0, xid).unwrap();
    let bytes = to_bytes(&env).unwrap();
    bytes.len() == env.header().len() && parse_experimenter_frame(&bytes) == Ok(env)
}

#[quickcheck_macros::quickcheck]
fn truncated_frames_are_rejected(message: AnyMessage, cut: usize) -> bool {
    let env = VendorEnvelope::from_message(message.0, 0).unwrap();
    let bytes = to_bytes(&env).unwrap();
    let cut = cut % bytes.len();
    parse_experimenter_frame(&bytes[..cut]).is_err()
}
