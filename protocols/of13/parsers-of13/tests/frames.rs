use binary_of13::to_bytes;
use const_of13::{
    NXTTMC_ADD, NXT_RESUME, NX_EXPERIMENTER_ID, OFPBCT_OPEN_REQUEST, OFPBF_ATOMIC,
    OFPBPT_EXPERIMENTER, ONF_EXPERIMENTER_ID, ONF_ET_SET_EVICTION,
};
use experimenter_of13::{BundleProperty, SetFlowEviction, TlvOption};
use parsers_of13::{factories::*, parse_experimenter_frame, ExperimenterMessage, ParserError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn option(index: u16) -> TlvOption {
    TlvOption {
        opt_class: 0xffff,
        opt_type: 1,
        opt_length: 4,
        index,
    }
}

fn reparse(env: &ExperimenterEnvelope) -> ExperimenterEnvelope {
    let bytes = to_bytes(env).unwrap();
    assert_eq!(bytes.len(), env.header().len());
    parse_experimenter_frame(&bytes).unwrap()
}

#[test]
fn set_flow_eviction_frame_bytes() {
    init_tracing();
    let mut env = new_set_flow_eviction(3, true).unwrap();
    env.set_xid(1);
    let bytes = to_bytes(&env).unwrap();
    assert_eq!(
        bytes,
        vec![
            4, 4, 0, 24, 0, 0, 0, 1, // header
            0x4f, 0x4e, 0x46, 0, 0, 0, 0x07, 0x85, // ONF, 1925
            3, 1, 0, 0, 0, 0, 0, 0,
        ]
    );
    let parsed = parse_experimenter_frame(&bytes).unwrap();
    assert_eq!(parsed.vendor(), ONF_EXPERIMENTER_ID);
    assert_eq!(parsed.experimenter_type(), ONF_ET_SET_EVICTION);
    assert_eq!(
        parsed.into_payload(),
        ExperimenterMessage::SetFlowEviction(SetFlowEviction {
            table_id: 3,
            enabled: true
        })
    );
}

#[test]
fn tlv_table_mod_single_option_payload() {
    init_tracing();
    let env = new_tlv_table_mod(
        NXTTMC_ADD,
        vec![TlvOption {
            opt_class: 0x8000,
            opt_type: 0,
            opt_length: 4,
            index: 0,
        }],
    )
    .unwrap();
    let bytes = to_bytes(&env).unwrap();
    assert_eq!(env.header().len(), 32);
    assert_eq!(
        &bytes[16..],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0x80, 0, 0, 4, 0, 0, 0, 0][..]
    );
    assert_eq!(reparse(&env), env);
}

#[test]
fn every_factory_survives_the_wire() {
    init_tracing();
    let property = BundleProperty {
        prop_type: OFPBPT_EXPERIMENTER,
        body: vec![1, 2, 3],
    };
    let barrier = vec![4, 20, 0, 8, 0, 0, 0, 9];
    let envelopes = vec![
        new_set_controller_id(0x1234).unwrap(),
        new_tlv_table_mod(NXTTMC_ADD, vec![option(0), option(1), option(2)]).unwrap(),
        new_tlv_table_request().unwrap(),
        new_tlv_table_reply(256, 64, vec![option(7)]).unwrap(),
        new_tlv_table_reply(256, 64, vec![]).unwrap(),
        new_set_flow_eviction(1, false).unwrap(),
        new_get_flow_eviction_request(4).unwrap(),
        new_get_flow_eviction_reply(4, true).unwrap(),
        new_bundle_control(3, OFPBCT_OPEN_REQUEST, OFPBF_ATOMIC, vec![property.clone()]).unwrap(),
        new_bundle_add(3, OFPBF_ATOMIC, barrier.clone(), vec![]).unwrap(),
        new_bundle_add(3, OFPBF_ATOMIC, barrier, vec![property]).unwrap(),
    ];
    for env in envelopes.iter() {
        assert_eq!(&reparse(env), env, "{}", env.payload());
    }
}

#[test]
fn bytes_after_the_message_are_ignored() {
    init_tracing();
    let env = new_tlv_table_reply(100, 4, vec![option(0)]).unwrap();
    let mut bytes = to_bytes(&env).unwrap();
    // The start of a second message in the same read buffer.
    bytes.extend_from_slice(&[4, 4, 0, 16, 0xde, 0xad]);
    assert_eq!(parse_experimenter_frame(&bytes).unwrap(), env);
}

#[test]
fn header_length_ending_mid_option_is_truncated() {
    init_tracing();
    let env = new_tlv_table_mod(NXTTMC_ADD, vec![option(0), option(1)]).unwrap();
    let mut bytes = to_bytes(&env).unwrap();
    assert_eq!(bytes.len(), 40);
    // Claim 37 bytes: the second option is cut after 5 of its 8 bytes.
    bytes[3] = 37;
    assert_eq!(
        parse_experimenter_frame(&bytes),
        Err(ParserError::BinaryError(
            binary_of13::Error::TruncatedInput {
                expected: 24,
                actual: 21
            }
        ))
    );
}

#[test]
fn header_length_beyond_buffer_is_truncated() {
    init_tracing();
    let bytes = to_bytes(&new_set_controller_id(1).unwrap()).unwrap();
    assert_eq!(
        parse_experimenter_frame(&bytes[..20]),
        Err(ParserError::FramingError(framing_of13::Error::BinaryError(
            binary_of13::Error::TruncatedInput {
                expected: 24,
                actual: 20
            }
        )))
    );
}

#[test]
fn unknown_experimenter_type_is_rejected() {
    init_tracing();
    let bytes = [
        4, 4, 0, 16, 0, 0, 0, 1, 0, 0, 0x23, 0x20, 0, 0, 0, NXT_RESUME as u8,
    ];
    assert_eq!(
        parse_experimenter_frame(&bytes),
        Err(ParserError::UnknownExperimenterType(NXT_RESUME))
    );
}

#[test]
fn vendor_outside_the_type_namespace_is_rejected() {
    init_tracing();
    let mut bytes = to_bytes(&new_set_controller_id(5).unwrap()).unwrap();
    bytes[8..12].copy_from_slice(&0xdead_beef_u32.to_be_bytes());
    assert_eq!(
        parse_experimenter_frame(&bytes),
        Err(ParserError::VendorMismatch {
            expected: NX_EXPERIMENTER_ID,
            actual: 0xdead_beef
        })
    );

    // An ONF vendor on a Nicira type is just as wrong.
    bytes[8..12].copy_from_slice(&ONF_EXPERIMENTER_ID.to_be_bytes());
    assert_eq!(
        parse_experimenter_frame(&bytes),
        Err(ParserError::VendorMismatch {
            expected: NX_EXPERIMENTER_ID,
            actual: ONF_EXPERIMENTER_ID
        })
    );
}

#[test]
fn non_experimenter_message_is_rejected() {
    init_tracing();
    let echo = [4, 2, 0, 8, 0, 0, 0, 1];
    assert_eq!(
        parse_experimenter_frame(&echo),
        Err(ParserError::FramingError(
            framing_of13::Error::NotAnExperimenterMessage(2)
        ))
    );
}
