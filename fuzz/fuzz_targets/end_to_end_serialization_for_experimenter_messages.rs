#![no_main]

mod common;
use arbitrary::Arbitrary;
use binary_of13::{Decodable, Encodable, GetSize};
use experimenter_of13::*;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    TlvOption(Vec<u8>),
    TlvTableMod(Vec<u8>),
    TlvTableRequest(Vec<u8>),
    TlvTableReply(Vec<u8>),
    ControllerId(Vec<u8>),
    SetFlowEviction(Vec<u8>),
    GetFlowEviction(Vec<u8>),
    BundleProperty(Vec<u8>),
    BundleControl(Vec<u8>),
    BundleAdd(Vec<u8>),
}

fuzz_target!(|input: FuzzInput| {
    match input {
        FuzzInput::TlvOption(data) => test_roundtrip!(TlvOption, data),
        FuzzInput::TlvTableMod(data) => test_roundtrip!(TlvTableMod, data),
        FuzzInput::TlvTableRequest(data) => test_roundtrip!(TlvTableRequest, data),
        FuzzInput::TlvTableReply(data) => test_roundtrip!(TlvTableReply, data),
        FuzzInput::ControllerId(data) => test_roundtrip!(ControllerId, data),
        FuzzInput::SetFlowEviction(data) => test_roundtrip!(SetFlowEviction, data),
        FuzzInput::GetFlowEviction(data) => test_roundtrip!(GetFlowEviction, data),
        FuzzInput::BundleProperty(data) => test_roundtrip!(BundleProperty, data),
        FuzzInput::BundleControl(data) => test_roundtrip!(BundleControl, data),
        FuzzInput::BundleAdd(data) => test_roundtrip!(BundleAdd, data),
    }
});
