//! # OpenFlow 1.3 Experimenter Messages Crate.
//!
//! Payload types of the Nicira and ONF experimenter extensions that a controller uses to
//! configure behaviour the base protocol does not define:
//!
//! - TLV field allocation: [`TlvTableMod`], [`TlvTableRequest`], [`TlvTableReply`], built from
//!   [`TlvOption`] descriptors.
//! - Auxiliary connection identity: [`ControllerId`].
//! - Per-table eviction: [`SetFlowEviction`], [`GetFlowEviction`].
//! - Bundles: [`BundleControl`], [`BundleAdd`], [`BundleProperty`].
//! - Per-flow eviction importance: [`EvictionImportanceInstruction`], an instruction rather
//!   than a message.
//!
//! Every type implements [`binary_of13::Encodable`] and [`binary_of13::Decodable`]. Reserved
//! bytes are zero-filled on encode and skipped unread on decode.
//!
//! ## Build Options
//! - `with_serde`: derives `serde` traits on every type.
//! - `prop_test`: adds `from_gen` constructors driven by QuickCheck.

mod bundle;
mod controller_id;
mod eviction_importance;
mod flow_eviction;
mod tlv_table;

#[cfg(feature = "prop_test")]
use quickcheck::{Arbitrary, Gen};

pub use bundle::{BundleAdd, BundleControl, BundleProperty};
pub use controller_id::ControllerId;
pub use eviction_importance::EvictionImportanceInstruction;
pub use flow_eviction::{GetFlowEviction, SetFlowEviction};
pub use tlv_table::{TlvOption, TlvTableMod, TlvTableReply, TlvTableRequest};

#[cfg(feature = "prop_test")]
impl TlvOption {
    pub fn from_gen(g: &mut Gen) -> Self {
        TlvOption {
            opt_class: u16::arbitrary(g),
            opt_type: u8::arbitrary(g),
            opt_length: u8::arbitrary(g),
            index: u16::arbitrary(g),
        }
    }
}

#[cfg(feature = "prop_test")]
impl TlvTableMod {
    pub fn from_gen(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 16;
        TlvTableMod {
            command: u16::arbitrary(g),
            options: (0..n).map(|_| TlvOption::from_gen(g)).collect(),
        }
    }
}

#[cfg(feature = "prop_test")]
impl TlvTableReply {
    pub fn from_gen(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 16;
        TlvTableReply {
            max_space: u32::arbitrary(g),
            max_fields: u16::arbitrary(g),
            options: (0..n).map(|_| TlvOption::from_gen(g)).collect(),
        }
    }
}

#[cfg(feature = "prop_test")]
impl ControllerId {
    pub fn from_gen(g: &mut Gen) -> Self {
        ControllerId {
            id: u16::arbitrary(g),
        }
    }
}

#[cfg(feature = "prop_test")]
impl SetFlowEviction {
    pub fn from_gen(g: &mut Gen) -> Self {
        SetFlowEviction {
            table_id: u8::arbitrary(g),
            enabled: bool::arbitrary(g),
        }
    }
}

#[cfg(feature = "prop_test")]
impl GetFlowEviction {
    pub fn from_gen(g: &mut Gen) -> Self {
        GetFlowEviction {
            table_id: u8::arbitrary(g),
        }
    }
}

#[cfg(feature = "prop_test")]
impl BundleProperty {
    pub fn from_gen(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 24;
        BundleProperty {
            prop_type: u16::arbitrary(g),
            body: (0..n).map(|_| u8::arbitrary(g)).collect(),
        }
    }
}

#[cfg(feature = "prop_test")]
impl BundleControl {
    pub fn from_gen(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 4;
        BundleControl {
            bundle_id: u32::arbitrary(g),
            ctrl_type: u16::arbitrary(g),
            flags: u16::arbitrary(g),
            properties: (0..n).map(|_| BundleProperty::from_gen(g)).collect(),
        }
    }
}

#[cfg(feature = "prop_test")]
impl BundleAdd {
    /// The embedded message is an OpenFlow 1.3 header with a random type and xid, followed by
    /// a random body, with the header length set to the whole message.
    pub fn from_gen(g: &mut Gen) -> Self {
        let body_len = usize::arbitrary(g) % 32;
        let len = (const_of13::OFP_HEADER_SIZE + body_len) as u16;
        let mut message = vec![const_of13::OFP_VERSION_1_3, u8::arbitrary(g)];
        message.extend_from_slice(&len.to_be_bytes());
        message.extend_from_slice(&u32::arbitrary(g).to_be_bytes());
        message.extend((0..body_len).map(|_| u8::arbitrary(g)));
        let n = usize::arbitrary(g) % 4;
        BundleAdd {
            bundle_id: u32::arbitrary(g),
            flags: u16::arbitrary(g),
            message,
            properties: (0..n).map(|_| BundleProperty::from_gen(g)).collect(),
        }
    }
}

#[cfg(feature = "prop_test")]
impl EvictionImportanceInstruction {
    pub fn from_gen(g: &mut Gen) -> Self {
        EvictionImportanceInstruction {
            instr_type: u16::arbitrary(g),
            ..EvictionImportanceInstruction::new(u16::arbitrary(g))
        }
    }
}
