//! Central repository for all the OpenFlow 1.3 experimenter extension constants

#![no_std]

pub const OFP_VERSION_1_3: u8 = 0x04;

pub const OFP_HEADER_SIZE: usize = 8;
pub const OFP_HEADER_LEN_OFFSET: usize = 2;

// Base protocol message types.
pub const OFPT_ERROR: u8 = 1;
pub const OFPT_EXPERIMENTER: u8 = 4;
pub const OFPT_FLOW_MOD: u8 = 14;

/// Size of the experimenter envelope: OpenFlow header + vendor ID + experimenter type.
pub const EXPERIMENTER_HEADER_SIZE: usize = OFP_HEADER_SIZE + 8;

// Experimenter (vendor) identifiers.
pub const NX_EXPERIMENTER_ID: u32 = 0x0000_2320;
pub const ONF_EXPERIMENTER_ID: u32 = 0x4f4e_4600;

// Nicira extension message types.
pub const NXT_SET_FLOW_FORMAT: u32 = 12;
pub const NXT_FLOW_MOD_TABLE_ID: u32 = 15;
pub const NXT_SET_PACKET_IN_FORMAT: u32 = 16;
pub const NXT_SET_CONTROLLER_ID: u32 = 20;
pub const NXT_TLV_TABLE_MOD: u32 = 24;
pub const NXT_TLV_TABLE_REQUEST: u32 = 25;
pub const NXT_TLV_TABLE_REPLY: u32 = 26;
pub const NXT_RESUME: u32 = 28;
pub const NXT_CT_FLUSH_ZONE: u32 = 29;

// ONF extension message types.
pub const ONF_ET_SET_EVICTION: u32 = 1925;
pub const ONF_ET_GET_EVICTION_REQUEST: u32 = 1926;
pub const ONF_ET_GET_EVICTION_REPLY: u32 = 1927;
pub const ONF_ET_BUNDLE_CONTROL: u32 = 2300;
pub const ONF_ET_BUNDLE_ADD_MESSAGE: u32 = 2301;

// ONF experimenter instruction types.
pub const ONFIST_ET_EVICTION_IMPORTANCE: u32 = 1920;

// Instruction types.
pub const OFPIT_GOTO_TABLE: u16 = 1;
pub const OFPIT_WRITE_METADATA: u16 = 2;
pub const OFPIT_WRITE_ACTIONS: u16 = 3;
pub const OFPIT_APPLY_ACTIONS: u16 = 4;
pub const OFPIT_CLEAR_ACTIONS: u16 = 5;
pub const OFPIT_METER: u16 = 6;
pub const OFPIT_EXPERIMENTER: u16 = 0xffff;

pub const INSTRUCTION_HEADER_SIZE: usize = 4;
pub const ACTIONS_INSTRUCTION_HEADER_SIZE: usize = 8;
pub const ACTION_HEADER_SIZE: usize = 4;

// Fixed record sizes.
pub const TLV_OPTION_SIZE: usize = 8;
pub const TLV_TABLE_MOD_HEADER_SIZE: usize = 8;
pub const TLV_TABLE_REPLY_HEADER_SIZE: usize = 16;
pub const CONTROLLER_ID_SIZE: usize = 8;
pub const SET_FLOW_EVICTION_SIZE: usize = 8;
pub const GET_FLOW_EVICTION_SIZE: usize = 8;
pub const EVICTION_IMPORTANCE_INSTRUCTION_SIZE: usize = INSTRUCTION_HEADER_SIZE + 14;
pub const BUNDLE_CONTROL_HEADER_SIZE: usize = 8;
pub const BUNDLE_ADD_HEADER_SIZE: usize = 8;
pub const BUNDLE_PROPERTY_HEADER_SIZE: usize = 4;
pub const BUNDLE_PROPERTY_ALIGNMENT: usize = 8;

// TLV table commands (nx_tlv_table_mod_command).
pub const NXTTMC_ADD: u16 = 0;
pub const NXTTMC_DELETE: u16 = 1;
pub const NXTTMC_CLEAR: u16 = 2;

// TLV table mod failure codes.
pub const OFPERR_NXTTMFC_BAD_COMMAND: u16 = 16;
pub const OFPERR_NXTTMFC_BAD_OPT_LEN: u16 = 17;
pub const OFPERR_NXTTMFC_BAD_FIELD_IDX: u16 = 18;
pub const OFPERR_NXTTMFC_TABLE_FULL: u16 = 19;
pub const OFPERR_NXTTMFC_ALREADY_MAPPED: u16 = 20;
pub const OFPERR_NXTTMFC_DUP_ENTRY: u16 = 21;
pub const OFPERR_NXTTMFC_INVALID_TLV_DEL: u16 = 38;

// Bundle control types.
pub const OFPBCT_OPEN_REQUEST: u16 = 0;
pub const OFPBCT_OPEN_REPLY: u16 = 1;
pub const OFPBCT_CLOSE_REQUEST: u16 = 2;
pub const OFPBCT_CLOSE_REPLY: u16 = 3;
pub const OFPBCT_COMMIT_REQUEST: u16 = 4;
pub const OFPBCT_COMMIT_REPLY: u16 = 5;
pub const OFPBCT_DISCARD_REQUEST: u16 = 6;
pub const OFPBCT_DISCARD_REPLY: u16 = 7;

// Bundle flags.
pub const OFPBF_ATOMIC: u16 = 1 << 0;
pub const OFPBF_ORDERED: u16 = 1 << 1;

pub const OFPBPT_EXPERIMENTER: u16 = 0xffff;
