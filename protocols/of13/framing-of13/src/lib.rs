//! # OpenFlow 1.3 Framing
//!
//! The pieces of the base protocol that experimenter extensions are layered on:
//!
//! - [`Header`]: the 8-byte header that starts every OpenFlow message and carries the total
//!   message length.
//! - [`VendorEnvelope`]: an experimenter message, i.e. a header followed by a vendor ID, an
//!   experimenter type and a payload. Envelopes can only be built from an
//!   [`ExperimenterPayload`], so the vendor ID and type always agree with the payload.
//! - [`ExperimenterFrame`]: the inbound view of an experimenter message, with the payload
//!   sliced to exactly the length announced by the header.
//! - [`Instruction`]: the instruction-list abstraction, with [`InstrHeader`], [`Action`] and the
//!   action-list instruction [`ActionsInstruction`].

mod envelope;
mod error;
mod header;
mod instruction;

pub use envelope::{ExperimenterFrame, ExperimenterPayload, VendorEnvelope};
pub use error::Error;
pub use header::Header;
pub use instruction::{Action, ActionsInstruction, InstrHeader, Instruction};
