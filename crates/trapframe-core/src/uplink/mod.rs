//! Trap uplink frame codec.
//!
//! The parser decodes the fixed 11-byte node frame into a [`TrapRecord`]
//! (big-endian multi-byte fields, status flags in the low bits of byte 5).
//! Length is validated once at entry; inputs shorter than one frame fail
//! with an explicit error instead of reading out of range. Trailing bytes
//! beyond the frame are ignored by the parser and preserved in the envelope.
//!
//! Byte offsets and bit positions live in `layout`, byte-access conventions
//! in `reader`. The `encoder` module composes the same frame from a record,
//! matching the node firmware.
//!
//! Version française (résumé):
//! Le module encode/décode la trame de 11 octets du piège (champs
//! multi-octets en gros-boutiste, drapeaux dans les bits bas de l'octet 5).
//! La longueur est validée à l'entrée; les positions sont dans `layout`,
//! les conventions dans `reader`.
//!
//! [`TrapRecord`]: crate::TrapRecord

pub mod encoder;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use encoder::encode_frame;
pub use parser::decode_frame;
