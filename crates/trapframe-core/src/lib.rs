//! Trapframe core library for decoding trap sensor uplinks.
//!
//! This crate implements the payload codec used by the CLI and by
//! network-server integrations: the uplink module decodes the fixed
//! 11-byte frame emitted by the trap node (layout/reader/parser) and the
//! envelope types in this module mirror the uplink-decoder contract of
//! LoRaWAN network servers (`{ data: { data: ..., raw: ... } }`, camelCase
//! field names). Decoding is byte-oriented and side-effect free; all I/O
//! stays in the CLI crate.
//!
//! Invariants:
//! - Decoding is a pure function of the input bytes and never mutates them.
//! - `raw` in the envelope always equals the exact input sequence.
//! - Inputs shorter than one frame fail with a single explicit error kind;
//!   trailing bytes are ignored by the decoder and passed through in `raw`.
//!
//! Version française (résumé):
//! Cette crate fournit le codec de charge utile : le module `uplink` décode
//! la trame fixe de 11 octets du capteur (layout/reader/parser) et les types
//! d'enveloppe reproduisent le contrat des serveurs de réseau LoRaWAN.
//! Garanties : décodage pur et déterministe, octets bruts restitués tels
//! quels, erreur explicite pour les trames trop courtes.
//!
//! # Examples
//! ```
//! use trapframe_core::{UplinkInput, decode_uplink};
//!
//! let input = UplinkInput {
//!     bytes: vec![0x00, 0x00, 0x00, 0x01, 0x02, 0x00, 0x64, 0x5F, 0x5E, 0x10, 0x00],
//! };
//! let result = decode_uplink(&input)?;
//! assert_eq!(result.data.data.id, 1);
//! assert_eq!(result.data.raw, input.bytes);
//! # Ok::<(), trapframe_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub mod uplink;

pub use uplink::error::DecodeError;
pub use uplink::layout::FRAME_LEN;
pub use uplink::{decode_frame, encode_frame};

/// Uplink message as handed over by the network server.
///
/// # Examples
/// ```
/// use trapframe_core::UplinkInput;
///
/// let input = UplinkInput { bytes: vec![0u8; 11] };
/// assert_eq!(input.bytes.len(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UplinkInput {
    /// Raw frame bytes of one uplink message.
    pub bytes: Vec<u8>,
}

/// Decoded sensor record of one trap uplink frame.
///
/// Field names serialize in camelCase to stay compatible with consumers of
/// the JavaScript network-server decoder.
///
/// # Examples
/// ```
/// use trapframe_core::decode_frame;
///
/// let frame = [0x00, 0x00, 0x00, 0x01, 0x02, 0x07, 0x64, 0x00, 0x00, 0x00, 0x00];
/// let record = decode_frame(&frame)?;
/// assert_eq!(record.id, 1);
/// assert!(record.door_status && record.catch_detect && record.trap_displacement);
/// # Ok::<(), trapframe_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrapRecord {
    /// Device identification number (bytes 0..4, big-endian).
    pub id: u32,
    /// Payload format version (byte 4).
    pub version: u8,
    /// Door closed flag (bit 0 of byte 5).
    pub door_status: bool,
    /// Catch detection flag (bit 1 of byte 5).
    pub catch_detect: bool,
    /// Trap displacement flag (bit 2 of byte 5).
    pub trap_displacement: bool,
    /// Battery status (byte 6, raw 0–255).
    pub battery_status: u8,
    /// Measurement time as a Unix timestamp (bytes 7..11, big-endian).
    pub unix_time: u32,
}

impl TrapRecord {
    /// Returns `unix_time` as an [`OffsetDateTime`], when representable.
    ///
    /// # Examples
    /// ```
    /// use trapframe_core::decode_frame;
    ///
    /// let frame = [0, 0, 0, 1, 2, 0, 100, 0x5F, 0x5E, 0x10, 0x00];
    /// let record = decode_frame(&frame)?;
    /// assert_eq!(record.timestamp().map(|t| t.unix_timestamp()), Some(0x5F5E1000));
    /// # Ok::<(), trapframe_core::DecodeError>(())
    /// ```
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(i64::from(self.unix_time)).ok()
    }
}

/// Outer decode envelope returned to the network server.
///
/// # Examples
/// ```
/// use trapframe_core::{UplinkInput, decode_uplink};
///
/// let input = UplinkInput { bytes: vec![0u8; 11] };
/// let result = decode_uplink(&input)?;
/// assert_eq!(result.data.raw, vec![0u8; 11]);
/// # Ok::<(), trapframe_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResult {
    /// Decoder output envelope (`data` plus `raw`).
    pub data: UplinkData,
}

/// Inner envelope pairing the decoded record with the original bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UplinkData {
    /// Decoded sensor record.
    pub data: TrapRecord,
    /// Original frame bytes, unmodified.
    pub raw: Vec<u8>,
}

/// Decodes an uplink message into the network-server envelope.
///
/// The input is never mutated; `raw` in the result is a copy of the full
/// input byte sequence, including any bytes beyond the fixed frame.
///
/// # Examples
/// ```
/// use trapframe_core::{UplinkInput, decode_uplink};
///
/// let input = UplinkInput { bytes: vec![0u8; 10] };
/// assert!(decode_uplink(&input).is_err());
/// ```
pub fn decode_uplink(input: &UplinkInput) -> Result<DecodeResult, DecodeError> {
    let record = decode_frame(&input.bytes)?;
    Ok(DecodeResult {
        data: UplinkData {
            data: record,
            raw: input.bytes.clone(),
        },
    })
}
