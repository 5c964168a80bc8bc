use super::error::DecodeError;
use super::layout;
use super::reader::FrameReader;

use crate::TrapRecord;

/// Decodes one trap uplink frame into a [`TrapRecord`].
///
/// The first [`layout::FRAME_LEN`] bytes are read; trailing bytes are
/// ignored. Inputs shorter than one frame fail with
/// [`DecodeError::InsufficientLength`].
pub fn decode_frame(payload: &[u8]) -> Result<TrapRecord, DecodeError> {
    let reader = FrameReader::new(payload);
    reader.require_len(layout::FRAME_LEN)?;

    let id = reader.read_u32_be(layout::ID_RANGE.clone())?;
    let version = reader.read_u8(layout::VERSION_OFFSET)?;
    let door_status = reader.read_flag(layout::FLAGS_OFFSET, layout::DOOR_STATUS_BIT)?;
    let catch_detect = reader.read_flag(layout::FLAGS_OFFSET, layout::CATCH_DETECT_BIT)?;
    let trap_displacement =
        reader.read_flag(layout::FLAGS_OFFSET, layout::TRAP_DISPLACEMENT_BIT)?;
    let battery_status = reader.read_u8(layout::BATTERY_OFFSET)?;
    let unix_time = reader.read_u32_be(layout::UNIX_TIME_RANGE.clone())?;

    Ok(TrapRecord {
        id,
        version,
        door_status,
        catch_detect,
        trap_displacement,
        battery_status,
        unix_time,
    })
}

#[cfg(test)]
mod tests {
    use super::decode_frame;
    use crate::uplink::layout;

    fn sample_frame() -> Vec<u8> {
        vec![
            0x00, 0x00, 0x00, 0x01, // id = 1
            0x02, // version
            0x00, // flags
            0x64, // battery = 100
            0x5F, 0x5E, 0x10, 0x00, // unix time
        ]
    }

    #[test]
    fn decode_known_frame() {
        let record = decode_frame(&sample_frame()).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.version, 2);
        assert!(!record.door_status);
        assert!(!record.catch_detect);
        assert!(!record.trap_displacement);
        assert_eq!(record.battery_status, 100);
        assert_eq!(record.unix_time, 0x5F5E1000);
    }

    #[test]
    fn decode_all_flags_set() {
        let mut payload = sample_frame();
        payload[layout::FLAGS_OFFSET] = 0x07;
        let record = decode_frame(&payload).unwrap();
        assert!(record.door_status);
        assert!(record.catch_detect);
        assert!(record.trap_displacement);
    }

    #[test]
    fn decode_max_id_without_sign_extension() {
        let mut payload = sample_frame();
        payload[..4].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        let record = decode_frame(&payload).unwrap();
        assert_eq!(record.id, 4_294_967_295);
    }

    #[test]
    fn flag_bits_are_independent() {
        for bit in 0..8u8 {
            let mut payload = sample_frame();
            payload[layout::FLAGS_OFFSET] = 1 << bit;
            let record = decode_frame(&payload).unwrap();
            let base = decode_frame(&sample_frame()).unwrap();

            assert_eq!(record.door_status, bit == layout::DOOR_STATUS_BIT);
            assert_eq!(record.catch_detect, bit == layout::CATCH_DETECT_BIT);
            assert_eq!(record.trap_displacement, bit == layout::TRAP_DISPLACEMENT_BIT);

            assert_eq!(record.id, base.id);
            assert_eq!(record.version, base.version);
            assert_eq!(record.battery_status, base.battery_status);
            assert_eq!(record.unix_time, base.unix_time);
        }
    }

    #[test]
    fn decode_short_payload() {
        let payload = vec![0u8; layout::FRAME_LEN - 1];
        let err = decode_frame(&payload).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("payload too short"));
        assert!(msg.contains("need 11 bytes, got 10"));
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let mut payload = sample_frame();
        payload.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
        let record = decode_frame(&payload).unwrap();
        assert_eq!(record, decode_frame(&sample_frame()).unwrap());
    }

    #[test]
    fn decode_is_deterministic() {
        let payload = sample_frame();
        assert_eq!(
            decode_frame(&payload).unwrap(),
            decode_frame(&payload).unwrap()
        );
    }
}
