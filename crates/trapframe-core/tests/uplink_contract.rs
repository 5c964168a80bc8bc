use trapframe_core::{FRAME_LEN, TrapRecord, UplinkInput, decode_uplink, encode_frame};

fn sample_bytes() -> Vec<u8> {
    vec![
        0x00, 0x00, 0x00, 0x01, 0x02, 0x00, 0x64, 0x5F, 0x5E, 0x10, 0x00,
    ]
}

#[test]
fn reference_frame_matches_network_server_decoder() {
    let result = decode_uplink(&UplinkInput {
        bytes: sample_bytes(),
    })
    .expect("decode");

    let record = &result.data.data;
    assert_eq!(record.id, 1);
    assert_eq!(record.version, 2);
    assert!(!record.door_status);
    assert!(!record.catch_detect);
    assert!(!record.trap_displacement);
    assert_eq!(record.battery_status, 100);
    assert_eq!(record.unix_time, 1_599_706_112);
    assert_eq!(result.data.raw, sample_bytes());
}

#[test]
fn envelope_json_shape_is_stable() {
    let result = decode_uplink(&UplinkInput {
        bytes: sample_bytes(),
    })
    .expect("decode");

    let json = serde_json::to_string(&result).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse back");

    let inner = &value["data"];
    assert!(inner.get("data").is_some());
    assert!(inner.get("raw").is_some());
    let record = &inner["data"];
    for field in [
        "id",
        "version",
        "doorStatus",
        "catchDetect",
        "trapDisplacement",
        "batteryStatus",
        "unixTime",
    ] {
        assert!(record.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn exact_frame_length_succeeds_one_short_fails() {
    let exact = UplinkInput {
        bytes: vec![0u8; FRAME_LEN],
    };
    assert!(decode_uplink(&exact).is_ok());

    let short = UplinkInput {
        bytes: vec![0u8; FRAME_LEN - 1],
    };
    let err = decode_uplink(&short).unwrap_err();
    assert!(err.to_string().contains("payload too short"));
}

#[test]
fn node_frame_decodes_to_original_record() {
    let record = TrapRecord {
        id: 0xDEAD_BEEF,
        version: 1,
        door_status: true,
        catch_detect: true,
        trap_displacement: false,
        battery_status: 87,
        unix_time: 1_700_000_000,
    };
    let result = decode_uplink(&UplinkInput {
        bytes: encode_frame(&record).to_vec(),
    })
    .expect("decode");
    assert_eq!(result.data.data, record);
}
