//! Node-to-dashboard pipeline
//!
//! Scores a sample on the "node", serializes it into a telemetry record,
//! seals it into a versioned wire envelope, then opens and decodes it on the
//! "receiver" side.

mod common;

use base64::{engine::general_purpose::STANDARD, Engine};
use common::*;
use sentinel_core::{
    CombinedIndexScore, MachineSample, MaintenanceStatus, PredictiveMaintenanceScore, RiskLevel,
    SensorSample,
};
use sentinel_crypto::{
    encrypt_with_rng, extract, is_encrypted, CodecConfig, EnvelopeCodec, EnvelopeError,
    SentinelConfig, SECURE_FIELD,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Serialize, Deserialize)]
struct TelemetryRecord {
    device: String,
    cis: CombinedIndexScore,
    pdm: PredictiveMaintenanceScore,
}

fn node_record() -> TelemetryRecord {
    let worker = SensorSample {
        heart_rate: 126.0,
        temperature: 36.0,
        humidity: 70.0,
        gas: 20.0,
        machine_stress: 80.0,
        spo2: 95.0,
        noise: 85.0,
    };
    let machine = MachineSample {
        engine_load: 100.0,
        coolant_temp: 100.0,
        vibration: 10.0,
        degradation: 0.0,
        stress_index: 60.0,
    };

    TelemetryRecord {
        device: "esp32-07".into(),
        cis: worker.score(),
        pdm: machine.score(),
    }
}

#[test]
fn sealed_record_reaches_receiver() {
    let config = SentinelConfig::from_hex(PSK_HEX, CodecConfig::default()).unwrap();
    let codec = config.codec().unwrap();

    let sent = node_record();
    let envelope = codec.encrypt_json_with_rng(&mut seeded_rng(11), &sent).unwrap();
    let published = json!({ "device": sent.device, "s": envelope.into_wire() });

    // Receiver
    let text = serde_json::to_string(&published).unwrap();
    let received: Value = serde_json::from_str(&text).unwrap();
    assert!(is_encrypted(&received));
    assert!(received.get(SECURE_FIELD).is_some());

    let wire = extract(&received).unwrap();
    let record: TelemetryRecord = codec.decrypt_json(wire.open().unwrap()).unwrap();

    assert_eq!(record.device, "esp32-07");
    assert_eq!(record.cis.level, RiskLevel::Warning);
    assert!((record.cis.index - sent.cis.index).abs() < 1e-6);
    assert_eq!(record.pdm.status, MaintenanceStatus::AtRisk);
    assert!((record.pdm.health - 28.0).abs() < 1e-4);
}

#[test]
fn plain_records_pass_through() {
    let plain = json!({ "device": "esp32-03", "hr": 72, "temp": 30.0 });
    assert!(!is_encrypted(&plain));
    assert!(extract(&plain).is_err());
}

#[test]
fn future_protocol_version_is_refused() {
    let key = psk();
    let envelope = encrypt_with_rng(&mut seeded_rng(12), telemetry_json(), &key).unwrap();
    let mut wire = envelope.into_wire();
    wire.v = 2;

    let received = json!({ "s": wire });
    assert!(is_encrypted(&received));
    assert_eq!(extract(&received), Err(EnvelopeError::UnsupportedVersion { found: 2 }));
}

#[test]
fn tampered_record_is_security_event() {
    let key = psk();
    let codec = EnvelopeCodec::with_defaults(&key);
    let mut envelope = codec.encrypt_json_with_rng(&mut seeded_rng(13), &node_record()).unwrap();
    let mut ct = STANDARD.decode(&envelope.ct).unwrap();
    ct[0] ^= 0x01;
    envelope.ct = STANDARD.encode(ct);

    let result: Result<TelemetryRecord, _> = codec.decrypt_json(&envelope);
    let err = result.unwrap_err();
    assert!(err.is_security_event());
}
