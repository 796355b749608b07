//! Secure Telemetry Example
//!
//! Node side: score a sample, serialize it, seal it into a versioned envelope.
//! Receiver side: detect the envelope, verify it and decode the record.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_secure_telemetry
//! ```

use sentinel_core::SensorSample;
use sentinel_crypto::{extract, is_encrypted, CodecConfig, EnvelopeError, SentinelConfig};
use serde_json::{json, Value};

const DEV_PSK: &str = "4a7b2c9d1e5f8a3b6c0dfe4fa071e253b485d627c8196afb3ced7e0f9061b243";

fn main() -> Result<(), EnvelopeError> {
    let config = SentinelConfig::from_hex(DEV_PSK, CodecConfig::default())?;
    let codec = config.codec()?;

    // Node
    let sample = SensorSample {
        heart_rate: 88.0,
        temperature: 31.0,
        humidity: 60.0,
        gas: 5.0,
        machine_stress: 40.0,
        spo2: 97.0,
        noise: 72.0,
    };
    let record = json!({ "device": "esp32-07", "cis": sample.score() });
    let envelope = codec.encrypt_json(&record)?;
    let published = json!({ "device": "esp32-07", "s": envelope.into_wire() });
    println!("published: {published}");

    // Receiver
    if !is_encrypted(&published) {
        println!("plain record, consuming as is");
        return Ok(());
    }

    let wire = extract(&published)?;
    match codec.decrypt_json::<Value>(wire.open()?) {
        Ok(record) => println!("verified: {record}"),
        Err(e) if e.is_security_event() => println!("SECURITY: {e}"),
        Err(e) => println!("dropped: {e}"),
    }

    Ok(())
}
