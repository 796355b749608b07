//! Shared fixtures for envelope integration tests

#![allow(dead_code)]

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use sentinel_crypto::{EncryptedEnvelope, SharedKey, MAX_PLAINTEXT};

/// Development pre-shared key, as flashed on bench nodes
pub const PSK_HEX: &str = "4a7b2c9d1e5f8a3b6c0dfe4fa071e253b485d627c8196afb3ced7e0f9061b243";

pub fn psk() -> SharedKey {
    SharedKey::from_hex(PSK_HEX).expect("valid development key")
}

pub fn other_key() -> SharedKey {
    SharedKey::from_bytes([0x5A; 32])
}

/// Deterministic RNG so failures reproduce
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A typical node telemetry record
pub fn telemetry_json() -> &'static [u8] {
    br#"{"device":"esp32-07","hr":88,"temp":31.0,"hum":60,"gas":5,"spo2":97,"noise":72,"cis":0.31}"#
}

/// Which envelope field a test mutates
#[derive(Debug, Clone, Copy)]
pub enum Field {
    Iv,
    Ct,
    At,
}

pub fn field_mut(envelope: &mut EncryptedEnvelope, field: Field) -> &mut String {
    match field {
        Field::Iv => &mut envelope.iv,
        Field::Ct => &mut envelope.ct,
        Field::At => &mut envelope.at,
    }
}

/// Any accepted plaintext length
pub fn any_plaintext() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=MAX_PLAINTEXT)
}

pub fn any_field() -> impl Strategy<Value = Field> {
    prop_oneof![Just(Field::Iv), Just(Field::Ct), Just(Field::At)]
}
