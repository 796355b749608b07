//! Common fixtures and strategies for scoring integration tests
//!
//! This module provides:
//! - Named worker and machine scenarios with known expected bands
//! - proptest strategies covering in-range, out-of-range and extreme readings

#![allow(dead_code)]

use proptest::prelude::*;
use sentinel_core::{MachineSample, MaintenanceStatus, RiskLevel, SensorSample};

/// Named worker scenario with its expected level
pub struct WorkerScenario {
    pub name: &'static str,
    pub sample: SensorSample,
    pub expected: RiskLevel,
}

/// Named machine scenario with its expected status
pub struct MachineScenario {
    pub name: &'static str,
    pub sample: MachineSample,
    pub expected: MaintenanceStatus,
}

/// Worker at rest in a comfortable, quiet site
pub fn resting_worker() -> SensorSample {
    SensorSample {
        heart_rate: 72.0,
        temperature: 30.0,
        humidity: 45.0,
        gas: 0.0,
        machine_stress: 0.0,
        spo2: 98.0,
        noise: 60.0,
    }
}

/// Worker scenarios seen on construction sites
pub fn worker_scenarios() -> Vec<WorkerScenario> {
    vec![
        WorkerScenario {
            name: "resting",
            sample: resting_worker(),
            expected: RiskLevel::Safe,
        },
        WorkerScenario {
            name: "operating excavator in the heat",
            // hr 0.5, spo2 0.3, noise 0.625, env 0.6, machine 0.8 -> 0.5825
            sample: SensorSample {
                heart_rate: 126.0,
                temperature: 36.0,
                humidity: 70.0,
                gas: 20.0,
                machine_stress: 80.0,
                spo2: 95.0,
                noise: 85.0,
            },
            expected: RiskLevel::Warning,
        },
        WorkerScenario {
            name: "exhausted next to overloaded crane",
            // hr 1.0, spo2 0.8, noise 1.0, env 1.0, machine 0.95 -> 0.945
            sample: SensorSample {
                heart_rate: 185.0,
                temperature: 44.0,
                humidity: 85.0,
                gas: 40.0,
                machine_stress: 95.0,
                spo2: 90.0,
                noise: 105.0,
            },
            expected: RiskLevel::Critical,
        },
    ]
}

/// Machine scenarios covering every status band
pub fn machine_scenarios() -> Vec<MachineScenario> {
    vec![
        MachineScenario {
            name: "idle loader",
            sample: MachineSample {
                engine_load: 35.0,
                coolant_temp: 75.0,
                vibration: 1.5,
                degradation: 0.0,
                stress_index: 25.0,
            },
            expected: MaintenanceStatus::Healthy,
        },
        MachineScenario {
            name: "bulldozer pushing hard",
            // 100 - 15 - 10 - 6 - 0 - 5 = 64
            sample: MachineSample {
                engine_load: 90.0,
                coolant_temp: 90.0,
                vibration: 8.0,
                degradation: 0.0,
                stress_index: 70.0,
            },
            expected: MaintenanceStatus::Degraded,
        },
        MachineScenario {
            name: "overheating excavator",
            // 100 - 30 - 30 - 12 - 0 = 28
            sample: MachineSample {
                engine_load: 100.0,
                coolant_temp: 100.0,
                vibration: 10.0,
                degradation: 0.0,
                stress_index: 60.0,
            },
            expected: MaintenanceStatus::AtRisk,
        },
        MachineScenario {
            name: "worn truck about to fail",
            // 100 - 30 - 40 - 18 - 10 - 20 = -18 -> 0
            sample: MachineSample {
                engine_load: 100.0,
                coolant_temp: 105.0,
                vibration: 12.0,
                degradation: 0.02,
                stress_index: 100.0,
            },
            expected: MaintenanceStatus::Critical,
        },
    ]
}

/// Any finite reading, including far outside physical ranges
pub fn any_reading() -> impl Strategy<Value = f32> {
    prop_oneof![
        -1_000.0f32..1_000.0,
        -1.0e30f32..1.0e30,
        Just(0.0f32),
    ]
}

/// Any f32, including NaN and infinities
pub fn any_float() -> impl Strategy<Value = f32> {
    prop_oneof![
        any_reading(),
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
    ]
}

/// Worker sample with arbitrary finite readings
pub fn any_sensor_sample() -> impl Strategy<Value = SensorSample> {
    (
        any_reading(),
        any_reading(),
        any_reading(),
        any_reading(),
        any_reading(),
        any_reading(),
        any_reading(),
    )
        .prop_map(|(heart_rate, temperature, humidity, gas, machine_stress, spo2, noise)| {
            SensorSample {
                heart_rate,
                temperature,
                humidity,
                gas,
                machine_stress,
                spo2,
                noise,
            }
        })
}

/// Machine sample with arbitrary finite readings
pub fn any_machine_sample() -> impl Strategy<Value = MachineSample> {
    (any_reading(), any_reading(), any_reading(), -1.0f32..1.0, any_reading()).prop_map(
        |(engine_load, coolant_temp, vibration, degradation, stress_index)| MachineSample {
            engine_load,
            coolant_temp,
            vibration,
            degradation,
            stress_index,
        },
    )
}
