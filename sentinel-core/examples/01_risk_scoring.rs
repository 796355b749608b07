//! Risk Scoring Example
//!
//! Scores one control-loop tick on a sensor node: the worker's combined index
//! and the nearest machine's predictive-maintenance health.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_risk_scoring
//! ```

use sentinel_core::{MachineSample, ScoreBand, SensorSample};

fn main() {
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

    let cis = worker.score();
    println!(
        "CIS {:.3} [{}]  fatigue {:.0}%  stress {:.0}%",
        cis.index,
        cis.level.label(),
        cis.fatigue,
        cis.stress
    );

    let pdm = machine.score();
    println!("PdM health {:.1} [{}]", pdm.health, pdm.status.label());

    if cis.level.is_alarming() || pdm.status.is_alarming() {
        println!("-> raise alert on dashboard");
    }

    // A sensor dropout never poisons the index; it scores as worst case
    let dropout = SensorSample {
        spo2: f32::NAN,
        ..worker
    };
    let degraded = dropout.score();
    println!(
        "with SpO2 dropout: CIS {:.3} [{}], non-finite inputs flagged: {}",
        degraded.index,
        degraded.level.label(),
        degraded.report.has_non_finite()
    );

    // Strict variant refuses instead
    if let Err(e) = dropout.try_score() {
        println!("strict scoring: {e}");
    }
}
