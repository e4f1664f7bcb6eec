use log::debug;

use crate::curve::ThrustCurve;
use crate::error::Error;
use crate::mission::MissionParameters;

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed integration step for the dispense phase, seconds.
    pub dispense_dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { dispense_dt: 0.1 }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Charge and duration of a single flight phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseResult {
    pub ah: f64,       // consumed charge, Ah
    pub minutes: f64,  // phase duration, min
}

impl PhaseResult {
    const ZERO: PhaseResult = PhaseResult { ah: 0.0, minutes: 0.0 };
}

/// Aggregate endurance estimate. Constructed fresh on every `simulate` call;
/// the simulator holds no state across invocations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnduranceReport {
    pub takeoff: PhaseResult,
    pub dispense: PhaseResult,
    pub landing: PhaseResult,
    pub residual_hover_minutes: f64,
    pub max_mission_cycles: u32,
    pub total_mission_endurance_minutes: f64,
}

impl EnduranceReport {
    /// Charge consumed by one takeoff→dispense→landing cycle (Ah).
    pub fn ah_per_cycle(&self) -> f64 {
        self.takeoff.ah + self.dispense.ah + self.landing.ah
    }
}

// ---------------------------------------------------------------------------
// Per-instant current demand
// ---------------------------------------------------------------------------

/// Per-motor thrust demand (g) to hold `tw` at the given all-up weight.
fn thrust_per_motor(weight_kg: f64, tw: f64, motor_count: u32) -> f64 {
    weight_kg * 1000.0 * tw / motor_count as f64
}

/// Total pack current (A): interpolated motor draw plus electronics.
fn total_current(curve: &ThrustCurve, params: &MissionParameters, thrust_g: f64) -> f64 {
    curve.current_at(thrust_g) * params.motor_count as f64 + params.electronics_current_a
}

// ---------------------------------------------------------------------------
// Parameter validation
// ---------------------------------------------------------------------------

/// Reject only what would make the phase arithmetic undefined. Unusual but
/// computable inputs (T/W ≤ 0, zero payload on a sprayer) pass through and
/// produce a best-effort numeric result.
fn validate(params: &MissionParameters, config: &SimConfig) -> Result<(), Error> {
    if params.motor_count == 0 {
        return Err(Error::InvalidParameters("motor_count must be positive".into()));
    }
    if params.battery_ah < 0.0 {
        return Err(Error::InvalidParameters(format!(
            "battery capacity must be non-negative, got {} Ah",
            params.battery_ah
        )));
    }
    if params.payload_kg > 0.0 && params.flow_rate_lpm <= 0.0 {
        return Err(Error::InvalidParameters(format!(
            "flow rate must be positive to dispense {} kg of payload",
            params.payload_kg
        )));
    }
    if config.dispense_dt <= 0.0 {
        return Err(Error::InvalidParameters(format!(
            "dispense integration step must be positive, got {} s",
            config.dispense_dt
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Flight phases
// ---------------------------------------------------------------------------

/// Takeoff at full all-up weight. Weight is constant over the short climb,
/// so current is constant and the charge integral is closed-form.
fn takeoff_phase(curve: &ThrustCurve, params: &MissionParameters) -> PhaseResult {
    let thrust = thrust_per_motor(params.all_up_weight_kg(), params.tw_takeoff, params.motor_count);
    let current = total_current(curve, params, thrust);
    PhaseResult {
        ah: current * params.takeoff_time_min / 60.0,
        minutes: params.takeoff_time_min,
    }
}

/// Dispense under the hover T/W ratio while the payload mass decays
/// linearly to zero.
///
/// Current is a nonlinear (interpolated) function of the changing weight, so
/// there is no closed-form antiderivative; the charge is integrated with a
/// fixed step instead. The step is fixed rather than adaptive — dispense
/// windows are short, so determinism wins over efficiency here.
fn dispense_phase(
    curve: &ThrustCurve,
    params: &MissionParameters,
    config: &SimConfig,
) -> PhaseResult {
    if params.payload_kg <= 0.0 {
        return PhaseResult::ZERO;
    }

    let duration_s = params.dispense_seconds();
    let steps = (duration_s / config.dispense_dt).round() as u64;
    let drain_kg_per_s = params.flow_rate_lpm / 60.0;

    let mut ah = 0.0;
    for i in 0..steps {
        let t = i as f64 * config.dispense_dt;
        let water_left = (params.payload_kg - drain_kg_per_s * t).max(0.0);
        let thrust = thrust_per_motor(
            params.dry_weight_kg + water_left,
            params.tw_hover,
            params.motor_count,
        );
        ah += total_current(curve, params, thrust) * config.dispense_dt / 3600.0;
    }

    PhaseResult {
        ah,
        minutes: duration_s / 60.0,
    }
}

/// Landing at dry weight under the landing T/W ratio. Closed-form, same
/// shape as takeoff.
fn landing_phase(curve: &ThrustCurve, params: &MissionParameters) -> PhaseResult {
    let thrust = thrust_per_motor(params.dry_weight_kg, params.tw_landing, params.motor_count);
    let current = total_current(curve, params, thrust);
    PhaseResult {
        ah: current * params.landing_time_min / 60.0,
        minutes: params.landing_time_min,
    }
}

/// Hover at dry weight on whatever charge the three mission phases left.
/// A non-positive remainder is a valid boundary outcome, not an error.
fn residual_hover_minutes(
    curve: &ThrustCurve,
    params: &MissionParameters,
    ah_remaining: f64,
) -> f64 {
    if ah_remaining <= 0.0 {
        return 0.0;
    }
    let thrust = thrust_per_motor(params.dry_weight_kg, params.tw_hover, params.motor_count);
    let current = total_current(curve, params, thrust);
    ah_remaining * 60.0 / current
}

// ---------------------------------------------------------------------------
// Full mission simulation
// ---------------------------------------------------------------------------

/// Run the four-phase endurance model with an explicit config.
///
/// A single deterministic forward pass: takeoff, dispense, landing, residual
/// hover, then cycle aggregation. Pure function of its arguments.
pub fn simulate_with(
    curve: &ThrustCurve,
    params: &MissionParameters,
    config: &SimConfig,
) -> Result<EnduranceReport, Error> {
    validate(params, config)?;

    let takeoff = takeoff_phase(curve, params);
    let dispense = dispense_phase(curve, params, config);
    let landing = landing_phase(curve, params);
    debug!(
        "{}: takeoff {:.4} Ah, dispense {:.4} Ah over {:.2} min, landing {:.4} Ah",
        params.name, takeoff.ah, dispense.ah, dispense.minutes, landing.ah
    );

    // One subtraction against the per-cycle sum, so a battery sized exactly
    // to the fixed phases leaves a remainder of exactly zero.
    let ah_per_cycle = takeoff.ah + dispense.ah + landing.ah;
    let ah_remaining = params.battery_ah - ah_per_cycle;
    let hover_min = residual_hover_minutes(curve, params, ah_remaining);

    let max_mission_cycles = if ah_per_cycle == 0.0 {
        0 // degenerate all-zero mission
    } else {
        (params.battery_ah / ah_per_cycle).floor() as u32
    };
    let cycle_minutes = takeoff.minutes + dispense.minutes + landing.minutes;
    debug!(
        "{}: {:.4} Ah remaining, {} cycles of {:.2} min",
        params.name, ah_remaining, max_mission_cycles, cycle_minutes
    );

    Ok(EnduranceReport {
        takeoff,
        dispense,
        landing,
        residual_hover_minutes: hover_min,
        max_mission_cycles,
        total_mission_endurance_minutes: max_mission_cycles as f64 * cycle_minutes,
    })
}

/// Simulate with the default 0.1 s dispense step (convenience wrapper).
pub fn simulate(curve: &ThrustCurve, params: &MissionParameters) -> Result<EnduranceReport, Error> {
    simulate_with(curve, params, &SimConfig::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
