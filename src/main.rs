use rotor_endurance::mission::presets;
use rotor_endurance::simulator;
use rotor_endurance::types::{ThrustCurve, DEFAULT_CALIBRATION};

fn main() {
    // -----------------------------------------------------------------------
    // Model: bench calibration table, built once at startup
    // -----------------------------------------------------------------------
    let curve = ThrustCurve::new(&DEFAULT_CALIBRATION)
        .expect("default calibration table is well-formed");

    let params = presets::agri_sprayer();

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let report = match simulator::simulate(&curve, &params) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("endurance calculation failed: {e}");
            std::process::exit(1);
        }
    };

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  MULTIROTOR ENDURANCE ESTIMATE — {}", params.name);
    println!("====================================================================");
    println!();
    println!("  Airframe Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Dry weight:    {:>8.1} kg    Payload:      {:>8.1} kg",
        params.dry_weight_kg, params.payload_kg
    );
    println!(
        "  All-up weight: {:>8.1} kg    Motors:       {:>8}",
        params.all_up_weight_kg(),
        params.motor_count
    );
    println!(
        "  Battery:       {:>8.1} Ah    Electronics:  {:>8.2} A",
        params.battery_ah, params.electronics_current_a
    );
    println!(
        "  T/W takeoff:   {:>8.2}       T/W hover:    {:>8.2}",
        params.tw_takeoff, params.tw_hover
    );
    println!(
        "  T/W landing:   {:>8.2}       Flow rate:    {:>8.3} L/min",
        params.tw_landing, params.flow_rate_lpm
    );
    let cal = curve.samples();
    println!(
        "  Calibration:   {:.0}–{:.0} g per motor, {} points",
        cal[0].thrust_g,
        cal[cal.len() - 1].thrust_g,
        cal.len()
    );
    println!();

    println!("  Flight Phases");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  TAKEOFF    {:>7.2} min   {:>8.4} Ah",
        report.takeoff.minutes, report.takeoff.ah
    );
    println!(
        "  DISPENSE   {:>7.2} min   {:>8.4} Ah",
        report.dispense.minutes, report.dispense.ah
    );
    println!(
        "  LANDING    {:>7.2} min   {:>8.4} Ah",
        report.landing.minutes, report.landing.ah
    );
    println!();

    println!("  Endurance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Charge per cycle:    {:>8.4} Ah", report.ah_per_cycle());
    println!("  Residual hover:      {:>8.1} min", report.residual_hover_minutes);
    println!("  Max mission cycles:  {:>8}", report.max_mission_cycles);
    println!(
        "  Total endurance:     {:>8.1} min over all cycles",
        report.total_mission_endurance_minutes
    );
    println!("====================================================================");
    println!();
}
