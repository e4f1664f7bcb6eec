// ---------------------------------------------------------------------------
// Mission parameters: one immutable value object per calculation request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MissionParameters {
    pub name: String,
    pub dry_weight_kg: f64,
    pub motor_count: u32,
    pub battery_ah: f64,
    pub electronics_current_a: f64,  // avionics, pumps, FC — constant draw
    pub payload_kg: f64,             // 0 for fixed-payload airframes
    pub takeoff_time_min: f64,
    pub landing_time_min: f64,
    pub flow_rate_lpm: f64,          // dispense rate, L/min
    pub tw_takeoff: f64,             // thrust/weight, dimensionless
    pub tw_hover: f64,
    pub tw_landing: f64,
}

impl MissionParameters {
    /// All-up weight at the start of a cycle (kg).
    pub fn all_up_weight_kg(&self) -> f64 {
        self.dry_weight_kg + self.payload_kg
    }

    /// Dispense duration rounded to the nearest whole second.
    /// Zero when the airframe carries no dispensable payload.
    pub fn dispense_seconds(&self) -> f64 {
        if self.payload_kg <= 0.0 {
            return 0.0;
        }
        (self.payload_kg / self.flow_rate_lpm * 60.0).round()
    }
}

// ---------------------------------------------------------------------------
// Parameter builder
// ---------------------------------------------------------------------------

pub struct MissionBuilder {
    params: MissionParameters,
}

impl MissionBuilder {
    /// Defaults describe a mid-size surveillance quad with no payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            params: MissionParameters {
                name: name.into(),
                dry_weight_kg: 10.0,
                motor_count: 4,
                battery_ah: 20.0,
                electronics_current_a: 2.0,
                payload_kg: 0.0,
                takeoff_time_min: 0.25,
                landing_time_min: 0.25,
                flow_rate_lpm: 0.0,
                tw_takeoff: 1.1,
                tw_hover: 1.0,
                tw_landing: 0.8,
            },
        }
    }

    pub fn dry_weight_kg(mut self, v: f64) -> Self { self.params.dry_weight_kg = v; self }
    pub fn motor_count(mut self, v: u32) -> Self { self.params.motor_count = v; self }
    pub fn battery_ah(mut self, v: f64) -> Self { self.params.battery_ah = v; self }
    pub fn electronics_current_a(mut self, v: f64) -> Self { self.params.electronics_current_a = v; self }
    pub fn payload_kg(mut self, v: f64) -> Self { self.params.payload_kg = v; self }
    pub fn takeoff_time_min(mut self, v: f64) -> Self { self.params.takeoff_time_min = v; self }
    pub fn landing_time_min(mut self, v: f64) -> Self { self.params.landing_time_min = v; self }
    pub fn flow_rate_lpm(mut self, v: f64) -> Self { self.params.flow_rate_lpm = v; self }
    pub fn tw_takeoff(mut self, v: f64) -> Self { self.params.tw_takeoff = v; self }
    pub fn tw_hover(mut self, v: f64) -> Self { self.params.tw_hover = v; self }
    pub fn tw_landing(mut self, v: f64) -> Self { self.params.tw_landing = v; self }

    pub fn build(self) -> MissionParameters {
        self.params
    }
}

// ---------------------------------------------------------------------------
// Preset configurations
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Variable-payload agricultural hexacopter with an 8.5 L spray tank.
    pub fn agri_sprayer() -> MissionParameters {
        MissionBuilder::new("AgriHex-85")
            .dry_weight_kg(15.8)
            .motor_count(6)
            .battery_ah(24.0)
            .electronics_current_a(4.274)
            .payload_kg(8.5)
            .takeoff_time_min(0.25)
            .landing_time_min(0.25)
            .flow_rate_lpm(3.333)
            .tw_takeoff(1.1)
            .tw_hover(1.05)
            .tw_landing(0.8)
            .build()
    }

    /// Fixed-payload surveillance quad; the camera mass is part of the
    /// dry weight, so payload and flow rate stay zero.
    pub fn surveillance() -> MissionParameters {
        MissionBuilder::new("Sentinel-4")
            .dry_weight_kg(9.2)
            .motor_count(4)
            .battery_ah(16.0)
            .electronics_current_a(1.8)
            .tw_takeoff(1.15)
            .tw_hover(1.0)
            .tw_landing(0.85)
            .build()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_up_weight_includes_payload() {
        let p = presets::agri_sprayer();
        assert!((p.all_up_weight_kg() - 24.3).abs() < 1e-9);
    }

    #[test]
    fn dispense_duration_rounds_to_whole_seconds() {
        let p = presets::agri_sprayer();
        // 8.5 L / 3.333 L/min = 2.5502 min = 153.01 s
        assert_eq!(p.dispense_seconds(), 153.0);

        let q = MissionBuilder::new("t")
            .payload_kg(1.0)
            .flow_rate_lpm(3.0)
            .build();
        assert_eq!(q.dispense_seconds(), 20.0);
    }

    #[test]
    fn zero_payload_means_zero_dispense_duration() {
        let p = presets::surveillance();
        assert_eq!(p.payload_kg, 0.0);
        assert_eq!(p.dispense_seconds(), 0.0);
    }

    #[test]
    fn builder_overrides_defaults() {
        let p = MissionBuilder::new("custom")
            .motor_count(8)
            .battery_ah(30.0)
            .build();
        assert_eq!(p.motor_count, 8);
        assert_eq!(p.battery_ah, 30.0);
        assert_eq!(p.name, "custom");
    }
}
