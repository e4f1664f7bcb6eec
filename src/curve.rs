use crate::error::Error;

// ---------------------------------------------------------------------------
// Thrust–current calibration model (monotone cubic / PCHIP)
// ---------------------------------------------------------------------------

/// One empirical calibration observation: per-motor thrust vs. current draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustCurveSample {
    pub thrust_g: f64,   // grams-force per motor
    pub current_a: f64,  // A per motor
}

/// Interpolates per-motor current draw from a fixed thrust/current table.
///
/// Uses shape-preserving piecewise-cubic Hermite interpolation (PCHIP):
/// tangents come from the Fritsch–Carlson weighted harmonic mean of the
/// adjacent secants, so the curve never overshoots between data points.
/// An overshooting current estimate would silently corrupt every downstream
/// charge integral, which rules out a plain cubic spline here.
///
/// Thrust outside the calibrated range evaluates the nearest boundary
/// segment's cubic — no clamping to the edge value.
#[derive(Debug, Clone)]
pub struct ThrustCurve {
    samples: Vec<ThrustCurveSample>,
    tangents: Vec<f64>, // dI/dthrust at each sample, A per gram
}

impl ThrustCurve {
    /// Build the model from an ordered calibration table.
    ///
    /// Fails with `InvalidCalibrationData` if fewer than 2 samples are given
    /// or thrust values are not strictly increasing.
    pub fn new(samples: &[ThrustCurveSample]) -> Result<Self, Error> {
        if samples.len() < 2 {
            return Err(Error::InvalidCalibrationData(format!(
                "need at least 2 samples, got {}",
                samples.len()
            )));
        }
        for pair in samples.windows(2) {
            if pair[1].thrust_g <= pair[0].thrust_g {
                return Err(Error::InvalidCalibrationData(format!(
                    "thrust values must be strictly increasing ({} g then {} g)",
                    pair[0].thrust_g, pair[1].thrust_g
                )));
            }
        }

        let tangents = monotone_tangents(samples);
        Ok(Self {
            samples: samples.to_vec(),
            tangents,
        })
    }

    /// Per-motor current draw (A) at the given per-motor thrust (g).
    ///
    /// Pure function of the fixed table; never fails for finite input.
    /// Callers are responsible for supplying physically sane thrust values.
    pub fn current_at(&self, thrust_g: f64) -> f64 {
        let s = &self.samples;
        let n = s.len();

        // Bracketing segment; out-of-range thrust extends the boundary cubic.
        let mut i = n - 2;
        for k in 0..n - 1 {
            if thrust_g < s[k + 1].thrust_g {
                i = k;
                break;
            }
        }

        let h = s[i + 1].thrust_g - s[i].thrust_g;
        let t = (thrust_g - s[i].thrust_g) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        // Cubic Hermite basis
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * s[i].current_a
            + h10 * h * self.tangents[i]
            + h01 * s[i + 1].current_a
            + h11 * h * self.tangents[i + 1]
    }

    pub fn samples(&self) -> &[ThrustCurveSample] {
        &self.samples
    }
}

// ---------------------------------------------------------------------------
// Fritsch–Carlson tangent computation
// ---------------------------------------------------------------------------

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Tangents for shape-preserving interpolation.
///
/// Interior points take the weighted harmonic mean of adjacent secants and
/// zero at local extrema; endpoints use the one-sided three-point estimate
/// limited to preserve monotonicity near the boundary.
fn monotone_tangents(samples: &[ThrustCurveSample]) -> Vec<f64> {
    let n = samples.len();
    let h: Vec<f64> = samples
        .windows(2)
        .map(|p| p[1].thrust_g - p[0].thrust_g)
        .collect();
    let d: Vec<f64> = samples
        .windows(2)
        .zip(&h)
        .map(|(p, h)| (p[1].current_a - p[0].current_a) / h)
        .collect();

    if n == 2 {
        return vec![d[0], d[0]];
    }

    let mut m = vec![0.0; n];
    for k in 1..n - 1 {
        if d[k - 1] * d[k] <= 0.0 {
            m[k] = 0.0; // local extremum
        } else {
            let w1 = 2.0 * h[k] + h[k - 1];
            let w2 = h[k] + 2.0 * h[k - 1];
            m[k] = (w1 + w2) / (w1 / d[k - 1] + w2 / d[k]);
        }
    }
    m[0] = edge_tangent(h[0], h[1], d[0], d[1]);
    m[n - 1] = edge_tangent(h[n - 2], h[n - 3], d[n - 2], d[n - 3]);
    m
}

/// One-sided three-point endpoint tangent with shape-preserving limits.
fn edge_tangent(h0: f64, h1: f64, d0: f64, d1: f64) -> f64 {
    let t = ((2.0 * h0 + h1) * d0 - h0 * d1) / (h0 + h1);
    if sign(t) != sign(d0) {
        0.0
    } else if sign(d0) != sign(d1) && t.abs() > 3.0 * d0.abs() {
        3.0 * d0
    } else {
        t
    }
}

// ---------------------------------------------------------------------------
// Default calibration table
// ---------------------------------------------------------------------------

/// Bench calibration for the reference 6S agricultural hexacopter motor
/// (30" propeller), 500 g to 10 kg thrust per motor. Supplied once at
/// startup by the presentation layer.
pub static DEFAULT_CALIBRATION: [ThrustCurveSample; 20] = [
    ThrustCurveSample { thrust_g: 500.0, current_a: 0.9 },
    ThrustCurveSample { thrust_g: 1000.0, current_a: 1.7 },
    ThrustCurveSample { thrust_g: 1500.0, current_a: 2.6 },
    ThrustCurveSample { thrust_g: 2000.0, current_a: 3.7 },
    ThrustCurveSample { thrust_g: 2500.0, current_a: 5.0 },
    ThrustCurveSample { thrust_g: 3000.0, current_a: 6.6 },
    ThrustCurveSample { thrust_g: 3500.0, current_a: 8.4 },
    ThrustCurveSample { thrust_g: 4000.0, current_a: 10.5 },
    ThrustCurveSample { thrust_g: 4500.0, current_a: 12.8 },
    ThrustCurveSample { thrust_g: 5000.0, current_a: 15.3 },
    ThrustCurveSample { thrust_g: 5500.0, current_a: 18.0 },
    ThrustCurveSample { thrust_g: 6000.0, current_a: 20.9 },
    ThrustCurveSample { thrust_g: 6500.0, current_a: 24.0 },
    ThrustCurveSample { thrust_g: 7000.0, current_a: 27.3 },
    ThrustCurveSample { thrust_g: 7500.0, current_a: 30.8 },
    ThrustCurveSample { thrust_g: 8000.0, current_a: 34.5 },
    ThrustCurveSample { thrust_g: 8500.0, current_a: 38.4 },
    ThrustCurveSample { thrust_g: 9000.0, current_a: 42.5 },
    ThrustCurveSample { thrust_g: 9500.0, current_a: 46.8 },
    ThrustCurveSample { thrust_g: 10000.0, current_a: 51.3 },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn default_curve() -> ThrustCurve {
        ThrustCurve::new(&DEFAULT_CALIBRATION).unwrap()
    }

    #[test]
    fn passes_through_its_own_samples() {
        let curve = default_curve();
        for s in &DEFAULT_CALIBRATION {
            let i = curve.current_at(s.thrust_g);
            assert!(
                (i - s.current_a).abs() < 1e-9,
                "expected {} A at {} g, got {}",
                s.current_a,
                s.thrust_g,
                i
            );
        }
    }

    #[test]
    fn no_overshoot_over_calibrated_range() {
        // Non-decreasing calibration currents must yield a non-decreasing
        // interpolant everywhere in the calibrated range.
        let curve = default_curve();
        let mut prev = curve.current_at(500.0);
        let mut thrust = 500.0;
        while thrust <= 10_000.0 {
            let i = curve.current_at(thrust);
            assert!(
                i >= prev - 1e-12,
                "current decreased from {} to {} at {} g",
                prev,
                i,
                thrust
            );
            prev = i;
            thrust += 7.3;
        }
    }

    #[test]
    fn interpolated_values_stay_within_bracketing_samples() {
        let curve = default_curve();
        for pair in DEFAULT_CALIBRATION.windows(2) {
            let mid = 0.5 * (pair[0].thrust_g + pair[1].thrust_g);
            let i = curve.current_at(mid);
            assert!(
                i >= pair[0].current_a && i <= pair[1].current_a,
                "midpoint current {} outside [{}, {}]",
                i,
                pair[0].current_a,
                pair[1].current_a
            );
        }
    }

    #[test]
    fn extrapolation_continues_boundary_trend() {
        let curve = default_curve();
        assert!(curve.current_at(11_000.0) > curve.current_at(10_000.0));
        assert!(curve.current_at(200.0) < curve.current_at(500.0));
        // Finite even for unphysical negative thrust
        assert!(curve.current_at(-100.0).is_finite());
    }

    #[test]
    fn rejects_short_table() {
        let samples = [ThrustCurveSample { thrust_g: 500.0, current_a: 0.9 }];
        match ThrustCurve::new(&samples) {
            Err(Error::InvalidCalibrationData(_)) => {}
            other => panic!("expected InvalidCalibrationData, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_increasing_thrust() {
        let samples = [
            ThrustCurveSample { thrust_g: 500.0, current_a: 0.9 },
            ThrustCurveSample { thrust_g: 1000.0, current_a: 1.7 },
            ThrustCurveSample { thrust_g: 1000.0, current_a: 2.6 },
        ];
        assert!(matches!(
            ThrustCurve::new(&samples),
            Err(Error::InvalidCalibrationData(_))
        ));
    }

    #[test]
    fn two_point_table_is_linear() {
        let samples = [
            ThrustCurveSample { thrust_g: 1000.0, current_a: 2.0 },
            ThrustCurveSample { thrust_g: 2000.0, current_a: 4.0 },
        ];
        let curve = ThrustCurve::new(&samples).unwrap();
        assert!((curve.current_at(1500.0) - 3.0).abs() < 1e-9);
        assert!((curve.current_at(3000.0) - 6.0).abs() < 1e-9);
    }
}
