use crate::prize_pool::PrizeSummary;

/// Geometry and timing constants for the wheel animation, hoisted out of the
/// UI so every consumer spins with the same convention.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    /// Fixed angle of the visual pointer, degrees from the first wedge
    /// boundary in the drawing direction.
    pub pointer_deg: f64,
    /// Extra full rotations added to every spin.
    pub turns: u32,
    /// Smallest net rotation that still reads as a spin.
    pub min_delta_deg: f64,
    /// Duration of the rotation transition.
    pub spin_duration_ms: u32,
    /// Extra time the spin control stays locked after the transition ends.
    pub settle_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            pointer_deg: 270.0,
            turns: 5,
            min_delta_deg: 20.0,
            spin_duration_ms: 3200,
            settle_ms: 80,
        }
    }
}

/// Wedge count drawn while the prize list has not loaded yet.
pub const PLACEHOLDER_WEDGES: usize = 8;

/// One angular slice of the wheel, derived fresh from the prize list every
/// render.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub name: String,
    pub start_deg: f64,
    pub end_deg: f64,
    pub mid_deg: f64,
}

/// Maps any angle into [0, 360).
pub fn normalize_deg(x: f64) -> f64 {
    ((x % 360.0) + 360.0) % 360.0
}

/// One equal wedge per prize, in server order. An empty list yields
/// unlabeled placeholders so the wheel still renders.
pub fn build_wedges(prizes: &[PrizeSummary]) -> Vec<Wedge> {
    let n = if prizes.is_empty() {
        PLACEHOLDER_WEDGES
    } else {
        prizes.len()
    };
    let slice = 360.0 / n as f64;
    (0..n)
        .map(|i| {
            let start = i as f64 * slice;
            Wedge {
                index: i,
                name: prizes.get(i).map(|p| p.name.clone()).unwrap_or_default(),
                start_deg: start,
                end_deg: start + slice,
                mid_deg: start + slice / 2.0,
            }
        })
        .collect()
}

/// Where the wheel should end up after a spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Absolute angle to rotate to; never less than the current angle, so
    /// the wheel never visibly rewinds.
    pub target_angle: f64,
    /// False when the server gave no usable wedge; the wheel still moves
    /// but must not point at a specific prize.
    pub aligned: bool,
}

/// Plans the rotation that parks the center of the winning wedge under the
/// pointer, with extra full turns for effect.
pub fn plan_spin(
    config: &WheelConfig,
    current_angle: f64,
    wedge_index: Option<i64>,
    wedges_count: Option<i64>,
) -> SpinPlan {
    let (k, n) = match (wedge_index, wedges_count) {
        (Some(k), Some(n)) if n > 0 && k >= 0 && k < n => (k as f64, n as f64),
        _ => {
            log::warn!(
                "unusable wedge data (index {:?} of {:?}), falling back to a full turn",
                wedge_index,
                wedges_count
            );
            return SpinPlan {
                target_angle: current_angle + 360.0,
                aligned: false,
            };
        }
    };

    let slice = 360.0 / n;
    let mid = k * slice + slice / 2.0;
    let target_stop = normalize_deg(config.pointer_deg - mid);
    let mut delta = normalize_deg(target_stop - normalize_deg(current_angle));
    if delta < config.min_delta_deg {
        delta += 360.0;
    }
    SpinPlan {
        target_angle: current_angle + f64::from(config.turns) * 360.0 + delta,
        aligned: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str) -> PrizeSummary {
        PrizeSummary {
            id,
            name: name.into(),
            value: None,
            weight: 1,
        }
    }

    #[test]
    fn test_normalize_deg() {
        assert_eq!(normalize_deg(0.0), 0.0);
        assert_eq!(normalize_deg(-90.0), 270.0);
        assert_eq!(normalize_deg(725.0), 5.0);
    }

    #[test]
    fn test_wedges_follow_server_order() {
        let prizes = vec![summary(1, "Coffee"), summary(2, "Donut")];
        let wedges = build_wedges(&prizes);
        assert_eq!(wedges.len(), 2);
        assert_eq!(wedges[0].name, "Coffee");
        assert_eq!(wedges[0].start_deg, 0.0);
        assert_eq!(wedges[0].mid_deg, 90.0);
        assert_eq!(wedges[1].start_deg, 180.0);
        assert_eq!(wedges[1].end_deg, 360.0);
    }

    #[test]
    fn test_empty_pool_yields_placeholders() {
        let wedges = build_wedges(&[]);
        assert_eq!(wedges.len(), PLACEHOLDER_WEDGES);
        assert!(wedges.iter().all(|w| w.name.is_empty()));
    }

    #[test]
    fn test_winning_wedge_lands_under_pointer() {
        let config = WheelConfig::default();
        let plan = plan_spin(&config, 0.0, Some(3), Some(8));
        assert!(plan.aligned);
        // n=8, k=3: mid = 157.5, target stop = normalize(270 - 157.5) = 112.5
        assert_eq!(plan.target_angle, 5.0 * 360.0 + 112.5);
        let mid = 3.0 * 45.0 + 22.5;
        assert_eq!(normalize_deg(plan.target_angle + mid), config.pointer_deg);
    }

    #[test]
    fn test_alignment_holds_from_any_start_angle() {
        let config = WheelConfig::default();
        for start in [0.0, 90.0, 1912.5, 3601.0] {
            for k in 0..6 {
                let plan = plan_spin(&config, start, Some(k), Some(6));
                let mid = k as f64 * 60.0 + 30.0;
                let landed = normalize_deg(plan.target_angle + mid);
                assert!((landed - config.pointer_deg).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_never_a_micro_spin() {
        let config = WheelConfig::default();
        // Land wedge 3 of 8, then ask for the same wedge again: the raw
        // delta is zero, so a full extra turn keeps the spin visible.
        let first = plan_spin(&config, 0.0, Some(3), Some(8));
        let second = plan_spin(&config, first.target_angle, Some(3), Some(8));
        let net = second.target_angle - first.target_angle;
        assert!(net >= f64::from(config.turns) * 360.0 + config.min_delta_deg);
    }

    #[test]
    fn test_angle_is_monotonic() {
        let config = WheelConfig::default();
        let mut angle = 0.0;
        for k in [2, 2, 5, 0, 7] {
            let plan = plan_spin(&config, angle, Some(k), Some(8));
            assert!(plan.target_angle > angle);
            angle = plan.target_angle;
        }
    }

    #[test]
    fn test_bad_wedge_data_still_rotates() {
        let config = WheelConfig::default();
        for (k, n) in [
            (None, None),
            (Some(3), None),
            (None, Some(8)),
            (Some(8), Some(8)),
            (Some(-1), Some(8)),
            (Some(0), Some(0)),
        ] {
            let plan = plan_spin(&config, 45.0, k, n);
            assert!(!plan.aligned);
            assert_eq!(plan.target_angle, 45.0 + 360.0);
        }
    }
}
