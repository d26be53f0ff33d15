use std::ops::RangeInclusive;

/// Foil-assist bands, inclusive on both ends. The full-performance
/// band sits strictly inside the active band.
pub const ACTIVE_TWS: RangeInclusive<f64> = 11.1..=39.9;
pub const ACTIVE_TWA: RangeInclusive<i32> = 71..=169;
pub const FULL_TWS: RangeInclusive<f64> = 16.0..=35.0;
pub const FULL_TWA: RangeInclusive<i32> = 80..=160;

/// Modeled boat-speed benefit while fully foil-borne.
pub const FOIL_SPEED_FACTOR: f64 = 0.04;

/// Classification of one sample against the nested foil zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoilZone {
    pub active: bool,
    pub full: bool,
}

/// Maps true wind speed and absolute wind angle onto the foil zones.
pub fn classify(tws: f64, abs_twa: i32) -> FoilZone {
    FoilZone {
        active: ACTIVE_TWS.contains(&tws) && ACTIVE_TWA.contains(&abs_twa),
        full: FULL_TWS.contains(&tws) && FULL_TWA.contains(&abs_twa),
    }
}

/// Extra distance attributable to full foil performance over one
/// sample, in the same unit family as SOG (nautical miles for knots).
pub fn distance_gain(sog: f64, duration_minutes: f64) -> f64 {
    sog * FOIL_SPEED_FACTOR * (duration_minutes / 60.0)
}

/// Minutes saved covering the sample's distance at foil speed instead
/// of the pre-foil baseline. Algebraically the distance and SOG cancel
/// out, leaving only the duration and the speed factor.
pub fn time_saved_minutes(duration_minutes: f64) -> f64 {
    duration_minutes * (1.0 - 1.0 / (1.0 + FOIL_SPEED_FACTOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_boundaries_are_inclusive() {
        assert!(classify(11.1, 71).active);
        assert!(classify(39.9, 169).active);
        assert!(!classify(11.0, 90).active);
        assert!(!classify(40.0, 90).active);
        assert!(!classify(20.0, 70).active);
        assert!(!classify(20.0, 170).active);

        assert!(classify(16.0, 80).full);
        assert!(classify(35.0, 160).full);
        assert!(!classify(15.9, 120).full);
        assert!(!classify(35.1, 120).full);
        assert!(!classify(25.0, 79).full);
        assert!(!classify(25.0, 161).full);
    }

    #[test]
    fn full_zone_is_nested_inside_active_zone() {
        // Grid of boundary and near-boundary values for both inputs.
        let tws_grid = [
            0.0, 11.0, 11.1, 11.2, 15.9, 16.0, 16.1, 25.0, 34.9, 35.0, 35.1, 39.8, 39.9, 40.0,
            50.0,
        ];
        for tws in tws_grid {
            for abs_twa in 0..=180 {
                let zone = classify(tws, abs_twa);
                if zone.full {
                    assert!(
                        zone.active,
                        "full-performance at tws={tws} twa={abs_twa} outside active zone"
                    );
                }
            }
        }
    }

    #[test]
    fn distance_gain_matches_reference_scenario() {
        // 20.5 kt for one minute at full performance.
        let gain = distance_gain(20.5, 1.0);
        assert!((gain - 0.013_666_6).abs() < 1e-5);
    }

    #[test]
    fn time_saved_matches_the_division_form() {
        // Same quantity computed the long way round: distance over the
        // baseline SOG minus distance over the boosted SOG.
        let sog = 17.3;
        let duration_minutes = 42.0;
        let distance = sog * (duration_minutes / 60.0);
        let expected = (distance / sog - distance / (sog * 1.04)) * 60.0;
        assert!((time_saved_minutes(duration_minutes) - expected).abs() < 1e-9);
    }

    #[test]
    fn no_gain_for_zero_duration() {
        assert_eq!(distance_gain(20.0, 0.0), 0.0);
        assert_eq!(time_saved_minutes(0.0), 0.0);
    }
}
