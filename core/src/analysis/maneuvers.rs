/// Counts sail changes and tacks/gybes across the decoded sequence.
///
/// Only decoded samples feed the tracker, so skipped waypoints leave
/// its memory untouched. A zero wind angle (dead downwind or upwind)
/// is transparent to the sign memory: it neither triggers a maneuver
/// nor forgets which side of the wind the boat was on.
#[derive(Debug, Default)]
pub struct ManeuverTracker {
    prev_sail: Option<String>,
    prev_twa_sign: Option<i32>,
    sail_changes: u32,
    gybe_tack_count: u32,
}

impl ManeuverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, sail: &str, twa: i32) {
        if let Some(prev) = self.prev_sail.as_deref() {
            if sail != prev {
                self.sail_changes += 1;
            }
        }
        self.prev_sail = Some(sail.to_string());

        let sign = twa.signum();
        if sign != 0 {
            if let Some(prev_sign) = self.prev_twa_sign {
                if sign != prev_sign {
                    self.gybe_tack_count += 1;
                }
            }
            self.prev_twa_sign = Some(sign);
        }
    }

    pub fn sail_changes(&self) -> u32 {
        self.sail_changes
    }

    pub fn gybe_tack_count(&self) -> u32 {
        self.gybe_tack_count
    }
}
