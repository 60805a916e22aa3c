use serde::{Deserialize, Serialize};

use crate::profile::{recommend_water_intake, Profile};

/// Daily target used before a profile exists.
pub const DEFAULT_WATER_TARGET_L: f64 = 2.5;

/// Litres consumed today. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaterLog(f64);

impl WaterLog {
    /// Clamps negative and non-finite amounts to zero.
    pub fn new(liters: f64) -> Self {
        if liters.is_finite() && liters > 0.0 {
            Self(liters)
        } else {
            Self(0.0)
        }
    }

    pub fn liters(self) -> f64 {
        self.0
    }

    pub fn add(self, delta: f64) -> Self {
        if !delta.is_finite() {
            return self;
        }
        Self::new(self.0 + delta)
    }

    /// Percentage of `target`, capped at 100.
    pub fn progress(self, target: f64) -> u32 {
        if target <= 0.0 {
            return 0;
        }
        ((self.0 / target) * 100.0).round().min(100.0) as u32
    }
}

pub fn water_target(profile: Option<&Profile>) -> f64 {
    profile
        .and_then(|p| recommend_water_intake(p.weight).ok())
        .unwrap_or(DEFAULT_WATER_TARGET_L)
}

/// True when a change moved consumption from below the target to at or above it.
pub fn crossed_target(before: WaterLog, after: WaterLog, target: f64) -> bool {
    before.0 < target && after.0 >= target
}

#[cfg(test)]
mod water_tests {
    use super::*;
    use crate::profile::ProfileForm;

    #[test]
    fn add_never_goes_below_zero() {
        let log = WaterLog::new(0.5);
        assert_eq!(log.add(-10.0).liters(), 0.0);
        assert_eq!(log.add(-0.25).liters(), 0.25);
        assert_eq!(WaterLog::default().add(-1e9).liters(), 0.0);
        assert_eq!(log.add(f64::NAN), log);
        assert_eq!(WaterLog::new(-3.0).liters(), 0.0);
    }

    #[test]
    fn progress_is_capped() {
        assert_eq!(WaterLog::new(1.25).progress(2.5), 50);
        assert_eq!(WaterLog::new(5.0).progress(2.5), 100);
        assert_eq!(WaterLog::new(1.0).progress(0.0), 0);
    }

    #[test]
    fn target_defaults_without_profile() {
        assert_eq!(water_target(None), 2.5);
        let profile = ProfileForm::default().into_profile().unwrap();
        assert_eq!(water_target(Some(&profile)), 2.3);
    }

    #[test]
    fn crossing_detection() {
        let target = 2.0;
        assert!(crossed_target(WaterLog::new(1.75), WaterLog::new(2.0), target));
        assert!(!crossed_target(WaterLog::new(2.0), WaterLog::new(2.25), target));
        assert!(!crossed_target(WaterLog::new(1.0), WaterLog::new(1.5), target));
    }
}
