use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::error::{JourneyError, ensure_within},
    quantity::{energy::KilowattHours, percent::Percent},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatterySystem {
    /// 12 V leisure battery bank.
    Primary,

    /// Portable AC power station.
    Secondary,
}

impl Display for BatterySystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary 12V system"),
            Self::Secondary => write!(f, "portable AC system"),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargeRecommendation {
    pub added: Percent,
    pub primary_after: Percent,
    pub secondary_after: Percent,
    pub recommended: BatterySystem,
}

/// Greedy policy: send the alternator charge to whichever battery ends up lower.
///
/// Both projections assume the whole charge went into that battery. Ties go to
/// [`BatterySystem::Secondary`].
#[derive(Copy, Clone, Debug)]
pub struct ChargeRecommender {
    pub capacity: KilowattHours,
}

impl ChargeRecommender {
    pub const DEFAULT_CAPACITY: KilowattHours = KilowattHours(7.2);

    pub fn validate_state_of_charge(
        field: &'static str,
        state_of_charge: Percent,
    ) -> Result<Percent, JourneyError> {
        ensure_within(field, state_of_charge.0, 0.0, Percent::FULL.0).map(Percent)
    }

    pub fn recommend(
        self,
        added_energy: KilowattHours,
        primary: Percent,
        secondary: Percent,
    ) -> Result<ChargeRecommendation, JourneyError> {
        ensure_within("added energy", added_energy.0, 0.0, f64::INFINITY)?;
        ensure_within("battery capacity", self.capacity.0, f64::MIN_POSITIVE, f64::INFINITY)?;
        let primary = Self::validate_state_of_charge("primary state of charge", primary)?;
        let secondary = Self::validate_state_of_charge("secondary state of charge", secondary)?;

        let added = Percent::from_proportion(added_energy / self.capacity).round_to_tenths();
        let primary_after = Self::project(primary, added);
        let secondary_after = Self::project(secondary, added);
        let recommended = if primary_after < secondary_after {
            BatterySystem::Primary
        } else {
            BatterySystem::Secondary
        };
        Ok(ChargeRecommendation { added, primary_after, secondary_after, recommended })
    }

    /// Charging only adds, and never past full.
    fn project(before: Percent, added: Percent) -> Percent {
        (before + added).round_to_tenths().min(Percent::FULL).max(before)
    }
}

impl Default for ChargeRecommender {
    fn default() -> Self {
        Self { capacity: Self::DEFAULT_CAPACITY }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn tie_goes_to_secondary() -> Result<(), JourneyError> {
        let recommendation = ChargeRecommender::default().recommend(
            KilowattHours(0.72),
            Percent(70.0),
            Percent(70.0),
        )?;
        assert_abs_diff_eq!(recommendation.added.0, 10.0);
        assert_abs_diff_eq!(recommendation.primary_after.0, 80.0);
        assert_abs_diff_eq!(recommendation.secondary_after.0, 80.0);
        assert_eq!(recommendation.recommended, BatterySystem::Secondary);
        Ok(())
    }

    #[test]
    fn lower_battery_is_recommended() -> Result<(), JourneyError> {
        let recommendation = ChargeRecommender::default().recommend(
            KilowattHours(0.72),
            Percent(60.0),
            Percent(70.0),
        )?;
        assert_abs_diff_eq!(recommendation.primary_after.0, 70.0);
        assert_abs_diff_eq!(recommendation.secondary_after.0, 80.0);
        assert_eq!(recommendation.recommended, BatterySystem::Primary);
        Ok(())
    }

    #[test]
    fn never_exceeds_full() -> Result<(), JourneyError> {
        let recommendation = ChargeRecommender::default().recommend(
            KilowattHours(100.0),
            Percent(99.0),
            Percent(99.0),
        )?;
        assert_eq!(recommendation.primary_after, Percent::FULL);
        assert_eq!(recommendation.secondary_after, Percent::FULL);
        Ok(())
    }

    #[test]
    fn never_below_before() -> Result<(), JourneyError> {
        let recommendation = ChargeRecommender::default().recommend(
            KilowattHours(0.0),
            Percent(42.04),
            Percent(100.0),
        )?;
        assert_eq!(recommendation.primary_after, Percent(42.04));
        assert_eq!(recommendation.secondary_after, Percent::FULL);
        assert_eq!(recommendation.recommended, BatterySystem::Primary);
        Ok(())
    }

    #[test]
    fn invalid_state_of_charge_is_rejected() {
        let recommender = ChargeRecommender::default();
        for (primary, secondary) in [(-0.1, 50.0), (50.0, 100.1), (f64::NAN, 50.0)] {
            assert!(matches!(
                recommender.recommend(KilowattHours(0.5), Percent(primary), Percent(secondary)),
                Err(JourneyError::InvalidInput { .. }),
            ));
        }
    }

    #[test]
    fn state_of_charge_bounds_are_inclusive() -> Result<(), JourneyError> {
        let recommender = ChargeRecommender::default();
        for (primary, secondary) in [(0.0, 100.0), (100.0, 0.0)] {
            let recommendation =
                recommender.recommend(KilowattHours(0.0), Percent(primary), Percent(secondary))?;
            assert_eq!(recommendation.primary_after, Percent(primary));
            assert_eq!(recommendation.secondary_after, Percent(secondary));
        }
        for state_of_charge in [Percent::ZERO, Percent::FULL] {
            let validated = ChargeRecommender::validate_state_of_charge("soc", state_of_charge)?;
            assert_eq!(validated, state_of_charge);
        }
        Ok(())
    }

    #[test]
    fn negative_energy_is_rejected() {
        assert!(
            ChargeRecommender::default()
                .recommend(KilowattHours(-0.1), Percent(50.0), Percent(50.0))
                .is_err()
        );
    }
}
