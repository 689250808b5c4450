use crate::quantity::{energy::KilowattHours, time::Minutes};

/// Flat-rate contribution of the DC-DC alternator charger while driving.
#[derive(Copy, Clone, Debug)]
pub struct EnergyModel {
    pub charge_per_hour: KilowattHours,
}

impl EnergyModel {
    /// Average of a 40 A charger over a drive, regardless of engine speed.
    pub const ALTERNATOR_40A: Self = Self { charge_per_hour: KilowattHours(0.5) };

    pub fn estimate(self, travel_time: Minutes) -> KilowattHours {
        KilowattHours(travel_time.as_hours() * self.charge_per_hour.0).round_to_hundredths()
    }
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self::ALTERNATOR_40A
    }
}
