use async_trait::async_trait;
use serde::Serialize;

use crate::{
    core::{error::JourneyError, location::Location, travel_time::TravelTimeModel},
    prelude::*,
    quantity::{
        distance::{Kilometres, Miles},
        speed::{KilometresPerHour, MilesPerHour},
        time::Minutes,
    },
};

/// Distance and duration between two points.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    /// Rounded to tenths of a mile.
    pub distance: Miles,
    pub travel_time: Minutes,
    pub source: LegSource,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegSource {
    /// Straight line over the coordinate grid at a constant speed.
    Approximate,

    /// Road distance and duration from the routing service.
    Routed,
}

#[async_trait]
pub trait DistanceEstimator: Sync {
    async fn estimate(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<Leg, JourneyError>;
}

/// Constants of the approximate strategy, which must stay together.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UnitSystem {
    /// 69 miles per degree at 40 mph.
    #[default]
    Miles,

    /// 111 kilometres per degree at 65 km/h.
    Kilometres,
}

/// Planar distance over latitude and longitude degrees.
///
/// Not geodesic: it ignores the meridian convergence, so east-west distances are overestimated
/// away from the equator. Good enough as a stand-in when no road data is available.
///
/// The distance is rounded and the travel time derived in the configured unit system. Only the
/// reported distance is then converted to miles.
#[derive(Copy, Clone, Debug)]
pub struct Approximate {
    unit_system: UnitSystem,
}

impl Approximate {
    pub const MILES_PER_DEGREE: Miles = Miles(69.0);
    pub const MILES_TRAVEL_TIME: TravelTimeModel<MilesPerHour> =
        TravelTimeModel { average_speed: MilesPerHour(40.0) };

    pub const KILOMETRES_PER_DEGREE: Kilometres = Kilometres(111.0);
    pub const KILOMETRES_TRAVEL_TIME: TravelTimeModel<KilometresPerHour> =
        TravelTimeModel { average_speed: KilometresPerHour(65.0) };

    pub const fn new(unit_system: UnitSystem) -> Self {
        Self { unit_system }
    }

    pub fn leg(&self, origin: &Location, destination: &Location) -> Leg {
        let degrees = (destination.latitude - origin.latitude)
            .hypot(destination.longitude - origin.longitude);
        let (distance, travel_time) = match self.unit_system {
            UnitSystem::Miles => {
                let distance = Miles(degrees * Self::MILES_PER_DEGREE.0).round_to_tenths();
                (distance, Self::MILES_TRAVEL_TIME.estimate(distance))
            }
            UnitSystem::Kilometres => {
                let distance =
                    Kilometres(degrees * Self::KILOMETRES_PER_DEGREE.0).round_to_tenths();
                let travel_time = Self::KILOMETRES_TRAVEL_TIME.estimate(distance);
                (Miles::from(distance).round_to_tenths(), travel_time)
            }
        };
        Leg { distance, travel_time, source: LegSource::Approximate }
    }
}

#[async_trait]
impl DistanceEstimator for Approximate {
    async fn estimate(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<Leg, JourneyError> {
        Ok(self.leg(origin, destination))
    }
}

/// Try the preferred estimator and fall back when the route is unavailable.
pub struct Fallback<P, F> {
    pub preferred: P,
    pub fallback: F,
}

#[async_trait]
impl<P: DistanceEstimator, F: DistanceEstimator> DistanceEstimator for Fallback<P, F> {
    async fn estimate(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<Leg, JourneyError> {
        match self.preferred.estimate(origin, destination).await {
            Err(error) if error.is_route_unavailable() => {
                let error = Error::from(error);
                warn!(
                    origin = origin.name,
                    destination = destination.name,
                    "{error:#}, falling back",
                );
                self.fallback.estimate(origin, destination).await
            }
            result => result,
        }
    }
}
