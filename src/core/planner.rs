use bon::Builder;
use serde::Serialize;

use crate::{
    core::{
        distance::{DistanceEstimator, LegSource},
        energy::EnergyModel,
        error::JourneyError,
        fuel::FuelCostModel,
        location::Location,
        recommender::{BatterySystem, ChargeRecommender},
    },
    prelude::*,
    quantity::{
        cost::Cost,
        distance::Miles,
        energy::KilowattHours,
        percent::Percent,
        price::PricePerLitre,
        time::Minutes,
    },
};

#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct JourneyRequest<'a> {
    pub origin: &'a Location,
    pub destination: &'a Location,
    pub fuel_price: PricePerLitre,
    pub primary_state_of_charge: Percent,
    pub secondary_state_of_charge: Percent,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JourneyEstimate {
    pub distance: Miles,
    pub travel_time: Minutes,
    pub fuel_cost: Cost,
    pub alternator_charge: KilowattHours,
    pub primary_state_of_charge_after: Percent,
    pub secondary_state_of_charge_after: Percent,
    pub recommended_system: BatterySystem,
    pub source: LegSource,
}

#[derive(Builder)]
pub struct Planner<E> {
    estimator: E,

    #[builder(default)]
    energy: EnergyModel,

    #[builder(default)]
    fuel: FuelCostModel,

    #[builder(default)]
    recommender: ChargeRecommender,
}

impl<E: DistanceEstimator> Planner<E> {
    #[instrument(
        skip_all,
        fields(origin = request.origin.name, destination = request.destination.name),
    )]
    pub async fn plan(
        &self,
        request: &JourneyRequest<'_>,
    ) -> Result<JourneyEstimate, JourneyError> {
        FuelCostModel::validate_price(request.fuel_price)?;
        ChargeRecommender::validate_state_of_charge(
            "primary state of charge",
            request.primary_state_of_charge,
        )?;
        ChargeRecommender::validate_state_of_charge(
            "secondary state of charge",
            request.secondary_state_of_charge,
        )?;
        if request.origin.name == request.destination.name {
            return Err(JourneyError::SameLocation(request.origin.name));
        }

        let leg = self.estimator.estimate(request.origin, request.destination).await?;
        let alternator_charge = self.energy.estimate(leg.travel_time);
        let fuel_cost = self.fuel.estimate(leg.distance, request.fuel_price)?;
        let recommendation = self.recommender.recommend(
            alternator_charge,
            request.primary_state_of_charge,
            request.secondary_state_of_charge,
        )?;
        debug!(?leg, ?recommendation);

        Ok(JourneyEstimate {
            distance: leg.distance,
            travel_time: leg.travel_time,
            fuel_cost,
            alternator_charge,
            primary_state_of_charge_after: recommendation.primary_after,
            secondary_state_of_charge_after: recommendation.secondary_after,
            recommended_system: recommendation.recommended,
            source: leg.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use approx::assert_abs_diff_eq;
    use async_trait::async_trait;

    use super::*;
    use crate::core::{
        distance::{Approximate, Leg, UnitSystem},
        error::RouteFailure,
        location::Catalog,
    };

    /// Fixed one-hour, forty-mile leg that counts its calls.
    #[derive(Default)]
    struct Fixed(AtomicUsize);

    #[async_trait]
    impl DistanceEstimator for Fixed {
        async fn estimate(&self, _: &Location, _: &Location) -> Result<Leg, JourneyError> {
            self.0.fetch_add(1, Ordering::Relaxed);
            Ok(Leg { distance: Miles(40.0), travel_time: Minutes(60), source: LegSource::Routed })
        }
    }

    struct Unavailable;

    #[async_trait]
    impl DistanceEstimator for Unavailable {
        async fn estimate(&self, _: &Location, _: &Location) -> Result<Leg, JourneyError> {
            Err(RouteFailure::NoRoute.into())
        }
    }

    fn request<'a>(origin: &'a Location, destination: &'a Location) -> JourneyRequest<'a> {
        JourneyRequest::builder()
            .origin(origin)
            .destination(destination)
            .fuel_price(PricePerLitre(1.65))
            .primary_state_of_charge(Percent(60.0))
            .secondary_state_of_charge(Percent(70.0))
            .build()
    }

    #[tokio::test]
    async fn plan_ok() -> Result {
        let catalog = Catalog::builtin();
        let planner = Planner::builder().estimator(Fixed::default()).build();
        let estimate =
            planner.plan(&request(catalog.lookup("Bristol")?, catalog.lookup("Cardiff")?)).await?;

        assert_eq!(estimate.distance, Miles(40.0));
        assert_eq!(estimate.travel_time, Minutes(60));
        assert_abs_diff_eq!(estimate.alternator_charge.0, 0.5);
        // 4.546 / 35 × 1.65 × 40 = 8.5724…
        assert_abs_diff_eq!(estimate.fuel_cost.0, 8.57);
        // 0.5 / 7.2 = 6.9%:
        assert_abs_diff_eq!(estimate.primary_state_of_charge_after.0, 66.9);
        assert_abs_diff_eq!(estimate.secondary_state_of_charge_after.0, 76.9);
        assert_eq!(estimate.recommended_system, BatterySystem::Primary);
        assert_eq!(estimate.source, LegSource::Routed);
        Ok(())
    }

    #[tokio::test]
    async fn plan_approximate_ok() -> Result {
        let catalog = Catalog::builtin();
        let planner = Planner::builder().estimator(Approximate::new(UnitSystem::Miles)).build();
        let (bristol, cardiff) = (catalog.lookup("Bristol")?, catalog.lookup("Cardiff")?);
        let there = planner.plan(&request(bristol, cardiff)).await?;
        let back = planner.plan(&request(cardiff, bristol)).await?;
        assert!(there.distance > Miles::ZERO);
        assert_eq!(there, back);
        Ok(())
    }

    #[tokio::test]
    async fn same_location_is_rejected() -> Result {
        let catalog = Catalog::builtin();
        let estimator = Fixed::default();
        let planner = Planner::builder().estimator(estimator).build();
        for location in catalog.iter() {
            let error = planner.plan(&request(location, location)).await.unwrap_err();
            assert!(matches!(error, JourneyError::SameLocation(name) if name == location.name));
        }
        assert_eq!(planner.estimator.0.load(Ordering::Relaxed), 0);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_estimating() -> Result {
        let catalog = Catalog::builtin();
        let planner = Planner::builder().estimator(Fixed::default()).build();
        let (bristol, cardiff) = (catalog.lookup("Bristol")?, catalog.lookup("Cardiff")?);

        let requests = [
            JourneyRequest { fuel_price: PricePerLitre(0.0), ..request(bristol, cardiff) },
            JourneyRequest { fuel_price: PricePerLitre(-1.0), ..request(bristol, cardiff) },
            JourneyRequest { primary_state_of_charge: Percent(-5.0), ..request(bristol, cardiff) },
            JourneyRequest {
                secondary_state_of_charge: Percent(101.0),
                ..request(bristol, cardiff)
            },
        ];
        for request in &requests {
            let error = planner.plan(request).await.unwrap_err();
            assert!(matches!(error, JourneyError::InvalidInput { .. }), "{request:?}");
        }
        assert_eq!(planner.estimator.0.load(Ordering::Relaxed), 0);
        Ok(())
    }

    #[tokio::test]
    async fn route_unavailable_is_surfaced() -> Result {
        let catalog = Catalog::builtin();
        let planner = Planner::builder().estimator(Unavailable).build();
        let error = planner
            .plan(&request(catalog.lookup("Bristol")?, catalog.lookup("St Ives")?))
            .await
            .unwrap_err();
        assert!(error.is_route_unavailable());
        Ok(())
    }
}
