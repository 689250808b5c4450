//! [openrouteservice](https://openrouteservice.org/dev/#/api-docs/v2/directions) driving directions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    core::{
        distance::{DistanceEstimator, Leg, LegSource},
        error::{JourneyError, RouteFailure},
        location::Location,
    },
    prelude::*,
    quantity::{distance::Miles, time::Minutes},
};

pub struct Api {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl Api {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openrouteservice.org";

    pub fn new(base_url: Url, api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("alfred/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base_url, api_key })
    }

    #[instrument(skip_all, fields(origin = origin.name, destination = destination.name))]
    pub async fn get_route(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<Route, RouteFailure> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RouteFailure::NoRoute)?
            .pop_if_empty()
            .extend(["v2", "directions", "driving-car"]);
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("start", &format!("{},{}", origin.longitude, origin.latitude))
            .append_pair("end", &format!("{},{}", destination.longitude, destination.latitude));

        debug!("requesting…");
        let directions = async {
            self.client.get(url).send().await?.error_for_status()?.json::<Directions>().await
        }
        .await
        // The URL carries the API key:
        .map_err(reqwest::Error::without_url)?;
        let route = directions.features.into_iter().next().ok_or(RouteFailure::NoRoute)?;
        debug!(n_points = route.geometry.coordinates.len(), "received");
        Ok(route)
    }
}

#[async_trait]
impl DistanceEstimator for Api {
    async fn estimate(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<Leg, JourneyError> {
        let summary = self.get_route(origin, destination).await?.properties.summary;
        let (Some(metres), Some(seconds)) = (summary.distance, summary.duration) else {
            return Err(RouteFailure::MissingSummary.into());
        };
        if !(metres.is_finite() && seconds.is_finite() && metres >= 0.0 && seconds >= 0.0) {
            return Err(RouteFailure::InvalidSummary { distance: metres, duration: seconds }.into());
        }
        let leg = Leg {
            distance: Miles::from_metres(metres).round_to_tenths(),
            travel_time: Minutes::from_seconds(seconds),
            source: LegSource::Routed,
        };
        info!(distance = %leg.distance, travel_time = %leg.travel_time, "routed");
        Ok(leg)
    }
}

#[derive(Deserialize)]
struct Directions {
    #[serde(default)]
    features: Vec<Route>,
}

#[derive(Deserialize)]
pub struct Route {
    pub geometry: Geometry,
    pub properties: RouteProperties,
}

#[derive(Deserialize)]
pub struct Geometry {
    /// Longitude and latitude pairs.
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
pub struct RouteProperties {
    #[serde(default)]
    pub summary: Summary,
}

/// Missing for a zero-length route.
#[derive(Default, Deserialize)]
pub struct Summary {
    /// Metres.
    pub distance: Option<f64>,

    /// Seconds.
    pub duration: Option<f64>,
}
