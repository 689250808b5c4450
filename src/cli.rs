use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use reqwest::Url;

use crate::{
    api::openrouteservice,
    core::distance::UnitSystem,
    prelude::*,
    quantity::{energy::KilowattHours, percent::Percent, price::PricePerLitre},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate distance, travel time, fuel cost, and alternator charge of a journey.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),

    /// List the known locations.
    #[clap(name = "locations")]
    Locations,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Origin location name.
    #[clap(long = "from")]
    pub origin: String,

    /// Destination location name.
    #[clap(long = "to")]
    pub destination: String,

    /// Current fuel price per litre, between 1.00 and 2.50.
    #[clap(long = "fuel-price", default_value = "1.65", env = "FUEL_PRICE_PER_LITRE")]
    pub fuel_price: PricePerLitre,

    #[clap(flatten)]
    pub battery: BatteryArgs,

    #[clap(flatten)]
    pub distance: DistanceArgs,

    /// Print the estimate as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// State of charge of the 12V leisure battery bank.
    #[clap(long = "primary-soc", env = "PRIMARY_SOC_PERCENT")]
    pub primary_state_of_charge: Percent,

    /// State of charge of the portable AC power station.
    #[clap(long = "secondary-soc", env = "SECONDARY_SOC_PERCENT")]
    pub secondary_state_of_charge: Percent,

    /// Usable capacity the alternator charge is projected onto.
    #[clap(long = "battery-capacity-kwh", default_value = "7.2", env = "BATTERY_CAPACITY_KWH")]
    pub capacity: KilowattHours,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Straight-line distance at an average speed, works offline.
    #[default]
    Approximate,

    /// Road distance and duration from openrouteservice, with the approximation as a fallback.
    Routing,
}

#[derive(Parser)]
pub struct DistanceArgs {
    #[clap(long, value_enum, default_value_t, env = "DISTANCE_STRATEGY")]
    pub strategy: Strategy,

    /// Constants of the approximate distance.
    #[clap(long, value_enum, default_value_t, env = "UNIT_SYSTEM")]
    pub unit_system: UnitSystem,

    #[clap(flatten)]
    pub routing: RoutingArgs,
}

#[derive(Parser)]
pub struct RoutingArgs {
    #[clap(long = "openrouteservice-api-key", env = "OPENROUTESERVICE_API_KEY")]
    pub api_key: Option<String>,

    #[clap(
        long = "openrouteservice-base-url",
        env = "OPENROUTESERVICE_BASE_URL",
        default_value = openrouteservice::Api::DEFAULT_BASE_URL,
    )]
    pub base_url: Url,

    /// Give up on the routing service after this long.
    #[clap(long = "routing-timeout", env = "ROUTING_TIMEOUT", default_value = "10s")]
    timeout: humantime::Duration,
}

impl RoutingArgs {
    pub fn timeout(&self) -> Duration {
        self.timeout.into()
    }

    pub fn new_client(&self) -> Result<openrouteservice::Api> {
        let api_key = self
            .api_key
            .clone()
            .filter(|api_key| !api_key.is_empty())
            .context("the routing strategy requires `--openrouteservice-api-key`")?;
        openrouteservice::Api::new(self.base_url.clone(), api_key, self.timeout())
    }
}
