#![allow(clippy::doc_markdown)]

mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, PlanArgs, Strategy},
    core::{
        distance::{Approximate, DistanceEstimator, Fallback},
        location::Catalog,
        planner::{JourneyRequest, Planner},
        recommender::ChargeRecommender,
    },
    prelude::*,
    tables::{build_catalog_table, build_estimate_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Plan(args) => {
            let approximate = Approximate::new(args.distance.unit_system);
            match args.distance.strategy {
                Strategy::Approximate => plan(&args, approximate).await?,
                Strategy::Routing => {
                    let routing = args.distance.routing.new_client()?;
                    plan(&args, Fallback { preferred: routing, fallback: approximate }).await?;
                }
            }
        }
        Command::Locations => {
            println!("{}", build_catalog_table(Catalog::builtin()));
        }
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all)]
async fn plan(args: &PlanArgs, estimator: impl DistanceEstimator) -> Result {
    let catalog = Catalog::builtin();
    let request = JourneyRequest::builder()
        .origin(catalog.lookup(&args.origin)?)
        .destination(catalog.lookup(&args.destination)?)
        .fuel_price(args.fuel_price)
        .primary_state_of_charge(args.battery.primary_state_of_charge)
        .secondary_state_of_charge(args.battery.secondary_state_of_charge)
        .build();
    let estimate = Planner::builder()
        .estimator(estimator)
        .recommender(ChargeRecommender { capacity: args.battery.capacity })
        .build()
        .plan(&request)
        .await
        .context("failed to plan the journey")?;
    info!(
        distance = %estimate.distance,
        travel_time = %estimate.travel_time,
        recommended = %estimate.recommended_system,
        "planned",
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("{}", build_estimate_table(&request, &estimate));
    }
    Ok(())
}
