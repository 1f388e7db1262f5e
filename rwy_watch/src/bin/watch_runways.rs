/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::time::Instant;
use tokio::time::sleep;
use anyhow::Result;
use chrono::Utc;
use tracing::{info,warn};

use rwy_common::{define_cli, check_cli, load_config};
use rwy_watch::{classify_report, airports::AirportRegistry, fr24::{FlightFeedClient,FlightFeedConfig}};

define_cli! { ARGS [about="runway occupancy monitoring tool"] =
    airports_config: String [help="pathname of the airport region config", long, default_value="rwy_watch/configs/airports.ron"],
    feed_config: String [help="pathname of the flight feed config", long, default_value="rwy_watch/configs/feed.ron"],
    airport: String [help="IATA code of the airport to watch"]
}

#[tokio::main]
async fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_max_level( tracing::Level::INFO).init();

    // an invalid region table aborts startup - we never classify against unvalidated polygons
    let registry = AirportRegistry::load( &ARGS.airports_config)?;
    let airport = registry.regions_for( ARGS.airport.as_str())?;

    let feed_config: FlightFeedConfig = load_config( &ARGS.feed_config)?;
    let interval = feed_config.polling_interval;
    let client = FlightFeedClient::new( feed_config)?;

    info!("watching {} ({}), {} runways, bounds {}", airport.id, airport.name, airport.runways.len(), airport.bounds);

    loop {
        let t_start = Instant::now();

        match client.fetch_reports( &airport.bounds).await {
            Ok(reports) => {
                println!("------------------ {} | {} aircraft near {}", Utc::now().format("%Y-%m-%d %H:%M:%SZ"), reports.len(), airport.id);
                for report in &reports {
                    for event in classify_report( report, airport) {
                        println!("{event}");
                    }
                }
            }
            Err(e) => warn!("flight feed fetch failed: {e}")
        }

        sleep( interval.saturating_sub( t_start.elapsed())).await; // sleep for remainder of polling interval
    }
}
