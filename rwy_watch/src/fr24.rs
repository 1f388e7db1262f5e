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

/// glue to the external flight tracking feed (FlightRadar24 live feed format).
/// This is deliberately thin - the feed response is a JSON object mapping flight ids to
/// positional arrays, and entries are routinely partial. We therefore parse leniently and
/// map anything missing or mistyped to absent report fields instead of failing the cycle

use std::time::Duration;
use serde::{Serialize,Deserialize};
use serde_json::Value;
use rwy_common::geo::GeoRect;

use crate::PositionReport;
use crate::errors::Result;

/// positions of the report fields in a feed entry array
const IDX_LAT: usize = 1;
const IDX_LON: usize = 2;
const IDX_ORIGIN: usize = 11;
const IDX_DESTINATION: usize = 12;
const IDX_FLIGHT: usize = 13;
const IDX_CALLSIGN: usize = 16;

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct FlightFeedConfig {
    pub base_url: String, // e.g. "https://data-cloud.flightradar24.com/zones/fcgi/feed.js"
    pub polling_interval: Duration,
    pub request_timeout: Duration,
}

pub struct FlightFeedClient {
    config: FlightFeedConfig,
    client: reqwest::Client,
}

impl FlightFeedClient {
    pub fn new (config: FlightFeedConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout( config.request_timeout)
            .build()?;
        Ok( FlightFeedClient{ config, client })
    }

    pub fn polling_interval (&self) -> Duration { self.config.polling_interval }

    /// fetch the current position reports for aircraft within `bounds`.
    /// Network and response failures are returned to the driver loop, which owns the
    /// retry policy - a failed cycle must not terminate monitoring
    pub async fn fetch_reports (&self, bounds: &GeoRect) -> Result<Vec<PositionReport>> {
        let response = self.client.get( self.config.base_url.as_str())
            .query( &[("bounds", bounds_query( bounds).as_str())])
            .send().await?
            .error_for_status()?;

        let feed: Value = response.json().await?;
        Ok( reports_from_feed( &feed))
    }
}

/// render the feed's `bounds` request argument from a query window.
/// THIS IS THE AXIS ORDER CONTRACT with the feed: four decimal degree values as
/// "north,south,west,east" (latitudes first, then longitudes)
pub fn bounds_query (bounds: &GeoRect) -> String {
    format!("{},{},{},{}", bounds.north(), bounds.south(), bounds.west(), bounds.east())
}

/// extract position reports from a feed response object. The response maps flight ids to
/// entry arrays plus some scalar bookkeeping fields ("full_count", "version") which we skip.
/// Malformed entries yield reports with absent fields, never errors
pub fn reports_from_feed (feed: &Value) -> Vec<PositionReport> {
    let mut reports = Vec::new();

    if let Some(map) = feed.as_object() {
        for (_id, entry) in map {
            if let Some(fields) = entry.as_array() {
                reports.push( report_from_entry( fields));
            }
        }
    }
    reports
}

fn report_from_entry (fields: &[Value]) -> PositionReport {
    PositionReport {
        callsign: str_field( fields, IDX_CALLSIGN)
            .or_else( || str_field( fields, IDX_FLIGHT))
            .unwrap_or_default(),
        latitude: f64_field( fields, IDX_LAT),
        longitude: f64_field( fields, IDX_LON),
        origin: str_field( fields, IDX_ORIGIN),
        destination: str_field( fields, IDX_DESTINATION),
    }
}

fn f64_field (fields: &[Value], idx: usize) -> Option<f64> {
    fields.get( idx).and_then( |v| v.as_f64())
}

// empty strings mean "not reported" in the feed so we map them to absent
fn str_field (fields: &[Value], idx: usize) -> Option<String> {
    fields.get( idx)
        .and_then( |v| v.as_str())
        .filter( |s| !s.is_empty())
        .map( |s| s.to_string())
}
