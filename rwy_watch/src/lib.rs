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

//! runway occupancy monitoring: classify aircraft position reports against the
//! runway polygons of a watched airport.
//! The core (geometry, region registry, classifier) is pure and stateless - the only
//! blocking operation is the flight feed fetch in `fr24`, owned by the driver binary

use std::fmt;
use serde::{Serialize,Deserialize};
use rwy_common::geo::GeoPoint;

pub mod airports;
use airports::AirportConfig;

pub mod fr24;

pub mod errors;

/// a single aircraft position report as obtained from the flight feed.
/// All fields except the callsign may be absent - the feed routinely delivers partial
/// entries and those are regular input, not errors
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct PositionReport {
    pub callsign: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub origin: Option<String>, // IATA code of flight plan origin
    pub destination: Option<String>, // IATA code of flight plan destination
}

impl PositionReport {
    /// the report position, if the report has one
    pub fn position (&self)->Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some( GeoPoint::from_lon_lat_degrees( lon, lat)),
            _ => None
        }
    }
}

impl fmt::Display for PositionReport {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "PositionReport( callsign: {}", self.callsign);
        if let Some(lat) = self.latitude { write!( f, ", lat: {}", lat); }
        if let Some(lon) = self.longitude { write!( f, ", lon: {}", lon); }
        if let Some(org) = &self.origin { write!( f, ", origin: {}", org); }
        if let Some(dst) = &self.destination { write!( f, ", destination: {}", dst); }
        write!( f, ")")
    }
}

/// what an aircraft inside a runway polygon is doing there, derived from whether its
/// flight plan destination is the watched airport
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub enum RunwayUse {
    Landing,
    Departing,
}

impl fmt::Display for RunwayUse {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunwayUse::Landing => write!( f, "LANDING"),
            RunwayUse::Departing => write!( f, "DEPARTING"),
        }
    }
}

/// a detected instance of an aircraft position inside a runway polygon during one
/// polling cycle. Events have no identity and are not deduplicated - an aircraft that
/// stays on the runway regenerates its event every cycle
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct OccupancyEvent {
    pub runway: String,
    pub callsign: String,
    pub origin: String, // empty if the report had no origin code
    pub destination: String, // empty if the report had no destination code
    pub usage: RunwayUse,
}

impl fmt::Display for OccupancyEvent {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{} -> {} | {} to {} | {}", self.runway, self.callsign, self.origin, self.destination, self.usage)
    }
}

/// test a position report against every runway polygon of the given airport, in config
/// order, and produce one OccupancyEvent per containing polygon (overlapping polygons
/// yield one event each). Reports without a resolvable position produce no events.
/// Pure function - no I/O, no errors, safe to call concurrently across reports
pub fn classify_report (report: &PositionReport, airport: &AirportConfig) -> Vec<OccupancyEvent> {
    let mut events = Vec::new();

    if let Some(pos) = report.position() {
        for runway in &airport.runways {
            if runway.polygon.contains( &pos) {
                let usage = if report.destination.as_deref() == Some( airport.id.as_str()) {
                    RunwayUse::Landing
                } else {
                    RunwayUse::Departing
                };

                events.push( OccupancyEvent {
                    runway: runway.name.clone(),
                    callsign: report.callsign.clone(),
                    origin: report.origin.clone().unwrap_or_default(),
                    destination: report.destination.clone().unwrap_or_default(),
                    usage,
                });
            }
        }
    }

    events
}
