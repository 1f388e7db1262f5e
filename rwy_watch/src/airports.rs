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

/// the region registry: a static, validated table of watched airports with their
/// bounding query windows and named runway polygons, loaded once at startup from a
/// RON config file and immutable thereafter

use std::{collections::HashMap, path::Path};
use serde::{Serialize,Deserialize};
use rwy_common::geo::{GeoPolygon,GeoRect};
use rwy_common::load_config;

use crate::errors::{RwyWatchError,Result};

/// the ground footprint of one runway
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct Runway {
    pub name: String, // unique within the airport, used as lookup key and output label
    pub polygon: GeoPolygon,
}

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct AirportConfig {
    pub id: String, // IATA code, also the landing/departing discriminator
    pub name: String,
    pub bounds: GeoRect, // query window handed to the flight feed
    pub runways: Vec<Runway>, // config order is the classification iteration order
}

/// the immutable airport table. Construction validates what the classifier and the
/// geometry engine require as preconditions - a registry that loaded is safe to use
#[derive(Debug)]
pub struct AirportRegistry {
    airports: HashMap<String,AirportConfig>,
}

impl AirportRegistry {
    pub fn from_configs (configs: Vec<AirportConfig>) -> Result<Self> {
        let mut airports = HashMap::with_capacity( configs.len());

        for config in configs {
            validate_airport( &config)?;
            if let Some(prev) = airports.insert( config.id.clone(), config) {
                return Err( RwyWatchError::ConfigError( format!("duplicate airport id {:?}", prev.id)))
            }
        }

        Ok( AirportRegistry{ airports })
    }

    /// load the registry from a RON file holding a list of AirportConfig records
    pub fn load<P> (path: P) -> Result<Self> where P: AsRef<Path> {
        let configs: Vec<AirportConfig> = load_config( path)?;
        Self::from_configs( configs)
    }

    /// lookup of the region data for an airport id. Unregistered ids are a recoverable
    /// NoSuchAirport error, not a panic
    pub fn regions_for (&self, airport_id: &str) -> Result<&AirportConfig> {
        self.airports.get( airport_id).ok_or_else( || RwyWatchError::NoSuchAirport( airport_id.to_string()))
    }

    pub fn len (&self) -> usize { self.airports.len() }

    pub fn airport_ids (&self) -> impl Iterator<Item=&str> {
        self.airports.keys().map( |id| id.as_str())
    }
}

fn validate_airport (config: &AirportConfig) -> Result<()> {
    for (i,runway) in config.runways.iter().enumerate() {
        if runway.polygon.vertex_count() < 3 {
            return Err( RwyWatchError::ConfigError(
                format!("airport {}: degenerate polygon for runway {:?} ({} vertices)",
                        config.id, runway.name, runway.polygon.vertex_count())))
        }
        if config.runways[..i].iter().any( |r| r.name == runway.name) {
            return Err( RwyWatchError::ConfigError(
                format!("airport {}: duplicate runway name {:?}", config.id, runway.name)))
        }
    }
    Ok(())
}
