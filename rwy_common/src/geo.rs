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

/// this module provides the geometry types for airport-scale geofencing.
/// We use the [geo](https://docs.rs/geo/latest/geo/index.html) crate as the storage foundation and
/// employ the Rust [new type](https://doc.rust-lang.org/rust-by-example/generics/new_types.html) pattern
/// to fix the value semantics: coordinates are decimal degrees with lon = x and lat = y, used as-is
/// in planar arithmetic. At runway scale the planar approximation is within centimeters, hence we
/// do not normalize coordinates or compute on the ellipsoid here.

use std::fmt;
use serde::{Serialize,Deserialize};
use serde::ser::{Serialize as SerializeTrait, Serializer, SerializeStruct};
use serde::de::{Deserialize as DeserializeTrait, Deserializer};

use geo::{Coord, Point, Rect};

pub type GeoCoord = Coord<f64>;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64.
/// Note that unlike normalizing wrappers we keep input values as-is since all computations
/// on these points are planar
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( lon, lat))
    }

    #[inline] pub fn longitude_degrees (&self) -> f64 { self.0.x() }
    #[inline] pub fn latitude_degrees (&self) -> f64 { self.0.y() }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }
    pub fn coord (&self) -> GeoCoord { self.0.0.clone() }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(), self.0.y())
    }
}

impl SerializeTrait for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.longitude_degrees())?;
        state.serialize_field("lat", &self.latitude_degrees())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct LonLat { lon: f64, lat: f64 }

impl<'de> DeserializeTrait<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<GeoPoint, D::Error> where D: Deserializer<'de> {
        let ll = LonLat::deserialize(deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat))
    }
}

/* #endregion GeoPoint */

/* #region GeoRect ***********************************************************************************************/

/// a rectangular query window, used to restrict external data source requests to the airport vicinity.
/// Note that geo::Rect::new() sorts the corner coordinates so the corner order of the input data
/// does not matter. Axis order towards external data sources is NOT fixed here - it is the
/// explicit contract of the respective query formatter (see rwy_watch::fr24::bounds_query)
#[derive(Debug,Clone,PartialEq)]
pub struct GeoRect(Rect);

impl GeoRect {
    pub fn from_wsen (west: f64, south: f64, east: f64, north: f64) -> Self {
        GeoRect( Rect::new( Coord{ x: west, y: south }, Coord{ x: east, y: north }))
    }

    pub fn from_min_max (sw: GeoPoint, ne: GeoPoint) -> Self {
        GeoRect( Rect::new( sw.coord(), ne.coord()))
    }

    pub fn rect<'a> (&'a self) -> &'a Rect { &self.0 }

    #[inline] pub fn west (&self) -> f64 { self.0.min().x }
    #[inline] pub fn east (&self) -> f64 { self.0.max().x }
    #[inline] pub fn south (&self) -> f64 { self.0.min().y }
    #[inline] pub fn north (&self) -> f64 { self.0.max().y }
}

impl fmt::Display for GeoRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{};{},{}]", self.west(), self.south(), self.east(), self.north())
    }
}

impl SerializeTrait for GeoRect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoRect", 4)?;
        state.serialize_field("west", &self.west())?;
        state.serialize_field("south", &self.south())?;
        state.serialize_field("east", &self.east())?;
        state.serialize_field("north", &self.north())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct Wsen { west: f64, south: f64, east: f64, north: f64 }

impl<'de> DeserializeTrait<'de> for GeoRect {
    fn deserialize<D>(deserializer: D) -> Result<GeoRect, D::Error> where D: Deserializer<'de> {
        let r = Wsen::deserialize(deserializer)?;
        Ok( GeoRect::from_wsen( r.west, r.south, r.east, r.north))
    }
}

/* #endregion GeoRect */

/* #region GeoPolygon **********************************************************************************************/

/// a closed planar polygon given by its ordered exterior ring. The ring is implicitly closed,
/// i.e. the last vertex connects back to the first and does not have to be repeated.
/// Containment uses ray casting and is independent of winding direction and starting vertex.
///
/// Invariant: a well-formed GeoPolygon has at least 3 vertices. We do not check this here -
/// containment on a degenerate ring is a precondition violation the owning registry has to
/// reject at load time
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(transparent)]
pub struct GeoPolygon( Vec<GeoPoint> );

impl GeoPolygon {
    pub fn from_geo_points (vertices: Vec<GeoPoint>) -> Self {
        GeoPolygon( vertices)
    }

    pub fn geo_points (&self) -> &[GeoPoint] { self.0.as_slice() }

    pub fn vertex_count (&self) -> usize { self.0.len() }

    /// answer if `p` is strictly inside this polygon, using the standard ray casting rule:
    /// a horizontal ray from `p` crosses an odd number of polygon edges.
    /// An edge straddles the ray iff exactly one of its vertex longitudes exceeds the query
    /// longitude - the strict inequality means edges of constant longitude never straddle, which
    /// also rules out the zero denominator in the crossing interpolation.
    /// Points exactly on an edge or vertex have an unspecified (but panic-free) result.
    /// O(vertex count) time, no allocation
    pub fn contains (&self, p: &GeoPoint) -> bool {
        let vs = &self.0;
        let n = vs.len();
        let lon = p.longitude_degrees();
        let lat = p.latitude_degrees();

        let mut inside = false;
        for i in 0..n {
            let (lon1, lat1) = (vs[i].longitude_degrees(), vs[i].latitude_degrees());
            let (lon2, lat2) = (vs[(i+1) % n].longitude_degrees(), vs[(i+1) % n].latitude_degrees());

            if (lon1 > lon) != (lon2 > lon) {
                let crossing_lat = lat1 + (lat2 - lat1) * (lon - lon1) / (lon2 - lon1);
                if lat < crossing_lat { inside = !inside }
            }
        }
        inside
    }
}

impl fmt::Display for GeoPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPolygon(");
        for (i,v) in self.0.iter().enumerate() {
            if i > 0 { write!(f, ","); }
            write!(f, "{}", v);
        }
        write!(f, ")")
    }
}

/* #endregion GeoPolygon */
