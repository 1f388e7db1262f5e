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

use rwy_common::geo::*;

// run with "cargo test -p rwy_common -- --nocapture"

fn unit_square ()->GeoPolygon {
    GeoPolygon::from_geo_points( vec![
        GeoPoint::from_lon_lat_degrees( 0.0, 0.0),
        GeoPoint::from_lon_lat_degrees( 1.0, 0.0),
        GeoPoint::from_lon_lat_degrees( 1.0, 1.0),
        GeoPoint::from_lon_lat_degrees( 0.0, 1.0),
    ])
}

// the Glasgow "Runway 1" quad from the reference config
fn gla_runway ()->GeoPolygon {
    GeoPolygon::from_geo_points( vec![
        GeoPoint::from_lon_lat_degrees( -4.419115996106755, 55.88037245091571),
        GeoPoint::from_lon_lat_degrees( -4.417871295053562, 55.879722244215095),
        GeoPoint::from_lon_lat_degrees( -4.4505702926011645, 55.86223948277189),
        GeoPoint::from_lon_lat_degrees( -4.451257240957553, 55.86296170786279),
    ])
}

#[test]
fn test_unit_square () {
    let square = unit_square();

    assert!( square.contains( &GeoPoint::from_lon_lat_degrees( 0.5, 0.5)));
    assert!( !square.contains( &GeoPoint::from_lon_lat_degrees( 1.5, 0.5)));

    // boundary point - result is unspecified but must not panic
    let on_edge = square.contains( &GeoPoint::from_lon_lat_degrees( 1.0, 0.5));
    println!("boundary point (1.0,0.5) -> inside={}", on_edge);
}

#[test]
fn test_convex_runway_quad () {
    let rwy = gla_runway();

    let vertex_centroid = GeoPoint::from_lon_lat_degrees( -4.434703706, 55.871338534);
    assert!( rwy.contains( &vertex_centroid));

    // same point shifted a full degree east is far beyond any vertex
    let off_airport = GeoPoint::from_lon_lat_degrees( -3.434703706, 55.871338534);
    assert!( !rwy.contains( &off_airport));
}

#[test]
fn test_starting_vertex_invariance () {
    let rwy = gla_runway();
    let queries = [
        GeoPoint::from_lon_lat_degrees( -4.434703706, 55.871338534),
        GeoPoint::from_lon_lat_degrees( -4.42, 55.88),
        GeoPoint::from_lon_lat_degrees( -4.46, 55.86),
        GeoPoint::from_lon_lat_degrees( 0.5, 0.5),
    ];

    let vs = rwy.geo_points();
    for k in 1..vs.len() {
        let mut rotated: Vec<GeoPoint> = vs[k..].to_vec();
        rotated.extend_from_slice( &vs[..k]);
        let rotated = GeoPolygon::from_geo_points( rotated);

        for q in &queries {
            assert_eq!( rwy.contains(q), rotated.contains(q), "rotation by {} changed result for {}", k, q);
        }
    }
}

#[test]
fn test_winding_invariance () {
    for polygon in [unit_square(), gla_runway()] {
        let mut vs: Vec<GeoPoint> = polygon.geo_points().to_vec();
        vs.reverse();
        let reversed = GeoPolygon::from_geo_points( vs);

        let queries = [
            GeoPoint::from_lon_lat_degrees( 0.5, 0.5),
            GeoPoint::from_lon_lat_degrees( 1.5, 0.5),
            GeoPoint::from_lon_lat_degrees( -4.434703706, 55.871338534),
            GeoPoint::from_lon_lat_degrees( -3.434703706, 55.871338534),
        ];
        for q in &queries {
            assert_eq!( polygon.contains(q), reversed.contains(q), "reversed winding changed result for {}", q);
        }
    }
}

#[test]
fn test_geo_rect () {
    // corner order of the input data does not matter - the rect sorts min/max itself
    let sw = GeoPoint::from_lon_lat_degrees( -4.41778953294639, 55.863108209321815);
    let ne = GeoPoint::from_lon_lat_degrees( -4.453843627294303, 55.88027367773343);
    let rect = GeoRect::from_min_max( sw, ne);

    assert_eq!( rect.west(), -4.453843627294303);
    assert_eq!( rect.east(), -4.41778953294639);
    assert_eq!( rect.south(), 55.863108209321815);
    assert_eq!( rect.north(), 55.88027367773343);

    let rect1 = GeoRect::from_wsen( -4.453843627294303, 55.863108209321815, -4.41778953294639, 55.88027367773343);
    assert_eq!( rect, rect1);
}

#[test]
fn test_serde () {
    let input = r#"{ "lon": -122.0, "lat": 37.0 }"#;
    let p: GeoPoint = serde_json::from_str(&input).unwrap();
    assert_eq!( p, GeoPoint::from_lon_lat_degrees( -122.0, 37.0));

    let s = serde_json::to_string( &p).unwrap();
    println!("serialized GeoPoint: '{}'", s);
    assert_eq!( s, r#"{"lon":-122.0,"lat":37.0}"#);

    let input = "(west: -4.5, south: 55.8, east: -4.4, north: 55.9)";
    let rect: GeoRect = ron::from_str(&input).unwrap();
    assert_eq!( rect, GeoRect::from_wsen( -4.5, 55.8, -4.4, 55.9));

    let input = "[ (lon: 0.0, lat: 0.0), (lon: 1.0, lat: 0.0), (lon: 1.0, lat: 1.0), (lon: 0.0, lat: 1.0) ]";
    let polygon: GeoPolygon = ron::from_str(&input).unwrap();
    assert_eq!( polygon, unit_square());
    assert!( polygon.contains( &GeoPoint::from_lon_lat_degrees( 0.5, 0.5)));
}
