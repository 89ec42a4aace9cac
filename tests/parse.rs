//! End-to-end tests of the public parsing API, exercised the way a consumer
//! would use it.

use std::str::FromStr;

use approx::assert_relative_eq;
use ewkt::{parse, Coord, Ewkt, Geometry, GeometryKind, LineString, Point};

#[test]
fn point() {
    let parsed = parse("POINT(1 2)").unwrap();
    assert_eq!(parsed.geometry.kind(), GeometryKind::Point);
    assert_eq!(parsed.geometry.kind().as_str(), "POINT");
    assert_eq!(
        parsed.geometry,
        Geometry::Point(Point(Coord { x: 1.0, y: 2.0 }))
    );
    assert_eq!(parsed.srid, None);
}

#[test]
fn point_with_srid() {
    let parsed = parse("SRID=4326;POINT(1 2)").unwrap();
    assert_eq!(parsed.srid, Some(4326));
    assert_eq!(
        parsed.geometry,
        Geometry::Point(Point(Coord { x: 1.0, y: 2.0 }))
    );
}

#[test]
fn from_str_matches_parse() {
    let input = "SRID=31370;LINESTRING(0 0, 1 1)";
    assert_eq!(Ewkt::from_str(input).unwrap(), parse(input).unwrap());
}

#[test]
fn polygon_ring_is_preserved_verbatim() {
    let parsed = parse("POLYGON((0 0,4 0,4 4,0 4,0 0))").unwrap();
    let polygon = parsed.geometry.as_polygon().unwrap();
    assert_eq!(polygon.0.len(), 1);
    let ring = &polygon.0[0];
    assert_eq!(
        ring,
        &LineString(vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 4.0, y: 0.0 },
            Coord { x: 4.0, y: 4.0 },
            Coord { x: 0.0, y: 4.0 },
            Coord { x: 0.0, y: 0.0 },
        ])
    );
}

#[test]
fn multipolygon_of_single_ring_polygons() {
    let parsed = parse("MULTIPOLYGON(((0 0,1 0,1 1,0 0)),((2 2,3 2,3 3,2 2)))").unwrap();
    let polygons = parsed.geometry.as_multi_polygon().unwrap();
    assert_eq!(polygons.0.len(), 2);
    for polygon in &polygons.0 {
        assert_eq!(polygon.0.len(), 1);
        assert_eq!(polygon.0[0].0.len(), 4);
    }
}

#[test]
fn exponents_scale_the_mantissa() {
    let parsed = parse("POINT(1.5E2 -3E-1)").unwrap();
    let point = parsed.geometry.as_point().unwrap();
    assert_relative_eq!(point.0.x, 150.0);
    assert_relative_eq!(point.0.y, -0.3);
}

#[test]
fn missing_close_paren() {
    let err = parse("POINT(1 2").unwrap_err();
    assert_eq!(err.expected, "`)`");
    assert_eq!(err.found, "end of string");
    let message = err.to_string();
    assert!(message.contains("end of string"), "{message}");
    assert!(message.contains("-1"), "{message}");
    assert!(message.contains("POINT(1 2"), "{message}");
}

#[test]
fn unknown_geometry_keyword() {
    assert!(parse("FOO(1 2)").is_err());
}

#[test]
fn unrecognized_character_reports_its_offset() {
    let err = parse("POINT(1 @)").unwrap_err();
    assert_eq!(err.found, "`@`");
    assert_eq!(err.position, Some(8));
    assert_eq!(err.input, "POINT(1 @)");
}

#[test]
fn dimensionality_markers_never_reach_the_output() {
    for input in ["POINT Z (1 2)", "POINTZ(1 2)", "POINT M (1 2)", "POINT ZM (1 2)"] {
        let parsed = parse(input).unwrap();
        assert_eq!(
            parsed.geometry,
            Geometry::Point(Point(Coord { x: 1.0, y: 2.0 })),
            "{input}"
        );
    }
}

#[test]
fn declared_third_ordinate_is_still_rejected() {
    assert!(parse("POINT Z (1 2 3)").is_err());
    assert!(parse("LINESTRING ZM (0 0 0 0, 1 1 1 1)").is_err());
}

#[test]
fn collection_member_order_is_textual_order() {
    let parsed = parse(
        "GEOMETRYCOLLECTION(POINT(1 2),POINT(1 2),LINESTRING(0 0,1 1),MULTIPOINT(5 6, 7 8))",
    )
    .unwrap();
    let members = parsed.geometry.as_geometry_collection().unwrap();
    let kinds: Vec<_> = members.0.iter().map(Geometry::kind).collect();
    // No reordering, no deduplication of the repeated point.
    assert_eq!(
        kinds,
        vec![
            GeometryKind::Point,
            GeometryKind::Point,
            GeometryKind::LineString,
            GeometryKind::MultiPoint,
        ]
    );
}

#[test]
fn reparsing_is_deterministic() {
    let input = "SRID=3857;GEOMETRYCOLLECTION(POLYGON((0 0,1 0,1 1,0 0)),POINT(9 9))";
    assert_eq!(parse(input).unwrap(), parse(input).unwrap());
}

#[test]
fn serde_round_trip() {
    let parsed = parse("SRID=4326;MULTILINESTRING((0 0,1 1),(2 2,3 3))").unwrap();
    let json = serde_json::to_string(&parsed).unwrap();
    let back: Ewkt = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, back);
}
