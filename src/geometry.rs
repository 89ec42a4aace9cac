//! The owned geometry tree produced by parsing.
//!
//! Coordinates are always two-dimensional f64 pairs; each container type adds
//! one level of `Vec` nesting, mirroring the list nesting of the text format.

use std::fmt;
use std::str::FromStr;

use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};

use crate::error::{EwktResult, SyntaxError};

/// A single coordinate pair. `x` first; always exactly two ordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

/// A parsed `POINT`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(pub Coord);

/// A parsed `LINESTRING`: an ordered sequence of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString(pub Vec<Coord>);

/// A parsed `POLYGON`: one or more rings, exterior first.
///
/// Rings are kept exactly as written; closure is not validated and the first
/// and last coordinate are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon(pub Vec<LineString>);

/// A parsed `MULTIPOINT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint(pub Vec<Point>);

/// A parsed `MULTILINESTRING`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString(pub Vec<LineString>);

/// A parsed `MULTIPOLYGON`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon(pub Vec<Polygon>);

/// A parsed `GEOMETRYCOLLECTION`, members in textual order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection(pub Vec<Geometry>);

/// A parsed geometry of any of the seven kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumAsInner)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The kind of this geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }
}

/// The closed set of geometry kinds this crate parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// The WKT keyword for this kind, uppercase.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Resolve a keyword case-insensitively. Returns `None` for anything
    /// outside the closed set.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword.to_ascii_uppercase().as_str() {
            "POINT" => GeometryKind::Point,
            "LINESTRING" => GeometryKind::LineString,
            "POLYGON" => GeometryKind::Polygon,
            "MULTIPOINT" => GeometryKind::MultiPoint,
            "MULTILINESTRING" => GeometryKind::MultiLineString,
            "MULTIPOLYGON" => GeometryKind::MultiPolygon,
            "GEOMETRYCOLLECTION" => GeometryKind::GeometryCollection,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully parsed EWKT string: the geometry plus the optional SRID prefix.
///
/// `srid` is `None` when the input carried no `SRID=n;` prefix. The SRID is
/// single and outermost; geometries nested inside a collection structurally
/// cannot carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ewkt {
    pub geometry: Geometry,
    pub srid: Option<i32>,
}

impl FromStr for Ewkt {
    type Err = SyntaxError;

    fn from_str(s: &str) -> EwktResult<Self> {
        crate::parse(s)
    }
}
