//! Parse [Well-Known Text](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry)
//! (WKT) and its PostGIS `SRID=…;` extension (EWKT) into an owned geometry
//! tree.
//!
//! The tree is plain data (f64 coordinate pairs in nested `Vec`s) and
//! implements the [geo-traits](geo_traits) access traits, so it plugs into
//! anything generic over those. With the `geo-types` feature enabled the tree
//! also converts into [geo-types](https://docs.rs/geo-types) geometries.
//!
//! ## Example
//!
//! ```
//! use std::str::FromStr;
//!
//! use ewkt::{Ewkt, GeometryKind};
//!
//! let parsed = Ewkt::from_str("SRID=4326;POLYGON((0 0,4 0,4 4,0 4,0 0))").unwrap();
//! assert_eq!(parsed.srid, Some(4326));
//! assert_eq!(parsed.geometry.kind(), GeometryKind::Polygon);
//!
//! let polygon = parsed.geometry.as_polygon().unwrap();
//! assert_eq!(polygon.0.len(), 1);
//! assert_eq!(polygon.0[0].0.len(), 5);
//!
//! // Parsing is all-or-nothing: the first grammar violation aborts with a
//! // syntax error carrying the offending position.
//! assert!(ewkt::parse("POINT(1 2").is_err());
//! ```
//!
//! Only 2D coordinates are captured. `Z`/`M`/`ZM` markers after the type
//! keyword are accepted and discarded, and inputs that supply an actual third
//! ordinate are rejected. Geometric validity (ring closure, self
//! intersection) is not checked, and no reprojection is performed.

mod error;
mod geo_trait_impl;
mod geometry;
mod parser;
mod tokenizer;

#[cfg(feature = "geo-types")]
mod conversion;

pub use error::{EwktResult, SyntaxError};
pub use geometry::{
    Coord, Ewkt, Geometry, GeometryCollection, GeometryKind, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// Parse one EWKT string: an optional `SRID=n;` prefix followed by a geometry.
///
/// All-or-nothing: on any grammar violation a [`SyntaxError`] is returned and
/// no partial result exists. Parsing the same string twice yields
/// structurally equal results.
pub fn parse(input: &str) -> EwktResult<Ewkt> {
    parser::Parser::new(input)?.parse()
}
