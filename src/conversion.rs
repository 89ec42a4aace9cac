//! Conversions into [geo-types](geo_types) geometries.
//!
//! Available with the `geo-types` feature. Converting an [`Ewkt`] drops the
//! SRID: geo-types carries no spatial reference information.

use crate::geometry::{
    Coord, Ewkt, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

impl From<Coord> for geo_types::Coord<f64> {
    fn from(coord: Coord) -> Self {
        geo_types::Coord {
            x: coord.x,
            y: coord.y,
        }
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(point: Point) -> Self {
        geo_types::Point::new(point.0.x, point.0.y)
    }
}

impl From<LineString> for geo_types::LineString<f64> {
    fn from(line_string: LineString) -> Self {
        geo_types::LineString::new(line_string.0.into_iter().map(Into::into).collect())
    }
}

impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(polygon: Polygon) -> Self {
        let mut rings = polygon.0.into_iter().map(geo_types::LineString::from);
        let exterior = rings
            .next()
            .unwrap_or_else(|| geo_types::LineString::new(Vec::new()));
        geo_types::Polygon::new(exterior, rings.collect())
    }
}

impl From<MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(multi_point: MultiPoint) -> Self {
        geo_types::MultiPoint(multi_point.0.into_iter().map(Into::into).collect())
    }
}

impl From<MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(multi_line_string: MultiLineString) -> Self {
        geo_types::MultiLineString(multi_line_string.0.into_iter().map(Into::into).collect())
    }
}

impl From<MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(multi_polygon: MultiPolygon) -> Self {
        geo_types::MultiPolygon(multi_polygon.0.into_iter().map(Into::into).collect())
    }
}

impl From<GeometryCollection> for geo_types::GeometryCollection<f64> {
    fn from(collection: GeometryCollection) -> Self {
        geo_types::GeometryCollection(
            collection
                .0
                .into_iter()
                .map(geo_types::Geometry::from)
                .collect(),
        )
    }
}

impl From<Geometry> for geo_types::Geometry<f64> {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Point(geom) => geo_types::Geometry::Point(geom.into()),
            Geometry::LineString(geom) => geo_types::Geometry::LineString(geom.into()),
            Geometry::Polygon(geom) => geo_types::Geometry::Polygon(geom.into()),
            Geometry::MultiPoint(geom) => geo_types::Geometry::MultiPoint(geom.into()),
            Geometry::MultiLineString(geom) => geo_types::Geometry::MultiLineString(geom.into()),
            Geometry::MultiPolygon(geom) => geo_types::Geometry::MultiPolygon(geom.into()),
            Geometry::GeometryCollection(geom) => {
                geo_types::Geometry::GeometryCollection(geom.into())
            }
        }
    }
}

impl From<Ewkt> for geo_types::Geometry<f64> {
    fn from(ewkt: Ewkt) -> Self {
        ewkt.geometry.into()
    }
}
