//! [geo-traits](geo_traits) implementations for the parsed geometry tree.
//!
//! These let a parsed tree feed anything generic over the geometry access
//! traits without an intermediate conversion. The tree is always
//! two-dimensional, so every `dim` is [`Dimensions::Xy`].

use geo_traits::{
    CoordTrait, Dimensions, GeometryCollectionTrait, GeometryTrait, LineStringTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait,
    UnimplementedLine, UnimplementedRect, UnimplementedTriangle,
};

use crate::geometry::{
    Coord, Ewkt, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("n out of range"),
        }
    }
}

impl CoordTrait for &Coord {
    type T = f64;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        (*self).x
    }

    fn y(&self) -> Self::T {
        (*self).y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => (*self).x,
            1 => (*self).y,
            _ => panic!("n out of range"),
        }
    }
}

impl PointTrait for Point {
    type T = f64;
    type CoordType<'a>
        = &'a Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        Some(&self.0)
    }
}

impl<'a> PointTrait for &'a Point {
    type T = f64;
    type CoordType<'b>
        = &'a Coord
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        Some(&self.0)
    }
}

impl LineStringTrait for LineString {
    type T = f64;
    type CoordType<'a>
        = &'a Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        &self.0[i]
    }
}

impl<'a> LineStringTrait for &'a LineString {
    type T = f64;
    type CoordType<'b>
        = &'a Coord
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        &self.0[i]
    }
}

impl PolygonTrait for Polygon {
    type T = f64;
    type RingType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.0.first()
    }

    fn num_interiors(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        &self.0[i + 1]
    }
}

impl<'a> PolygonTrait for &'a Polygon {
    type T = f64;
    type RingType<'b>
        = &'a LineString
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.0.first()
    }

    fn num_interiors(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        &self.0[i + 1]
    }
}

impl MultiPointTrait for MultiPoint {
    type T = f64;
    type PointType<'a>
        = &'a Point
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::PointType<'_> {
        &self.0[i]
    }
}

impl MultiLineStringTrait for MultiLineString {
    type T = f64;
    type LineStringType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    unsafe fn line_string_unchecked(&self, i: usize) -> Self::LineStringType<'_> {
        &self.0[i]
    }
}

impl MultiPolygonTrait for MultiPolygon {
    type T = f64;
    type PolygonType<'a>
        = &'a Polygon
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::PolygonType<'_> {
        &self.0[i]
    }
}

impl GeometryCollectionTrait for GeometryCollection {
    type T = f64;
    type GeometryType<'a>
        = &'a Geometry
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::GeometryType<'_> {
        &self.0[i]
    }
}

impl GeometryTrait for Geometry {
    type T = f64;
    type PointType<'a>
        = Point
    where
        Self: 'a;
    type LineStringType<'a>
        = LineString
    where
        Self: 'a;
    type PolygonType<'a>
        = Polygon
    where
        Self: 'a;
    type MultiPointType<'a>
        = MultiPoint
    where
        Self: 'a;
    type MultiLineStringType<'a>
        = MultiLineString
    where
        Self: 'a;
    type MultiPolygonType<'a>
        = MultiPolygon
    where
        Self: 'a;
    type GeometryCollectionType<'a>
        = GeometryCollection
    where
        Self: 'a;
    type RectType<'a>
        = UnimplementedRect<f64>
    where
        Self: 'a;
    type TriangleType<'a>
        = UnimplementedTriangle<f64>
    where
        Self: 'a;
    type LineType<'a>
        = UnimplementedLine<f64>
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> geo_traits::GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        match self {
            Geometry::Point(geom) => geo_traits::GeometryType::Point(geom),
            Geometry::LineString(geom) => geo_traits::GeometryType::LineString(geom),
            Geometry::Polygon(geom) => geo_traits::GeometryType::Polygon(geom),
            Geometry::MultiPoint(geom) => geo_traits::GeometryType::MultiPoint(geom),
            Geometry::MultiLineString(geom) => geo_traits::GeometryType::MultiLineString(geom),
            Geometry::MultiPolygon(geom) => geo_traits::GeometryType::MultiPolygon(geom),
            Geometry::GeometryCollection(geom) => {
                geo_traits::GeometryType::GeometryCollection(geom)
            }
        }
    }
}

impl<'a> GeometryTrait for &'a Geometry {
    type T = f64;
    type PointType<'b>
        = Point
    where
        Self: 'b;
    type LineStringType<'b>
        = LineString
    where
        Self: 'b;
    type PolygonType<'b>
        = Polygon
    where
        Self: 'b;
    type MultiPointType<'b>
        = MultiPoint
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = MultiLineString
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = MultiPolygon
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = GeometryCollection
    where
        Self: 'b;
    type RectType<'b>
        = UnimplementedRect<f64>
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<f64>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<f64>
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> geo_traits::GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        match self {
            Geometry::Point(geom) => geo_traits::GeometryType::Point(geom),
            Geometry::LineString(geom) => geo_traits::GeometryType::LineString(geom),
            Geometry::Polygon(geom) => geo_traits::GeometryType::Polygon(geom),
            Geometry::MultiPoint(geom) => geo_traits::GeometryType::MultiPoint(geom),
            Geometry::MultiLineString(geom) => geo_traits::GeometryType::MultiLineString(geom),
            Geometry::MultiPolygon(geom) => geo_traits::GeometryType::MultiPolygon(geom),
            Geometry::GeometryCollection(geom) => {
                geo_traits::GeometryType::GeometryCollection(geom)
            }
        }
    }
}

/// A parsed EWKT value is usable directly wherever a geometry is expected;
/// the SRID rides along untouched.
impl GeometryTrait for Ewkt {
    type T = f64;
    type PointType<'a>
        = Point
    where
        Self: 'a;
    type LineStringType<'a>
        = LineString
    where
        Self: 'a;
    type PolygonType<'a>
        = Polygon
    where
        Self: 'a;
    type MultiPointType<'a>
        = MultiPoint
    where
        Self: 'a;
    type MultiLineStringType<'a>
        = MultiLineString
    where
        Self: 'a;
    type MultiPolygonType<'a>
        = MultiPolygon
    where
        Self: 'a;
    type GeometryCollectionType<'a>
        = GeometryCollection
    where
        Self: 'a;
    type RectType<'a>
        = UnimplementedRect<f64>
    where
        Self: 'a;
    type TriangleType<'a>
        = UnimplementedTriangle<f64>
    where
        Self: 'a;
    type LineType<'a>
        = UnimplementedLine<f64>
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> geo_traits::GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        self.geometry.as_type()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coord_access() {
        let coord = Coord { x: 30.0, y: 10.0 };
        assert_eq!(coord.x(), 30.0);
        assert_eq!(coord.y(), 10.0);
        assert_eq!(coord.nth_or_panic(1), 10.0);
        assert_eq!(CoordTrait::dim(&coord), Dimensions::Xy);
    }

    #[test]
    fn line_string_coords_agree_with_the_tree() {
        let parsed = crate::parse("LINESTRING(30 10, 10 30, 40 40)").unwrap();
        let line = parsed.geometry.as_line_string().unwrap();
        assert_eq!(line.num_coords(), 3);
        let coord = line.coord(1).unwrap();
        assert_eq!((coord.x(), coord.y()), (10.0, 30.0));
        assert!(line.coord(3).is_none());
    }

    #[test]
    fn polygon_rings_split_into_exterior_and_interiors() {
        let parsed = crate::parse("POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,2 1,2 2,1 1))").unwrap();
        let polygon = parsed.geometry.as_polygon().unwrap();
        assert_eq!(polygon.exterior().unwrap().num_coords(), 5);
        assert_eq!(polygon.num_interiors(), 1);
        assert_eq!(polygon.interior(0).unwrap().num_coords(), 4);
        assert!(polygon.interior(1).is_none());
    }

    #[test]
    fn collection_members_are_visitable_in_order() {
        let parsed = crate::parse("GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1))").unwrap();
        let collection = parsed.geometry.as_geometry_collection().unwrap();
        assert_eq!(collection.num_geometries(), 2);
        match collection.geometry(0).unwrap().as_type() {
            geo_traits::GeometryType::Point(point) => {
                let coord = point.coord().unwrap();
                assert_eq!((coord.x(), coord.y()), (1.0, 2.0));
            }
            _ => panic!("expected a point"),
        }
        match collection.geometry(1).unwrap().as_type() {
            geo_traits::GeometryType::LineString(line) => assert_eq!(line.num_coords(), 2),
            _ => panic!("expected a linestring"),
        }
    }

    #[test]
    fn ewkt_delegates_to_its_geometry() {
        let parsed = crate::parse("SRID=4326;MULTIPOINT(1 2, 3 4)").unwrap();
        match parsed.as_type() {
            geo_traits::GeometryType::MultiPoint(multi) => {
                assert_eq!(multi.num_points(), 2);
                let coord = multi.point(1).unwrap().coord().unwrap();
                assert_eq!((coord.x(), coord.y()), (3.0, 4.0));
            }
            _ => panic!("expected a multipoint"),
        }
        assert_eq!(parsed.srid, Some(4326));
    }
}
