//! Recursive-descent parser for the EWKT grammar.
//!
//! One method per grammar production; all parsing state beyond the tokenizer
//! lookahead lives on the call stack, so GEOMETRYCOLLECTION recursion is
//! reentrant. Each parse call owns its tokenizer; concurrent parses never
//! share lookahead state.

use crate::error::{EwktResult, SyntaxError};
use crate::geometry::{
    Coord, Ewkt, Geometry, GeometryCollection, GeometryKind, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::tokenizer::{Token, TokenKind, Tokenizer};

const DIMENSION_MARKERS: [TokenKind; 3] = [
    TokenKind::DimensionZ,
    TokenKind::DimensionM,
    TokenKind::DimensionZm,
];

const NUMBER_KINDS: [TokenKind; 2] = [TokenKind::Float, TokenKind::Integer];

pub(crate) struct Parser<'a> {
    input: &'a str,
    tokenizer: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> EwktResult<Self> {
        Ok(Self {
            input,
            tokenizer: Tokenizer::new(input)?,
        })
    }

    /// Parse the whole input: an optional SRID prefix, one geometry, then end
    /// of input.
    pub fn parse(mut self) -> EwktResult<Ewkt> {
        let srid = self.srid_prefix()?;
        let geometry = self.geometry()?;
        if let Some(token) = self.tokenizer.peek() {
            return Err(self.syntax_error("end of string", Some(token)));
        }
        Ok(Ewkt { geometry, srid })
    }

    /// `srid := SRID EQUALS INTEGER SEMICOLON`
    ///
    /// Only recognized at the very start of the input; the SRID applies to
    /// the outermost geometry as a whole.
    fn srid_prefix(&mut self) -> EwktResult<Option<i32>> {
        if !self.tokenizer.is_next(TokenKind::Srid) {
            return Ok(None);
        }
        self.expect(TokenKind::Srid)?;
        self.expect(TokenKind::Equals)?;
        let token = self.expect(TokenKind::Integer)?;
        let srid = token
            .text
            .parse::<i32>()
            .ok()
            .filter(|srid| *srid >= 0)
            .ok_or_else(|| {
                self.syntax_error("a non-negative spatial reference identifier", Some(token))
            })?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Some(srid))
    }

    /// `geometry := TYPE [ Z | M | ZM ] OPEN body CLOSE`
    ///
    /// The keyword selects the body rule through the closed [`GeometryKind`]
    /// set; an unknown keyword is a syntax error.
    fn geometry(&mut self) -> EwktResult<Geometry> {
        let token = self.expect(TokenKind::GeometryType)?;
        let kind = GeometryKind::from_keyword(token.text)
            .ok_or_else(|| self.syntax_error("a geometry type keyword", Some(token)))?;
        self.dimension_marker()?;
        self.expect(TokenKind::OpenParen)?;
        let geometry = match kind {
            GeometryKind::Point => Geometry::Point(Point(self.point()?)),
            GeometryKind::LineString => Geometry::LineString(LineString(self.point_list()?)),
            GeometryKind::Polygon => Geometry::Polygon(Polygon(self.ring_list()?)),
            GeometryKind::MultiPoint => Geometry::MultiPoint(MultiPoint(
                self.point_list()?.into_iter().map(Point).collect(),
            )),
            GeometryKind::MultiLineString => {
                Geometry::MultiLineString(MultiLineString(self.ring_list()?))
            }
            GeometryKind::MultiPolygon => {
                Geometry::MultiPolygon(MultiPolygon(self.polygon_list()?))
            }
            GeometryKind::GeometryCollection => {
                Geometry::GeometryCollection(GeometryCollection(self.geometry_list()?))
            }
        };
        self.expect(TokenKind::CloseParen)?;
        Ok(geometry)
    }

    /// Consume an optional `Z`, `M` or `ZM` marker after the type keyword.
    ///
    /// The marker is not retained: the output tree is always 2D, and a third
    /// ordinate in the text fails at the surrounding list rule.
    fn dimension_marker(&mut self) -> EwktResult<()> {
        if self.tokenizer.is_next_any(&DIMENSION_MARKERS) {
            self.tokenizer.advance()?;
        }
        Ok(())
    }

    /// `point := coordinate coordinate`
    fn point(&mut self) -> EwktResult<Coord> {
        let x = self.coordinate()?;
        let y = self.coordinate()?;
        Ok(Coord { x, y })
    }

    /// `coordinate := (FLOAT | INTEGER) [ E INTEGER ]`
    ///
    /// Evaluated as `mantissa * 10^exponent` in floating point; the exponent
    /// integer carries its own sign.
    fn coordinate(&mut self) -> EwktResult<f64> {
        let token = self.expect_any(&NUMBER_KINDS, "a number")?;
        let mantissa = token
            .text
            .parse::<f64>()
            .map_err(|_| self.syntax_error("a number", Some(token)))?;
        if self.tokenizer.is_next(TokenKind::Exponent) {
            self.tokenizer.advance()?;
            let token = self.expect(TokenKind::Integer)?;
            let exponent = token
                .text
                .parse::<i32>()
                .map_err(|_| self.syntax_error("an exponent", Some(token)))?;
            return Ok(mantissa * 10f64.powi(exponent));
        }
        Ok(mantissa)
    }

    /// `pointList := point (COMMA point)*`
    fn point_list(&mut self) -> EwktResult<Vec<Coord>> {
        let mut coords = vec![self.point()?];
        while self.tokenizer.is_next(TokenKind::Comma) {
            self.tokenizer.advance()?;
            coords.push(self.point()?);
        }
        Ok(coords)
    }

    /// `pointLists := OPEN pointList CLOSE (COMMA OPEN pointList CLOSE)*`
    fn ring_list(&mut self) -> EwktResult<Vec<LineString>> {
        let mut rings = vec![self.ring()?];
        while self.tokenizer.is_next(TokenKind::Comma) {
            self.tokenizer.advance()?;
            rings.push(self.ring()?);
        }
        Ok(rings)
    }

    fn ring(&mut self) -> EwktResult<LineString> {
        self.expect(TokenKind::OpenParen)?;
        let coords = self.point_list()?;
        self.expect(TokenKind::CloseParen)?;
        Ok(LineString(coords))
    }

    /// MULTIPOLYGON body: each polygon is a parenthesized ring list.
    fn polygon_list(&mut self) -> EwktResult<Vec<Polygon>> {
        let mut polygons = vec![self.polygon()?];
        while self.tokenizer.is_next(TokenKind::Comma) {
            self.tokenizer.advance()?;
            polygons.push(self.polygon()?);
        }
        Ok(polygons)
    }

    fn polygon(&mut self) -> EwktResult<Polygon> {
        self.expect(TokenKind::OpenParen)?;
        let rings = self.ring_list()?;
        self.expect(TokenKind::CloseParen)?;
        Ok(Polygon(rings))
    }

    /// GEOMETRYCOLLECTION body: `geometry (COMMA geometry)*`, members kept in
    /// textual order. Members cannot carry an SRID of their own.
    fn geometry_list(&mut self) -> EwktResult<Vec<Geometry>> {
        let mut geometries = vec![self.geometry()?];
        while self.tokenizer.is_next(TokenKind::Comma) {
            self.tokenizer.advance()?;
            geometries.push(self.geometry()?);
        }
        Ok(geometries)
    }

    /// Consume the lookahead if it has the expected kind, fail otherwise.
    fn expect(&mut self, kind: TokenKind) -> EwktResult<Token<'a>> {
        match self.tokenizer.peek() {
            Some(token) if token.kind == kind => {
                self.tokenizer.advance()?;
                Ok(token)
            }
            other => Err(self.syntax_error(kind.describe(), other)),
        }
    }

    fn expect_any(&mut self, kinds: &[TokenKind], expected: &str) -> EwktResult<Token<'a>> {
        match self.tokenizer.peek() {
            Some(token) if kinds.contains(&token.kind) => {
                self.tokenizer.advance()?;
                Ok(token)
            }
            other => Err(self.syntax_error(expected, other)),
        }
    }

    fn syntax_error(&self, expected: &str, found: Option<Token<'_>>) -> SyntaxError {
        SyntaxError {
            expected: expected.to_string(),
            found: found
                .map(|token| format!("`{}`", token.text))
                .unwrap_or_else(|| "end of string".to_string()),
            position: found.map(|token| token.position),
            input: self.input.to_string(),
        }
    }
}
