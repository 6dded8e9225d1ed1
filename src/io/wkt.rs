//! Well-known-text `POLYGON` reading and writing.
//!
//! A set is written as a single `POLYGON` whose rings are the contours of the
//! set in order, each ring closed by repeating its first point:
//!
//! ```text
//! POLYGON ((0 0, 100 0, 100 100, 0 100, 0 0), (20 20, 20 80, 80 80, 80 20, 20 20))
//! ```
//!
//! Rings are read back without their closing point. Fractional coordinates
//! are rounded to the grid.

use std::fmt::Write as _;

use crate::error::{ParseError, Result};
use crate::geometry::PolygonSet;
use crate::math::Point;

const KEYWORD: &str = "POLYGON";
const EMPTY: &str = "EMPTY";

impl PolygonSet {
    /// Writes the set as a WKT `POLYGON`.
    ///
    /// Contours without vertices have no WKT ring and are left out.
    #[must_use]
    pub fn to_wkt(&self) -> String {
        let mut rings = self.iter().filter(|poly| !poly.is_empty()).peekable();
        if rings.peek().is_none() {
            return format!("{KEYWORD} {EMPTY}");
        }
        let mut out = String::from(KEYWORD);
        out.push_str(" (");
        for (ring_idx, poly) in rings.enumerate() {
            if ring_idx > 0 {
                out.push_str(", ");
            }
            out.push('(');
            let closing = poly.first();
            for (idx, p) in poly.points().iter().chain(closing.iter()).enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                // Writing to a String cannot fail.
                let _ = write!(out, "{} {}", p.x, p.y);
            }
            out.push(')');
        }
        out.push(')');
        out
    }

    /// Reads a set from a WKT `POLYGON`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Expected`] on malformed text
    /// - [`ParseError::InvalidNumber`] on a coordinate that is not a finite
    ///   number
    /// - [`ParseError::RingNotClosed`] if a ring does not end on its first
    ///   point
    pub fn from_wkt(text: &str) -> Result<PolygonSet> {
        let mut cursor = Cursor::new(text);
        cursor.keyword(KEYWORD)?;
        if cursor.try_keyword(EMPTY) {
            cursor.end()?;
            return Ok(PolygonSet::new());
        }
        cursor.expect('(', "'('")?;
        let mut contours = Vec::new();
        loop {
            let ring = cursor.ring()?;
            if ring.len() < 2 || ring.first() != ring.last() {
                return Err(ParseError::RingNotClosed(contours.len()).into());
            }
            let mut ring = ring;
            ring.pop();
            contours.push(ring);
            if !cursor.try_char(',') {
                break;
            }
        }
        cursor.expect(')', "')'")?;
        cursor.end()?;
        Ok(PolygonSet::from_contours(contours))
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.text.len() - trimmed.len();
    }

    fn try_keyword(&mut self, word: &str) -> bool {
        self.skip_ws();
        let rest = self.rest();
        let matches = rest
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word));
        if matches {
            self.pos += word.len();
        }
        matches
    }

    fn keyword(&mut self, word: &'static str) -> std::result::Result<(), ParseError> {
        if self.try_keyword(word) {
            Ok(())
        } else {
            Err(self.expected(word))
        }
    }

    fn try_char(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char, what: &'static str) -> std::result::Result<(), ParseError> {
        if self.try_char(c) {
            Ok(())
        } else {
            Err(self.expected(what))
        }
    }

    fn end(&mut self) -> std::result::Result<(), ParseError> {
        self.skip_ws();
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(self.expected("end of input"))
        }
    }

    fn expected(&self, expected: &'static str) -> ParseError {
        ParseError::Expected {
            expected,
            position: self.pos,
        }
    }

    fn number(&mut self) -> std::result::Result<f64, ParseError> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.expected("number"));
        }
        let text = &rest[..len];
        let value: f64 = text.parse().map_err(|_| ParseError::InvalidNumber {
            text: text.to_owned(),
            position: self.pos,
        })?;
        if !value.is_finite() {
            return Err(ParseError::InvalidNumber {
                text: text.to_owned(),
                position: self.pos,
            });
        }
        self.pos += len;
        Ok(value)
    }

    fn ring(&mut self) -> std::result::Result<Vec<Point>, ParseError> {
        self.expect('(', "'('")?;
        let mut points = Vec::new();
        loop {
            let x = self.number()?;
            let y = self.number()?;
            points.push(Point::from_f64(x, y));
            if !self.try_char(',') {
                break;
            }
        }
        self.expect(')', "')'")?;
        Ok(points)
    }
}
