use super::color::*;
use super::palette::validate_points;

/// Evenly spaced samples of a piecewise-linear gradient.
///
/// Yields `len + 1` colors, the `i`th at position `i / len`. The bracket
/// pointer only ever moves forward, so the whole walk is linear in `len`
/// plus the number of control points.
///
/// The control points are trusted: they must start at 0, end at 1 and be
/// strictly increasing, and `len` must be at least 1. Nothing is checked
/// outside of debug builds.
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    points: &'a [ControlPoint],
    len: usize,
    i: usize,
    p: usize,
}

impl<'a> Samples<'a> {
    pub fn new(points: &'a [ControlPoint], len: usize) -> Self {
        debug_assert!(validate_points(points).is_ok(), "malformed control points");
        debug_assert!(len >= 1, "sample count must be at least 1");
        Samples { points, len, i: 0, p: 0 }
    }

    /// Index of the upper control point of the segment used for the most
    /// recently yielded sample (0 before the first).
    pub fn segment(&self) -> usize {
        self.p
    }
}

impl Iterator for Samples<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.i > self.len {
            return None;
        }

        let n = self.len as f64;
        let last = self.points.len() - 1;
        while self.p < last && self.i as f64 >= self.points[self.p].position * n {
            self.p += 1;
        }

        let lo = &self.points[self.p - 1];
        let hi = &self.points[self.p];
        let f = self.i as f64 / n;
        let t = (f - lo.position) / (hi.position - lo.position);
        self.i += 1;

        Some(Sample::lerp(lo.color(), hi.color(), t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len + 1).saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

/// Sample `points` at `len + 1` evenly spaced positions into a fresh `Vec`.
pub fn interpolate(points: &[ControlPoint], len: usize) -> Vec<Sample> {
    Samples::new(points, len).collect()
}
