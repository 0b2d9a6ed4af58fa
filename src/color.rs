use num_traits::Float;

/// One entry of a dense color table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A knot of a piecewise-linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub position: f64,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Blend `a` towards `b`. Exact at `t == 0` and `t == 1`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

impl Sample {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Sample { r, g, b }
    }

    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        Sample {
            r: lerp(start.r, end.r, t),
            g: lerp(start.g, end.g, t),
            b: lerp(start.b, end.b, t),
        }
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f64; 3]> for Sample {
    fn from([r, g, b]: [f64; 3]) -> Sample {
        Sample { r, g, b }
    }
}

impl ControlPoint {
    pub const fn new(position: f64, r: f64, g: f64, b: f64) -> Self {
        ControlPoint { position, r, g, b }
    }

    pub fn color(&self) -> Sample {
        Sample::rgb(self.r, self.g, self.b)
    }
}
