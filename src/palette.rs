use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::color::*;
use super::error::PaletteError;

const fn cp(position: f64, r: f64, g: f64, b: f64) -> ControlPoint {
    ControlPoint::new(position, r, g, b)
}

pub static JET: [ControlPoint; 9] = [
    cp(0.000, 0.0, 0.0, 0.5),
    cp(1. / 8., 0.0, 0.0, 1.0),
    cp(2. / 8., 0.0, 0.5, 1.0),
    cp(3. / 8., 0.0, 1.0, 1.0),
    cp(4. / 8., 0.5, 1.0, 0.5),
    cp(5. / 8., 1.0, 1.0, 0.0),
    cp(6. / 8., 1.0, 0.5, 0.0),
    cp(7. / 8., 1.0, 0.0, 0.0),
    cp(1.000, 0.5, 0.0, 0.0),
];

pub static COOL: [ControlPoint; 2] = [
    cp(0.000, 0.0, 1.0, 1.0),
    cp(1.000, 1.0, 0.0, 1.0),
];

pub static HOT: [ControlPoint; 4] = [
    cp(0.000, 0.0, 0.0, 0.0),
    cp(1. / 3., 1.0, 0.0, 0.0),
    cp(2. / 3., 1.0, 1.0, 0.0),
    cp(1.000, 1.0, 1.0, 1.0),
];

pub static HSV: [ControlPoint; 7] = [
    cp(0.000, 1.0, 0.0, 0.0),
    cp(1. / 6., 1.0, 1.0, 0.0),
    cp(2. / 6., 0.0, 1.0, 0.0),
    cp(3. / 6., 0.0, 1.0, 1.0),
    cp(4. / 6., 0.0, 0.0, 1.0),
    cp(5. / 6., 1.0, 0.0, 1.0),
    cp(1.000, 1.0, 0.0, 0.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    Jet,
    Cool,
    Hot,
    Hsv,
}

impl PaletteName {
    pub const ALL: [PaletteName; 4] = [
        PaletteName::Jet,
        PaletteName::Cool,
        PaletteName::Hot,
        PaletteName::Hsv,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteName::Jet => "jet",
            PaletteName::Cool => "cool",
            PaletteName::Hot => "hot",
            PaletteName::Hsv => "hsv",
        }
    }

    pub fn palette(self) -> Palette {
        let points: &'static [ControlPoint] = match self {
            PaletteName::Jet => &JET,
            PaletteName::Cool => &COOL,
            PaletteName::Hot => &HOT,
            PaletteName::Hsv => &HSV,
        };
        Palette { name: self, points }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, immutable sequence of control points spanning 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub name: PaletteName,
    pub points: &'static [ControlPoint],
}

/// Every palette of the catalog, in emission order.
pub fn catalog() -> impl Iterator<Item = Palette> {
    PaletteName::ALL.into_iter().map(PaletteName::palette)
}

impl Palette {
    pub fn validate(&self) -> Result<(), PaletteError> {
        validate_points(self.points)
    }

    /// Smallest sample count for which every segment receives at least one sample.
    pub fn min_samples(&self) -> Result<usize, PaletteError> {
        self.validate()?;
        let start = self.points.len().saturating_sub(2).max(1);
        // Terminates: positions are strictly increasing, so large enough
        // counts always put an index into every gap.
        Ok((start..)
            .find(|&n| covers_every_segment(self.points, n))
            .unwrap_or(usize::MAX))
    }

    pub fn check_resolution(&self, samples: usize) -> Result<(), PaletteError> {
        self.validate()?;
        if samples >= 1 && covers_every_segment(self.points, samples) {
            Ok(())
        } else {
            Err(PaletteError::ResolutionTooLow {
                samples,
                min: self.min_samples()?,
            })
        }
    }
}

pub fn validate_points(points: &[ControlPoint]) -> Result<(), PaletteError> {
    if points.len() < 2 {
        return Err(PaletteError::TooFewPoints);
    }
    if points[0].position != 0.0 || points[points.len() - 1].position != 1.0 {
        return Err(PaletteError::OutOfBounds);
    }
    if points.windows(2).any(|w| w[0].position >= w[1].position) {
        return Err(PaletteError::NonMonotonic);
    }
    Ok(())
}

// Segment (k, k+1) owns the indices in [pos[k] * n, pos[k+1] * n), except the
// first, which always holds index 0, and the last, which always holds index n.
fn covers_every_segment(points: &[ControlPoint], n: usize) -> bool {
    let scale = n as f64;
    let last = points.len() - 1;
    (1..last.saturating_sub(1))
        .all(|k| (points[k].position * scale).ceil() < points[k + 1].position * scale)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn catalog_is_well_formed() {
        for palette in catalog() {
            assert_eq!(palette.validate(), Ok(()), "{}", palette.name);
        }
    }

    #[test]
    fn catalog_order_and_names() {
        let names: Vec<_> = catalog().map(|p| p.name.to_string()).collect();
        assert_eq!(names, ["jet", "cool", "hot", "hsv"]);
        assert_eq!(PaletteName::Hot.palette().points.len(), 4);
    }

    #[test]
    fn validation_errors() {
        let one = [cp(0.0, 0., 0., 0.)];
        assert_eq!(validate_points(&one), Err(PaletteError::TooFewPoints));

        let short = [cp(0.0, 0., 0., 0.), cp(0.9, 1., 1., 1.)];
        assert_eq!(validate_points(&short), Err(PaletteError::OutOfBounds));

        let repeated = [
            cp(0.0, 0., 0., 0.),
            cp(0.5, 1., 0., 0.),
            cp(0.5, 0., 1., 0.),
            cp(1.0, 1., 1., 1.),
        ];
        assert_eq!(validate_points(&repeated), Err(PaletteError::NonMonotonic));
    }

    #[test]
    fn min_samples_of_catalog() {
        assert_eq!(PaletteName::Cool.palette().min_samples(), Ok(1));
        assert_eq!(PaletteName::Hot.palette().min_samples(), Ok(2));
        assert_eq!(PaletteName::Jet.palette().min_samples(), Ok(7));
    }

    #[test]
    fn resolution_check() {
        let jet = PaletteName::Jet.palette();
        assert_eq!(jet.check_resolution(65535), Ok(()));
        assert_eq!(
            jet.check_resolution(3),
            Err(PaletteError::ResolutionTooLow { samples: 3, min: 7 })
        );
        assert!(jet.check_resolution(0).is_err());
    }
}
