use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::color::*;
use super::error::TableError;
use super::interpolate::*;
use super::palette::Palette;

const PRECISION: usize = 7;
const WIDTH: usize = 13;

/// Format a value in the `%13.7e` layout: `5.0000000E-01`, right-aligned in
/// 13 columns, exponent signed and at least two digits.
pub fn format_value(value: f64) -> String {
    let raw = format!("{:.*e}", PRECISION, value);
    let formatted = match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}E{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => raw.clone(),
        },
        // inf and NaN
        None => raw.clone(),
    };
    format!("{:>width$}", formatted, width = WIDTH)
}

pub fn write_samples<W: Write>(mut w: W, samples: &[Sample]) -> std::io::Result<()> {
    for s in samples {
        writeln!(
            w,
            "   {}   {}   {}",
            format_value(s.r),
            format_value(s.g),
            format_value(s.b)
        )?;
    }
    w.flush()
}

/// Write a table to `path` all at once: the rows go to a temporary sibling
/// file which replaces `path` only after everything was written.
pub fn write_table(path: impl AsRef<Path>, samples: &[Sample]) -> Result<(), TableError> {
    let path = path.as_ref();
    let tmp = temp_path(path);

    let written = File::create(&tmp).and_then(|f| {
        let mut w = BufWriter::new(f);
        write_samples(&mut w, samples)?;
        w.into_inner().map_err(|e| e.into_error())?.sync_all()
    });

    match written.and_then(|_| fs::rename(&tmp, path)) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e.into())
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

pub fn read_samples<R: BufRead>(r: R) -> Result<Vec<Sample>, TableError> {
    let mut samples = Vec::new();

    for (i, line) in r.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(TableError::FieldCount { line: i + 1, found: fields.len() });
        }

        let mut channels = [0.0; 3];
        for (c, field) in channels.iter_mut().zip(&fields) {
            *c = field.parse().map_err(|_| TableError::Parse {
                line: i + 1,
                field: field.to_string(),
            })?;
        }
        samples.push(Sample::from(channels));
    }

    Ok(samples)
}

pub fn read_table(path: impl AsRef<Path>) -> Result<Vec<Sample>, TableError> {
    read_samples(BufReader::new(File::open(path)?))
}

/// A dense color table held in memory, as generated or as read back from a
/// table file.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    samples: Vec<Sample>,
}

impl ColorTable {
    pub fn new(samples: Vec<Sample>) -> Result<ColorTable, TableError> {
        if samples.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(ColorTable { samples })
    }

    pub fn generate(palette: &Palette, len: usize) -> ColorTable {
        ColorTable { samples: interpolate(palette.points, len) }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<ColorTable, TableError> {
        ColorTable::new(read_table(path)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
        write_table(path, &self.samples)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Nearest entry for a position in [0, 1]; out of range positions clamp
    /// and NaN maps to the first entry.
    pub fn lookup(&self, f: f64) -> Sample {
        if f.is_nan() {
            return self.samples[0];
        }
        let last = self.samples.len() - 1;
        let i = (f.clamp(0.0, 1.0) * last as f64).round() as usize;
        self.samples[i.min(last)]
    }

    /// Map `value` from the display range `[min, max]` onto the table.
    pub fn lookup_range(&self, value: f64, min: f64, max: f64) -> Sample {
        if max <= min {
            return self.lookup(if value > min { 1.0 } else { 0.0 });
        }
        self.lookup((value - min) / (max - min))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::palette::PaletteName;

    #[test]
    fn format_matches_c_layout() {
        assert_eq!(format_value(0.0), "0.0000000E+00");
        assert_eq!(format_value(0.5), "5.0000000E-01");
        assert_eq!(format_value(1.0), "1.0000000E+00");
        assert_eq!(format_value(-0.25), "-2.5000000E-01");
        assert_eq!(format_value(1.5e-12), "1.5000000E-12");
        assert_eq!(format_value(2.0e120), "2.0000000E+120");
    }

    #[test]
    fn line_layout() {
        let mut buf = Vec::new();
        write_samples(&mut buf, &[Sample::rgb(0.0, 0.0, 0.5)]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "   0.0000000E+00   0.0000000E+00   5.0000000E-01\n"
        );
    }

    #[test]
    fn read_back_within_precision() {
        let samples = ColorTable::generate(&PaletteName::Jet.palette(), 1000);
        let mut buf = Vec::new();
        write_samples(&mut buf, samples.samples()).unwrap();
        let parsed = read_samples(buf.as_slice()).unwrap();

        assert_eq!(parsed.len(), samples.len());
        for (a, b) in parsed.iter().zip(samples.samples()) {
            for (x, y) in a.channels().iter().zip(b.channels().iter()) {
                assert!((x - y).abs() <= 1e-7 * y.abs().max(1e-300), "{} vs {}", x, y);
            }
        }
    }

    #[test]
    fn read_errors_carry_line_numbers() {
        let bad = "   1.0E+00   0.0E+00   0.0E+00\n   1.0E+00   x   0.0E+00\n";
        match read_samples(bad.as_bytes()) {
            Err(TableError::Parse { line, field }) => {
                assert_eq!(line, 2);
                assert_eq!(field, "x");
            }
            other => panic!("unexpected {:?}", other),
        }

        let short = "\n1 2\n";
        match read_samples(short.as_bytes()) {
            Err(TableError::FieldCount { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn lookup_clamps_and_rounds() {
        let table = ColorTable::generate(&PaletteName::Cool.palette(), 4);
        assert_eq!(table.lookup(-1.0), Sample::rgb(0.0, 1.0, 1.0));
        assert_eq!(table.lookup(2.0), Sample::rgb(1.0, 0.0, 1.0));
        assert_eq!(table.lookup(0.3), Sample::rgb(0.25, 0.75, 1.0));
        assert_eq!(table.lookup_range(150.0, 100.0, 300.0), Sample::rgb(0.25, 0.75, 1.0));
        assert_eq!(table.lookup_range(5.0, 3.0, 3.0), Sample::rgb(1.0, 0.0, 1.0));
    }

    #[test]
    fn lookup_of_nan_is_first_entry() {
        let table = ColorTable::generate(&PaletteName::Cool.palette(), 4);
        assert_eq!(table.lookup(f64::NAN), Sample::rgb(0.0, 1.0, 1.0));
        assert_eq!(table.lookup_range(f64::NAN, 0.0, 10.0), Sample::rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(ColorTable::new(Vec::new()), Err(TableError::Empty)));
    }
}
