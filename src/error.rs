use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaletteError {
    #[error("palette needs at least two control points")]
    TooFewPoints,
    #[error("control points must start at 0 and end at 1")]
    OutOfBounds,
    #[error("control point positions not strictly monotonically increasing")]
    NonMonotonic,
    #[error("{samples} samples is too few to visit every control point (need at least {min})")]
    ResolutionTooLow { samples: usize, min: usize },
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to access table file\n{0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: could not parse '{field}' as a number")]
    Parse { line: usize, field: String },
    #[error("line {line}: expected 3 values, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("table contains no samples")]
    Empty,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse JSON config file\n{0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not parse RON config file\n{0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("could not parse YAML config file\n{0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("failed to read config file\n{0}")]
    FileReadError(#[from] std::io::Error),
    #[error("config file does not have valid extension (must be .json, .ron or .yaml)")]
    ExtensionError,
    #[error("sample count must be at least 1")]
    ZeroSamples,
    #[error("thread count must be at least 1")]
    ZeroThreads,
}

#[derive(Error, Debug)]
pub enum GenError {
    #[error("invalid palette, {0}")]
    PaletteError(#[from] PaletteError),
    #[error("failed to write table, {0}")]
    TableError(#[from] TableError),
}
