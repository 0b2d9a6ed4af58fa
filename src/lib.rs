mod color;
pub use color::*;

mod palette;
pub use palette::*;

mod interpolate;
pub use interpolate::*;

mod table;
pub use table::*;

mod config;
pub use config::*;

mod generate;
pub use generate::*;

mod error;
pub use error::*;

pub mod logger;
