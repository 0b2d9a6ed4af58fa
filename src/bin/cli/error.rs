use thiserror::Error;

use colortable::ConfigError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid configuration, {0}")]
    ConfigError(#[from] ConfigError),
    #[error("failed to create output directory '{0}'\n{1}")]
    OutputDirError(String, std::io::Error),
    #[error("{failed} of {total} tables could not be generated")]
    TablesFailed { failed: usize, total: usize },
}
