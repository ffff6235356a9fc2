/*
 * Error Module
 *
 * Errors that can surface while editing the configuration by name or while
 * starting the process. The per-frame step and render path never fails.
 */

use thiserror::Error;

/// Everything that can go wrong outside of the frame loop.
#[derive(Error, Debug)]
pub enum ConstellationError {
    #[error("'{0}' is not a valid #RRGGBB or #RGB color")]
    InvalidColor(String),

    #[error("There is no option named '{0}'")]
    UnknownOption(String),

    #[error("Option '{name}' expects a {expected} value")]
    KindMismatch {
        name: String,
        expected: &'static str,
    },

    #[error("Unable to start the logger")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T, E = ConstellationError> = std::result::Result<T, E>;
