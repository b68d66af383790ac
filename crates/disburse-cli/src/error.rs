use thiserror::Error;

use disburse_core::{BoardError, ExportError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] disburse_core::ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Export(error) => match error {
                ExportError::Board(BoardError::Fetch { .. }) => 3,
                ExportError::Board(BoardError::Json { .. }) => 4,
                ExportError::NoCards { .. } => 5,
                ExportError::Card { .. } => 6,
                ExportError::CreateOutput { .. } | ExportError::Csv(_) | ExportError::Io(_) => 10,
            },
        }
    }
}
