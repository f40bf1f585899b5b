use log::SetLoggerError;
use tdm_demux::allocate::AllocateError;
use tdm_demux::HarnessError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Harness(#[from] HarnessError),
    #[error(transparent)]
    Allocate(#[from] AllocateError),
    #[error(transparent)]
    Logger(#[from] SetLoggerError),
    #[error("Unknown variant: {0}. Run with --list to see valid names")]
    UnknownVariant(String),
    #[error("--repetitions must be at least 1")]
    NoRepetitions,
}

impl CliError {
    /// Exit code 1 is reserved for a variant that produced wrong output.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Harness(e) if e.is_verification_failure() => 1,
            _ => 2,
        }
    }
}
