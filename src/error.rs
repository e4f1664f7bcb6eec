use thiserror::Error;

/// Every failure is a caller input error, reported before any phase
/// computation begins. There is no retryable class.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid calibration data: {0}")]
    InvalidCalibrationData(String),

    #[error("invalid mission parameters: {0}")]
    InvalidParameters(String),
}
