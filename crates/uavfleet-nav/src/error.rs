//! Navigation precondition failures.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("speed must be finite and positive, got {0}")]
    Speed(f64),
    #[error("turn radius must be finite and positive, got {0}")]
    TurnRadius(f64),
    #[error("tick duration must be finite and non-negative, got {0}")]
    Duration(f64),
    #[error("destination ({x}, {y}) is not finite")]
    Destination { x: f64, y: f64 },
    #[error("vehicle pose became non-finite: x={x}, y={y}, azimuth={azimuth}")]
    NonFinitePose { x: f64, y: f64, azimuth: f64 },
}
