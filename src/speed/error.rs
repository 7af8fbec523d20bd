use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpeedError {
    #[error("no previous sample")]
    NoPrevious,
    #[error("non-positive elapsed time: {dt}s")]
    NonPositiveElapsed { dt: f64 },
}
