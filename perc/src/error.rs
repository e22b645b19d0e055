use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid size must be positive")]
    InvalidSize,
    #[error("trial count must be positive")]
    InvalidTrials,
    #[error("site ({row}, {col}) is outside a {size}x{size} grid")]
    SiteOutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
