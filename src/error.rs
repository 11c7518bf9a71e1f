use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid drawing bounds: width={width}, height={height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
