use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ron parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("ron write error: {0}")]
    RonWrite(#[from] ron::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {field}: {status}")]
    InvalidStatus { field: &'static str, status: u16 },
}
