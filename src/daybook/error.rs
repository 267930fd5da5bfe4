use thiserror::Error;

pub type Result<T> = std::result::Result<T, DaybookError>;

#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Workspace error: {0}")]
    Workspace(String),

    #[error("Invalid route: {0}")]
    Route(String),

    #[error("{0}")]
    Api(String),
}
