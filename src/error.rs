use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Invalid job parameters: {0}")]
    InvalidJobParameters(String),

    #[error("Material catalog is empty")]
    EmptyCatalog,

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Invalid cost configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid material catalog: {0}")]
    InvalidCatalog(String),
}

impl From<EstimatorError> for String {
    fn from(err: EstimatorError) -> Self {
        err.to_string()
    }
}
