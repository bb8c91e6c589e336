use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot decode stored document: {0}")]
    Decode(String),
    #[error("cannot encode document: {0}")]
    Encode(String),
}
