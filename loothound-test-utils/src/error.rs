use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    RosterError(#[from] loothound::error::RosterError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
