pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("storage_error: {details}")]
    Storage { details: String },
    #[error("serialization_error")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn storage(details: impl Into<String>) -> Self {
        Self::Storage {
            details: details.into(),
        }
    }
}
