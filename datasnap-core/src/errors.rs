//! Error types for DataSnap

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataSnapError>;

#[derive(Error, Debug)]
pub enum DataSnapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<csv::Error> for DataSnapError {
    fn from(err: csv::Error) -> Self {
        // Ragged records violate the table contract and must surface as
        // invalid input at the boundary, not as an opaque CSV failure.
        if let csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } = err.kind()
        {
            return DataSnapError::InvalidInput(format!(
                "ragged record: expected {} fields, got {}",
                expected_len, len
            ));
        }
        DataSnapError::Csv(err)
    }
}
