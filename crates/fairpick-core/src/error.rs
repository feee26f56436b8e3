#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SelectError {
    pub(crate) fn empty_pool() -> Self {
        Self::InvalidInput("candidate pool is empty".to_string())
    }
}
