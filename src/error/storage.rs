use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum StorageError {
    Unavailable,
    Write(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => {
                write!(f, "Storage Error: persistent store unavailable")
            }
            StorageError::Write(msg) => write!(f, "Storage Error: write failed: {}", msg),
        }
    }
}
