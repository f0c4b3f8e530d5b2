use std::fmt;

#[derive(Debug)]
pub enum StorageError {
    /// Stored text cannot be parsed as the requested logical type.
    Parse {
        group: String,
        key: String,
        value: String,
        target: &'static str,
    },
    /// Persisting the store failed (permissions, disk full, path removed).
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { group, key, value, target } => {
                write!(f, "group '{group}', key '{key}': cannot parse '{value}' as {target}")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}
