use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConvertError {
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    Format(String),
}

impl ConvertError {
    pub fn format(msg: &str) -> Self {
        ConvertError::Format(msg.to_string())
    }

    pub fn file_access(path: &Path, source: std::io::Error) -> Self {
        ConvertError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConvertError::FileAccess { path, source } => {
                write!(f, "File {} could not be accessed: {}", path.display(), source)
            }
            ConvertError::Format(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::FileAccess { source, .. } => Some(source),
            ConvertError::Format(_) => None,
        }
    }
}
