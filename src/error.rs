//! The resolver's error taxonomy. Every variant carries the path walked so far
//! (not the original argument) plus a human message, per the error model.

/// The ordinal identifies the kind for callers that surface it as a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotImplemented = 0,
    DoesNotExist = 1,
    NotAFile = 2,
    NotADirectory = 3,
    NotADigest = 4,
    NodeMissing = 5,
    TypeUnknown = 6,
}

/// An error raised while resolving a path. Handlers never recover from these;
/// they always bubble unchanged to the resolver boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("{path}: not implemented: {message}")]
    NotImplemented { path: String, message: String },
    #[error("{path}: {message}")]
    DoesNotExist { path: String, message: String },
    #[error("{path}: {message}")]
    NotAFile { path: String, message: String },
    #[error("{path}: {message}")]
    NotADirectory { path: String, message: String },
    #[error("{path}: {message}")]
    NotADigest { path: String, message: String },
    #[error("{path}: {message}")]
    NodeMissing { path: String, message: String },
    #[error("{path}: {message}")]
    TypeUnknown { path: String, message: String },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::NotImplemented { .. } => ErrorKind::NotImplemented,
            ResolveError::DoesNotExist { .. } => ErrorKind::DoesNotExist,
            ResolveError::NotAFile { .. } => ErrorKind::NotAFile,
            ResolveError::NotADirectory { .. } => ErrorKind::NotADirectory,
            ResolveError::NotADigest { .. } => ErrorKind::NotADigest,
            ResolveError::NodeMissing { .. } => ErrorKind::NodeMissing,
            ResolveError::TypeUnknown { .. } => ErrorKind::TypeUnknown,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ResolveError::NotImplemented { path, .. }
            | ResolveError::DoesNotExist { path, .. }
            | ResolveError::NotAFile { path, .. }
            | ResolveError::NotADirectory { path, .. }
            | ResolveError::NotADigest { path, .. }
            | ResolveError::NodeMissing { path, .. }
            | ResolveError::TypeUnknown { path, .. } => path,
        }
    }

    /// The exit code a CLI collaborator should surface: the `ErrorKind` ordinal.
    pub fn exit_code(&self) -> i32 {
        self.kind() as i32
    }

    pub fn does_not_exist(path: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::DoesNotExist {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn not_a_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::NotAFile {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn not_a_directory(path: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::NotADirectory {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn not_a_digest(path: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::NotADigest {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn node_missing(path: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::NodeMissing {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn type_unknown(path: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::TypeUnknown {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn not_implemented(path: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::NotImplemented {
            path: path.into(),
            message: message.into(),
        }
    }
}
