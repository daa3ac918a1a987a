/// Failure category of an [`AppError`].
///
/// The kind decides the process exit code and lets callers (and tests) tell
/// apart input problems from data that cannot be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed series text (count line, sample lines, tokens).
    ParseFailure,
    /// A model name that is not part of the catalog.
    NotFound,
    /// A sample outside the log domain (size or cost of zero).
    DomainError,
    /// Too few samples to compute the offset.
    MinimumSampleSize,
    /// Invalid flag or environment value.
    Config,
    /// Reading input or writing an export failed.
    Io,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Config | ErrorKind::Io => 2,
            ErrorKind::ParseFailure => 3,
            ErrorKind::DomainError | ErrorKind::MinimumSampleSize => 4,
            ErrorKind::NotFound => 5,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailure, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DomainError, message)
    }

    pub fn min_samples(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MinimumSampleSize, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code())
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
