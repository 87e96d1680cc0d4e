use std::fmt;

/// All errors produced while loading or checking portfolio data.
#[derive(Debug)]
pub struct FolioError {
    pub kind: ErrorKind,
    /// Catalog or file the error relates to, when known.
    pub document: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The document was fetched but is not the JSON shape we expect.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Local file access failed (CLI and dev server only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Site configuration could not be used.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// General message.
    #[error("{0}")]
    Message(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(document) = &self.document {
            write!(f, " (in {document})")?;
        }
        Ok(())
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Json(e) => Some(e),
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

impl From<ErrorKind> for FolioError {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            document: None,
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        ErrorKind::Json(e).into()
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e).into()
    }
}

/// Shorthand constructors.
impl FolioError {
    pub fn status(code: u16) -> Self {
        ErrorKind::Status(code).into()
    }

    pub fn network(msg: impl fmt::Display) -> Self {
        ErrorKind::Network(msg.to_string()).into()
    }

    pub fn config(msg: impl fmt::Display) -> Self {
        ErrorKind::Config(msg.to_string()).into()
    }

    pub fn message(msg: impl fmt::Display) -> Self {
        ErrorKind::Message(msg.to_string()).into()
    }

    /// Attach the name of the document being processed.
    pub fn in_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }
}
