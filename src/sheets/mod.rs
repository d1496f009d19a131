pub mod google;

pub use google::GoogleSheetsClient;

use async_trait::async_trait;

/// Error from the destination sink. The message is surfaced to the client as
/// diagnostics on a failed submission.
#[derive(Debug)]
pub struct SinkError {
    pub message: String,
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for SinkError {
    fn from(s: String) -> Self {
        SinkError { message: s }
    }
}

impl From<&str> for SinkError {
    fn from(s: &str) -> Self {
        SinkError {
            message: s.to_string(),
        }
    }
}

/// The destination store seen through the narrowest possible interface: the
/// handler only ever appends one row.
#[async_trait]
pub trait RowSink: Send + Sync {
    async fn append_row(&self, row: &[String]) -> Result<(), SinkError>;
}
