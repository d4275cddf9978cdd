use thiserror::Error;

/// Why a connect attempt failed. The UI layer surfaces only a generic
/// message; the detail here is for logs and tests.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("event file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed event data: {0}")]
    Parse(String),
    #[error("invalid username or password")]
    Unauthorized,
    #[error("service error: {0}")]
    Response(String),
}
