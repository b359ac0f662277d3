use std::fmt;

/// Why a trending fetch failed. Only logged; the view state keeps a plain `Failure`.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    Transport(reqwest::Error),

    /// The server answered with a non-success status
    Status(u16),

    /// The response body could not be read
    Body(reqwest::Error),

    /// The body was not the expected JSON document
    Parse(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "request failed: {}", e),
            Self::Status(code) => write!(f, "server answered with status {}", code),
            Self::Body(e) => write!(f, "could not read response body: {}", e),
            Self::Parse(e) => write!(f, "malformed trending response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) | Self::Body(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
