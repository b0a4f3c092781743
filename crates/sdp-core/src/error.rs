use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or generating signaling payloads
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid SDP attribute or line syntax
    #[error("SDP parse error: {0}")]
    SdpParse(String),

    /// Malformed ICE candidate line
    #[error("ICE candidate parse error: {0}")]
    CandidateParse(String),

    /// Malformed payload pushed by the conference relay server
    #[error("invalid server payload: {0}")]
    ServerPayload(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ServerPayload(err.to_string())
    }
}
